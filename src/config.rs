//! Editor configuration
//!
//! Reads user preferences from `~/.config/quill/config.yaml`

use std::path::Path;

use serde::Deserialize;

use crate::editable::DEFAULT_TAB_WIDTH;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Number of spaces a tab expands to
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if it is missing
    /// or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<EditorConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.validated()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// A zero tab width would make tab a silent no-op; fall back to default
    fn validated(mut self) -> Self {
        if self.tab_width == 0 {
            tracing::warn!(
                "tab_width must be at least 1, using {}",
                DEFAULT_TAB_WIDTH
            );
            self.tab_width = DEFAULT_TAB_WIDTH;
        }
        self
    }
}

//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging cursor and
//! undo state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=quill::update=debug` - module-level filtering
//! - `RUST_LOG=quill::editable=trace` - every undo record opened or extended
//!
//! # Log Files
//!
//! Logs are written to `~/.config/quill/logs/quill.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::TextEditor;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr (stdout carries session output) and
/// respects RUST_LOG, defaulting to `warn`.
///
/// File logging writes to `~/.config/quill/logs/quill.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "quill.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/document shape for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSnapshot {
    pub line: usize,
    pub column: usize,
    pub line_count: usize,
    pub undo_depth: usize,
}

impl EditSnapshot {
    pub fn from_editor(editor: &TextEditor) -> Self {
        let pos = editor.get_pos();
        Self {
            line: pos.line,
            column: pos.column,
            line_count: editor.line_count(),
            undo_depth: editor.undo_depth(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.line != other.line || self.column != other.column {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if self.line_count != other.line_count {
            changes.push(format!(
                "lines: {} → {}",
                self.line_count, other.line_count
            ));
        }
        if self.undo_depth != other.undo_depth {
            changes.push(format!(
                "undo depth: {} → {}",
                self.undo_depth, other.undo_depth
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

//! quill - replay editing commands against a line buffer

use std::fs;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;

use quill::cli::{CliArgs, CommandSource, StartupConfig};
use quill::config::EditorConfig;
use quill::editable::TextEditor;
use quill::session::Session;

fn main() -> Result<()> {
    quill::tracing::init();

    let startup = CliArgs::parse().into_config();
    let config = EditorConfig::load();
    let editor = open_editor(&startup, &config)?;

    let stdout = io::stdout();
    let mut session = Session::new(editor, stdout.lock());

    match &startup.source {
        CommandSource::Script(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            session
                .run_script(&source)
                .with_context(|| format!("Script {} failed", path.display()))?;
        }
        CommandSource::Stdin => {
            session.run_lines(io::stdin().lock())?;
        }
    }

    let errors = session.error_count();
    let (mut editor, mut out) = session.into_parts();

    if let Some(output) = &startup.output {
        editor
            .save(output)
            .with_context(|| format!("Failed to save {}", output.display()))?;
    }

    if startup.print {
        for line in editor.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
    }

    if errors > 0 {
        tracing::warn!("Session finished with {} failed commands", errors);
        bail!("{} commands failed", errors);
    }

    Ok(())
}

/// Build the editor for this run, loading FILE if it exists
fn open_editor(startup: &StartupConfig, config: &EditorConfig) -> Result<TextEditor> {
    let tab_width = startup.tab_width.unwrap_or(config.tab_width);
    let mut editor = TextEditor::new().with_tab_width(tab_width);

    if let Some(path) = &startup.file {
        if path.exists() {
            editor
                .load(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
        } else {
            tracing::info!("{} does not exist yet, starting empty", path.display());
            editor.set_file_path(path.clone());
        }
    }

    Ok(editor)
}

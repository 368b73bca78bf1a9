//! Session runner: drives a [`TextEditor`] from command scripts and writes
//! whatever the resulting commands print.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::commands::Cmd;
use crate::editable::TextEditor;
use crate::messages::Msg;
use crate::script;
use crate::update::update;

/// An editor plus the sink its command output goes to
pub struct Session<W: Write> {
    editor: TextEditor,
    out: W,
    errors: usize,
}

impl<W: Write> Session<W> {
    pub fn new(editor: TextEditor, out: W) -> Self {
        Self {
            editor,
            out,
            errors: 0,
        }
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    /// Number of commands that reported an error so far
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn into_parts(self) -> (TextEditor, W) {
        (self.editor, self.out)
    }

    /// Apply one message and emit its output, if any
    pub fn dispatch(&mut self, msg: Msg) -> Result<()> {
        if let Some(cmd) = update(&mut self.editor, msg) {
            self.emit(&cmd)?;
        }
        Ok(())
    }

    /// Parse the whole script first, then run it. Nothing executes if any
    /// line fails to parse.
    pub fn run_script(&mut self, source: &str) -> Result<()> {
        let msgs = script::parse_script(source).context("Failed to parse script")?;
        tracing::debug!("Running script with {} messages", msgs.len());
        for msg in msgs {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Execute a single interactive line. Parse errors are reported to the
    /// output and counted, not returned.
    pub fn execute_line(&mut self, line: &str) -> Result<()> {
        match script::parse_line(line) {
            Ok(msgs) => {
                for msg in msgs {
                    self.dispatch(msg)?;
                }
            }
            Err(message) => self.emit(&Cmd::Error(message))?,
        }
        Ok(())
    }

    /// Execute every line from `input` until EOF
    pub fn run_lines<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            self.execute_line(&line)?;
        }
        Ok(())
    }

    fn emit(&mut self, cmd: &Cmd) -> Result<()> {
        if cmd.is_error() {
            self.errors += 1;
        }
        let rendered = cmd.to_string();
        if !rendered.is_empty() {
            writeln!(self.out, "{}", rendered).context("Failed to write output")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(session: Session<Vec<u8>>) -> String {
        let (_, out) = session.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_script_prints_lines() {
        let mut session = Session::new(TextEditor::new(), Vec::new());
        session
            .run_script("type hello\nenter\ntype world\nlines\n")
            .unwrap();
        assert_eq!(output(session), "   1 | hello\n   2 | world\n");
    }

    #[test]
    fn test_run_script_fails_before_executing() {
        let mut session = Session::new(TextEditor::new(), Vec::new());
        let err = session.run_script("type a\nbogus\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
        assert_eq!(session.editor().lines(), vec![""]);
    }

    #[test]
    fn test_execute_line_reports_and_continues() {
        let mut session = Session::new(TextEditor::new(), Vec::new());
        session.execute_line("bogus").unwrap();
        session.execute_line("type x").unwrap();
        session.execute_line("lines -1").unwrap();
        assert_eq!(session.error_count(), 2);
        assert_eq!(session.editor().lines(), vec!["x"]);
        assert_eq!(
            output(session),
            "error: unknown command 'bogus'\nerror: invalid range\n"
        );
    }

    #[test]
    fn test_run_lines_from_reader() {
        let mut session = Session::new(TextEditor::new(), Vec::new());
        session
            .run_lines("type ab\nmove left\npos\n".as_bytes())
            .unwrap();
        assert_eq!(output(session), "0 1\n");
    }
}

//! Command types for the Elm-style architecture
//!
//! Commands represent output that should be emitted after an update. The
//! update functions never write anywhere themselves.

use std::fmt;

use crate::editable::Position;

/// Output requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Lines fetched by a `ShowLines` message, starting at row `start`
    PrintLines { start: usize, lines: Vec<String> },
    /// Cursor position
    PrintPosition(Position),
    /// Pre-rendered state dump
    PrintDump(String),
    /// Something failed; the document is unchanged
    Error(String),
}

impl Cmd {
    pub fn is_error(&self) -> bool {
        matches!(self, Cmd::Error(_))
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cmd::PrintLines { start, lines } => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{:>4} | {}", start + i + 1, line)?;
                }
                Ok(())
            }
            Cmd::PrintPosition(pos) => write!(f, "{} {}", pos.line, pos.column),
            Cmd::PrintDump(dump) => f.write_str(dump),
            Cmd::Error(message) => write!(f, "error: {}", message),
        }
    }
}

//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

pub use crate::editable::Direction;

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Cursor messages
    Editor(EditorMsg),
    /// Text editing messages
    Document(DocumentMsg),
    /// File and inspection messages
    App(AppMsg),
}

/// Editor-specific messages (cursor movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor one step in a direction
    MoveCursor(Direction),
    /// Set cursor to a specific position (clamped into the document)
    SetCursorPosition { line: usize, column: usize },
}

/// Document-specific messages (text editing, undo)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a character at cursor (tab expands, newline splits)
    InsertChar(char),
    /// Insert every character of a string, one edit per character
    InsertText(String),
    /// Insert a newline at cursor
    InsertNewline,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Undo last edit
    Undo,
}

/// Application-level messages (files, reset, output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Replace the document with a file's contents
    LoadFile(PathBuf),
    /// Save to the given path, or to the current file path
    SaveFile(Option<PathBuf>),
    /// Clear the document and its history
    Reset,
    /// Report lines. Signed so out-of-range requests from scripts can be
    /// rejected the same way as a start row past the end.
    ShowLines { start: i64, count: i64 },
    /// Report the cursor position
    ShowPosition,
    /// Report a JSON snapshot of the editor state
    DumpState,
}

impl From<EditorMsg> for Msg {
    fn from(msg: EditorMsg) -> Self {
        Msg::Editor(msg)
    }
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::editable::{Position, TextEditor};
use quill::messages::Msg;
use quill::update::update;

/// Create an editor with given text and cursor position
pub fn test_editor(text: &str, line: usize, column: usize) -> TextEditor {
    let mut editor = TextEditor::with_text(text);
    editor.set_cursor(Position::new(line, column));
    editor
}

/// Apply a sequence of messages, ignoring their output
pub fn apply(editor: &mut TextEditor, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        update(editor, msg);
    }
}

/// Type a string one character at a time
pub fn type_str(editor: &mut TextEditor, text: &str) {
    for ch in text.chars() {
        editor.insert(ch);
    }
}

/// Undo until the history is empty, returning the number of steps taken
pub fn undo_all(editor: &mut TextEditor) -> usize {
    let mut steps = 0;
    while editor.undo() {
        steps += 1;
    }
    steps
}

pub fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

/// Cursor must always sit inside the document
pub fn assert_cursor_in_bounds(editor: &TextEditor) {
    let p = editor.get_pos();
    assert!(
        p.line < editor.line_count(),
        "cursor line {} out of {} lines",
        p.line,
        editor.line_count()
    );
    let len = editor.line(p.line).map(|l| l.chars().count()).unwrap_or(0);
    assert!(p.column <= len, "cursor column {} past line length {}", p.column, len);
}

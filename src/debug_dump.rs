//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the editor state to JSON. Emitted by the `dump`
//! script command.

use serde::Serialize;

use crate::editable::{Action, TextEditor, UndoRecord};

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub file_path: Option<String>,
    pub is_modified: bool,
    pub line_count: usize,
    pub char_count: usize,
    pub tab_width: usize,
    pub cursor: CursorDump,
    pub undo_depth: usize,
    pub last_undo: Option<UndoDump>,
}

#[derive(Debug, Serialize)]
pub struct CursorDump {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Serialize)]
pub struct UndoDump {
    pub action: String,
    pub row: usize,
    pub col: usize,
    pub text: Option<String>,
}

impl UndoDump {
    fn from_record(record: &UndoRecord) -> Self {
        let action = match record.action() {
            Action::Insert => "insert",
            Action::Delete => "delete",
            Action::Join => "join",
            Action::Split => "split",
        }
        .to_string();

        match record {
            UndoRecord::Insert { row, col, text, .. } | UndoRecord::Delete { row, col, text, .. } => {
                Self {
                    action,
                    row: *row,
                    col: *col,
                    text: Some(text.clone()),
                }
            }
            UndoRecord::Join { row, col, .. } | UndoRecord::Split { row, col, .. } => Self {
                action,
                row: *row,
                col: *col,
                text: None,
            },
        }
    }
}

impl StateDump {
    pub fn from_editor(editor: &TextEditor) -> Self {
        let pos = editor.get_pos();
        Self {
            file_path: editor.file_path().map(|p| p.display().to_string()),
            is_modified: editor.is_modified(),
            line_count: editor.line_count(),
            char_count: editor.len_chars(),
            tab_width: editor.tab_width(),
            cursor: CursorDump {
                line: pos.line,
                column: pos.column,
            },
            undo_depth: editor.undo_depth(),
            last_undo: editor.history().last().map(UndoDump::from_record),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize state: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_reports_last_undo_run() {
        let mut editor = TextEditor::new();
        editor.insert('h');
        editor.insert('i');

        let dump = StateDump::from_editor(&editor);
        assert_eq!(dump.line_count, 1);
        assert_eq!(dump.char_count, 2);
        assert_eq!(dump.undo_depth, 1);
        let last = dump.last_undo.as_ref().unwrap();
        assert_eq!(last.action, "insert");
        assert_eq!(last.text.as_deref(), Some("hi"));

        let json = dump.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cursor"]["column"], 2);
        assert_eq!(value["is_modified"], true);
    }

    #[test]
    fn test_dump_of_fresh_editor() {
        let dump = StateDump::from_editor(&TextEditor::new());
        assert!(dump.last_undo.is_none());
        assert!(dump.file_path.is_none());
        assert_eq!(dump.tab_width, 4);
    }
}

//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

use crate::commands::Cmd;
use crate::debug_dump::StateDump;
use crate::editable::{Position, TextEditor};
use crate::messages::{AppMsg, DocumentMsg, EditorMsg, Msg};
use crate::tracing::EditSnapshot;

/// Main update function - dispatches to sub-handlers
pub fn update(editor: &mut TextEditor, msg: Msg) -> Option<Cmd> {
    #[cfg(feature = "profile-tracing")]
    let _span = tracing::debug_span!("update", ?msg).entered();

    let before = EditSnapshot::from_editor(editor);

    let result = match msg {
        Msg::Editor(m) => update_editor(editor, m),
        Msg::Document(m) => update_document(editor, m),
        Msg::App(m) => update_app(editor, m),
    };

    if let Some(diff) = before.diff(&EditSnapshot::from_editor(editor)) {
        tracing::debug!("{}", diff);
    }

    result
}

/// Handle editor messages (cursor movement)
pub fn update_editor(editor: &mut TextEditor, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => editor.move_cursor(direction),
        EditorMsg::SetCursorPosition { line, column } => {
            editor.set_cursor(Position::new(line, column))
        }
    }
    None
}

/// Handle document messages (text editing, undo)
pub fn update_document(editor: &mut TextEditor, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => editor.insert(ch),
        DocumentMsg::InsertText(text) => editor.insert_text(&text),
        DocumentMsg::InsertNewline => editor.enter(),
        DocumentMsg::DeleteForward => editor.del(),
        DocumentMsg::DeleteBackward => editor.backspace(),
        DocumentMsg::Undo => {
            editor.undo();
        }
    }
    None
}

/// Handle application messages (files, reset, reporting)
pub fn update_app(editor: &mut TextEditor, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::LoadFile(path) => match editor.load(&path) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                Some(Cmd::Error(format!(
                    "could not load {}: {}",
                    path.display(),
                    e
                )))
            }
        },

        AppMsg::SaveFile(path) => {
            let Some(path) = path.or_else(|| editor.file_path().map(|p| p.to_path_buf())) else {
                return Some(Cmd::Error("no file path to save to".to_string()));
            };
            match editor.save(&path) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!("Failed to save {}: {}", path.display(), e);
                    Some(Cmd::Error(format!(
                        "could not save {}: {}",
                        path.display(),
                        e
                    )))
                }
            }
        }

        AppMsg::Reset => {
            editor.reset();
            None
        }

        AppMsg::ShowLines { start, count } => {
            let (Ok(start), Ok(count)) = (usize::try_from(start), usize::try_from(count)) else {
                return Some(Cmd::Error("invalid range".to_string()));
            };
            let mut lines = Vec::new();
            match editor.get_lines(start, count, &mut lines) {
                Some(_) => Some(Cmd::PrintLines { start, lines }),
                None => Some(Cmd::Error("invalid range".to_string())),
            }
        }

        AppMsg::ShowPosition => Some(Cmd::PrintPosition(editor.get_pos())),

        AppMsg::DumpState => match StateDump::from_editor(editor).to_json() {
            Ok(json) => Some(Cmd::PrintDump(json)),
            Err(e) => Some(Cmd::Error(e)),
        },
    }
}

//! Line-oriented text editing core.
//!
//! # Architecture
//!
//! The core components are, leaf first:
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits for line-addressed buffers
//! - [`RopeBuffer`]: The document's lines, backed by `ropey::Rope`
//! - [`Position`] / [`Direction`]: Cursor value type and motion rules
//! - [`UndoLog`]: Undo records with run batching
//! - [`TextEditor`]: Buffer + cursor + undo log, and the edit operations
//!
//! # Example
//!
//! ```
//! use quill::editable::{Direction, Position, TextEditor};
//!
//! let mut editor = TextEditor::new();
//! editor.insert('X');
//! editor.insert('Y');
//! editor.enter();
//! editor.insert('Z');
//! assert_eq!(editor.lines(), vec!["XY", "Z"]);
//!
//! editor.undo();
//! editor.undo();
//! assert_eq!(editor.lines(), vec!["XY"]);
//! assert_eq!(editor.get_pos(), Position::new(0, 2));
//!
//! editor.move_cursor(Direction::Home);
//! assert_eq!(editor.get_pos(), Position::new(0, 0));
//! ```

mod buffer;
mod cursor;
mod history;
mod state;

// Re-export main types
pub use buffer::{RopeBuffer, TextBuffer, TextBufferMut};
pub use cursor::{step, Direction, Position};
pub use history::{Action, Edit, Inverse, UndoLog, UndoRecord, UndoStep};
pub use state::{TextEditor, DEFAULT_TAB_WIDTH};

//! Undo history with run batching.
//!
//! The log is a stack of [`UndoRecord`]s. Consecutive character edits of the
//! same kind that touch adjacent columns on the same row are folded into the
//! record on top of the stack instead of pushing a new one, so a burst of
//! typing or deleting undoes in one step.

use super::cursor::Position;

/// A single character-level edit, as reported by the editor right after
/// applying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `char` was inserted; the submitted column is the column just after it
    Insert(char),
    /// `char` was removed at the cursor (Delete key); column is unchanged
    Delete(char),
    /// `char` was removed left of the cursor; column is where it used to be
    Backspace(char),
    /// The line break at the submitted position was removed
    Join,
    /// A line break was inserted at the submitted position
    Split,
}

/// Kind of a recorded (or inverse) action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert,
    Delete,
    Join,
    Split,
}

/// A reversible edit held by the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoRecord {
    /// `text` was inserted on `row`, ending at column `col`
    Insert {
        row: usize,
        col: usize,
        text: String,
        cursor_before: Position,
    },
    /// `text` was removed from `row`, starting at column `col`
    Delete {
        row: usize,
        col: usize,
        text: String,
        cursor_before: Position,
    },
    /// Line `row + 1` was merged into `row` at column `col`
    Join {
        row: usize,
        col: usize,
        cursor_before: Position,
    },
    /// Line `row` was split at column `col`
    Split {
        row: usize,
        col: usize,
        cursor_before: Position,
    },
}

impl UndoRecord {
    fn open(edit: Edit, row: usize, col: usize, cursor_before: Position) -> Self {
        match edit {
            Edit::Insert(ch) => UndoRecord::Insert {
                row,
                col,
                text: ch.to_string(),
                cursor_before,
            },
            Edit::Delete(ch) | Edit::Backspace(ch) => UndoRecord::Delete {
                row,
                col,
                text: ch.to_string(),
                cursor_before,
            },
            Edit::Join => UndoRecord::Join {
                row,
                col,
                cursor_before,
            },
            Edit::Split => UndoRecord::Split {
                row,
                col,
                cursor_before,
            },
        }
    }

    pub fn action(&self) -> Action {
        match self {
            UndoRecord::Insert { .. } => Action::Insert,
            UndoRecord::Delete { .. } => Action::Delete,
            UndoRecord::Join { .. } => Action::Join,
            UndoRecord::Split { .. } => Action::Split,
        }
    }

    /// Fold `edit` into this record if it continues the run.
    ///
    /// Transitions:
    /// - Insert run + `Insert` one column past its end: append
    /// - Delete run + `Delete` at its start column: append
    /// - Delete run + `Backspace` one column before its start: prepend
    ///
    /// Anything else (other row, gap, kind change, Join/Split) opens a new
    /// record.
    fn try_extend(&mut self, edit: Edit, at_row: usize, at_col: usize) -> bool {
        match (self, edit) {
            (UndoRecord::Insert { row, col, text, .. }, Edit::Insert(ch))
                if *row == at_row && *col + 1 == at_col =>
            {
                text.push(ch);
                *col = at_col;
                true
            }
            (UndoRecord::Delete { row, col, text, .. }, Edit::Delete(ch))
                if *row == at_row && *col == at_col =>
            {
                text.push(ch);
                true
            }
            (UndoRecord::Delete { row, col, text, .. }, Edit::Backspace(ch))
                if *row == at_row && *col == at_col + 1 =>
            {
                text.insert(0, ch);
                *col = at_col;
                true
            }
            _ => false,
        }
    }

    /// The edit that reverses this record
    pub fn inverse(&self) -> UndoStep {
        match self {
            UndoRecord::Insert {
                row,
                col,
                text,
                cursor_before,
            } => {
                let count = text.chars().count();
                UndoStep {
                    inverse: Inverse::Delete {
                        row: *row,
                        col: col.saturating_sub(count),
                        count,
                    },
                    cursor: *cursor_before,
                }
            }
            UndoRecord::Delete {
                row,
                col,
                text,
                cursor_before,
            } => UndoStep {
                inverse: Inverse::Insert {
                    row: *row,
                    col: *col,
                    text: text.clone(),
                },
                cursor: *cursor_before,
            },
            UndoRecord::Join {
                row,
                col,
                cursor_before,
            } => UndoStep {
                inverse: Inverse::Split {
                    row: *row,
                    col: *col,
                },
                cursor: *cursor_before,
            },
            UndoRecord::Split {
                row,
                col,
                cursor_before,
            } => UndoStep {
                inverse: Inverse::Join {
                    row: *row,
                    col: *col,
                },
                cursor: *cursor_before,
            },
        }
    }
}

/// Buffer edit that reverses a recorded action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inverse {
    /// Reinsert `text` at `(row, col)`
    Insert { row: usize, col: usize, text: String },
    /// Remove `count` chars starting at `(row, col)`
    Delete { row: usize, col: usize, count: usize },
    /// Break line `row` at `col`
    Split { row: usize, col: usize },
    /// Merge line `row + 1` back into `row` (whose length is `col`)
    Join { row: usize, col: usize },
}

impl Inverse {
    pub fn action(&self) -> Action {
        match self {
            Inverse::Insert { .. } => Action::Insert,
            Inverse::Delete { .. } => Action::Delete,
            Inverse::Split { .. } => Action::Split,
            Inverse::Join { .. } => Action::Join,
        }
    }

    pub fn row(&self) -> usize {
        match self {
            Inverse::Insert { row, .. }
            | Inverse::Delete { row, .. }
            | Inverse::Split { row, .. }
            | Inverse::Join { row, .. } => *row,
        }
    }
}

/// What `UndoLog::pop` hands back: the inverse edit and where the cursor was
/// before the undone edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoStep {
    pub inverse: Inverse,
    pub cursor: Position,
}

/// Most-recent-last stack of undo records.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    records: Vec<UndoRecord>,
    /// When set, the next submit opens a new record even if it would
    /// otherwise continue the top run.
    sealed: bool,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `edit` applied at `(row, col)`. `cursor_before` is the cursor
    /// position before the edit; it is kept only when a new record opens.
    pub fn submit(&mut self, edit: Edit, row: usize, col: usize, cursor_before: Position) {
        if !self.sealed {
            if let Some(top) = self.records.last_mut() {
                if top.try_extend(edit, row, col) {
                    tracing::trace!(?edit, row, col, "extended undo run");
                    return;
                }
            }
        }

        self.sealed = false;
        self.records
            .push(UndoRecord::open(edit, row, col, cursor_before));
        tracing::trace!(?edit, row, col, depth = self.records.len(), "opened undo record");
    }

    /// Close the current run; the next submit starts a fresh record.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Pop the newest record and return its inverse, or None when empty.
    /// The record underneath is sealed; edits after an undo never join it.
    pub fn pop(&mut self) -> Option<UndoStep> {
        let record = self.records.pop()?;
        self.sealed = true;
        Some(record.inverse())
    }

    /// Newest record, if any
    pub fn last(&self) -> Option<&UndoRecord> {
        self.records.last()
    }

    /// Discard all records
    pub fn clear(&mut self) {
        self.records.clear();
        self.sealed = false;
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }

    /// Number of records (runs count once)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! TextEditor - a line buffer, its cursor, and the undo log that keeps them
//! reversible.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::buffer::{RopeBuffer, TextBuffer, TextBufferMut};
use super::cursor::{self, Direction, Position};
use super::history::{Edit, Inverse, UndoLog};

/// Number of spaces a tab expands to unless configured otherwise
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Single-cursor line editor.
///
/// Every mutating operation submits exactly one edit to the undo log (which
/// may fold it into the current run). `undo` applies inverses straight to the
/// buffer and never records anything itself.
#[derive(Debug, Clone)]
pub struct TextEditor {
    buffer: RopeBuffer,
    cursor: Position,
    history: UndoLog,
    tab_width: usize,
    file_path: Option<PathBuf>,
    is_modified: bool,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    /// Create an editor holding one empty line
    pub fn new() -> Self {
        Self {
            buffer: RopeBuffer::new(),
            cursor: Position::zero(),
            history: UndoLog::new(),
            tab_width: DEFAULT_TAB_WIDTH,
            file_path: None,
            is_modified: false,
        }
    }

    /// Create an editor with initial `\n`-separated text, cursor at (0, 0)
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            ..Self::new()
        }
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current cursor position
    pub fn get_pos(&self) -> Position {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Line content without terminator
    pub fn line(&self, row: usize) -> Option<String> {
        self.buffer.line(row).map(|line| line.into_owned())
    }

    /// All lines, in order
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lines_from(0).collect()
    }

    /// Whole document, lines joined by `\n` (no trailing terminator)
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Number of undo steps available
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &UndoLog {
        &self.history
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Path of the last successful load or save
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Associate a path without reading it, e.g. a file that doesn't exist yet
    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Place the cursor, clamped into the document. Closes the current undo run.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos.clamped(&self.buffer);
        self.history.seal();
    }

    /// Append up to `max_count` lines starting at `start_row` to `out`.
    ///
    /// Returns None (leaving `out` untouched) when `start_row` is past the
    /// line count. Otherwise returns how many lines were appended;
    /// `start_row == line_count` appends nothing and yields `Some(0)`.
    pub fn get_lines(&self, start_row: usize, max_count: usize, out: &mut Vec<String>) -> Option<usize> {
        if start_row > self.line_count() {
            return None;
        }
        let before = out.len();
        out.extend(self.buffer.lines_from(start_row).take(max_count));
        Some(out.len() - before)
    }

    // =========================================================================
    // File operations
    // =========================================================================

    /// Replace the document with the contents of `path`.
    ///
    /// Lines are split on `\n` and one trailing `\r` per line is dropped. The
    /// file must be valid UTF-8; anything else is an `InvalidData` error. On
    /// any error nothing changes. On success the cursor goes to (0, 0) and the
    /// undo history is cleared.
    pub fn load(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let lines = split_lines(&content);

        self.buffer = RopeBuffer::from_lines(&lines);
        self.cursor = Position::zero();
        self.history.clear();
        self.file_path = Some(path.to_path_buf());
        self.is_modified = false;

        tracing::info!(
            "Loaded {} ({} lines)",
            path.display(),
            self.buffer.line_count()
        );
        Ok(())
    }

    /// Write every line followed by `\n` to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(fs::File::create(path)?);
        self.buffer.rope().write_to(&mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        self.file_path = Some(path.to_path_buf());
        self.is_modified = false;

        tracing::info!(
            "Saved {} ({} lines)",
            path.display(),
            self.buffer.line_count()
        );
        Ok(())
    }

    /// Back to a single empty line with no history
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = Position::zero();
        self.history.clear();
        self.file_path = None;
        self.is_modified = false;
        tracing::debug!("Editor reset");
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Move the cursor one step. Closes the current undo run.
    pub fn move_cursor(&mut self, dir: Direction) {
        self.cursor = cursor::step(&self.buffer, self.cursor, dir);
        self.history.seal();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert `ch` at the cursor. A tab becomes `tab_width` spaces and a
    /// newline behaves like `enter`.
    pub fn insert(&mut self, ch: char) {
        match ch {
            '\n' => self.enter(),
            '\t' => {
                for _ in 0..self.tab_width {
                    self.insert_char(' ');
                }
            }
            _ => self.insert_char(ch),
        }
    }

    /// Insert each char of `text` in turn
    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert(ch);
        }
    }

    fn insert_char(&mut self, ch: char) {
        let before = self.cursor;
        let offset = self.buffer.position_to_offset(before.line, before.column);
        self.buffer.insert_char(offset, ch);
        self.cursor.column += 1;
        self.is_modified = true;

        self.history
            .submit(Edit::Insert(ch), before.line, self.cursor.column, before);
    }

    /// Split the current line at the cursor
    pub fn enter(&mut self) {
        let before = self.cursor;
        self.buffer.split_line(before.line, before.column);
        self.cursor = Position::new(before.line + 1, 0);
        self.is_modified = true;

        self.history
            .submit(Edit::Split, before.line, before.column, before);
        tracing::debug!(line = before.line, column = before.column, "split line");
    }

    /// Delete the character under the cursor, or join the next line when the
    /// cursor is at the end of a line. No-op at the end of the document.
    pub fn del(&mut self) {
        let pos = self.cursor;

        if let Some(ch) = self.buffer.char_at(pos.line, pos.column) {
            self.buffer.remove_at(pos.line, pos.column, 1);
            self.is_modified = true;
            self.history.submit(Edit::Delete(ch), pos.line, pos.column, pos);
        } else if self.buffer.join_line(pos.line) {
            self.is_modified = true;
            self.history.submit(Edit::Join, pos.line, pos.column, pos);
            tracing::debug!(line = pos.line, column = pos.column, "joined next line");
        }
    }

    /// Delete the character left of the cursor, or join onto the previous
    /// line from column 0. No-op at (0, 0).
    pub fn backspace(&mut self) {
        let before = self.cursor;

        if before.column > 0 {
            let column = before.column - 1;
            let Some(ch) = self.buffer.char_at(before.line, column) else {
                return;
            };
            self.buffer.remove_at(before.line, column, 1);
            self.cursor.column = column;
            self.is_modified = true;
            self.history
                .submit(Edit::Backspace(ch), before.line, column, before);
        } else if before.line > 0 {
            let line = before.line - 1;
            let column = self.buffer.line_length(line);
            if !self.buffer.join_line(line) {
                return;
            }
            self.cursor = Position::new(line, column);
            self.is_modified = true;
            self.history.submit(Edit::Join, line, column, before);
            tracing::debug!(line, column, "joined onto previous line");
        }
    }

    // =========================================================================
    // Undo
    // =========================================================================

    /// Reverse the most recent edit (or run of edits).
    ///
    /// Returns false when there is nothing to undo. The reversal is applied
    /// directly and is not itself recorded. A successful undo always marks the
    /// editor modified, even when it brings the text back to what was last
    /// loaded or saved; `is_modified` means "changed since load/save", not
    /// "differs from disk".
    pub fn undo(&mut self) -> bool {
        let Some(step) = self.history.pop() else {
            tracing::debug!("Nothing to undo");
            return false;
        };

        let row = step.inverse.row();
        if row >= self.buffer.line_count() {
            tracing::warn!(
                "Dropping undo step for row {} past line count {}",
                row,
                self.buffer.line_count()
            );
            return false;
        }

        tracing::debug!(action = ?step.inverse.action(), row, "undo");
        match step.inverse {
            Inverse::Insert { row, col, text } => {
                self.buffer.insert_at(row, col, &text);
            }
            Inverse::Delete { row, col, count } => {
                self.buffer.remove_at(row, col, count);
            }
            Inverse::Split { row, col } => {
                self.buffer.split_line(row, col);
            }
            Inverse::Join { row, .. } => {
                self.buffer.join_line(row);
            }
        }

        self.cursor = step.cursor.clamped(&self.buffer);
        self.is_modified = true;
        true
    }
}

/// Split file content into lines: `\n` terminated, optional `\r` before it,
/// final terminator optional.
fn split_lines(content: &str) -> Vec<&str> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

//! Line buffer traits and the rope-backed document buffer.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits.
//! Every line-level operation addresses lines by index and recomputes char
//! offsets on each call, so no handle into the buffer outlives a mutation.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

/// Read-only view into a line buffer for cursor navigation and rendering.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Length of a specific line in characters (excluding newline)
    fn line_length(&self, line: usize) -> usize;

    /// Total length in characters, line breaks included
    fn len_chars(&self) -> usize;

    /// Check if buffer holds a single empty line
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get character at position, None if out of bounds
    fn char_at(&self, line: usize, column: usize) -> Option<char>;

    /// Get line content (without trailing newline)
    fn line(&self, line: usize) -> Option<Cow<'_, str>>;

    /// Convert (line, column) to char offset, clamping the column to the line
    fn position_to_offset(&self, line: usize, column: usize) -> usize;

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String, lines joined by `\n`
    fn content(&self) -> String;
}

/// Mutable buffer operations. Extends TextBuffer.
///
/// The line-level helpers (`insert_at`, `remove_at`, `split_line`,
/// `join_line`) are what the editor uses; they are expressed in terms of the
/// char-offset primitives so any backend gets them for free.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Insert single character at character offset
    fn insert_char(&mut self, offset: usize, ch: char);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Clear all content, leaving one empty line
    fn clear(&mut self) {
        if !self.is_empty() {
            let len = self.len_chars();
            self.remove(0..len);
        }
    }

    /// Insert `text` (which must not contain `\n`) at `(line, column)`
    fn insert_at(&mut self, line: usize, column: usize, text: &str) {
        let offset = self.position_to_offset(line, column);
        self.insert(offset, text);
    }

    /// Remove up to `count` characters starting at `(line, column)` without
    /// crossing the end of the line. Returns the removed text.
    fn remove_at(&mut self, line: usize, column: usize, count: usize) -> String {
        let len = self.line_length(line);
        let start_col = column.min(len);
        let end_col = (start_col + count).min(len);
        let start = self.position_to_offset(line, start_col);
        let end = self.position_to_offset(line, end_col);
        let removed = self.slice(start..end);
        self.remove(start..end);
        removed
    }

    /// Break `line` in two at `column`
    fn split_line(&mut self, line: usize, column: usize) {
        let offset = self.position_to_offset(line, column);
        self.insert_char(offset, '\n');
    }

    /// Merge line `line + 1` onto the end of `line`.
    /// Returns false (and does nothing) when `line` is the last line.
    fn join_line(&mut self, line: usize) -> bool {
        if line + 1 >= self.line_count() {
            return false;
        }
        let offset = self.position_to_offset(line, self.line_length(line));
        self.remove(offset..offset + 1);
        true
    }
}

// =============================================================================
// RopeBuffer - the document's line storage
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
///
/// The rope holds the lines joined by `\n` with no trailing terminator, so a
/// buffer with text `""` is one empty line and `"a\n"` is `["a", ""]`.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from `\n`-joined text
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Create a RopeBuffer holding exactly `lines`. An empty slice yields
    /// a single empty line.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut text = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self::from_text(&text)
    }

    /// Access the underlying Rope
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Iterate lines starting at `start`, without trailing newlines
    pub fn lines_from(&self, start: usize) -> impl Iterator<Item = String> + '_ {
        (start..self.line_count()).filter_map(move |i| self.line(i).map(Cow::into_owned))
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let line_slice = self.rope.line(line);
        let len = line_slice.len_chars();
        // Exclude trailing newline if present
        if len > 0 && line_slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        if line >= self.rope.len_lines() || column >= self.line_length(line) {
            return None;
        }
        Some(self.rope.char(self.rope.line_to_char(line) + column))
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let len = self.line_length(line);
        let slice = self.rope.line(line).slice(..len);
        Some(match slice.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(slice.to_string()),
        })
    }

    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let line_start = self.rope.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert_char(clamped, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &RopeBuffer) -> Vec<String> {
        buf.lines_from(0).collect()
    }

    #[test]
    fn test_empty_buffer_is_one_empty_line() {
        let buf = RopeBuffer::new();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_length(0), 0);
        assert_eq!(buf.line(0).unwrap().as_ref(), "");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_from_lines_keeps_trailing_empty_line() {
        let buf = RopeBuffer::from_lines(&["a", ""]);
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.content(), "a\n");
        assert_eq!(lines(&buf), vec!["a", ""]);
    }

    #[test]
    fn test_from_lines_empty_slice() {
        let buf = RopeBuffer::from_lines::<&str>(&[]);
        assert_eq!(buf.line_count(), 1);
    }

    #[test]
    fn test_carriage_return_is_not_a_line_break() {
        let buf = RopeBuffer::from_text("a\rb\nc");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_length(0), 3);
        assert_eq!(buf.char_at(0, 1), Some('\r'));
    }

    #[test]
    fn test_line_length_multiline() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_length(0), 5);
        assert_eq!(buf.line_length(1), 5);
        assert_eq!(buf.line_length(7), 0);
    }

    #[test]
    fn test_utf8_columns_are_chars() {
        let mut buf = RopeBuffer::from_text("héllo");
        assert_eq!(buf.line_length(0), 5);
        buf.insert_at(0, 2, "X");
        assert_eq!(buf.content(), "héXllo");
    }

    #[test]
    fn test_position_to_offset_clamps_column() {
        let buf = RopeBuffer::from_text("hi\nworld");
        assert_eq!(buf.position_to_offset(0, 100), 2);
        assert_eq!(buf.position_to_offset(1, 0), 3);
        assert_eq!(buf.position_to_offset(9, 0), buf.len_chars());
    }

    #[test]
    fn test_remove_at_stops_at_line_end() {
        let mut buf = RopeBuffer::from_text("abc\ndef");
        let removed = buf.remove_at(0, 1, 10);
        assert_eq!(removed, "bc");
        assert_eq!(lines(&buf), vec!["a", "def"]);
    }

    #[test]
    fn test_split_and_join_line() {
        let mut buf = RopeBuffer::from_text("hello world");
        buf.split_line(0, 5);
        assert_eq!(lines(&buf), vec!["hello", " world"]);

        assert!(buf.join_line(0));
        assert_eq!(lines(&buf), vec!["hello world"]);
    }

    #[test]
    fn test_split_at_end_creates_empty_line() {
        let mut buf = RopeBuffer::from_text("XY");
        buf.split_line(0, 2);
        assert_eq!(lines(&buf), vec!["XY", ""]);
    }

    #[test]
    fn test_join_last_line_is_noop() {
        let mut buf = RopeBuffer::from_text("a\nb");
        assert!(!buf.join_line(1));
        assert_eq!(buf.content(), "a\nb");
    }

    #[test]
    fn test_clear() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(lines(&buf), vec![""]);
    }
}

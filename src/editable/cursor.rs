//! Cursor position type and motion rules.

use super::buffer::TextBuffer;

/// A position in the text buffer (line and column, both 0-indexed).
///
/// `column == line_length` is the append position just past the last char.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Clamp into the buffer: last line at most, column at most the line length
    pub fn clamped<B: TextBuffer + ?Sized>(self, buffer: &B) -> Self {
        let line = self.line.min(buffer.line_count().saturating_sub(1));
        let column = self.column.min(buffer.line_length(line));
        Self { line, column }
    }
}

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Start of the current line
    Home,
    /// Just past the last character of the current line
    End,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Home,
        Direction::End,
    ];

    /// Lowercase name as used by the command script
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Home => "home",
            Direction::End => "end",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(name))
    }
}

/// Compute where `pos` lands after one step in `dir`.
///
/// Vertical moves clamp the column to the destination line's length, so the
/// result always satisfies the cursor invariant.
pub fn step<B: TextBuffer + ?Sized>(buffer: &B, pos: Position, dir: Direction) -> Position {
    let last_line = buffer.line_count().saturating_sub(1);
    let line_len = buffer.line_length(pos.line);

    match dir {
        Direction::Up if pos.line > 0 => {
            let line = pos.line - 1;
            Position::new(line, pos.column.min(buffer.line_length(line)))
        }
        Direction::Down if pos.line < last_line => {
            let line = pos.line + 1;
            Position::new(line, pos.column.min(buffer.line_length(line)))
        }
        Direction::Up | Direction::Down => pos,
        Direction::Left => {
            if pos.column > 0 {
                Position::new(pos.line, pos.column - 1)
            } else if pos.line > 0 {
                let line = pos.line - 1;
                Position::new(line, buffer.line_length(line))
            } else {
                pos
            }
        }
        Direction::Right => {
            if pos.column < line_len {
                Position::new(pos.line, pos.column + 1)
            } else if pos.line < last_line {
                Position::new(pos.line + 1, 0)
            } else {
                pos
            }
        }
        Direction::Home => Position::new(pos.line, 0),
        Direction::End => Position::new(pos.line, line_len),
    }
}

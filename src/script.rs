//! Line-oriented command scripts
//!
//! One command per line. Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! type Hello      # insert text, verbatim after the first space
//! tab             # insert a tab (expands to spaces)
//! enter
//! move left 3     # up | down | left | right | home | end, optional count
//! goto 2 5        # line, column (0-based, clamped)
//! del
//! backspace
//! undo 2
//! load notes.txt
//! save            # current file, or `save other.txt`
//! reset
//! lines 0 10      # start row, max count (both optional)
//! pos
//! dump
//! ```

use std::fmt;

use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};

/// Default number of lines reported by a bare `lines` command
pub const DEFAULT_LINES_COUNT: i64 = 20;

/// A script line that could not be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number in the script
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse a single command line into the messages it stands for.
///
/// Returns an empty Vec for blank lines and comments. Repeat counts expand to
/// repeated messages so each one is a separate edit.
pub fn parse_line(text: &str) -> Result<Vec<Msg>, String> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Vec::new());
    }

    let (keyword, rest) = match trimmed.split_once(' ') {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed.trim_end(), ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let msgs = match keyword.to_ascii_lowercase().as_str() {
        // Verbatim: keep interior and trailing spaces
        "type" => vec![DocumentMsg::InsertText(rest.to_string()).into()],
        "tab" => vec![DocumentMsg::InsertChar('\t').into()],
        "enter" => repeat(DocumentMsg::InsertNewline.into(), count_arg(&args, 0)?),
        "del" | "delete" => repeat(DocumentMsg::DeleteForward.into(), count_arg(&args, 0)?),
        "backspace" | "bs" => repeat(DocumentMsg::DeleteBackward.into(), count_arg(&args, 0)?),
        "undo" => repeat(DocumentMsg::Undo.into(), count_arg(&args, 0)?),
        "move" => {
            let name = args
                .first()
                .ok_or_else(|| "move needs a direction".to_string())?;
            let direction = Direction::from_name(name)
                .ok_or_else(|| format!("unknown direction '{}'", name))?;
            repeat(
                EditorMsg::MoveCursor(direction).into(),
                count_arg(&args, 1)?,
            )
        }
        "goto" => {
            let line = int_arg(&args, 0)?.ok_or_else(|| "goto needs a line".to_string())?;
            let column = int_arg(&args, 1)?.unwrap_or(0);
            let (Ok(line), Ok(column)) = (usize::try_from(line), usize::try_from(column)) else {
                return Err("goto position must not be negative".to_string());
            };
            vec![EditorMsg::SetCursorPosition { line, column }.into()]
        }
        "load" => {
            let path = path_arg(rest).ok_or_else(|| "load needs a path".to_string())?;
            vec![AppMsg::LoadFile(path.into()).into()]
        }
        "save" => vec![AppMsg::SaveFile(path_arg(rest).map(Into::into)).into()],
        "reset" => vec![AppMsg::Reset.into()],
        "lines" => {
            let start = int_arg(&args, 0)?.unwrap_or(0);
            let count = int_arg(&args, 1)?.unwrap_or(DEFAULT_LINES_COUNT);
            vec![AppMsg::ShowLines { start, count }.into()]
        }
        "pos" => vec![AppMsg::ShowPosition.into()],
        "dump" => vec![AppMsg::DumpState.into()],
        other => return Err(format!("unknown command '{}'", other)),
    };

    Ok(msgs)
}

/// Parse a whole script, stopping at the first bad line
pub fn parse_script(source: &str) -> Result<Vec<Msg>, ParseError> {
    let mut msgs = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        let parsed = parse_line(text).map_err(|message| ParseError {
            line: idx + 1,
            message,
        })?;
        msgs.extend(parsed);
    }
    Ok(msgs)
}

fn repeat(msg: Msg, count: usize) -> Vec<Msg> {
    vec![msg; count]
}

fn int_arg(args: &[&str], idx: usize) -> Result<Option<i64>, String> {
    args.get(idx)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| format!("'{}' is not a number", raw))
        })
        .transpose()
}

/// Optional repeat count, defaulting to 1
fn count_arg(args: &[&str], idx: usize) -> Result<usize, String> {
    match int_arg(args, idx)? {
        None => Ok(1),
        Some(n) => usize::try_from(n).map_err(|_| format!("count must not be negative: {}", n)),
    }
}

fn path_arg(rest: &str) -> Option<&str> {
    let path = rest.trim();
    (!path.is_empty()).then_some(path)
}

//! Script segmentation: carving a source file into evaluation units.
//!
//! Scripts are line-oriented. Each physical line contributes at most
//! one unit:
//!
//! - A line containing a parenthesized expression yields the text from
//!   its first `(` through its last `)`. Anything outside that range
//!   is commentary, as is any line with no such range.
//! - A line reading `S:` opens a block: the following lines are joined
//!   with spaces into a single unit until a `:E` line closes it. Only
//!   inside a block, `#` starts a line comment.
//!
//! Units are raw text. The reader, not this module, decides whether
//! they parse.

use thiserror::Error;

/// Line that opens a joined block.
const BLOCK_OPEN: &str = "S:";
/// Line that closes a joined block.
const BLOCK_CLOSE: &str = ":E";
/// Starts a line comment inside a block.
const COMMENT: char = '#';

/// One evaluation unit carved out of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    /// The expression text handed to the reader.
    pub text: String,
    /// 1-based line where the unit starts, for diagnostics.
    pub line: u32,
}

/// A segmented script: units in source order, plus a trailing error
/// when a block was still open at end of input. Units before the open
/// block are still runnable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    pub units: Vec<Unit>,
    pub unterminated: Option<UnterminatedBlock>,
}

/// An `S:` block that reached end of input before its `:E`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("`S:` block opened on line {line} is never closed by `:E`")]
pub struct UnterminatedBlock {
    /// 1-based line of the opening `S:` marker.
    pub line: u32,
}

/// Split a source file into evaluation units.
pub fn segment(source: &str) -> Script {
    let mut units = Vec::new();
    let mut lines = source.lines();
    let mut line: u32 = 0;
    while let Some(raw) = lines.next() {
        line += 1;
        if raw.trim() == BLOCK_OPEN {
            let opened_on = line;
            match read_block(&mut lines, &mut line) {
                Some(text) if !text.is_empty() => units.push(Unit {
                    text,
                    line: opened_on,
                }),
                Some(_) => {}
                None => {
                    return Script {
                        units,
                        unterminated: Some(UnterminatedBlock { line: opened_on }),
                    };
                }
            }
        } else if let Some(expr) = find_expr(raw) {
            units.push(Unit {
                text: expr.to_string(),
                line,
            });
        }
    }
    Script {
        units,
        unterminated: None,
    }
}

/// The expression portion of one line: the text from the first `(`
/// through the last `)`, when both exist in that order.
pub fn find_expr(line: &str) -> Option<&str> {
    let start = line.find('(')?;
    let end = line.rfind(')')?;
    if start < end {
        Some(&line[start..=end])
    } else {
        None
    }
}

/// Consume lines up to the closing `:E`, joining their code portions
/// with spaces. `None` means input ran out first.
fn read_block(lines: &mut std::str::Lines<'_>, line: &mut u32) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for raw in lines {
        *line += 1;
        let code = match raw.split_once(COMMENT) {
            Some((before, _)) => before,
            None => raw,
        }
        .trim();
        if code == BLOCK_CLOSE {
            return Some(parts.join(" "));
        }
        if !code.is_empty() {
            parts.push(code);
        }
    }
    None
}

//! Minimal forward-only JSON scanner.
//!
//! Locates, without full parsing, the next quoted string or brace-balanced
//! object inside a larger string. No tree is built; the scanner only finds
//! positions, and the caller owns the string and advances the cursor
//! between calls. Full JSON (de)serialization is delegated to the agents'
//! JSON layer; this exists so the translation-string assembler can carve
//! out previously-encoded parameter values cheaply.
//!
//! Brace matching counts the literal characters `{` and `}` only; it is not
//! string-aware, so a quoted value containing a lone brace will desync the
//! depth counter. That limitation is a frozen part of the contract (pinned
//! by a conformance test), not an oversight to repair.

use crate::error::ScanError;

/// Classification of the next non-separator character in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Only separator characters remain.
    None,
    /// A `"`: a quoted string starts here.
    String,
    /// A `{`: an object starts here.
    Object,
    /// A `}`: an object ends here.
    ObjectEnd,
    /// Anything else.
    Invalid,
}

/// Separators skipped before classifying: tab, space, colon, comma.
const SEPARATORS: &[u8] = b"\t :,";

fn find_byte(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..].iter().position(|&b| b == needle).map(|i| from + i)
}

/// Determines the start position and type of the next token in `line`.
///
/// Skips separator characters from `*start_pos`, then classifies the first
/// character found. `start_pos` is updated in place to the classified
/// character's position (or to `line.len()` when only separators remain);
/// callers rely on this to chain calls.
pub fn next_token(line: &str, start_pos: &mut usize) -> Token {
    let bytes = line.as_bytes();
    let mut pos = *start_pos;
    while pos < bytes.len() && SEPARATORS.contains(&bytes[pos]) {
        pos += 1;
    }
    *start_pos = pos;
    if pos >= bytes.len() {
        return Token::None;
    }
    match bytes[pos] {
        b'{' => Token::Object,
        b'}' => Token::ObjectEnd,
        b'"' => Token::String,
        _ => Token::Invalid,
    }
}

/// Reads the brace-balanced object starting at the first `{` at or after
/// `*start_pos`.
///
/// Scans forward with a depth counter (`{` is +1, `}` is −1) until depth
/// returns to zero. On success, `start_pos` holds the opening brace,
/// `end_pos` the matching closing brace, and the returned slice includes
/// both, so the caller can resume scanning immediately past the object.
///
/// # Errors
///
/// [`ScanError::NotFound`] when no `{` exists from `*start_pos` on (a normal
/// outcome for "no more objects here"); [`ScanError::Corrupted`] when the
/// input ends before the depth returns to zero. The cursor is left
/// untouched on error.
pub fn read_object<'a>(
    line: &'a str,
    start_pos: &mut usize,
    end_pos: &mut usize,
) -> Result<&'a str, ScanError> {
    let bytes = line.as_bytes();
    let start = find_byte(bytes, b'{', *start_pos).ok_or(ScanError::NotFound)?;

    let mut depth = 1u32;
    let mut pos = start + 1;
    let end = loop {
        if pos >= bytes.len() {
            return Err(ScanError::Corrupted);
        }
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    break pos;
                }
            }
            _ => {}
        }
        pos += 1;
    };

    *start_pos = start;
    *end_pos = end;
    Ok(&line[start..=end])
}

/// Reads the quoted string starting at the first `"` at or after
/// `*start_pos`.
///
/// The terminator is the next unescaped `"`; a quote directly preceded by
/// a backslash keeps the scan going. On success, `start_pos` holds the
/// opening quote, `end_pos` the closing quote, and the returned slice is
/// the content between them (delimiters excluded).
///
/// # Errors
///
/// [`ScanError::NotFound`] when no `"` exists from `*start_pos` on;
/// [`ScanError::Corrupted`] when the input ends before an unescaped
/// terminator. The cursor is left untouched on error.
pub fn read_string<'a>(
    line: &'a str,
    start_pos: &mut usize,
    end_pos: &mut usize,
) -> Result<&'a str, ScanError> {
    let bytes = line.as_bytes();
    let start = find_byte(bytes, b'"', *start_pos).ok_or(ScanError::NotFound)?;

    let mut pos = start + 1;
    let end = loop {
        if pos >= bytes.len() {
            return Err(ScanError::Corrupted);
        }
        if bytes[pos] == b'"' && bytes[pos - 1] != b'\\' {
            break pos;
        }
        pos += 1;
    };

    *start_pos = start;
    *end_pos = end;
    Ok(&line[start + 1..end])
}

//! UTF-8 codec: classify, decode and escape byte sequences without full
//! Unicode normalization.
//!
//! Everything here operates on `&[u8]` rather than `&str` because the
//! contract is defined over possibly-malformed input: invalid lead bytes
//! must be *reported*, not assumed away. Decoding is the legacy masked-bit
//! scheme: continuation bytes are not validated, and 4-octet sequences are
//! capped at the historical `0x10FFF` bound (not the Unicode maximum
//! `0x10FFFF`). Both quirks are part of the compatibility surface shared
//! with the agents' database and REST layers and must not be "fixed" here.

use alloc::{format, string::String};

use crate::error::Utf8Error;

/// Sentinel returned by [`escape_bytes`] for a missing input.
const NULL_PTR: &str = "(null_ptr)";
/// Sentinel returned by [`escape_bytes`] when any scan position holds a
/// malformed sequence. Fail-fast per string, never partial output.
const INVALID_UTF8: &str = "(invalid_utf8)";

/// Returns how many octets the logical character introduced by `lead`
/// occupies (1 to 4).
///
/// Uses the standard lead-byte bit patterns (`0xxxxxxx` → 1, `110xxxxx` → 2,
/// `1110xxxx` → 3, `11110xxx` → 4). Any other pattern is an
/// [`Utf8Error::InvalidLeadByte`], logged and returned so the caller can
/// abort the current string operation instead of reading adjacent memory.
pub fn octet_width(lead: u8) -> Result<usize, Utf8Error> {
    if lead & 0x80 == 0 {
        Ok(1)
    } else if lead & 0xE0 == 0xC0 {
        Ok(2)
    } else if lead & 0xF0 == 0xE0 {
        Ok(3)
    } else if lead & 0xF8 == 0xF0 {
        Ok(4)
    } else {
        log::error!("unrecognized utf-8 lead byte 0x{lead:02x}");
        Err(Utf8Error::InvalidLeadByte(lead))
    }
}

/// Compares two UTF-8 byte sequences for equality, ignoring case on ASCII
/// characters only.
///
/// Equal total byte length is a fast precondition: unequal lengths are
/// `Ok(false)` immediately. Characters wider than one octet compare
/// byte-for-byte exactly (no case folding or normalization, so a decomposed
/// sequence never equals its precomposed form). A malformed sequence on
/// either side is an `Err`, which callers must keep distinct from
/// "definitely different".
pub fn utf8_eq(a: &[u8], b: &[u8]) -> Result<bool, Utf8Error> {
    if a.len() != b.len() {
        return Ok(false);
    }

    let mut pos = 0;
    while pos < a.len() {
        let wa = octet_width(a[pos])?;
        let wb = octet_width(b[pos])?;
        if wa != wb {
            return Ok(false);
        }
        if pos + wa > a.len() {
            return Err(Utf8Error::TruncatedSequence {
                need: wa,
                have: a.len() - pos,
            });
        }
        if wa == 1 {
            if !a[pos].eq_ignore_ascii_case(&b[pos]) {
                return Ok(false);
            }
        } else if a[pos..pos + wa] != b[pos..pos + wa] {
            return Ok(false);
        }
        pos += wa;
    }
    Ok(true)
}

/// Decodes the logical character starting at `bytes[0]` and renders it as a
/// backslash-u escape literal for embedding in JSON or log output.
///
/// Returns `Ok(None)` for a plain ASCII byte (nothing to escape), or
/// `Ok(Some((width, literal)))` where the literal is `\u` followed by
/// lowercase hex: four zero-padded digits for 2- and 3-octet characters,
/// five for 4-octet ones.
///
/// # Errors
///
/// [`Utf8Error::InvalidLeadByte`] / [`Utf8Error::TruncatedSequence`] for
/// malformed input, and [`Utf8Error::UnassignedCodepoint`] for a 4-octet
/// sequence decoding above `0x10FFF`. That bound is a preserved legacy
/// constant; scalar values in `0x11000..=0x10FFFF` are rejected even though
/// Unicode assigns them.
pub fn codepoint_escape(bytes: &[u8]) -> Result<Option<(usize, String)>, Utf8Error> {
    let lead = *bytes.first().ok_or(Utf8Error::TruncatedSequence { need: 1, have: 0 })?;
    let width = octet_width(lead)?;
    if width == 1 {
        return Ok(None);
    }
    if bytes.len() < width {
        return Err(Utf8Error::TruncatedSequence {
            need: width,
            have: bytes.len(),
        });
    }

    let scalar = match width {
        2 => (u32::from(lead & 0x1F) << 6) | u32::from(bytes[1] & 0x3F),
        3 => {
            (u32::from(lead & 0x0F) << 12)
                | (u32::from(bytes[1] & 0x3F) << 6)
                | u32::from(bytes[2] & 0x3F)
        }
        _ => {
            let scalar = (u32::from(lead & 0x07) << 18)
                | (u32::from(bytes[1] & 0x3F) << 12)
                | (u32::from(bytes[2] & 0x3F) << 6)
                | u32::from(bytes[3] & 0x3F);
            // Legacy cap, intentionally below the Unicode maximum.
            if scalar > 0x10FFF {
                return Err(Utf8Error::UnassignedCodepoint(scalar));
            }
            scalar
        }
    };

    let literal = if width == 4 {
        format!("\\u{scalar:05x}")
    } else {
        format!("\\u{scalar:04x}")
    };
    Ok(Some((width, literal)))
}

/// Escapes `text` for embedding inside a JSON or log string literal.
///
/// See [`escape_bytes`] for the exact contract; a `&str` can never trigger
/// the malformed-input sentinel, but 4-octet characters above the legacy
/// codepoint bound are still dropped from the output.
#[must_use]
pub fn escape(text: &str) -> String {
    escape_bytes(Some(text.as_bytes()))
}

/// Escapes a raw byte sequence for embedding inside a JSON or log string
/// literal.
///
/// Double quotes become `\"`, backslashes are doubled, and the C0 controls
/// `\b \f \n \r \t` use the *double*-backslash convention (`\\n`, not `\n`):
/// the result feeds a second formatting pass downstream, so one backslash
/// must survive that pass. Characters wider than one octet are replaced by
/// their [`codepoint_escape`] form.
///
/// `None` yields the literal `"(null_ptr)"`. A malformed sequence at any
/// scan position yields `"(invalid_utf8)"` for the entire output, fail-fast
/// per string rather than per character. A 4-octet character above the legacy
/// `0x10FFF` bound is dropped (and logged), matching the historical
/// behavior of appending its empty conversion result.
#[must_use]
pub fn escape_bytes(input: Option<&[u8]>) -> String {
    let Some(bytes) = input else {
        return String::from(NULL_PTR);
    };

    let mut after = String::with_capacity(bytes.len() * 2);
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let width = match octet_width(c) {
            Ok(width) if i + width <= bytes.len() => width,
            _ => return String::from(INVALID_UTF8),
        };
        match c {
            b'"' => after.push_str("\\\""),
            0x08 => after.push_str("\\\\b"),
            0x0C => after.push_str("\\\\f"),
            b'\n' => after.push_str("\\\\n"),
            b'\r' => after.push_str("\\\\r"),
            b'\t' => after.push_str("\\\\t"),
            b'\\' => after.push_str("\\\\"),
            _ if width > 1 => match codepoint_escape(&bytes[i..]) {
                Ok(Some((_, literal))) => after.push_str(&literal),
                Err(Utf8Error::UnassignedCodepoint(scalar)) => {
                    log::warn!("dropping unassigned codepoint u+{scalar:x} while escaping");
                }
                // Width 1 is handled above, so anything else is malformed.
                _ => return String::from(INVALID_UTF8),
            },
            _ => after.push(char::from(c)),
        }
        i += width;
    }
    after
}

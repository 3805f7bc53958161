use thiserror::Error;

/// Errors reported by the UTF-8 codec.
///
/// Decode errors never escape as panics: every public operation defines a
/// safe output for the error case (`escape_bytes` degrades to the
/// `"(invalid_utf8)"` sentinel, `utf8_eq` returns the error so callers can
/// tell "malformed input" apart from "definitely different").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Utf8Error {
    /// The byte cannot begin any UTF-8 sequence.
    #[error("invalid utf-8 lead byte 0x{0:02x}")]
    InvalidLeadByte(u8),
    /// The lead byte announced more octets than the input holds.
    #[error("utf-8 sequence truncated: need {need} octets, {have} available")]
    TruncatedSequence { need: usize, have: usize },
    /// A 4-octet sequence decoded above the legacy `0x10FFF` bound.
    ///
    /// The bound is a frozen compatibility constant, not the Unicode
    /// maximum; see [`crate::codepoint_escape`].
    #[error("unassigned codepoint u+{0:x}")]
    UnassignedCodepoint(u32),
}

/// Failure modes of the minimal JSON scanner.
///
/// The two cases are deliberately distinct: `NotFound` is a normal outcome
/// at some call sites (no more nested JSON from this position on), while
/// `Corrupted` always indicates malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The opening delimiter never occurs at or after the start position.
    #[error("no opening delimiter found")]
    NotFound,
    /// A delimiter was opened but the input ended before it closed.
    #[error("delimiter opened but never closed")]
    Corrupted,
}

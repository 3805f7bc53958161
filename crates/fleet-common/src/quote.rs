//! Quote codec: a reversible transform that removes literal double quotes
//! from a string so it can travel through quote-delimited storage fields.
//!
//! Every `"` is spelled out as the six characters `\u0022`; everything
//! else, multi-byte characters included, passes through untouched. Encoding
//! already-encoded text is a no-op, since the encoded form contains no
//! quote character.

use alloc::string::String;

const QUOTE_ESCAPE: &str = "\\u0022";

/// Replaces every `"` in `param` with the literal `\u0022`.
#[must_use]
pub fn quote_encode(param: &str) -> String {
    let mut out = String::with_capacity(param.len());
    for c in param.chars() {
        if c == '"' {
            out.push_str(QUOTE_ESCAPE);
        } else {
            out.push(c);
        }
    }
    out
}

/// Replaces every literal `\u0022` in `param` with `"`.
#[must_use]
pub fn quote_decode(param: &str) -> String {
    param.replace(QUOTE_ESCAPE, "\"")
}

//! Translation-string JSON assembler.
//!
//! Turns a `printf`-style format string plus positional arguments into one
//! JSON value representing a localizable message:
//!
//! ```text
//! { "key": "Text with {{var1}}", "variables": { "var1": "value" } }
//! ```
//!
//! Placeholder keys are `var` + the 1-based ordinal of the `%`-directive's
//! position in the format string, so a backend can substitute localized
//! text without re-parsing the original format. Arguments that are
//! themselves already-assembled messages are spliced in as genuine nested
//! JSON objects rather than escaped string blobs, so localized sub-messages
//! compose without double encoding.
//!
//! The argument list is a materialized slice of type-erased [`Arg`] values;
//! this is the re-iterable capture that replaces `va_list` copying across
//! formatting passes. Callers are expected to supply one argument per
//! directive; an unmatched directive keeps its raw token in the output
//! (the historical behavior was undefined; this crate pins a deterministic
//! outcome).

use alloc::{
    format,
    string::{String, ToString},
};

use crate::{error::ScanError, json};

/// One type-erased positional argument for [`jsonify_translation_string`].
///
/// Values are rendered at substitution time: strings verbatim, integers
/// honoring the conversion character (`%x` hex, `%o` octal, decimal
/// otherwise) and field width (`%5d`, `%05d`, `%-5d`), floats honoring the
/// directive's precision (`%'.2f` keeps two digits; a bare `%f` uses the
/// printf default of six). Literal text swallowed into the token after the
/// conversion character is emitted verbatim after the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
    Uint(u64),
    Float(f64),
}

macro_rules! arg_from_int {
    ( $variant:ident : $( $ty:ty ),+ ) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value.into())
                }
            }
        )+
    };
}

arg_from_int!(Int: i8, i16, i32, i64);
arg_from_int!(Uint: u8, u16, u32, u64);

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(value.into())
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

/// Returns the end (exclusive) of the `%`-directive starting at
/// `bytes[start]`.
///
/// Accumulation stops at the first space, `"`, `(`, `)`, `[`, `]` or `'`,
/// at end of input, or immediately after an `s` (so `%s` self-closes). A
/// `'` directly following the `%` is the locale flag of directives like
/// `%'.2f` and belongs to the token.
fn directive_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    if bytes.get(i) == Some(&b'\'') {
        i += 1;
    }
    while i < bytes.len() {
        let c = bytes[i];
        if matches!(c, b' ' | b'"' | b'(' | b')' | b'[' | b']' | b'\'') {
            break;
        }
        i += 1;
        if c == b's' {
            break;
        }
    }
    i
}

/// First-two/last-two character heuristic for "already assembled JSON":
/// starts with a single `{`, ends with a single `}`. An idempotence
/// shortcut, not a validity check.
fn looks_like_assembled(key: &str) -> bool {
    let b = key.as_bytes();
    b.len() >= 2
        && b[0] == b'{'
        && b[1] != b'{'
        && b[b.len() - 1] == b'}'
        && b[b.len() - 2] != b'}'
}

fn find_byte(bytes: &[u8], needle: u8, from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == needle)
        .map_or(bytes.len(), |i| from + i)
}

/// Assembles the translation-string JSON value for `key` and `args`.
///
/// An empty `key` yields an empty result (explicit early exit, not an
/// error). A `key` that already looks like a complete JSON object is
/// returned verbatim, so pre-assembled messages pass through unchanged.
/// Otherwise every `%`-directive in `key` becomes a `{{varN}}` placeholder,
/// the matching argument is substituted as the value of `"varN"`, and any
/// substituted value that is itself an assembled message is un-quoted into
/// a genuine nested object.
///
/// The output is always syntactically plausible JSON, though a nested value
/// containing a lone literal brace can defeat the scanner's depth counter
/// (see [`crate::read_object`]); at worst the result is imperfect JSON and
/// the caller's JSON layer rejects it later. This function never panics on
/// malformed nested content, since it is routinely called from error-reporting
/// paths and must not fail while reporting another failure.
#[must_use]
pub fn jsonify_translation_string(key: &str, args: &[Arg<'_>]) -> String {
    if key.is_empty() {
        return String::new();
    }
    if looks_like_assembled(key) {
        return String::from(key);
    }

    let bytes = key.as_bytes();
    let mut key_text = String::with_capacity(key.len());
    let mut fragments = String::new();
    let mut count = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let end = directive_end(bytes, i);
            count += 1;
            key_text.push_str(&format!("{{{{var{count}}}}}"));
            fragments.push_str(&format!("\"var{count}\": \"{}\", ", &key[i..end]));
            i = end;
        } else {
            let next = find_byte(bytes, b'%', i);
            key_text.push_str(&key[i..next]);
            i = next;
        }
    }

    if count == 0 {
        return format!("{{ \"key\": \"{key_text}\" }}");
    }

    let fragments = fragments.strip_suffix(", ").unwrap_or(&fragments);
    let template =
        format!("{{ \"key\": \"{key_text}\", \"variables\": {{ {fragments} }} }}");
    dequote_nested(substitute(&template, args))
}

/// Substitutes each `%`-directive in `template` with the matching argument.
///
/// Re-tokenizes with the same directive grammar as the assembly scan, so
/// the Nth directive found here is the Nth directive of the original format
/// string. Rendered argument text is never re-scanned.
fn substitute(template: &str, args: &[Arg<'_>]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let end = directive_end(bytes, i);
            if let Some(arg) = args.get(next_arg) {
                render(&mut out, arg, &template[i..end]);
            } else {
                // More directives than values; keep the raw token.
                out.push_str(&template[i..end]);
            }
            next_arg += 1;
            i = end;
        } else {
            let next = find_byte(bytes, b'%', i);
            out.push_str(&template[i..next]);
            i = next;
        }
    }
    out
}

/// One parsed `%`-directive token.
///
/// The tokenizer only stops at its handful of terminators, so a token can
/// carry literal text past the conversion character (`%d,` swallows the
/// comma). That text is split off as `tail` and emitted verbatim after the
/// converted value, the way `vsnprintf` leaves it in place.
struct Directive<'a> {
    zero_pad: bool,
    left_align: bool,
    width: usize,
    precision: Option<usize>,
    conversion: u8,
    tail: &'a str,
}

/// Splits a directive token into flags, field width, precision, length
/// modifiers, the conversion character and the literal tail.
fn parse_directive(token: &str) -> Directive<'_> {
    let bytes = token.as_bytes();
    let mut i = 1;
    let mut zero_pad = false;
    let mut left_align = false;
    while let Some(&c) = bytes.get(i) {
        match c {
            b'0' => zero_pad = true,
            b'-' => left_align = true,
            b'\'' | b'+' | b' ' | b'#' => {}
            _ => break,
        }
        i += 1;
    }
    let mut width = 0usize;
    while let Some(c) = bytes.get(i).filter(|c| c.is_ascii_digit()) {
        width = width * 10 + usize::from(c - b'0');
        i += 1;
    }
    let mut precision = None;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let mut p = 0usize;
        while let Some(c) = bytes.get(i).filter(|c| c.is_ascii_digit()) {
            p = p * 10 + usize::from(c - b'0');
            i += 1;
        }
        precision = Some(p);
    }
    while matches!(bytes.get(i), Some(&(b'l' | b'h' | b'z' | b'j' | b't' | b'q'))) {
        i += 1;
    }
    let conversion = bytes.get(i).copied().unwrap_or(b's');
    if i < bytes.len() {
        i += 1;
    }
    Directive {
        zero_pad,
        left_align,
        width,
        precision,
        conversion,
        tail: &token[i..],
    }
}

fn render(out: &mut String, arg: &Arg<'_>, token: &str) {
    let directive = parse_directive(token);
    let text = match *arg {
        Arg::Str(s) => String::from(s),
        Arg::Int(v) => render_integer(v, directive.conversion),
        Arg::Uint(v) => render_integer(v, directive.conversion),
        Arg::Float(v) => {
            let precision = directive.precision.unwrap_or(6);
            format!("{v:.precision$}")
        }
    };
    push_padded(out, &text, &directive);
    out.push_str(directive.tail);
}

fn render_integer<T>(value: T, conversion: u8) -> String
where
    T: ToString + core::fmt::LowerHex + core::fmt::UpperHex + core::fmt::Octal,
{
    match conversion {
        b'x' => format!("{value:x}"),
        b'X' => format!("{value:X}"),
        b'o' => format!("{value:o}"),
        _ => value.to_string(),
    }
}

/// Pads `text` to the directive's field width: right-aligned with spaces by
/// default, zeros under the `0` flag, left-aligned under `-`.
fn push_padded(out: &mut String, text: &str, directive: &Directive<'_>) {
    let pad = directive.width.saturating_sub(text.chars().count());
    if pad == 0 {
        out.push_str(text);
    } else if directive.left_align {
        out.push_str(text);
        for _ in 0..pad {
            out.push(' ');
        }
    } else {
        let fill = if directive.zero_pad { '0' } else { ' ' };
        for _ in 0..pad {
            out.push(fill);
        }
        out.push_str(text);
    }
}

/// Un-quotes substituted values that are themselves assembled JSON objects.
///
/// Repeatedly finds `"{` (skipping `"{{`, which is a placeholder at the
/// start of a key, not a nested object), asks the scanner for the true
/// matching close brace so objects-within-objects stay paired, then strips
/// the surrounding quote pair found as `"{` … `}"`. Each stripped quote is
/// replaced by a single space so later offsets stay valid. A scan failure
/// skips that occurrence (logged, never fatal) and resumes one position
/// later to avoid looping.
fn dequote_nested(mut text: String) -> String {
    let mut from = 0;
    while let Some(rel) = text[from..].find("\"{") {
        let p = from + rel;
        if text.as_bytes().get(p + 2) == Some(&b'{') {
            from = p + 2;
            continue;
        }

        let mut start = p + 1;
        let mut end = 0;
        match json::read_object(&text, &mut start, &mut end) {
            Ok(_) => match text[end..].find("}\"") {
                Some(rel2) => {
                    let q = end + rel2;
                    text.replace_range(p..=p, " ");
                    text.replace_range(q + 1..=q + 1, " ");
                    from = q + 2;
                }
                None => {
                    log::warn!("nested value at byte {p} has no closing quote, left as a string");
                    from = p + 1;
                }
            },
            Err(ScanError::Corrupted) => {
                log::warn!("unbalanced nested value at byte {p}, left as a string");
                from = p + 1;
            }
            Err(ScanError::NotFound) => {
                log::debug!("no nested object at byte {p}");
                from = p + 1;
            }
        }
    }
    text
}

use alloc::string::String;

use quickcheck_macros::quickcheck;
use rstest::rstest;

use crate::{Utf8Error, codepoint_escape, escape, escape_bytes, octet_width, utf8_eq};

#[rstest]
#[case(0x00, 1)]
#[case(0x7F, 1)]
#[case(0xC0, 2)]
#[case(0xDF, 2)]
#[case(0xE0, 3)]
#[case(0xEF, 3)]
#[case(0xF0, 4)]
#[case(0xF7, 4)]
fn octet_width_for_valid_lead_bytes(#[case] lead: u8, #[case] width: usize) {
    assert_eq!(octet_width(lead), Ok(width));
}

#[rstest]
#[case(0x80)]
#[case(0xBF)]
#[case(0xF8)]
#[case(0xFF)]
fn octet_width_rejects_continuation_and_out_of_range_leads(#[case] lead: u8) {
    assert_eq!(octet_width(lead), Err(Utf8Error::InvalidLeadByte(lead)));
}

#[test]
fn utf8_eq_folds_ascii_case_only() {
    let cases: &[(&str, &str, bool)] = &[
        ("ŽlUťOUčKý kůň", "Žluťoučký Kůň", true),
        ("Žluťouťký kůň", "ŽLUťouťKý kůň", true),
        // Trailing space: byte-length mismatch short-circuits.
        ("Žluťouťký kůň", "ŽLUťouťKý kůň ", false),
        // Decomposed vs precomposed á: different widths, not normalized.
        ("Ka\u{301}rol", "K\u{e1}rol", false),
        ("супер test", "супер Test", true),
        // ň vs n differ in width, so the lengths differ too.
        ("ŽlUťOUčKý kůň", "ŽlUťOUčKý kůn", false),
    ];
    for (a, b, expected) in cases {
        assert_eq!(
            utf8_eq(a.as_bytes(), b.as_bytes()),
            Ok(*expected),
            "{a:?} vs {b:?}"
        );
    }
}

#[test]
fn utf8_eq_reports_malformed_input_distinctly() {
    assert_eq!(
        utf8_eq(b"\xFF", b"\xFF"),
        Err(Utf8Error::InvalidLeadByte(0xFF))
    );
    // Lead byte announces 2 octets but the input ends.
    assert_eq!(
        utf8_eq(b"a\xC3", b"a\xC3"),
        Err(Utf8Error::TruncatedSequence { need: 2, have: 1 })
    );
}

#[test]
fn codepoint_escape_literal_forms() {
    assert_eq!(codepoint_escape(b"a"), Ok(None));
    // 2-octet: é = U+00E9, zero-padded to four digits.
    assert_eq!(
        codepoint_escape("é".as_bytes()),
        Ok(Some((2, String::from("\\u00e9"))))
    );
    // 3-octet: € = U+20AC.
    assert_eq!(
        codepoint_escape("€".as_bytes()),
        Ok(Some((3, String::from("\\u20ac"))))
    );
    // 4-octet renders five hex digits, up to the legacy bound.
    assert_eq!(
        codepoint_escape("\u{10FFF}".as_bytes()),
        Ok(Some((4, String::from("\\u10fff"))))
    );
    // One past the legacy bound is unassigned, even though Unicode
    // assigns codepoints up to U+10FFFF.
    assert_eq!(
        codepoint_escape("\u{11000}".as_bytes()),
        Err(Utf8Error::UnassignedCodepoint(0x11000))
    );
}

#[rstest]
#[case("'jednoduche ' uvozovky'", "'jednoduche ' uvozovky'")]
#[case("dvojite \" uvozovky", r#"dvojite \" uvozovky"#)]
#[case("dvojite \\\" uvozovky", r#"dvojite \\\" uvozovky"#)]
#[case("\"", r#"\""#)]
#[case("'\"", r#"'\""#)]
#[case("\"\"", r#"\"\""#)]
#[case("\u{8}", r"\\b")]
#[case("\u{c}", r"\\f")]
#[case("\t", r"\\t")]
#[case("\r", r"\\r")]
#[case("\\", r"\\")]
#[case("\\\\", r"\\\\")]
#[case("\\b", r"\\b")]
#[case("\\\u{8}", r"\\\\b")]
#[case("\\uA66A", r"\\uA66A")]
#[case("Ꙫ", r"\ua66a")]
#[case("\\Ꙫ", r"\\\ua66a")]
#[case("\\\\Ꙫ", r"\\\\\ua66a")]
#[case("\u{40A} Њ", r"\u040a \u040a")]
#[case(
    "first second \n third\n\n \\n \\\\\n fourth",
    r"first second \\n third\\n\\n \\n \\\\\\n fourth"
)]
fn escape_literal_table(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(escape(input), expected);
}

#[test]
fn escape_sentinels() {
    assert_eq!(escape_bytes(None), "(null_ptr)");
    // Whole-string failure, not partial output.
    assert_eq!(escape_bytes(Some(b"abc\xFFdef")), "(invalid_utf8)");
    assert_eq!(escape_bytes(Some(b"abc\xC3")), "(invalid_utf8)");
}

#[test]
fn escape_drops_codepoints_above_legacy_bound() {
    assert_eq!(escape("a\u{11000}b"), "ab");
    assert_eq!(escape("a\u{10FFF}b"), "a\\u10fffb");
}

#[quickcheck]
fn escape_is_identity_on_plain_ascii(input: String) -> bool {
    let plain = input
        .chars()
        .all(|c| c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\');
    !plain || escape(&input) == input
}

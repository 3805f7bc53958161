use crate::{Arg, jsonify_translation_string};

#[test]
fn no_directives_yields_key_only() {
    assert_eq!(
        crate::translate_me!("Text used as a key"),
        r#"{ "key": "Text used as a key" }"#
    );
}

#[test]
fn empty_format_yields_empty_result() {
    assert_eq!(jsonify_translation_string("", &[]), "");
}

#[test]
fn string_and_integer_directives() {
    assert_eq!(
        crate::translate_me!("Text used as a key with %s and %d", "foo", 5),
        r#"{ "key": "Text used as a key with {{var1}} and {{var2}}", "variables": { "var1": "foo", "var2": "5" } }"#
    );
}

#[test]
fn locale_float_and_long_long_directives() {
    assert_eq!(
        crate::translate_me!("Text used as a key with %'.2f and %lld", 10.25, 256i64),
        r#"{ "key": "Text used as a key with {{var1}} and {{var2}}", "variables": { "var1": "10.25", "var2": "256" } }"#
    );
}

#[test]
fn portable_unsigned_directive() {
    assert_eq!(
        crate::translate_me!("Text used as a key with %u", 5u32),
        r#"{ "key": "Text used as a key with {{var1}}", "variables": { "var1": "5" } }"#
    );
}

#[test]
fn parentheses_terminate_directives() {
    assert_eq!(
        crate::translate_me!("Text used as a key,%s and (%s)", "foo", "bar"),
        r#"{ "key": "Text used as a key,{{var1}} and ({{var2}})", "variables": { "var1": "foo", "var2": "bar" } }"#
    );
}

#[test]
fn assembled_input_passes_through_verbatim() {
    let assembled = r#"{ "key": "Text used as a key,{{var1}} and ({{var2}})", "variables": { "var1": "foo", "var2": "bar" } }"#;
    assert_eq!(crate::translate_me!(assembled, "foo", "bar"), assembled);
}

#[test]
fn leading_placeholder_is_not_mistaken_for_nested_json() {
    assert_eq!(
        crate::translate_me!("%s. Text used as a key: %s", "foo", "bar"),
        r#"{ "key": "{{var1}}. Text used as a key: {{var2}}", "variables": { "var1": "foo", "var2": "bar" } }"#
    );
}

const PARAM1: &str = r#"{ "key": "Error: client-> recv (timeout = '{{var1}} returned NULL", "variables": { "var1": "60')" } }"#;
const PARAM2: &str = r#"{ "key": "Unexpected param" }"#;

#[test]
fn nested_assembled_argument_is_dequoted() {
    assert_eq!(
        crate::translate_me!("Internal Server Error. %s", PARAM1),
        r#"{ "key": "Internal Server Error. {{var1}}", "variables": { "var1":  { "key": "Error: client-> recv (timeout = '{{var1}} returned NULL", "variables": { "var1": "60')" } }  } }"#
    );
}

#[test]
fn two_nested_arguments_are_dequoted_in_order() {
    assert_eq!(
        crate::translate_me!("Internal Server Error. %s %s", PARAM1, PARAM2),
        r#"{ "key": "Internal Server Error. {{var1}} {{var2}}", "variables": { "var1":  { "key": "Error: client-> recv (timeout = '{{var1}} returned NULL", "variables": { "var1": "60')" } } , "var2":  { "key": "Unexpected param" }  } }"#
    );
}

#[test]
fn nested_argument_without_variables_is_dequoted() {
    assert_eq!(
        crate::translate_me!(
            "Internal Server Error. %s",
            r#"{ "key": "Timed out waiting for message." }"#
        ),
        r#"{ "key": "Internal Server Error. {{var1}}", "variables": { "var1":  { "key": "Timed out waiting for message." }  } }"#
    );
}

#[test]
fn mixed_plain_and_nested_arguments() {
    assert_eq!(
        crate::translate_me!(
            "Parameter %s has bad value. Received %s. Expected %s",
            "state",
            r#"{ "key": "value '{{var1}}'", "variables": { "var1": "XYZ" } }"#,
            r#"{ "key": "one of the following values {{var1}}", "variables": { "var1": "[ ALL | ALL-ACTIVE | ACTIVE | ACK-WIP | ACK-IGNORE | ACK-PAUSE | ACK-SILENCE | RESOLVED ]" } }"#
        ),
        r#"{ "key": "Parameter {{var1}} has bad value. Received {{var2}}. Expected {{var3}}", "variables": { "var1": "state", "var2":  { "key": "value '{{var1}}'", "variables": { "var1": "XYZ" } } , "var3":  { "key": "one of the following values {{var1}}", "variables": { "var1": "[ ALL | ALL-ACTIVE | ACTIVE | ACK-WIP | ACK-IGNORE | ACK-PAUSE | ACK-SILENCE | RESOLVED ]" } }  } }"#
    );
}

#[test]
fn unmatched_directives_keep_their_raw_tokens() {
    // The C ancestor inherited undefined behavior from vsnprintf here;
    // this crate pins a deterministic outcome instead.
    assert_eq!(
        jsonify_translation_string("%d and %d", &[Arg::Int(1)]),
        r#"{ "key": "{{var1}} and {{var2}}", "variables": { "var1": "1", "var2": "%d" } }"#
    );
}

#[test]
fn malformed_nested_argument_stays_quoted() {
    // The unbalanced value cannot be carved out; the occurrence is skipped
    // and the result remains an (escaped-string) JSON value.
    assert_eq!(
        jsonify_translation_string("Oops: %s", &[Arg::Str("{ never closed")]),
        r#"{ "key": "Oops: {{var1}}", "variables": { "var1": "{ never closed" } }"#
    );
}

#[test]
fn trailing_literal_in_directive_token_survives_substitution() {
    // The tokenizer swallows the comma into the first token; the rendered
    // value must keep it as literal text after the conversion.
    assert_eq!(
        crate::translate_me!("Found %d, skipped %d", 3, 4),
        r#"{ "key": "Found {{var1}} skipped {{var2}}", "variables": { "var1": "3,", "var2": "4" } }"#
    );
}

#[test]
fn conversion_character_selects_the_radix() {
    assert_eq!(
        jsonify_translation_string("id 0x%x", &[Arg::Uint(255)]),
        r#"{ "key": "id 0x{{var1}}", "variables": { "var1": "ff" } }"#
    );
    assert_eq!(
        jsonify_translation_string("mode %o", &[Arg::Uint(8)]),
        r#"{ "key": "mode {{var1}}", "variables": { "var1": "10" } }"#
    );
}

#[test]
fn field_width_and_padding_flags_are_honored() {
    assert_eq!(
        jsonify_translation_string("seq %5d", &[Arg::Int(3)]),
        r#"{ "key": "seq {{var1}}", "variables": { "var1": "    3" } }"#
    );
    assert_eq!(
        jsonify_translation_string("seq %05d", &[Arg::Int(3)]),
        r#"{ "key": "seq {{var1}}", "variables": { "var1": "00003" } }"#
    );
    assert_eq!(
        jsonify_translation_string("seq %-4d end", &[Arg::Int(7)]),
        r#"{ "key": "seq {{var1}} end", "variables": { "var1": "7   " } }"#
    );
}

#[test]
fn float_directive_without_precision_uses_printf_default() {
    assert_eq!(
        crate::translate_me!("load %f", 0.5),
        r#"{ "key": "load {{var1}}", "variables": { "var1": "0.500000" } }"#
    );
}

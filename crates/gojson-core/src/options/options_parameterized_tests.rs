#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Boolean spellings accepted in parameter values
// ============================================================================

#[test_case("true", true)]
#[test_case("TRUE", true)]
#[test_case("True", true)]
#[test_case("t", true)]
#[test_case("1", true)]
#[test_case("false", false)]
#[test_case("FALSE", false)]
#[test_case("f", false)]
#[test_case("0", false)]
fn Options___from_parameter___accepts_boolean_spelling(value: &str, expected: bool) {
    let options = Options::from_parameter(&format!("partial={value}")).unwrap();

    assert_eq!(options.partial, expected);
}

// ============================================================================
// Each key sets exactly one flag
// ============================================================================

#[test_case("partial", Options { partial: true, ..Options::default() })]
#[test_case("multiline", Options { multiline: true, ..Options::default() })]
#[test_case("enums_as_ints", Options { enums_as_ints: true, ..Options::default() })]
#[test_case("emit_defaults", Options { emit_defaults: true, ..Options::default() })]
#[test_case("orig_name", Options { orig_name: true, ..Options::default() })]
#[test_case("allow_unknown", Options { allow_unknown_fields: true, ..Options::default() })]
#[test_case("allow_unknown_fields", Options { allow_unknown_fields: true, ..Options::default() })]
fn Options___set___enables_only_named_flag(key: &str, expected: Options) {
    let mut options = Options::default();

    options.set(key, true).unwrap();

    assert_eq!(options, expected);
}

#![allow(non_snake_case)]

use super::*;

#[test]
fn Options___default___all_flags_unset() {
    let options = Options::default();

    assert!(!options.partial);
    assert!(!options.multiline);
    assert!(!options.enums_as_ints);
    assert!(!options.emit_defaults);
    assert!(!options.orig_name);
    assert!(!options.allow_unknown_fields);
    assert_eq!(options, Options::new());
}

#[test]
fn Options___from_parameter___empty_string_returns_defaults() {
    let options = Options::from_parameter("").unwrap();

    assert_eq!(options, Options::default());
}

#[test]
fn Options___from_parameter___bare_key_enables_flag() {
    let options = Options::from_parameter("emit_defaults").unwrap();

    assert!(options.emit_defaults);
    assert!(!options.orig_name);
}

#[test]
fn Options___from_parameter___parses_every_flag() {
    let options = Options::from_parameter(
        "enums_as_ints=true,emit_defaults=true,orig_name=true,allow_unknown=true,partial=true,multiline=true",
    )
    .unwrap();

    assert!(options.enums_as_ints);
    assert!(options.emit_defaults);
    assert!(options.orig_name);
    assert!(options.allow_unknown_fields);
    assert!(options.partial);
    assert!(options.multiline);
}

#[test]
fn Options___from_parameter___later_items_override_earlier() {
    let options = Options::from_parameter("orig_name,orig_name=false").unwrap();

    assert!(!options.orig_name);
}

#[test]
fn Options___from_parameter___ignores_whitespace_and_empty_items() {
    let options = Options::from_parameter(" orig_name = true ,, partial ").unwrap();

    assert!(options.orig_name);
    assert!(options.partial);
}

#[test]
fn Options___from_parameter___ignores_reserved_protoc_gen_go_keys() {
    let options =
        Options::from_parameter("paths=source_relative,Mfoo.proto=example.com/foo,multiline")
            .unwrap();

    assert!(options.multiline);
}

#[test]
fn Options___from_parameter___rejects_unknown_key() {
    let result = Options::from_parameter("pretty=true");

    assert!(matches!(result, Err(GenError::UnknownOption(key)) if key == "pretty"));
}

#[test]
fn Options___from_parameter___rejects_non_boolean_value() {
    let result = Options::from_parameter("orig_name=yes");

    assert!(matches!(
        result,
        Err(GenError::InvalidOptionValue { key, value }) if key == "orig_name" && value == "yes"
    ));
}

#[test]
fn Options___from_parameter___rejects_missing_key() {
    let result = Options::from_parameter("=true");

    assert!(matches!(result, Err(GenError::InvalidParameter(_))));
}

#[test]
fn Options___set___rejects_unknown_key() {
    let mut options = Options::default();

    assert!(options.set("indent", true).is_err());
    assert_eq!(options, Options::default());
}

#[test]
fn Options___union___keeps_flags_from_both() {
    let left = Options {
        orig_name: true,
        ..Options::default()
    };
    let right = Options {
        multiline: true,
        ..Options::default()
    };

    let merged = left.union(right);

    assert!(merged.orig_name);
    assert!(merged.multiline);
    assert!(!merged.partial);
}

#[test]
fn Options___deserialize_toml___missing_flags_default_to_false() {
    let options: Options = toml::from_str("emit_defaults = true\nallow_unknown = true\n").unwrap();

    assert!(options.emit_defaults);
    assert!(options.allow_unknown_fields);
    assert!(!options.multiline);
}

#[test]
fn Options___deserialize_toml___rejects_unknown_fields() {
    let result: Result<Options, _> = toml::from_str("indent = true\n");

    assert!(result.is_err());
}

#[test]
fn Options___deserialize_json___uses_field_names() {
    let json = r#"{"orig_name": true, "allow_unknown_fields": true}"#;

    let options: Options = serde_json::from_str(json).unwrap();

    assert!(options.orig_name);
    assert!(options.allow_unknown_fields);
}

#[test]
fn Options___apply_parameter___changes_only_named_keys() {
    let mut options = Options {
        orig_name: true,
        multiline: true,
        ..Options::default()
    };

    options.apply_parameter("multiline=false,partial").unwrap();

    assert!(options.orig_name);
    assert!(!options.multiline);
    assert!(options.partial);
}

#![allow(non_snake_case)]

use super::*;

const CAMEL_CASE_SET: &str = r#"{
    "file": [{
        "name": "acme/user.proto",
        "package": "acme.users",
        "options": { "goPackage": "github.com/acme/users;userspb" },
        "messageType": [{
            "name": "User",
            "field": [{ "name": "id", "number": 1 }],
            "nestedType": [{
                "name": "LabelsEntry",
                "options": { "mapEntry": true }
            }]
        }],
        "enumType": [{ "name": "Role" }]
    }]
}"#;

#[test]
fn FileDescriptorSet___from_json___parses_camel_case_fields() {
    let set = FileDescriptorSet::from_json(CAMEL_CASE_SET.as_bytes()).unwrap();

    let file = &set.file[0];
    assert_eq!(file.name, "acme/user.proto");
    assert_eq!(file.proto_package(), Some("acme.users"));
    assert_eq!(file.go_package(), Some("github.com/acme/users;userspb"));
    assert_eq!(file.message_type[0].name, "User");
    assert_eq!(file.message_type[0].nested_type[0].name, "LabelsEntry");
    assert!(file.message_type[0].nested_type[0].is_map_entry());
}

#[test]
fn FileDescriptorSet___from_json___parses_snake_case_fields() {
    let json = r#"{
        "file": [{
            "name": "a.proto",
            "options": { "go_package": "example.com/a" },
            "message_type": [{
                "name": "Outer",
                "nested_type": [{ "name": "Inner", "options": { "map_entry": false } }]
            }]
        }]
    }"#;

    let set = FileDescriptorSet::from_json(json.as_bytes()).unwrap();

    let outer = &set.file[0].message_type[0];
    assert_eq!(set.file[0].go_package(), Some("example.com/a"));
    assert_eq!(outer.nested_type[0].name, "Inner");
    assert!(!outer.nested_type[0].is_map_entry());
}

#[test]
fn FileDescriptorSet___from_json___missing_lists_default_to_empty() {
    let json = r#"{ "file": [{ "name": "empty.proto" }] }"#;

    let set = FileDescriptorSet::from_json(json.as_bytes()).unwrap();

    assert!(set.file[0].message_type.is_empty());
    assert_eq!(set.file[0].proto_package(), None);
    assert_eq!(set.file[0].go_package(), None);
}

#[test]
fn FileDescriptorSet___from_json___rejects_malformed_input() {
    let result = FileDescriptorSet::from_json(b"{\"file\": [");

    assert!(matches!(result, Err(crate::GenError::Descriptor(_))));
}

#[test]
fn FileDescriptorSet___file_by_name___finds_file() {
    let set = FileDescriptorSet::from_json(CAMEL_CASE_SET.as_bytes()).unwrap();

    assert!(set.file_by_name("acme/user.proto").is_some());
    assert!(set.file_by_name("other.proto").is_none());
}

#[test]
fn FileDescriptorProto___go_package___treats_empty_as_unset() {
    let file = FileDescriptorProto {
        name: "a.proto".into(),
        package: Some(String::new()),
        options: Some(FileOptions {
            go_package: Some(String::new()),
        }),
        message_type: Vec::new(),
    };

    assert_eq!(file.go_package(), None);
    assert_eq!(file.proto_package(), None);
}

#[test]
fn FileDescriptorProto___name_prefix___strips_proto_extension() {
    let file = FileDescriptorProto {
        name: "acme/user.proto".into(),
        ..Default::default()
    };

    assert_eq!(file.name_prefix(), "acme/user");
}

#[test]
fn DescriptorProto___is_map_entry___false_without_options() {
    let message = DescriptorProto {
        name: "User".into(),
        ..Default::default()
    };

    assert!(!message.is_map_entry());
}

//! Protobuf descriptor input.
//!
//! A trimmed mirror of `google.protobuf.FileDescriptorSet` in its JSON form,
//! carrying only what the generator reads. Field names are accepted both in
//! the protobuf JSON spelling (`messageType`, `nestedType`, `mapEntry`,
//! `goPackage`) and in the original snake_case spelling. Fields that are not
//! modelled here (`field`, `enumType`, `service`, ...) are ignored.
//!
//! # Examples
//!
//! ```
//! use gojson_core::descriptor::FileDescriptorSet;
//!
//! let json = r#"{
//!     "file": [{
//!         "name": "user.proto",
//!         "package": "acme.users",
//!         "messageType": [{ "name": "User" }]
//!     }]
//! }"#;
//!
//! let set = FileDescriptorSet::from_json(json.as_bytes()).unwrap();
//! assert_eq!(set.file[0].message_type[0].name, "User");
//! ```

use crate::error::GenResult;
use serde::{Deserialize, Serialize};

/// A collection of file descriptors, as produced by `protoc --descriptor_set_out`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptorSet {
    #[serde(default)]
    pub file: Vec<FileDescriptorProto>,
}

/// One `.proto` compilation unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptorProto {
    /// Path of the file relative to the import root, e.g. `acme/user.proto`
    pub name: String,

    #[serde(default)]
    pub package: Option<String>,

    #[serde(default)]
    pub options: Option<FileOptions>,

    #[serde(default, alias = "message_type")]
    pub message_type: Vec<DescriptorProto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    #[serde(default, alias = "go_package")]
    pub go_package: Option<String>,
}

/// A message type declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorProto {
    pub name: String,

    #[serde(default, alias = "nested_type")]
    pub nested_type: Vec<DescriptorProto>,

    #[serde(default)]
    pub options: Option<MessageOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
    /// Set by protoc on the synthetic entry type backing a `map<K, V>` field
    #[serde(default, alias = "map_entry")]
    pub map_entry: Option<bool>,
}

impl FileDescriptorSet {
    /// Decode a descriptor set from its JSON form
    pub fn from_json(bytes: &[u8]) -> GenResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Look up a file by its `name`
    pub fn file_by_name(&self, name: &str) -> Option<&FileDescriptorProto> {
        self.file.iter().find(|f| f.name == name)
    }
}

impl FileDescriptorProto {
    /// The `go_package` file option, if set and non-empty
    pub fn go_package(&self) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|o| o.go_package.as_deref())
            .filter(|p| !p.is_empty())
    }

    /// The proto package, if set and non-empty
    pub fn proto_package(&self) -> Option<&str> {
        self.package.as_deref().filter(|p| !p.is_empty())
    }

    /// File name with the `.proto` extension removed
    pub fn name_prefix(&self) -> &str {
        self.name.strip_suffix(".proto").unwrap_or(&self.name)
    }
}

impl DescriptorProto {
    pub fn is_map_entry(&self) -> bool {
        self.options
            .as_ref()
            .and_then(|o| o.map_entry)
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "descriptor/descriptor_tests.rs"]
mod descriptor_tests;

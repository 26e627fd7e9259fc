//! Schema tree consumed by the generator

use crate::descriptor::{DescriptorProto, FileDescriptorProto};
use crate::naming;

/// One schema compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Schema file path, named in the generated banner
    pub name: String,

    /// Go package the generated code is declared in
    pub go_package_name: String,

    /// Top-level messages in declaration order
    pub messages: Vec<Message>,
}

/// One message type, possibly nesting further messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Go identifier of the generated type; receiver of the emitted methods
    pub go_name: String,

    /// Nested messages in declaration order
    pub messages: Vec<Message>,

    map_entry: bool,
}

impl File {
    pub fn new(name: impl Into<String>, go_package_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            go_package_name: go_package_name.into(),
            messages: Vec::new(),
        }
    }

    /// Append a top-level message
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Resolve a descriptor into the generator's view of the file
    pub fn from_descriptor(file: &FileDescriptorProto) -> Self {
        Self {
            name: file.name.clone(),
            go_package_name: naming::go_package_name(file),
            messages: file
                .message_type
                .iter()
                .map(|m| Message::from_descriptor(m, None))
                .collect(),
        }
    }
}

impl Message {
    pub fn new(go_name: impl Into<String>) -> Self {
        Self {
            go_name: go_name.into(),
            messages: Vec::new(),
            map_entry: false,
        }
    }

    /// A synthetic key/value entry type backing a map field
    pub fn map_entry(go_name: impl Into<String>) -> Self {
        Self {
            map_entry: true,
            ..Self::new(go_name)
        }
    }

    /// Append a nested message
    pub fn with_nested(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn is_map_entry(&self) -> bool {
        self.map_entry
    }

    // `parent` is the dotted name relative to the file package
    fn from_descriptor(message: &DescriptorProto, parent: Option<&str>) -> Self {
        let relative_name = match parent {
            Some(parent) => format!("{parent}.{}", message.name),
            None => message.name.clone(),
        };

        Self {
            go_name: naming::go_camel_case(&relative_name),
            messages: message
                .nested_type
                .iter()
                .map(|nested| Message::from_descriptor(nested, Some(&relative_name)))
                .collect(),
            map_entry: message.is_map_entry(),
        }
    }
}

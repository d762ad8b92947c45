//! Message descriptors.

use crate::proto::enums::Enum;
use crate::proto::field::Field;

/// A parsed message definition.
///
/// `oneof` members are flattened into ordinary fields (wire-compatible:
/// oneof is a presence constraint, not an encoding).
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Simple (unqualified) message name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Messages declared inside this one.
    pub nested_messages: Vec<Message>,
    /// Enums declared inside this one.
    pub nested_enums: Vec<Enum>,
}

impl Message {
    /// Look a field up by wire number.
    pub fn field_by_number(&self, number: u32) -> Option<&Field> {
        self.fields.iter().find(|f| f.number == number)
    }

    /// Look a field up by its canonical (lowerCamelCase) name.
    pub fn field_by_json_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.json_name == name)
    }

    /// Find a directly nested message by name.
    pub fn nested_message(&self, name: &str) -> Option<&Message> {
        self.nested_messages.iter().find(|m| m.name == name)
    }

    /// Find a directly nested enum by name.
    pub fn nested_enum(&self, name: &str) -> Option<&Enum> {
        self.nested_enums.iter().find(|e| e.name == name)
    }
}

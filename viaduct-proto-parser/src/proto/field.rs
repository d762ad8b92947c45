//! Field descriptors.

use crate::proto::ty::{Scalar, Ty};

/// Cardinality of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    /// Plain singular field (proto3 `optional` collapses to this too).
    Single,
    /// `repeated` field.
    Repeated,
    /// `map<K, V>` field; the key scalar is carried here, the value type
    /// is the field's `ty`.
    Map(Scalar),
}

/// One field of a message.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// Declared (snake_case) name.
    pub name: String,
    /// Derived lowerCamelCase name used by the canonical form.
    pub json_name: String,
    /// Wire field number.
    pub number: u32,
    /// Value type.
    pub ty: Ty,
    /// Cardinality.
    pub label: Label,
}

impl Field {
    pub(crate) fn new(name: String, number: u32, ty: Ty, label: Label) -> Self {
        let json_name = camel_case(&name);
        Self { name, json_name, number, ty, label }
    }
}

/// `foo_bar_1` → `fooBar1`: drop underscores, upper-case the letter that
/// follows each one.
pub(crate) fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::camel_case;

    #[test]
    fn camel_case_matches_json_mapping() {
        assert_eq!(camel_case("client_rand_key"), "clientRandKey");
        assert_eq!(camel_case("uid"), "uid");
        assert_eq!(camel_case("field_1"), "field1");
        assert_eq!(camel_case("is_force_set"), "isForceSet");
    }
}

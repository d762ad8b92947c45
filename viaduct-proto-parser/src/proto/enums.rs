//! Enum descriptors.

/// A parsed enum definition. Values are kept in declaration order and may
/// alias (`option allow_alias`).
#[derive(Clone, Debug, PartialEq)]
pub struct Enum {
    /// Simple enum name.
    pub name: String,
    /// `(name, value)` pairs.
    pub values: Vec<(String, i32)>,
}

impl Enum {
    /// Numeric value for a symbolic name.
    pub fn value(&self, name: &str) -> Option<i32> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }
}

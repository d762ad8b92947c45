//! Field type descriptors.

/// A proto3 scalar type.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scalar {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl Scalar {
    /// Map a type keyword onto a scalar, or `None` for message/enum names.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "double" => Self::Double,
            "float" => Self::Float,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "sint32" => Self::Sint32,
            "sint64" => Self::Sint64,
            "fixed32" => Self::Fixed32,
            "fixed64" => Self::Fixed64,
            "sfixed32" => Self::Sfixed32,
            "sfixed64" => Self::Sfixed64,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            _ => return None,
        })
    }
}

/// The type of a field: a scalar, or a reference to a message/enum by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ty {
    /// Built-in scalar.
    Scalar(Scalar),
    /// Named message or enum; qualifiers are stripped to the last segment
    /// since every referenced type resolves by simple name.
    Named(String),
}

impl Ty {
    pub(crate) fn parse(word: &str) -> Self {
        match Scalar::from_keyword(word) {
            Some(s) => Self::Scalar(s),
            None => {
                let last = word.rsplit('.').next().unwrap_or(word);
                Self::Named(last.to_owned())
            }
        }
    }
}

//! Schema-driven message translation support.
//!
//! This crate turns the per-version schema directories into runtime
//! structures:
//! - a descriptor-driven wire codec between binary bodies and a canonical
//!   JSON tree (field identity by name, enums as integers, bytes as
//!   base64),
//! - the [`Mapping`] registry with per-version command tables and the
//!   derived cross-version pair tables,
//! - the static ability/combat argument tables.

#![deny(unsafe_code)]

mod decode;
mod encode;
mod registry;
pub mod tables;
mod wire;

pub use registry::Mapping;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use viaduct_proto_parser::errors::ParseError;

/// A protocol version tag, e.g. `"v3.2.0"`.
///
/// Versions are opaque identifiers: nothing orders or parses them, they
/// only key tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protocol(pub String);

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Protocol {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ─── Codec errors ─────────────────────────────────────────────────────────────

/// Errors from the dynamic wire codec.
#[derive(Clone, Debug, PartialEq)]
pub enum CodecError {
    /// Ran out of bytes mid-value.
    Truncated,
    /// A tag carried wire type 6 or 7, or a stray end-group.
    InvalidWireType(u8),
    /// A named field type is not in the descriptor pool.
    UnresolvedType(String),
    /// Wire data or canonical value does not fit the declared field type.
    Mismatch {
        /// Declared field name.
        field: String,
        /// What went wrong.
        reason: &'static str,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "unexpected end of buffer"),
            Self::InvalidWireType(t) => write!(f, "invalid wire type {t}"),
            Self::UnresolvedType(name) => write!(f, "unresolved type {name}"),
            Self::Mismatch { field, reason } => write!(f, "field {field}: {reason}"),
        }
    }
}

impl std::error::Error for CodecError {}

// ─── Registry errors ──────────────────────────────────────────────────────────

/// Errors from loading or using the schema registry.
#[derive(Debug)]
pub enum RegistryError {
    /// A schema directory or file could not be read.
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A schema file failed to parse.
    Schema {
        /// File name relative to the protocol directory.
        file: String,
        /// The parse failure.
        source: ParseError,
    },
    /// Two csv rows claim the same message name.
    DuplicateCommand {
        /// Version the csv belongs to.
        protocol: Protocol,
        /// The clashing name.
        name: String,
    },
    /// A version tag has no configured schema directory.
    UnknownVersion(Protocol),
    /// The version has no schema for this message name.
    UnknownMessage {
        /// Version that was asked.
        protocol: Protocol,
        /// The missing name.
        name: String,
    },
    /// Decode/encode failure inside a known schema.
    Codec {
        /// The message being converted.
        message: String,
        /// The codec failure.
        source: CodecError,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Schema { file, source } => write!(f, "{file}: {source}"),
            Self::DuplicateCommand { protocol, name } => {
                write!(f, "duplicate command {name} in {protocol}")
            }
            Self::UnknownVersion(p) => write!(f, "unknown protocol version {p}"),
            Self::UnknownMessage { protocol, name } => {
                write!(f, "unknown message {name} in {protocol}")
            }
            Self::Codec { message, source } => write!(f, "{message}: {source}"),
        }
    }
}

impl std::error::Error for RegistryError {}

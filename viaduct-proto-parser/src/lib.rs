//! Parser for the per-message proto3 schema files.
//!
//! Each protocol version ships a directory of schema files, one per
//! message name. This crate converts a file's text into structured
//! [`proto::Message`] / [`proto::Enum`] descriptors which the dynamic
//! codec resolves against at runtime.
//!
//! # Quick start
//!
//! ```rust
//! use viaduct_proto_parser::parse_proto_file;
//!
//! let src = r#"
//!     syntax = "proto3";
//!     message PingReq { uint32 client_time = 1; }
//! "#;
//! let file = parse_proto_file(src).unwrap();
//! assert_eq!(file.messages[0].name, "PingReq");
//! ```
//!
//! Only the subset the schema directories actually use is supported;
//! anything else is a hard [`errors::ParseError`] — schema files are
//! trusted start-up inputs, so failing loudly beats decoding garbage.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod proto;
mod lexer;
mod parser;

use errors::ParseError;
use proto::{Enum, Message};

/// Everything parsed out of one schema file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProtoFile {
    /// Imported file stems (`"Vector.proto"` → `"Vector"`).
    pub imports: Vec<String>,
    /// Top-level messages.
    pub messages: Vec<Message>,
    /// Top-level enums.
    pub enums: Vec<Enum>,
}

/// Parse a complete schema file.
pub fn parse_proto_file(contents: &str) -> Result<ProtoFile, ParseError> {
    parser::Parser::new(contents).parse_file()
}

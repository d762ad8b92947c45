//! # viaduct-proxy
//!
//! The intercepting, protocol-version-translating proxy: terminates the
//! client's reliable session, dials the upstream, and rewrites every
//! framed packet between the two protocol versions.
//!
//! Pipeline per direction:
//! reliable payload → trial decrypt → frame parse → schema-driven
//! translation (with per-name handlers) → re-frame → encrypt → reliable
//! send.

#![deny(unsafe_code)]

pub mod config;
pub mod errors;

mod console;
mod frame;
mod handlers;
mod keys;
mod packet;
mod server;

pub use config::Config;
pub use errors::{ConfigError, ConsoleError, ConvertError, FrameError, ProxyError};
pub use keys::Keys;
pub use server::Service;

//! Error types for the proxy.

use std::fmt;
use std::path::PathBuf;

use viaduct_crypto::CryptoError;
use viaduct_kcp::TransportError;
use viaduct_proto::RegistryError;

// ─── FrameError ───────────────────────────────────────────────────────────────

/// A framed packet failed to parse. Per-frame: the frame is dropped and
/// the session stays up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer than the 12 fixed bytes.
    TooShort,
    /// Head or tail magic missing (also the trial-decrypt failure case).
    BadMagic,
    /// `total != 12 + head_len + body_len`.
    LengthMismatch,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "packet too short"),
            Self::BadMagic => write!(f, "invalid payload magic"),
            Self::LengthMismatch => write!(f, "invalid packet length"),
        }
    }
}
impl std::error::Error for FrameError {}

// ─── ConsoleError ─────────────────────────────────────────────────────────────

/// A console RPC failed. Surfaced as injected chat text, never fatal.
#[derive(Debug)]
pub enum ConsoleError {
    /// The console feature is not enabled in the configuration.
    Disabled,
    /// Transport-level HTTP failure.
    Http(reqwest::Error),
    /// Non-200 response status.
    Status(u16),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "console is disabled"),
            Self::Http(e) => write!(f, "{e}"),
            Self::Status(code) => write!(f, "unexpected status code: {code}"),
        }
    }
}
impl std::error::Error for ConsoleError {}

impl From<reqwest::Error> for ConsoleError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ─── ConvertError ─────────────────────────────────────────────────────────────

/// A frame could not be translated. Per-frame: drop and log — except
/// [`ConvertError::Injected`], the in-band drop-forward marker.
#[derive(Debug)]
pub enum ConvertError {
    /// A handler dispatched replacement frames; swallow the original.
    /// Not an operator-facing error.
    Injected,
    /// Bad framing.
    Frame(FrameError),
    /// The source version has no name for this command id.
    UnknownCommand(u16),
    /// The destination has no id for this message name.
    UnknownName(String),
    /// A field the handler relies on was absent or mistyped.
    MissingField(&'static str),
    /// Schema lookup or codec failure.
    Registry(RegistryError),
    /// RSA failure inside a token handler.
    Crypto(CryptoError),
    /// The console RPC failed out of a handler that cannot absorb it.
    Console(ConsoleError),
    /// Canonical-form (de)serialization failure inside a handler.
    Json(serde_json::Error),
    /// The reliable layer refused the outgoing payload.
    Transport(TransportError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Injected => write!(f, "frame injected"),
            Self::Frame(e) => write!(f, "{e}"),
            Self::UnknownCommand(id) => write!(f, "unknown command {id}"),
            Self::UnknownName(name) => write!(f, "unknown message name {name}"),
            Self::MissingField(name) => write!(f, "missing field {name}"),
            Self::Registry(e) => write!(f, "{e}"),
            Self::Crypto(e) => write!(f, "{e}"),
            Self::Console(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "{e}"),
            Self::Transport(e) => write!(f, "{e}"),
        }
    }
}
impl std::error::Error for ConvertError {}

impl From<FrameError> for ConvertError {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}
impl From<RegistryError> for ConvertError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}
impl From<CryptoError> for ConvertError {
    fn from(e: CryptoError) -> Self {
        Self::Crypto(e)
    }
}
impl From<serde_json::Error> for ConvertError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
impl From<TransportError> for ConvertError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

// ─── ConfigError ──────────────────────────────────────────────────────────────

/// Configuration loading failed. Fatal at start-up.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(PathBuf, std::io::Error),
    /// The file is not valid JSON for the expected shape.
    Json(serde_json::Error),
    /// A mandatory section is absent.
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "{}: {e}", path.display()),
            Self::Json(e) => write!(f, "invalid config: {e}"),
            Self::Missing(section) => write!(f, "no {section} configured"),
        }
    }
}
impl std::error::Error for ConfigError {}

// ─── ProxyError ───────────────────────────────────────────────────────────────

/// Fatal-to-process failures: bad config, bad key material, unreadable
/// schemas, listen failure.
#[derive(Debug)]
pub enum ProxyError {
    Config(ConfigError),
    Crypto(CryptoError),
    Registry(RegistryError),
    Transport(TransportError),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Crypto(e) => write!(f, "keys: {e}"),
            Self::Registry(e) => write!(f, "protocols: {e}"),
            Self::Transport(e) => write!(f, "transport: {e}"),
        }
    }
}
impl std::error::Error for ProxyError {}

impl From<ConfigError> for ProxyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<CryptoError> for ProxyError {
    fn from(e: CryptoError) -> Self {
        Self::Crypto(e)
    }
}
impl From<RegistryError> for ProxyError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}
impl From<TransportError> for ProxyError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

//! Reliable-UDP transport for the viaduct proxy.
//!
//! A KCP-flavored ARQ protocol: ordered reliable delivery of
//! variable-length payloads over unreliable datagrams. This crate
//! provides:
//! * [`ControlBlock`] — the per-session ARQ state machine
//! * segment and control-datagram codecs
//! * [`Session`] — one reliable endpoint bound to a UDP socket
//! * [`Listener`] / [`dial`] — the accept and connect fronts
//!
//! The state machine is synchronous and lock-guarded; sockets, tickers and
//! channels around it are tokio tasks.

#![deny(unsafe_code)]

mod clock;
mod control_block;
mod payload;
mod pool;
mod segment;
mod session;
mod session_manager;
mod socket;

pub use control_block::ControlBlock;
pub use payload::Payload;
pub use session::{DisconnectReason, Session};
pub use socket::{dial, Listener};

use std::fmt;

/// Default MTU of the underlying datagram path.
pub const DEFAULT_MTU: usize = 1500;

/// Errors from the transport layer.
#[derive(Debug)]
pub enum TransportError {
    /// A datagram was neither a control datagram nor a segment.
    InvalidPacket,
    /// A segment carried a conv id that is not this session's.
    ConvMismatch,
    /// A segment carried a session id that is not this session's.
    SessionMismatch,
    /// A segment declared more body bytes than the datagram holds.
    Truncated,
    /// A segment carried an unknown command byte.
    InvalidCommand,
    /// The payload would need more than 255 fragments.
    SendTooLarge,
    /// No session matches the datagram's ids.
    SessionNotFound,
    /// The session (or listener) has been closed.
    Closed,
    /// Socket-level failure.
    Io(std::io::Error),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPacket => write!(f, "invalid packet"),
            Self::ConvMismatch => write!(f, "conv id mismatch"),
            Self::SessionMismatch => write!(f, "session id mismatch"),
            Self::Truncated => write!(f, "segment truncated"),
            Self::InvalidCommand => write!(f, "invalid segment command"),
            Self::SendTooLarge => write!(f, "payload exceeds fragment limit"),
            Self::SessionNotFound => write!(f, "session not found"),
            Self::Closed => write!(f, "session closed"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

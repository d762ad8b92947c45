//! Cryptographic primitives for the viaduct transport.
//!
//! Provides:
//! - MT19937-64 — the PRNG every keystream is expanded from
//! - `KeyBlock` — the 4096-byte post-login XOR pad
//! - `Ec2b` — shared-key blob parsing and pad derivation
//! - RSA PKCS#1 key wrappers for the token exchange

#![deny(unsafe_code)]

mod aes_tables;
mod ec2b;
mod key_block;
pub mod mt19937;
pub mod rsa;

pub use ec2b::Ec2b;
pub use key_block::KeyBlock;
pub use mt19937::Mt19937_64;
pub use rsa::{PrivateKey, PublicKey};

/// Errors from key parsing and RSA operations.
#[derive(Debug)]
pub enum CryptoError {
    /// A key blob, PEM block or base64 payload was malformed.
    InvalidKeyMaterial,
    /// The RSA primitive itself failed (bad padding, wrong key, ...).
    Rsa(::rsa::Error),
}

impl std::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKeyMaterial => write!(f, "invalid key material"),
            Self::Rsa(e) => write!(f, "rsa: {e}"),
        }
    }
}
impl std::error::Error for CryptoError {}

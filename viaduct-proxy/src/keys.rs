//! Start-up key material.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use viaduct_crypto::{CryptoError, Ec2b, PrivateKey};

use crate::config::ConfigKeys;

/// All key material, loaded once at start-up. Any malformed component is
/// fatal.
pub struct Keys {
    /// The pre-login XOR pad, derived from the Ec2b blob.
    pub shared_key: Ec2b,
    /// Decrypts the client's `clientRandKey` seed.
    pub server_key: PrivateKey,
    /// Key id → key decrypting the server's `serverRandKey` seed.
    pub client_keys: HashMap<u32, PrivateKey>,
}

impl Keys {
    pub fn from_config(config: &ConfigKeys) -> Result<Self, CryptoError> {
        let blob = BASE64
            .decode(&config.shared_key)
            .map_err(|_| CryptoError::InvalidKeyMaterial)?;
        let shared_key = Ec2b::load(&blob)?;
        let server_key = PrivateKey::from_pem(&config.server_key)?;

        let mut client_keys = HashMap::new();
        for (id, pem) in &config.client_keys {
            client_keys.insert(*id, PrivateKey::from_pem(pem)?);
        }
        Ok(Self { shared_key, server_key, client_keys })
    }
}

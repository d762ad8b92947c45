//! Token-exchange handlers: the two messages the login pad is derived
//! from.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use viaduct_crypto::{CryptoError, KeyBlock};

use crate::errors::ConvertError;
use crate::packet::required_str;
use crate::server::Session;

impl Session {
    /// Capture the client's login nonce from `clientRandKey`.
    pub(super) fn on_get_player_token_req(&self, value: Value) -> Result<Value, ConvertError> {
        let rand_key = required_str(&value, "clientRandKey")?;
        let seed = self.service().keys.server_key.decrypt_base64(rand_key)?;
        let seed: [u8; 8] = seed
            .get(..8)
            .and_then(|s| s.try_into().ok())
            .ok_or(ConvertError::Crypto(CryptoError::InvalidKeyMaterial))?;

        let mut state = self.state.lock().expect("session state poisoned");
        state.login_rand = u64::from_be_bytes(seed);
        Ok(value)
    }

    /// Capture the player uid and install the login pad from the server's
    /// nonce. Runs strictly after the req handler on the other direction,
    /// so both halves of the seed are known here.
    pub(super) fn on_get_player_token_rsp(&self, value: Value) -> Result<Value, ConvertError> {
        let uid = value.get("uid").and_then(Value::as_u64).unwrap_or(0) as u32;
        let key_id = value.get("keyId").and_then(Value::as_u64).unwrap_or(0) as u32;
        let rand_key = required_str(&value, "serverRandKey")?;

        let client_key = self
            .service()
            .keys
            .client_keys
            .get(&key_id)
            .ok_or(ConvertError::MissingField("keyId"))?;
        let seed = client_key.decrypt_base64(rand_key)?;
        let seed: [u8; 8] = seed
            .get(..8)
            .and_then(|s| s.try_into().ok())
            .ok_or(ConvertError::Crypto(CryptoError::InvalidKeyMaterial))?;
        let server_seed = u64::from_be_bytes(seed);

        let mut state = self.state.lock().expect("session state poisoned");
        state.player_uid = uid;
        state.login_key = Some(Arc::new(KeyBlock::new(state.login_rand ^ server_seed)));
        debug!(uid, "login key installed");
        Ok(value)
    }
}

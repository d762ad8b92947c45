//! Structured-body translation between protocol versions.

use serde_json::Value;
use tracing::trace;

use crate::errors::ConvertError;
use crate::server::{Direction, Session};

impl Session {
    /// Convert one message body from the direction's source schema to its
    /// target schema, running the per-name handler in between.
    ///
    /// `Ok(None)` means a handler injected frames and the original must
    /// not be forwarded.
    pub(crate) async fn convert_packet(
        &self,
        direction: Direction,
        name: &str,
        head: &[u8],
        body: &[u8],
    ) -> Result<Option<Vec<u8>>, ConvertError> {
        let from = self.from_version(direction);
        let to = self.to_version(direction);
        let mapping = &self.service().mapping;

        let value = mapping.decode(from, name, body)?;
        let value = match self.handle_packet(direction, name, head, value).await {
            Ok(value) => value,
            Err(ConvertError::Injected) => return Ok(None),
            Err(e) => return Err(e),
        };
        trace!(%from, %to, name, "packet converted");

        // Encode under the target schema, then decode-encode once more so
        // the output is the target's canonical encoding regardless of
        // field-order or default-value drift between versions.
        let bytes = mapping.encode(to, name, &value)?;
        let value = mapping.decode(to, name, &bytes)?;
        Ok(Some(mapping.encode(to, name, &value)?))
    }

    /// Like [`Session::convert_packet`] but for nested bodies addressed by
    /// name (union commands, ability/combat invocation payloads).
    pub(crate) async fn convert_packet_by_name(
        &self,
        direction: Direction,
        name: &str,
        body: &[u8],
    ) -> Result<Vec<u8>, ConvertError> {
        let from = self.from_version(direction);
        let to = self.to_version(direction);
        let mapping = &self.service().mapping;

        let value = mapping.decode(from, name, body)?;
        // Box the recursive hop: nested bodies can carry handled messages.
        let value =
            Box::pin(self.handle_packet(direction, name, &[], value)).await?;
        trace!(%from, %to, name, "nested packet converted");

        let bytes = mapping.encode(to, name, &value)?;
        let value = mapping.decode(to, name, &bytes)?;
        Ok(mapping.encode(to, name, &value)?)
    }
}

/// Unix time as the chat wire wants it.
pub(crate) fn unix_now() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

/// Fetch a required string field out of a canonical-form object.
pub(crate) fn required_str<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a str, ConvertError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or(ConvertError::MissingField(field))
}

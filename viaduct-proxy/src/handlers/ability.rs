//! Ability invocation handlers.
//!
//! `ClientAbilityChangeNotify` and `AbilityInvocationsNotify` both carry a
//! list of invocations whose `abilityData` field holds the binary body of
//! another message, selected by `argumentType`. Each such body is
//! translated in place; invocations with an unknown argument type or an
//! untranslatable body are dropped from the list.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::Value;
use tracing::debug;
use viaduct_proto::tables;

use crate::errors::ConvertError;
use crate::server::{Direction, Session};

impl Session {
    pub(super) async fn on_ability_invokes(
        &self,
        direction: Direction,
        mut value: Value,
    ) -> Result<Value, ConvertError> {
        let Some(invokes) = value.get_mut("invokes").and_then(Value::as_array_mut) else {
            return Ok(value);
        };
        let entries = std::mem::take(invokes);

        let mut kept = Vec::with_capacity(entries.len());
        for mut invoke in entries {
            match self
                .translate_opaque(
                    direction,
                    &mut invoke,
                    "abilityData",
                    "argumentType",
                    tables::ability_argument_message,
                )
                .await
            {
                Ok(()) => kept.push(invoke),
                Err(e) => debug!("dropping ability invoke: {e}"),
            }
        }
        value["invokes"] = Value::Array(kept);
        Ok(value)
    }

    /// Translate the opaque sub-body of one invocation entry in place.
    pub(super) async fn translate_opaque(
        &self,
        direction: Direction,
        entry: &mut Value,
        data_field: &str,
        type_field: &str,
        table: fn(u32) -> Option<&'static str>,
    ) -> Result<(), ConvertError> {
        let data = entry.get(data_field).and_then(Value::as_str).unwrap_or("");
        if data.is_empty() {
            return Ok(());
        }
        let argument_type = entry
            .get(type_field)
            .and_then(Value::as_u64)
            .unwrap_or(0) as u32;
        let name = table(argument_type).ok_or(ConvertError::MissingField("argumentType"))?;

        let body = BASE64
            .decode(data)
            .map_err(|_| ConvertError::MissingField(
                "invocation data is not valid base64",
            ))?;
        let converted = self.convert_packet_by_name(direction, name, &body).await?;
        entry[data_field] = Value::from(BASE64.encode(converted));
        Ok(())
    }
}

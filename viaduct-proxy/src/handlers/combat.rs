//! Combat invocation handler, the same shape as the ability ones but
//! keyed by `CombatArgumentType` over the `invokeList` field.

use serde_json::Value;
use tracing::debug;
use viaduct_proto::tables;

use crate::errors::ConvertError;
use crate::server::{Direction, Session};

impl Session {
    pub(super) async fn on_combat_invocations(
        &self,
        direction: Direction,
        mut value: Value,
    ) -> Result<Value, ConvertError> {
        let Some(invokes) = value.get_mut("invokeList").and_then(Value::as_array_mut) else {
            return Ok(value);
        };
        let entries = std::mem::take(invokes);

        let mut kept = Vec::with_capacity(entries.len());
        for mut invoke in entries {
            match self
                .translate_opaque(
                    direction,
                    &mut invoke,
                    "combatData",
                    "argumentType",
                    tables::combat_argument_message,
                )
                .await
            {
                Ok(()) => kept.push(invoke),
                Err(e) => debug!("dropping combat invoke: {e}"),
            }
        }
        value["invokeList"] = Value::Array(kept);
        Ok(value)
    }
}

//! Map-mark teleporting and game-time rewriting.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::console::CONSOLE_EXECUTE_CMD;
use crate::errors::ConvertError;
use crate::server::Session;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Vector {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MapMarkPoint {
    name: String,
    pos: Option<Vector>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MarkMapReq {
    mark: Option<MapMarkPoint>,
}

/// Cached so the matching upstream rsp can be rewritten back.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ClientSetGameTimeReq {
    pub(crate) is_force_set: bool,
    pub(crate) game_time: u32,
    pub(crate) client_game_time: u32,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangeGameTimeReq {
    is_force_set: bool,
    game_time: u32,
    extra_days: u32,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientSetGameTimeRsp {
    retcode: i32,
    game_time: u32,
    client_game_time: u32,
}

impl Session {
    /// A map mark named "goto" is a teleport request: dispatch it through
    /// the console and swallow the mark itself.
    pub(super) async fn on_mark_map_req(&self, value: Value) -> Result<Value, ConvertError> {
        let req: MarkMapReq = serde_json::from_value(value.clone())?;
        let Some(mark) = req.mark else { return Ok(value) };
        let Some(mut pos) = mark.pos else { return Ok(value) };
        if mark.name != "goto" {
            return Ok(value);
        }
        if pos.y == 0.0 {
            // Marks are placed on the 2D map; drop in from high up.
            pos.y = 500.0;
        }

        let uid = self.state.lock().expect("session state poisoned").player_uid;
        debug!(uid, "goto {} {} {}", pos.x, pos.y, pos.z);
        self.service()
            .console
            .execute(
                CONSOLE_EXECUTE_CMD,
                uid,
                &format!("goto {} {} {}", pos.x, pos.y, pos.z),
            )
            .await
            .map_err(ConvertError::Console)?;
        Err(ConvertError::Injected)
    }

    /// The upstream only understands `ChangeGameTimeReq`; rewrite the
    /// client's request into one and remember it for the reply.
    pub(super) fn on_client_set_game_time_req(
        &self,
        head: &[u8],
        value: Value,
    ) -> Result<Value, ConvertError> {
        let req: ClientSetGameTimeReq = serde_json::from_value(value)?;
        let out = ChangeGameTimeReq {
            is_force_set: req.is_force_set,
            game_time: req.game_time % 1440,
            extra_days: req.game_time.wrapping_sub(req.client_game_time) / 1440,
        };
        self.state
            .lock()
            .expect("session state poisoned")
            .cached_set_game_time = Some(req);

        debug!("rewriting ClientSetGameTimeReq to ChangeGameTimeReq");
        self.inject_to_upstream("ChangeGameTimeReq", head, &serde_json::to_value(out)?)?;
        Err(ConvertError::Injected)
    }

    /// Answer the cached `ClientSetGameTimeReq` from the upstream's
    /// `ChangeGameTimeRsp`.
    pub(super) fn on_change_game_time_rsp(
        &self,
        head: &[u8],
        value: Value,
    ) -> Result<Value, ConvertError> {
        let cached = self
            .state
            .lock()
            .expect("session state poisoned")
            .cached_set_game_time
            .take();
        let Some(cached) = cached else { return Ok(value) };

        let out = ClientSetGameTimeRsp {
            retcode: 0,
            game_time: cached.game_time,
            client_game_time: cached.client_game_time,
        };
        debug!("rewriting ChangeGameTimeRsp to ClientSetGameTimeRsp");
        self.inject_to_client("ClientSetGameTimeRsp", head, &serde_json::to_value(out)?)?;
        Err(ConvertError::Injected)
    }
}

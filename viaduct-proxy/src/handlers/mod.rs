//! Per-message translation hooks.
//!
//! Dispatch is a match over the symbolic message name with a pass-through
//! default. A handler returns the (possibly rewritten) canonical form to
//! forward, or [`ConvertError::Injected`] after dispatching replacement
//! frames itself.

mod ability;
mod chat;
mod combat;
mod engine;
mod login;
mod social;

pub(crate) use engine::ClientSetGameTimeReq;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConvertError;
use crate::server::{Direction, Session};

impl Session {
    pub(crate) async fn handle_packet(
        &self,
        direction: Direction,
        name: &str,
        head: &[u8],
        value: Value,
    ) -> Result<Value, ConvertError> {
        match name {
            "GetPlayerTokenReq" => return self.on_get_player_token_req(value),
            "GetPlayerTokenRsp" => return self.on_get_player_token_rsp(value),
            "UnionCmdNotify" => return self.on_union_cmd_notify(direction, value).await,
            "ClientAbilityChangeNotify" | "AbilityInvocationsNotify" => {
                return self.on_ability_invokes(direction, value).await
            }
            "CombatInvocationsNotify" => {
                return self.on_combat_invocations(direction, value).await
            }
            _ => {}
        }
        if !self.service().console.enabled() {
            return Ok(value);
        }
        match name {
            "GetPlayerFriendListRsp" => self.on_get_player_friend_list_rsp(value),
            "PrivateChatReq" => self.on_private_chat_req(head, value).await,
            "PrivateChatRsp" => self.on_private_chat_rsp(value),
            "PullPrivateChatReq" => self.on_pull_private_chat_req(value),
            "PullPrivateChatRsp" => self.on_pull_private_chat_rsp(value),
            "PullRecentChatReq" => self.on_pull_recent_chat_req(value),
            "PullRecentChatRsp" => self.on_pull_recent_chat_rsp(value),
            "MarkMapReq" => self.on_mark_map_req(value).await,
            "ClientSetGameTimeReq" => self.on_client_set_game_time_req(head, value),
            "ChangeGameTimeRsp" => self.on_change_game_time_rsp(head, value),
            _ => Ok(value),
        }
    }

    /// Rewrite the nested command list of a `UnionCmdNotify`: map every
    /// `messageId` through the pair table and translate the embedded body
    /// by its name. Any untranslatable entry fails the whole frame.
    async fn on_union_cmd_notify(
        &self,
        direction: Direction,
        value: Value,
    ) -> Result<Value, ConvertError> {
        let mut notify: UnionCmdNotify = serde_json::from_value(value)?;
        let from = self.from_version(direction);
        let to = self.to_version(direction);
        let mapping = &self.service().mapping;

        for cmd in &mut notify.cmd_list {
            let name = mapping
                .command_name(from, cmd.message_id)
                .ok_or(ConvertError::UnknownCommand(cmd.message_id))?
                .to_owned();
            cmd.message_id = mapping
                .pair(from, to, cmd.message_id)
                .ok_or(ConvertError::UnknownCommand(cmd.message_id))?;
            let body = BASE64
                .decode(&cmd.body)
                .map_err(|_| ConvertError::MissingField("body"))?;
            let converted = self.convert_packet_by_name(direction, &name, &body).await?;
            cmd.body = BASE64.encode(converted);
        }
        Ok(serde_json::to_value(notify)?)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct UnionCmdNotify {
    cmd_list: Vec<UnionCmd>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct UnionCmd {
    message_id: u16,
    /// Base64, as bytes fields appear in the canonical form.
    body: String,
}

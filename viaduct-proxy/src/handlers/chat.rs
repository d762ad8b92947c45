//! Console chat handlers.
//!
//! The console appears to the player as a friend they can message; chat
//! requests addressed to it are executed through the administrative RPC
//! and answered with injected chat frames.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::console::{CONSOLE_EXECUTE_CMD, CONSOLE_UID, CONSOLE_WELCOME_TEXT};
use crate::errors::ConvertError;
use crate::packet::unix_now;
use crate::server::Session;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct ChatInfo {
    pub(super) time: u32,
    pub(super) to_uid: u32,
    pub(super) uid: u32,
    pub(super) text: String,
    pub(super) icon: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PrivateChatNotify {
    chat_info: ChatInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PrivateChatReq {
    target_uid: u32,
    text: String,
    icon: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PullPrivateChatReq {
    target_uid: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PullRecentChatReq {
    begin_sequence: u32,
}

impl Session {
    fn notify_private_chat(&self, head: &[u8], chat_info: ChatInfo) -> Result<(), ConvertError> {
        let notify = PrivateChatNotify { chat_info };
        debug!("injecting PrivateChatNotify");
        self.inject_to_client(
            "PrivateChatNotify",
            head,
            &serde_json::to_value(notify)?,
        )
    }

    /// Chat sent to the console uid: mirror it back, execute the text,
    /// answer with the result, and swallow the original.
    pub(super) async fn on_private_chat_req(
        &self,
        head: &[u8],
        value: Value,
    ) -> Result<Value, ConvertError> {
        let req: PrivateChatReq = serde_json::from_value(value.clone())?;
        let addressed = req.target_uid == CONSOLE_UID;
        let uid = {
            let mut state = self.state.lock().expect("session state poisoned");
            state.inject_private_chat = addressed;
            state.player_uid
        };
        if !addressed {
            return Ok(value);
        }

        self.notify_private_chat(
            head,
            ChatInfo {
                time: unix_now(),
                to_uid: CONSOLE_UID,
                uid,
                text: req.text.clone(),
                icon: req.icon,
            },
        )?;
        if req.text.is_empty() {
            return Ok(value);
        }

        let reply = match self
            .service()
            .console
            .execute(CONSOLE_EXECUTE_CMD, uid, &req.text)
            .await
        {
            Ok(text) => text,
            Err(e) => format!("Failed to execute command: {e}"),
        };
        self.notify_private_chat(
            head,
            ChatInfo {
                time: unix_now(),
                to_uid: uid,
                uid: CONSOLE_UID,
                text: reply,
                icon: 0,
            },
        )?;

        debug!("injecting PrivateChatRsp");
        self.inject_to_client("PrivateChatRsp", head, &Value::Object(Default::default()))?;
        Err(ConvertError::Injected)
    }

    /// Clear the forbidden-retcode on the rsp matching a console chat.
    pub(super) fn on_private_chat_rsp(&self, mut value: Value) -> Result<Value, ConvertError> {
        let mut state = self.state.lock().expect("session state poisoned");
        if !state.inject_private_chat {
            return Ok(value);
        }
        state.inject_private_chat = false;
        drop(state);

        if let Some(obj) = value.as_object_mut() {
            obj.remove("retcode");
        }
        Ok(value)
    }

    pub(super) fn on_pull_private_chat_req(&self, value: Value) -> Result<Value, ConvertError> {
        let req: PullPrivateChatReq = serde_json::from_value(value.clone())?;
        let mut state = self.state.lock().expect("session state poisoned");
        state.inject_pull_private_chat = req.target_uid == CONSOLE_UID;
        Ok(value)
    }

    pub(super) fn on_pull_private_chat_rsp(&self, value: Value) -> Result<Value, ConvertError> {
        let mut state = self.state.lock().expect("session state poisoned");
        if !state.inject_pull_private_chat {
            return Ok(value);
        }
        state.inject_pull_private_chat = false;
        let uid = state.player_uid;
        drop(state);
        self.append_welcome_chat(value, uid)
    }

    pub(super) fn on_pull_recent_chat_req(&self, value: Value) -> Result<Value, ConvertError> {
        let req: PullRecentChatReq = serde_json::from_value(value.clone())?;
        let mut state = self.state.lock().expect("session state poisoned");
        state.inject_pull_recent_chat = req.begin_sequence == 0;
        Ok(value)
    }

    pub(super) fn on_pull_recent_chat_rsp(&self, value: Value) -> Result<Value, ConvertError> {
        let mut state = self.state.lock().expect("session state poisoned");
        if !state.inject_pull_recent_chat {
            return Ok(value);
        }
        state.inject_pull_recent_chat = false;
        let uid = state.player_uid;
        drop(state);
        self.append_welcome_chat(value, uid)
    }

    /// Add the console's greeting to a chat-history response and clear
    /// its retcode.
    fn append_welcome_chat(&self, mut value: Value, uid: u32) -> Result<Value, ConvertError> {
        let welcome = serde_json::to_value(ChatInfo {
            time: unix_now(),
            to_uid: uid,
            uid: CONSOLE_UID,
            text: CONSOLE_WELCOME_TEXT.to_owned(),
            icon: 0,
        })?;
        let Some(obj) = value.as_object_mut() else { return Ok(value) };
        match obj.get_mut("chatInfo").and_then(Value::as_array_mut) {
            Some(list) => list.push(welcome),
            None => {
                obj.insert("chatInfo".to_owned(), Value::Array(vec![welcome]));
            }
        }
        obj.remove("retcode");
        debug!("injecting console welcome chat");
        Ok(value)
    }
}

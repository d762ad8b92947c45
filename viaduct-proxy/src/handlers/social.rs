//! Friend-list handler: make the console show up as a friend.

use serde_json::{json, Value};
use tracing::debug;

use crate::console::{
    CONSOLE_AVATAR_ID, CONSOLE_COSTUME_ID, CONSOLE_LEVEL, CONSOLE_NAME_CARD_ID, CONSOLE_NICKNAME,
    CONSOLE_SIGNATURE, CONSOLE_UID, CONSOLE_WORLD_LEVEL,
};
use crate::errors::ConvertError;
use crate::server::Session;

impl Session {
    pub(super) fn on_get_player_friend_list_rsp(
        &self,
        mut value: Value,
    ) -> Result<Value, ConvertError> {
        let friend = json!({
            "uid": CONSOLE_UID,
            "nickname": CONSOLE_NICKNAME,
            "level": CONSOLE_LEVEL,
            "worldLevel": CONSOLE_WORLD_LEVEL,
            "signature": CONSOLE_SIGNATURE,
            "nameCardId": CONSOLE_NAME_CARD_ID,
            "profilePicture": {
                "avatarId": CONSOLE_AVATAR_ID,
                "costumeId": CONSOLE_COSTUME_ID,
            },
            "isGameSource": true,
            "onlineState": 1,
            "platformType": 3,
        });

        let Some(obj) = value.as_object_mut() else { return Ok(value) };
        match obj.get_mut("friendList").and_then(Value::as_array_mut) {
            Some(list) => list.push(friend),
            None => {
                obj.insert("friendList".to_owned(), Value::Array(vec![friend]));
            }
        }
        debug!("injecting console friend entry");
        Ok(value)
    }
}

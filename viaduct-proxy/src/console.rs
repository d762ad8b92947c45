//! The out-of-band administrative channel behind the synthetic console
//! peer.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::config::ConfigConsole;
use crate::errors::ConsoleError;

pub(crate) const CONSOLE_UID: u32 = 99;
pub(crate) const CONSOLE_NICKNAME: &str = "Console";
pub(crate) const CONSOLE_LEVEL: u32 = 60;
pub(crate) const CONSOLE_WORLD_LEVEL: u32 = 8;
pub(crate) const CONSOLE_SIGNATURE: &str = "";
pub(crate) const CONSOLE_NAME_CARD_ID: u32 = 210_001;
pub(crate) const CONSOLE_AVATAR_ID: u32 = 10_000_007;
pub(crate) const CONSOLE_COSTUME_ID: u32 = 0;
pub(crate) const CONSOLE_WELCOME_TEXT: &str = "You can type GM commands here.";

/// The command id the chat/map handlers dispatch with.
pub(crate) const CONSOLE_EXECUTE_CMD: u32 = 1116;

#[derive(Debug, Default, Deserialize)]
struct MuipResponse {
    #[serde(default)]
    retcode: i32,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: MuipResponseData,
}

#[derive(Debug, Default, Deserialize)]
struct MuipResponseData {
    #[serde(default)]
    msg: String,
    #[serde(default)]
    retmsg: String,
}

/// HTTP client for the administrative endpoint.
pub(crate) struct Console {
    config: ConfigConsole,
    http: reqwest::Client,
}

impl Console {
    pub(crate) fn new(config: ConfigConsole) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Execute a command as `uid`, returning the text to surface in chat.
    pub(crate) async fn execute(
        &self,
        cmd: u32,
        uid: u32,
        text: &str,
    ) -> Result<String, ConsoleError> {
        if !self.config.enabled {
            return Err(ConsoleError::Disabled);
        }
        info!(uid, "console execute: {text}");

        let query = self.build_query(cmd, uid, text);
        let uri = format!("{}?{}", self.config.muip_endpoint, query);
        debug!("console request: {uri}");

        let response = self.http.get(&uri).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::Status(status.as_u16()));
        }
        let body: MuipResponse = response.json().await?;
        if body.retcode != 0 {
            debug!(retcode = body.retcode, "console rejected command: {}", body.msg);
            return Ok(format!(
                "Failed to execute command: {}, error: {}",
                body.data.msg, body.data.retmsg
            ));
        }
        Ok(format!("Successfully executed command: {}", body.data.msg))
    }

    /// Sorted `key=value` pairs joined by `&`, with an optional SHA-256
    /// signature over `<joined>&<sign secret>`.
    fn build_query(&self, cmd: u32, uid: u32, text: &str) -> String {
        let mut params = vec![
            ("cmd".to_owned(), cmd.to_string()),
            ("msg".to_owned(), percent_encode(text)),
            ("uid".to_owned(), uid.to_string()),
        ];
        if !self.config.muip_region.is_empty() {
            params.push(("region".to_owned(), self.config.muip_region.clone()));
        }
        params.sort();

        let joined = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        if self.config.muip_sign.is_empty() {
            return joined;
        }
        let digest = Sha256::digest(format!("{joined}&{}", self.config.muip_sign));
        format!("{joined}&sign={}", hex::encode(digest))
    }
}

/// RFC 3986 percent-encoding of everything outside the unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(sign: &str, region: &str) -> Console {
        Console::new(ConfigConsole {
            enabled: true,
            muip_endpoint: "http://127.0.0.1:1/api".to_owned(),
            muip_region: region.to_owned(),
            muip_sign: sign.to_owned(),
        })
    }

    #[test]
    fn query_pairs_are_sorted() {
        let q = console("", "").build_query(1116, 10001, "goto 1 500 2");
        assert_eq!(q, "cmd=1116&msg=goto%201%20500%202&uid=10001");
    }

    #[test]
    fn region_slots_into_sorted_order() {
        let q = console("", "dev").build_query(1116, 7, "x");
        assert_eq!(q, "cmd=1116&msg=x&region=dev&uid=7");
    }

    #[test]
    fn signature_is_hex_sha256_over_joined_and_secret() {
        let q = console("secret", "").build_query(1, 2, "a");
        let joined = "cmd=1&msg=a&uid=2";
        let expected = hex::encode(Sha256::digest(format!("{joined}&secret")));
        assert_eq!(q, format!("{joined}&sign={expected}"));
    }

    #[test]
    fn percent_encoding_covers_reserved_bytes() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("safe-._~"), "safe-._~");
    }
}

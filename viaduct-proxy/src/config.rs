//! JSON configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use viaduct_proto::Protocol;

use crate::errors::ConfigError;

/// Top-level configuration document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// One of `trace`, `debug`, `info`, `silent`.
    pub log_level: String,
    pub endpoints: Option<ConfigEndpoints>,
    pub protocols: Option<ConfigProtocols>,
    pub keys: Option<ConfigKeys>,
    pub console: ConfigConsole,
}

/// Where to listen and where the upstream lives.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigEndpoints {
    /// Upstream `host:port`.
    pub main_endpoint: String,
    /// The version the upstream speaks.
    pub main_protocol: Protocol,
    /// Client version tag → listen `host:port`.
    pub mapping: HashMap<Protocol, String>,
}

/// Schema directories per version.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigProtocols {
    /// The pivot version every pair table goes through.
    pub base_protocol: Protocol,
    /// Version tag → directory holding `protocol.csv` and `protocol/`.
    pub mapping: HashMap<Protocol, PathBuf>,
}

/// Key material.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigKeys {
    /// Base64 of the Ec2b shared-key blob.
    pub shared_key: String,
    /// PKCS#1 PEM private key for decrypting client seeds.
    pub server_key: String,
    /// Key id → PKCS#1 PEM private key for decrypting server seeds.
    pub client_keys: HashMap<u32, String>,
}

/// The synthetic console peer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigConsole {
    pub enabled: bool,
    /// Administrative HTTP endpoint.
    pub muip_endpoint: String,
    /// Optional `region` query parameter.
    pub muip_region: String,
    /// Optional shared secret for the query signature.
    pub muip_sign: String,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_owned(), e))?;
        let config: Config = serde_json::from_str(&raw).map_err(ConfigError::Json)?;
        if config.endpoints.is_none() {
            return Err(ConfigError::Missing("endpoint"));
        }
        if config.protocols.is_none() {
            return Err(ConfigError::Missing("protocol"));
        }
        if config.keys.is_none() {
            return Err(ConfigError::Missing("key"));
        }
        Ok(config)
    }

    /// The template printed when the binary starts without a config file.
    pub fn default_template() -> Self {
        let base = Protocol::from("v3.2.0");
        Self {
            log_level: "info".to_owned(),
            endpoints: Some(ConfigEndpoints {
                main_endpoint: "{{ UPSTREAM_ADDRESS }}".to_owned(),
                main_protocol: base.clone(),
                mapping: HashMap::from([(
                    Protocol::from("{{ CLIENT_VERSION }}"),
                    "{{ ENDPOINT_LISTEN_ADDRESS }}".to_owned(),
                )]),
            }),
            protocols: Some(ConfigProtocols {
                base_protocol: base.clone(),
                mapping: HashMap::from([(
                    base.clone(),
                    PathBuf::from("data/mapping").join(base.0),
                )]),
            }),
            keys: Some(ConfigKeys {
                shared_key: "{{ FIRST_PACKET_ENCRYPTION_KEY }}".to_owned(),
                server_key: "{{ SERVER_PRIVATE_KEY_PEM }}".to_owned(),
                client_keys: HashMap::from([(2, "{{ CLIENT_PRIVATE_KEY_PEM }}".to_owned())]),
            }),
            console: ConfigConsole::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_document() {
        let raw = r#"{
            "logLevel": "debug",
            "endpoints": {
                "mainEndpoint": "127.0.0.1:22102",
                "mainProtocol": "v3.2.0",
                "mapping": { "v3.3.0": "0.0.0.0:20041" }
            },
            "protocols": {
                "baseProtocol": "v3.2.0",
                "mapping": { "v3.2.0": "data/v3.2.0", "v3.3.0": "data/v3.3.0" }
            },
            "keys": {
                "sharedKey": "RWMyYg==",
                "serverKey": "pem",
                "clientKeys": { "2": "pem2", "3": "pem3" }
            },
            "console": {
                "enabled": true,
                "muipEndpoint": "http://127.0.0.1:8888/api",
                "muipRegion": "dev",
                "muipSign": "secret"
            }
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        let endpoints = config.endpoints.unwrap();
        assert_eq!(endpoints.main_protocol, Protocol::from("v3.2.0"));
        assert_eq!(
            endpoints.mapping[&Protocol::from("v3.3.0")],
            "0.0.0.0:20041"
        );
        let keys = config.keys.unwrap();
        assert_eq!(keys.client_keys.len(), 2);
        assert_eq!(keys.client_keys[&3], "pem3");
        assert!(config.console.enabled);
        assert_eq!(config.console.muip_sign, "secret");
    }

    #[test]
    fn missing_sections_fail_validation() {
        let dir = std::env::temp_dir().join(format!("viaduct-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "logLevel": "info" }"#).unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Missing("endpoint"))
        ));
    }
}

//! Session orchestration: listeners per client version, one proxied
//! session per accepted client, two forwarding tasks per session.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use viaduct_crypto::KeyBlock;
use viaduct_kcp::{dial, DisconnectReason, Listener, Session as KcpSession};
use viaduct_proto::{Mapping, Protocol};

use crate::config::{Config, ConfigEndpoints};
use crate::console::Console;
use crate::errors::{ConfigError, ConvertError, FrameError, ProxyError};
use crate::frame;
use crate::handlers::ClientSetGameTimeReq;
use crate::keys::Keys;

/// Which way a frame is travelling through a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    ClientToUpstream,
    UpstreamToClient,
}

/// Messages that must always ride the shared pad: the login pad is
/// derived from their contents.
fn is_token_message(name: &str) -> bool {
    name == "GetPlayerTokenReq" || name == "GetPlayerTokenRsp"
}

/// Process-wide proxy state: key material, schema mapping, console
/// client, upstream endpoint configuration.
pub struct Service {
    endpoints: ConfigEndpoints,
    pub(crate) keys: Keys,
    pub(crate) mapping: Mapping,
    pub(crate) console: Console,
    cancel: CancellationToken,
}

impl Service {
    /// Load keys and schemas. All failures here are fatal.
    pub fn new(config: Config) -> Result<Arc<Self>, ProxyError> {
        let endpoints = config
            .endpoints
            .ok_or(ConfigError::Missing("endpoint"))?;
        let protocols = config
            .protocols
            .ok_or(ConfigError::Missing("protocol"))?;
        let config_keys = config.keys.ok_or(ConfigError::Missing("key"))?;

        let keys = Keys::from_config(&config_keys)?;
        let mapping = Mapping::load(&protocols.base_protocol, &protocols.mapping)?;
        let console = Console::new(config.console);

        Ok(Arc::new(Self {
            endpoints,
            keys,
            mapping,
            console,
            cancel: CancellationToken::new(),
        }))
    }

    /// Bind every configured listener and serve until [`Service::stop`].
    pub async fn run(self: Arc<Self>) -> Result<(), ProxyError> {
        for (protocol, addr) in self.endpoints.mapping.clone() {
            let listener = Listener::bind(&addr).await?;
            info!(%protocol, "start listening on {addr}");
            tokio::spawn(serve_listener(
                Arc::clone(&self),
                protocol,
                listener,
            ));
        }
        self.cancel.cancelled().await;
        Ok(())
    }

    /// Cancel every listener and session.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

async fn serve_listener(service: Arc<Service>, protocol: Protocol, listener: Listener) {
    loop {
        let endpoint = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(session) => session,
                Err(e) => {
                    error!(%protocol, "accept failed: {e}");
                    return;
                }
            },
            _ = service.cancel.cancelled() => {
                listener.close();
                return;
            }
        };
        info!(%protocol, "new session from {}", endpoint.remote_addr());
        tokio::spawn(handle_session(Arc::clone(&service), protocol.clone(), endpoint));
    }
}

async fn handle_session(service: Arc<Service>, protocol: Protocol, endpoint: Arc<KcpSession>) {
    let session_id = endpoint.session_id();
    let upstream = match dial(&service.endpoints.main_endpoint).await {
        Ok(upstream) => upstream,
        Err(e) => {
            error!(session_id, "failed to dial upstream: {e}");
            endpoint.close(DisconnectReason::ServerShutdown);
            return;
        }
    };
    info!(
        session_id,
        "start forwarding to {}, mapping {} <-> {}",
        upstream.remote_addr(),
        protocol,
        service.endpoints.main_protocol
    );

    let session = Session {
        service,
        protocol,
        endpoint,
        upstream,
        state: Mutex::new(SessionState::default()),
    };
    session.forward().await;
    info!(session_id, "session closed");
}

/// Per-session translation state shared by the two forwarding tasks.
#[derive(Default)]
pub(crate) struct SessionState {
    /// The client's token-exchange nonce.
    pub(crate) login_rand: u64,
    /// The post-login XOR pad, installed by the token-rsp handler.
    pub(crate) login_key: Option<Arc<KeyBlock>>,
    pub(crate) player_uid: u32,

    pub(crate) inject_private_chat: bool,
    pub(crate) inject_pull_private_chat: bool,
    pub(crate) inject_pull_recent_chat: bool,
    pub(crate) cached_set_game_time: Option<ClientSetGameTimeReq>,
}

/// One proxied application session: a client-side endpoint paired with an
/// upstream connection, translating in both directions.
pub(crate) struct Session {
    service: Arc<Service>,
    /// The client-facing protocol version.
    pub(crate) protocol: Protocol,
    pub(crate) endpoint: Arc<KcpSession>,
    pub(crate) upstream: Arc<KcpSession>,
    pub(crate) state: Mutex<SessionState>,
}

impl Session {
    pub(crate) fn service(&self) -> &Service {
        &self.service
    }

    pub(crate) fn from_version(&self, direction: Direction) -> &Protocol {
        match direction {
            Direction::ClientToUpstream => &self.protocol,
            Direction::UpstreamToClient => &self.service.endpoints.main_protocol,
        }
    }

    pub(crate) fn to_version(&self, direction: Direction) -> &Protocol {
        match direction {
            Direction::ClientToUpstream => &self.service.endpoints.main_protocol,
            Direction::UpstreamToClient => &self.protocol,
        }
    }

    fn target_session(&self, direction: Direction) -> &KcpSession {
        match direction {
            Direction::ClientToUpstream => &self.upstream,
            Direction::UpstreamToClient => &self.endpoint,
        }
    }

    /// Run both forwarding directions to completion.
    async fn forward(&self) {
        tokio::join!(
            self.forward_direction(Direction::ClientToUpstream),
            self.forward_direction(Direction::UpstreamToClient),
        );
    }

    async fn forward_direction(&self, direction: Direction) {
        let source = match direction {
            Direction::ClientToUpstream => &self.endpoint,
            Direction::UpstreamToClient => &self.upstream,
        };
        loop {
            // The payload buffer returns to its pool when it drops at the
            // bottom of this scope, whatever happens in between.
            let mut payload = match source.payload().await {
                Ok(payload) => payload,
                Err(e) => {
                    debug!(?direction, "payload stream ended: {e}");
                    break;
                }
            };
            if let Err(e) = self.convert_payload(direction, &mut payload).await {
                warn!(?direction, "failed to convert payload: {e}");
            }
        }
        // Either transport dying ends the application session.
        match direction {
            Direction::ClientToUpstream => self.upstream.close(DisconnectReason::ClientClose),
            Direction::UpstreamToClient => self.endpoint.close(DisconnectReason::ServerShutdown),
        }
    }

    /// Decrypt, translate and re-emit one payload.
    pub(crate) async fn convert_payload(
        &self,
        direction: Direction,
        payload: &mut [u8],
    ) -> Result<(), ConvertError> {
        if payload.len() < frame::FRAME_OVERHEAD {
            return Err(FrameError::TooShort.into());
        }
        self.crypt_payload(payload, false)?;

        let parsed = frame::parse(payload)?;
        let from = self.from_version(direction);
        let to = self.to_version(direction);
        let mapping = &self.service.mapping;

        let name = mapping
            .command_name(from, parsed.cmd)
            .ok_or(ConvertError::UnknownCommand(parsed.cmd))?
            .to_owned();
        let to_cmd = mapping
            .pair(from, to, parsed.cmd)
            .ok_or(ConvertError::UnknownCommand(parsed.cmd))?;

        let head = parsed.head.to_vec();
        let Some(body) = self
            .convert_packet(direction, &name, &head, parsed.body)
            .await?
        else {
            // A handler swallowed the frame after injecting its own.
            return Ok(());
        };

        let mut out = frame::build(to_cmd, &head, &body);
        self.crypt_payload(&mut out, is_token_message(&name))?;
        self.target_session(direction).send_payload(&out)?;
        Ok(())
    }

    /// XOR a payload with the appropriate pad, in either direction.
    ///
    /// Decryption is a trial: the login pad (when installed) is applied
    /// first and reverted if the frame magics do not appear, falling back
    /// to the shared pad. Token messages and the first packet of a
    /// session set `first` and ride the shared pad unconditionally, since
    /// the login pad is derived from their contents.
    pub(crate) fn crypt_payload(
        &self,
        payload: &mut [u8],
        first: bool,
    ) -> Result<(), ConvertError> {
        if payload.len() < 4 {
            return Err(FrameError::TooShort.into());
        }
        let was_plain = frame::is_framed(payload);

        let login_key = self
            .state
            .lock()
            .expect("session state poisoned")
            .login_key
            .clone();
        if let Some(key) = login_key {
            if !first {
                key.xor(payload);
                if was_plain || frame::is_framed(payload) {
                    return Ok(());
                }
                // Not this pad; XOR is involutive, so undo and fall back.
                key.xor(payload);
            }
        }
        self.service.keys.shared_key.xor(payload);
        Ok(())
    }

    /// Encode and emit a handler-made frame to one side of the session.
    pub(crate) fn send_packet(
        &self,
        target: Direction,
        version: &Protocol,
        name: &str,
        head: &[u8],
        value: &Value,
    ) -> Result<(), ConvertError> {
        let cmd = self
            .service
            .mapping
            .command_id(version, name)
            .ok_or_else(|| ConvertError::UnknownName(name.to_owned()))?;
        let body = self.service.mapping.encode(version, name, value)?;
        let mut out = frame::build(cmd, head, &body);
        self.crypt_payload(&mut out, is_token_message(name))?;
        self.target_session(target).send_payload(&out)?;
        Ok(())
    }

    /// Inject a frame towards the client, encoded under its version.
    pub(crate) fn inject_to_client(
        &self,
        name: &str,
        head: &[u8],
        value: &Value,
    ) -> Result<(), ConvertError> {
        self.send_packet(Direction::UpstreamToClient, &self.protocol, name, head, value)
    }

    /// Inject a frame towards the upstream, encoded under its version.
    pub(crate) fn inject_to_upstream(
        &self,
        name: &str,
        head: &[u8],
        value: &Value,
    ) -> Result<(), ConvertError> {
        self.send_packet(
            Direction::ClientToUpstream,
            &self.service.endpoints.main_protocol,
            name,
            head,
            value,
        )
    }
}

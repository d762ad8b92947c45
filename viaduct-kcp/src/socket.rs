//! Listener and dial fronts over UDP.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::interval;
use tracing::{debug, error, trace};

use crate::segment::{ControlData, CONTROL_FIN, CONTROL_SYN, OVERHEAD};
use crate::session::{DisconnectReason, Session};
use crate::session_manager::{disconnect_raw, SessionManager};
use crate::{TransportError, DEFAULT_MTU};

/// How long a session may go without datagrams before it is reaped.
const IDLE_TIMEOUT: Duration = Duration::from_secs(5);

/// State-machine tick period.
const TICK: Duration = Duration::from_millis(20);

/// A bound UDP listener accepting reliable sessions.
pub struct Listener {
    socket: Arc<UdpSocket>,
    manager: Arc<SessionManager>,
}

impl Listener {
    /// Bind `addr` and start the datagram and ticker tasks.
    pub async fn bind(addr: &str) -> Result<Self, TransportError> {
        let socket = Arc::new(UdpSocket::bind(addr).await?);
        let manager = SessionManager::new(IDLE_TIMEOUT);

        tokio::spawn(listener_read_loop(
            Arc::clone(&socket),
            Arc::clone(&manager),
        ));
        tokio::spawn(tick_loop(Arc::clone(&manager)));

        Ok(Self { socket, manager })
    }

    /// The bound local address.
    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        Ok(self.socket.local_addr()?)
    }

    /// Await the next accepted session.
    pub async fn accept(&self) -> Result<Arc<Session>, TransportError> {
        self.manager.accept().await
    }

    /// Remove and close a session.
    pub fn disconnect_session(
        &self,
        session: &Session,
        reason: DisconnectReason,
    ) -> Result<(), TransportError> {
        let session = self.manager.delete_session(session.session_id())?;
        session.close(reason);
        Ok(())
    }

    /// Close every session and stop the background tasks.
    pub fn close(&self) {
        self.manager.close();
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.manager.cancel.cancel();
    }
}

async fn tick_loop(manager: Arc<SessionManager>) {
    let mut ticker = interval(TICK);
    loop {
        tokio::select! {
            _ = ticker.tick() => manager.tick(),
            _ = manager.cancel.cancelled() => return,
        }
    }
}

async fn listener_read_loop(socket: Arc<UdpSocket>, manager: Arc<SessionManager>) {
    let mut buf = vec![0u8; DEFAULT_MTU];
    loop {
        let (n, addr) = tokio::select! {
            r = socket.recv_from(&mut buf) => match r {
                Ok(v) => v,
                Err(e) => {
                    error!("udp read error: {e}");
                    return;
                }
            },
            _ = manager.cancel.cancelled() => return,
        };

        let result = if n == 20 {
            trace!("received control data {n} from {addr}");
            match ControlData::parse(&buf[..n]) {
                Ok(data) => on_listener_control(&socket, &manager, &data, addr),
                Err(e) => Err(e),
            }
        } else if n >= OVERHEAD {
            on_listener_segment(&socket, &manager, &buf[..n], addr)
        } else {
            Err(TransportError::InvalidPacket)
        };

        if let Err(e) = result {
            debug!("receive error: {e} from {addr}");
        }
    }
}

fn on_listener_control(
    socket: &Arc<UdpSocket>,
    manager: &Arc<SessionManager>,
    data: &ControlData,
    addr: SocketAddr,
) -> Result<(), TransportError> {
    match data.command() {
        CONTROL_SYN => {
            let session = manager.get_or_create_session(data.session_id(), addr, socket);
            session.touch();
            session.connect_ack()
        }
        CONTROL_FIN => match manager.delete_session(data.session_id()) {
            Ok(session) => {
                session.set_conv_id(data.conv_id());
                session.close(DisconnectReason::ServerKick);
                Ok(())
            }
            Err(_) => disconnect_raw(
                socket,
                data.conv_id(),
                data.session_id(),
                DisconnectReason::ServerKick,
                addr,
            ),
        },
        _ => Err(TransportError::InvalidPacket),
    }
}

fn on_listener_segment(
    socket: &Arc<UdpSocket>,
    manager: &Arc<SessionManager>,
    data: &[u8],
    addr: SocketAddr,
) -> Result<(), TransportError> {
    let conv_id = u32::from_le_bytes(data[0..4].try_into().unwrap());
    let session_id = u32::from_le_bytes(data[4..8].try_into().unwrap());
    match manager.get_session(session_id) {
        Ok(session) => session.input_segment(data),
        Err(_) => disconnect_raw(socket, conv_id, session_id, DisconnectReason::ServerKick, addr),
    }
}

/// Connect to a remote listener and complete the SYN/ACK handshake.
pub async fn dial(addr: &str) -> Result<Arc<Session>, TransportError> {
    let remote: SocketAddr = tokio::net::lookup_host(addr)
        .await?
        .next()
        .ok_or(TransportError::InvalidPacket)?;
    let bind_addr = if remote.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
    let socket = Arc::new(UdpSocket::bind(bind_addr).await?);

    let session = Session::new(Arc::clone(&socket), remote);

    tokio::spawn(dial_read_loop(Arc::clone(&socket), Arc::clone(&session)));
    tokio::spawn(dial_tick_loop(Arc::clone(&session)));

    session.open().await?;
    Ok(session)
}

async fn dial_read_loop(socket: Arc<UdpSocket>, session: Arc<Session>) {
    let mut buf = vec![0u8; DEFAULT_MTU];
    loop {
        let (n, addr) = tokio::select! {
            r = socket.recv_from(&mut buf) => match r {
                Ok(v) => v,
                Err(e) => {
                    error!("udp read error: {e}");
                    return;
                }
            },
            _ = session.cancel.cancelled() => return,
        };
        if addr != session.remote_addr() {
            continue;
        }

        let result = if n == 20 {
            ControlData::parse(&buf[..n]).and_then(|data| session.on_control(&data))
        } else if n >= OVERHEAD {
            session.input_segment(&buf[..n])
        } else {
            Err(TransportError::InvalidPacket)
        };

        if let Err(e) = result {
            debug!("receive error: {e} from {addr}");
        }
    }
}

async fn dial_tick_loop(session: Arc<Session>) {
    let mut ticker = interval(TICK);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !session.update() {
                    debug!(session_id = session.session_id(), "dead link, closing");
                    session.close(DisconnectReason::Timeout);
                    return;
                }
            }
            _ = session.cancel.cancelled() => return,
        }
    }
}

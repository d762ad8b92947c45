//! Listener-side session table.
//!
//! The manager exclusively owns the session map. The listener's single
//! ticker advances every session under the read side of the lock;
//! create/delete take the write side. Accepted sessions surface through a
//! bounded channel.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::segment::{ControlData, CONTROL_FIN};
use crate::session::{DisconnectReason, Session};
use crate::TransportError;

/// Capacity of the pending-accept queue.
const ACCEPT_QUEUE: usize = 128;

pub(crate) struct SessionManager {
    pub(crate) cancel: CancellationToken,
    timeout: Duration,

    pending_tx: mpsc::Sender<Arc<Session>>,
    pending_rx: tokio::sync::Mutex<mpsc::Receiver<Arc<Session>>>,

    conv_id: AtomicU32,
    sessions: RwLock<HashMap<u32, Arc<Session>>>,
}

impl SessionManager {
    pub(crate) fn new(timeout: Duration) -> Arc<Self> {
        let (pending_tx, pending_rx) = mpsc::channel(ACCEPT_QUEUE);
        Arc::new(Self {
            cancel: CancellationToken::new(),
            timeout,
            pending_tx,
            pending_rx: tokio::sync::Mutex::new(pending_rx),
            conv_id: AtomicU32::new(0),
            sessions: RwLock::new(HashMap::new()),
        })
    }

    pub(crate) async fn accept(&self) -> Result<Arc<Session>, TransportError> {
        let mut rx = self.pending_rx.lock().await;
        tokio::select! {
            session = rx.recv() => session.ok_or(TransportError::Closed),
            _ = self.cancel.cancelled() => Err(TransportError::Closed),
        }
    }

    pub(crate) fn close(&self) {
        let sessions: Vec<Arc<Session>> = {
            let map = self.sessions.read().expect("session map poisoned");
            map.values().cloned().collect()
        };
        for session in sessions {
            session.close(DisconnectReason::ServerShutdown);
        }
        self.sessions.write().expect("session map poisoned").clear();
        self.cancel.cancel();
    }

    fn next_conv_id(&self) -> u32 {
        loop {
            let id = self.conv_id.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
            if id != 0 {
                return id;
            }
        }
    }

    fn next_session_id(&self, sessions: &HashMap<u32, Arc<Session>>) -> u32 {
        loop {
            let mut raw = [0u8; 4];
            getrandom::getrandom(&mut raw).expect("getrandom");
            let id = u32::from_le_bytes(raw);
            if id != 0 && !sessions.contains_key(&id) {
                return id;
            }
        }
    }

    pub(crate) fn get_session(&self, session_id: u32) -> Result<Arc<Session>, TransportError> {
        self.sessions
            .read()
            .expect("session map poisoned")
            .get(&session_id)
            .cloned()
            .ok_or(TransportError::SessionNotFound)
    }

    /// Existing session for the ids, or a freshly started one.
    ///
    /// Re-delivered SYNs resolve to the existing session, so the caller
    /// re-ACKs without creating a duplicate.
    pub(crate) fn get_or_create_session(
        &self,
        mut session_id: u32,
        addr: SocketAddr,
        socket: &Arc<UdpSocket>,
    ) -> Arc<Session> {
        let mut sessions = self.sessions.write().expect("session map poisoned");
        if let Some(session) = sessions.get(&session_id) {
            return Arc::clone(session);
        }
        if session_id == 0 {
            session_id = self.next_session_id(&sessions);
        }

        let session = Session::new(Arc::clone(socket), addr);
        session.start(self.next_conv_id(), session_id);
        sessions.insert(session_id, Arc::clone(&session));

        if let Err(e) = self.pending_tx.try_send(Arc::clone(&session)) {
            error!("pending accept session queue is full: {e}");
        }
        session
    }

    pub(crate) fn delete_session(&self, session_id: u32) -> Result<Arc<Session>, TransportError> {
        self.sessions
            .write()
            .expect("session map poisoned")
            .remove(&session_id)
            .ok_or(TransportError::SessionNotFound)
    }

    /// One 20 ms tick: advance every session, reap the dead and the idle.
    pub(crate) fn tick(&self) {
        let mut expired = Vec::new();
        {
            let sessions = self.sessions.read().expect("session map poisoned");
            for (id, session) in sessions.iter() {
                let alive = session.update();
                if !alive || session.idle_for() > self.timeout || session.is_closed() {
                    expired.push(*id);
                }
            }
        }
        for id in expired {
            if let Ok(session) = self.delete_session(id) {
                debug!(session_id = id, "session expired");
                session.close(DisconnectReason::Timeout);
            }
        }
    }
}

/// Answer a datagram that matches no session with a FIN.
pub(crate) fn disconnect_raw(
    socket: &Arc<UdpSocket>,
    conv_id: u32,
    session_id: u32,
    reason: DisconnectReason,
    addr: SocketAddr,
) -> Result<(), TransportError> {
    let data = ControlData::new(CONTROL_FIN, conv_id, session_id, reason as u32);
    match socket.try_send_to(&data.0, addr) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
            let socket = Arc::clone(socket);
            tokio::spawn(async move {
                let _ = socket.send_to(&data.0, addr).await;
            });
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

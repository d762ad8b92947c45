//! One reliable endpoint: a control block bound to a UDP socket.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use crate::control_block::ControlBlock;
use crate::payload::Payload;
use crate::segment::{ControlData, CONTROL_ACK, CONTROL_FIN, CONTROL_MESSAGE_CLIENT_APP, CONTROL_SYN};
use crate::TransportError;

/// Why a session was torn down, carried in the FIN `message` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum DisconnectReason {
    Timeout = 0,
    ClientClose = 1,
    ClientRebindFail = 2,
    ClientShutdown = 3,
    ServerRelogin = 4,
    ServerKick = 5,
    ServerShutdown = 6,
    NotFoundSession = 7,
    LoginUnfinished = 8,
    PacketFreqTooHigh = 9,
    PingTimeout = 10,
    TransferFailed = 11,
    ServerKillClient = 12,
    CheckMoveSpeed = 13,
    AccountPasswordChange = 14,
    SecurityKick = 15,
    LuaShellTimeout = 16,
    SdkFailKick = 17,
    PacketCostTime = 18,
    PacketUnionFreq = 19,
    WaitSndMax = 20,
}

/// Capacity of the per-session delivered-payload queue.
const PAYLOAD_QUEUE: usize = 256;

/// A reliable session over one remote address.
///
/// Created either by a [`crate::Listener`] on an incoming SYN or by
/// [`crate::dial`]. The control block sits behind a mutex held only for
/// `input`, `send`, and `update`; delivered payloads flow out through a
/// bounded channel.
pub struct Session {
    socket: Arc<UdpSocket>,
    remote: SocketAddr,

    conv_id: AtomicU32,
    session_id: AtomicU32,

    pub(crate) cancel: CancellationToken,
    cb: Mutex<Option<ControlBlock>>,
    started: AtomicBool,
    start_notify: tokio::sync::Notify,

    payload_tx: mpsc::Sender<Payload>,
    payload_rx: tokio::sync::Mutex<mpsc::Receiver<Payload>>,

    last_recv: Mutex<Instant>,
}

impl Session {
    pub(crate) fn new(socket: Arc<UdpSocket>, remote: SocketAddr) -> Arc<Self> {
        let (payload_tx, payload_rx) = mpsc::channel(PAYLOAD_QUEUE);
        Arc::new(Self {
            socket,
            remote,
            conv_id: AtomicU32::new(0),
            session_id: AtomicU32::new(0),
            cancel: CancellationToken::new(),
            cb: Mutex::new(None),
            started: AtomicBool::new(false),
            start_notify: tokio::sync::Notify::new(),
            payload_tx,
            payload_rx: tokio::sync::Mutex::new(payload_rx),
            last_recv: Mutex::new(Instant::now()),
        })
    }

    /// The peer address.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    /// The session id (0 until the handshake assigns one).
    pub fn session_id(&self) -> u32 {
        self.session_id.load(Ordering::Relaxed)
    }

    /// The conv id (0 until the handshake assigns one).
    pub fn conv_id(&self) -> u32 {
        self.conv_id.load(Ordering::Relaxed)
    }

    /// True once the session has been closed or cancelled.
    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Await the next whole application payload.
    pub async fn payload(&self) -> Result<Payload, TransportError> {
        let mut rx = self.payload_rx.lock().await;
        tokio::select! {
            payload = rx.recv() => payload.ok_or(TransportError::Closed),
            _ = self.cancel.cancelled() => Err(TransportError::Closed),
        }
    }

    /// Queue an application payload for reliable delivery.
    pub fn send_payload(&self, payload: &[u8]) -> Result<(), TransportError> {
        let mut guard = self.cb.lock().expect("control block poisoned");
        let cb = guard.as_mut().ok_or(TransportError::Closed)?;
        cb.send(payload)
    }

    /// Install the control block once the ids are known.
    pub(crate) fn start(&self, conv_id: u32, session_id: u32) {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!(session_id, "session already started");
            return;
        }
        self.conv_id.store(conv_id, Ordering::Relaxed);
        self.session_id.store(session_id, Ordering::Relaxed);

        let socket = Arc::clone(&self.socket);
        let remote = self.remote;
        let mut cb = ControlBlock::new(conv_id, session_id, move |data: &[u8]| {
            // Datagram sends never block; a full socket buffer just drops
            // the datagram and the ARQ layer retransmits.
            if let Err(e) = socket.try_send_to(data, remote) {
                trace!("udp send to {remote} failed: {e}");
            }
        });
        cb.set_mtu(1200);
        cb.no_delay(true, 20, 2, true);
        cb.wnd_size(255, 255);

        *self.cb.lock().expect("control block poisoned") = Some(cb);
        // notify_one leaves a permit behind, so an open() that races the
        // ACK still observes it.
        self.start_notify.notify_one();
    }

    /// Dial-side open: send SYN and wait for the listener's ACK.
    pub(crate) async fn open(&self) -> Result<(), TransportError> {
        self.connect_syn()?;
        if self.started.load(Ordering::SeqCst) {
            return Ok(());
        }
        tokio::select! {
            _ = self.start_notify.notified() => Ok(()),
            _ = self.cancel.cancelled() => Err(TransportError::Closed),
        }
    }

    pub(crate) fn connect_syn(&self) -> Result<(), TransportError> {
        let data = ControlData::new(
            CONTROL_SYN,
            self.conv_id(),
            self.session_id(),
            CONTROL_MESSAGE_CLIENT_APP,
        );
        self.send_control(&data)
    }

    pub(crate) fn connect_ack(&self) -> Result<(), TransportError> {
        let data = ControlData::new(
            CONTROL_ACK,
            self.conv_id(),
            self.session_id(),
            CONTROL_MESSAGE_CLIENT_APP,
        );
        self.send_control(&data)
    }

    pub(crate) fn disconnect(&self, reason: DisconnectReason) -> Result<(), TransportError> {
        let data = ControlData::new(CONTROL_FIN, self.conv_id(), self.session_id(), reason as u32);
        self.send_control(&data)
    }

    fn send_control(&self, data: &ControlData) -> Result<(), TransportError> {
        trace!("sending control data to {}", self.remote);
        match self.socket.try_send_to(&data.0, self.remote) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                // Control datagrams must not be lost to a cold readiness
                // cache; retry on the async path.
                let socket = Arc::clone(&self.socket);
                let remote = self.remote;
                let raw = data.0;
                tokio::spawn(async move {
                    let _ = socket.send_to(&raw, remote).await;
                });
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Close the session, notifying the peer with `reason`.
    pub fn close(&self, reason: DisconnectReason) {
        if self.cancel.is_cancelled() {
            return;
        }
        let _ = self.disconnect(reason);
        if let Some(cb) = self.cb.lock().expect("control block poisoned").as_mut() {
            cb.release_tx();
        }
        self.cancel.cancel();
    }

    /// Dial-side control datagram handling.
    pub(crate) fn on_control(&self, data: &ControlData) -> Result<(), TransportError> {
        self.touch();
        match data.command() {
            CONTROL_ACK => {
                self.start(data.conv_id(), data.session_id());
                Ok(())
            }
            CONTROL_FIN => {
                self.close(DisconnectReason::ServerKick);
                Ok(())
            }
            _ => Err(TransportError::InvalidPacket),
        }
    }

    /// Feed a segment datagram into the control block.
    pub(crate) fn input_segment(&self, data: &[u8]) -> Result<(), TransportError> {
        self.touch();
        let mut guard = self.cb.lock().expect("control block poisoned");
        let cb = guard.as_mut().ok_or(TransportError::Closed)?;
        cb.input(data, true, false)
    }

    /// Advance the state machine and drain completed payloads.
    /// Returns false when the link has died.
    pub(crate) fn update(&self) -> bool {
        let mut guard = self.cb.lock().expect("control block poisoned");
        let Some(cb) = guard.as_mut() else { return true };
        cb.update();

        while let Some(n) = cb.peek_size() {
            if n < 1 {
                break;
            }
            let mut payload = Payload::with_len(n);
            if cb.recv(&mut payload).is_none() {
                error!("failed to receive payload of {n} bytes");
                break;
            }
            match self.payload_tx.try_send(payload) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    error!(session_id = self.session_id(), "session payload queue is full");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => return false,
            }
        }

        !cb.is_dead_link()
    }

    /// Note datagram arrival for the idle timer.
    pub(crate) fn touch(&self) {
        *self.last_recv.lock().expect("clock poisoned") = Instant::now();
    }

    /// Time since the last datagram from the peer.
    pub(crate) fn idle_for(&self) -> Duration {
        self.last_recv.lock().expect("clock poisoned").elapsed()
    }

    /// Overwrite the conv id (listener teardown path).
    pub(crate) fn set_conv_id(&self, conv_id: u32) {
        self.conv_id.store(conv_id, Ordering::Relaxed);
        if let Some(cb) = self.cb.lock().expect("control block poisoned").as_mut() {
            cb.set_conv_id(conv_id);
        }
    }

}

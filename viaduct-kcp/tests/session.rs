//! Socket-level integration: handshake, echo, duplicate SYNs, FIN paths.

use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;
use viaduct_kcp::{dial, DisconnectReason, Listener};

const WAIT: Duration = Duration::from_secs(10);

/// Hand-build a 20-byte control datagram (big-endian fields).
fn control_datagram(command: u32, conv: u32, sid: u32, message: u32, magic: [u8; 4]) -> [u8; 20] {
    let mut b = [0u8; 20];
    b[0..4].copy_from_slice(&command.to_be_bytes());
    b[4..8].copy_from_slice(&conv.to_be_bytes());
    b[8..12].copy_from_slice(&sid.to_be_bytes());
    b[12..16].copy_from_slice(&message.to_be_bytes());
    b[16..20].copy_from_slice(&magic);
    b
}

#[tokio::test]
async fn handshake_and_bidirectional_transfer() {
    let listener = Listener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let session = listener.accept().await.unwrap();
        // Echo every payload back.
        for _ in 0..3 {
            let payload = session.payload().await.unwrap();
            session.send_payload(&payload).unwrap();
        }
        // Hold the listener alive until the echoes drain.
        tokio::time::sleep(Duration::from_secs(2)).await;
        drop(listener);
    });

    let client = timeout(WAIT, dial(&addr.to_string())).await.unwrap().unwrap();
    assert_ne!(client.session_id(), 0);
    assert_ne!(client.conv_id(), 0);

    for i in 0..3u8 {
        let msg = vec![i; 100 + usize::from(i)];
        client.send_payload(&msg).unwrap();
        let echoed = timeout(WAIT, client.payload()).await.unwrap().unwrap();
        assert_eq!(&*echoed, &msg[..]);
    }

    client.close(DisconnectReason::ClientClose);
    server.await.unwrap();
}

#[tokio::test]
async fn payloads_arrive_in_order() {
    let listener = Listener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let client = timeout(WAIT, dial(&addr.to_string())).await.unwrap().unwrap();
    let session = timeout(WAIT, listener.accept()).await.unwrap().unwrap();

    for i in 0..50u32 {
        client.send_payload(&i.to_be_bytes()).unwrap();
    }
    for i in 0..50u32 {
        let payload = timeout(WAIT, session.payload()).await.unwrap().unwrap();
        assert_eq!(&*payload, &i.to_be_bytes());
    }

    client.close(DisconnectReason::ClientClose);
}

#[tokio::test]
async fn repeated_syn_is_acked_without_duplicate_session() {
    let listener = Listener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let raw = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let syn = control_datagram(0x0000_00FF, 0, 0, 1_234_567_890, [0xFF; 4]);
    raw.send_to(&syn, addr).await.unwrap();

    let mut buf = [0u8; 64];
    let (n, _) = timeout(WAIT, raw.recv_from(&mut buf)).await.unwrap().unwrap();
    assert_eq!(n, 20);
    assert_eq!(&buf[0..4], &0x0000_0145u32.to_be_bytes());
    assert_eq!(&buf[16..20], &[0x14, 0x51, 0x45, 0x45]);
    let conv = u32::from_be_bytes(buf[4..8].try_into().unwrap());
    let sid = u32::from_be_bytes(buf[8..12].try_into().unwrap());
    assert!(conv > 0);
    assert!(sid > 0);

    // A retransmitted SYN with the assigned ids gets a fresh ACK for the
    // same session.
    let resyn = control_datagram(0x0000_00FF, conv, sid, 1_234_567_890, [0xFF; 4]);
    raw.send_to(&resyn, addr).await.unwrap();
    let (n, _) = timeout(WAIT, raw.recv_from(&mut buf)).await.unwrap().unwrap();
    assert_eq!(n, 20);
    assert_eq!(u32::from_be_bytes(buf[4..8].try_into().unwrap()), conv);
    assert_eq!(u32::from_be_bytes(buf[8..12].try_into().unwrap()), sid);

    // Exactly one session was surfaced to accept().
    let first = timeout(WAIT, listener.accept()).await.unwrap().unwrap();
    assert_eq!(first.session_id(), sid);
    assert!(timeout(Duration::from_millis(300), listener.accept()).await.is_err());
}

#[tokio::test]
async fn fin_for_unknown_session_is_answered_with_fin() {
    let listener = Listener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let raw = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let fin = control_datagram(0x0000_0194, 9, 12345, 1, [0x19, 0x41, 0x94, 0x94]);
    raw.send_to(&fin, addr).await.unwrap();

    let mut buf = [0u8; 64];
    let (n, _) = timeout(WAIT, raw.recv_from(&mut buf)).await.unwrap().unwrap();
    assert_eq!(n, 20);
    assert_eq!(&buf[0..4], &0x0000_0194u32.to_be_bytes());
    assert_eq!(&buf[16..20], &[0x19, 0x41, 0x94, 0x94]);
}

#[tokio::test]
async fn client_fin_tears_the_session_down() {
    let listener = Listener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let client = timeout(WAIT, dial(&addr.to_string())).await.unwrap().unwrap();
    let session = timeout(WAIT, listener.accept()).await.unwrap().unwrap();

    client.close(DisconnectReason::ClientClose);
    // The listener removes the session on FIN; its payload stream ends.
    let result = timeout(WAIT, session.payload()).await.unwrap();
    assert!(result.is_err());
}

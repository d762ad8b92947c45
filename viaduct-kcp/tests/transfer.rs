//! Control-block level transfer tests over simulated channels.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use viaduct_kcp::{ControlBlock, TransportError};

type Wire = Arc<Mutex<VecDeque<Vec<u8>>>>;

fn wire_pair() -> (Wire, Wire) {
    (Arc::new(Mutex::new(VecDeque::new())), Arc::new(Mutex::new(VecDeque::new())))
}

fn block(conv: u32, sid: u32, wire: &Wire) -> ControlBlock {
    let out = Arc::clone(wire);
    let mut cb = ControlBlock::new(conv, sid, move |data: &[u8]| {
        out.lock().unwrap().push_back(data.to_vec());
    });
    cb.set_mtu(1200);
    cb.wnd_size(128, 128);
    cb
}

/// Small deterministic generator for loss decisions.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next() % 100 < percent
    }
}

/// Move queued datagrams from `wire` into `to`, dropping `loss` percent
/// and delaying some datagrams a round to force reordering.
fn deliver(wire: &Wire, to: &mut ControlBlock, loss: u64, rng: &mut Lcg, held: &mut Vec<Vec<u8>>) {
    let mut queued: Vec<Vec<u8>> = wire.lock().unwrap().drain(..).collect();
    // Release anything held back last round, after the fresh datagrams.
    let released: Vec<Vec<u8>> = std::mem::take(held);
    for datagram in &released {
        let _ = to.input(datagram, true, false);
    }
    while let Some(datagram) = queued.pop() {
        if loss > 0 && rng.chance(loss) {
            continue;
        }
        if loss > 0 && rng.chance(20) {
            held.push(datagram);
            continue;
        }
        let _ = to.input(&datagram, true, false);
    }
}

fn drain(cb: &mut ControlBlock, out: &mut Vec<u8>) {
    while let Some(n) = cb.peek_size() {
        let mut buf = vec![0u8; n];
        match cb.recv(&mut buf) {
            Some(got) => out.extend_from_slice(&buf[..got]),
            None => break,
        }
    }
}

#[test]
fn ordered_delivery_over_lossy_reordering_channel() {
    let (a_to_b, b_to_a) = wire_pair();
    let mut a = block(1, 99, &a_to_b);
    let mut b = block(1, 99, &b_to_a);
    a.no_delay(true, 10, 2, true);
    b.no_delay(true, 10, 2, true);

    // The exact byte stream we expect out the other side.
    let mut expected = Vec::new();
    let mut messages = Vec::new();
    for i in 0..80u32 {
        let msg: Vec<u8> = (0..600).map(|j| ((i * 31 + j) % 251) as u8).collect();
        expected.extend_from_slice(&msg);
        messages.push(msg);
    }

    let mut rng = Lcg(0x5EED);
    let mut held_ab = Vec::new();
    let mut held_ba = Vec::new();
    let mut received = Vec::new();

    for msg in &messages {
        a.send(msg).unwrap();
    }

    for _ in 0..30_000 {
        a.update();
        b.update();
        deliver(&a_to_b, &mut b, 30, &mut rng, &mut held_ab);
        deliver(&b_to_a, &mut a, 10, &mut rng, &mut held_ba);
        drain(&mut b, &mut received);
        if received.len() >= expected.len() {
            break;
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    assert_eq!(received.len(), expected.len(), "transfer did not complete");
    assert_eq!(received, expected, "byte stream corrupted or reordered");
}

#[test]
fn congestion_invariants_hold_under_loss() {
    let (a_to_b, b_to_a) = wire_pair();
    let mut a = block(2, 7, &a_to_b);
    let mut b = block(2, 7, &b_to_a);
    // Congestion control on for this pair.
    a.no_delay(true, 10, 2, false);
    b.no_delay(true, 10, 2, false);

    let payload = vec![0xA5u8; 900];
    let mut rng = Lcg(42);
    let mut held_ab = Vec::new();
    let mut held_ba = Vec::new();
    let mut sink = Vec::new();

    for round in 0..4_000 {
        if round % 3 == 0 {
            let _ = a.send(&payload);
        }
        a.update();
        b.update();
        deliver(&a_to_b, &mut b, 25, &mut rng, &mut held_ab);
        deliver(&b_to_a, &mut a, 25, &mut rng, &mut held_ba);
        drain(&mut b, &mut sink);

        assert!(a.cwnd() >= 1, "cwnd collapsed to zero");
        assert!(a.ssthresh() >= 2, "ssthresh under floor");
        assert!(
            a.rmt_wnd() == 0 || a.cwnd() <= a.rmt_wnd(),
            "cwnd {} exceeded remote window {}",
            a.cwnd(),
            a.rmt_wnd()
        );
        std::thread::sleep(Duration::from_millis(1));
    }
    assert!(!sink.is_empty(), "no data made it through");
}

#[test]
fn fragmentation_reassembles_large_payloads() {
    let (a_to_b, b_to_a) = wire_pair();
    let mut a = block(3, 3, &a_to_b);
    let mut b = block(3, 3, &b_to_a);
    a.no_delay(true, 10, 2, true);
    b.no_delay(true, 10, 2, true);
    a.wnd_size(255, 255);
    b.wnd_size(255, 255);

    let payload: Vec<u8> = (0..100_000u32).map(|i| (i % 241) as u8).collect();
    a.send(&payload).unwrap();

    let mut rng = Lcg(1);
    let mut held = Vec::new();
    let mut received = Vec::new();
    for _ in 0..10_000 {
        a.update();
        b.update();
        deliver(&a_to_b, &mut b, 0, &mut rng, &mut held);
        deliver(&b_to_a, &mut a, 0, &mut rng, &mut held);
        drain(&mut b, &mut received);
        if received.len() >= payload.len() {
            break;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    assert_eq!(received, payload);
}

#[test]
fn oversized_payload_is_rejected() {
    let (wire, _) = wire_pair();
    let mut cb = block(4, 4, &wire);
    // 255 fragments of mss bytes is the hard cap.
    let too_big = vec![0u8; 1200 * 256];
    assert!(matches!(cb.send(&too_big), Err(TransportError::SendTooLarge)));
    assert!(cb.send(&[]).is_err());
}

#[test]
fn input_rejects_foreign_ids() {
    let (a_to_b, b_to_a) = wire_pair();
    let mut a = block(5, 500, &a_to_b);
    let mut b = block(6, 600, &b_to_a);
    a.no_delay(true, 10, 2, true);

    a.send(b"hello").unwrap();
    a.update();
    let datagram = a_to_b.lock().unwrap().pop_front().expect("no datagram flushed");
    assert!(matches!(b.input(&datagram, true, false), Err(TransportError::ConvMismatch)));
    assert!(matches!(b.input(&datagram[..10], true, false), Err(TransportError::InvalidPacket)));
}

//! Buffer pools.
//!
//! Datagram and payload buffers recycle through process-wide pools so the
//! per-packet hot path does not allocate. Ownership rule: a borrowed
//! buffer is returned exactly once — [`crate::Payload`] does it on drop,
//! segment bodies are recycled where the control block retires them.

use std::sync::Mutex;

use crate::DEFAULT_MTU;

/// Largest payload one session can buffer: a full receive window of
/// MTU-sized segments.
pub(crate) const MAX_PAYLOAD: usize = 256 * 1200;

const POOL_LIMIT: usize = 64;

pub(crate) struct BufferPool {
    free: Mutex<Vec<Vec<u8>>>,
    capacity: usize,
}

impl BufferPool {
    pub(crate) const fn new(capacity: usize) -> Self {
        Self { free: Mutex::new(Vec::new()), capacity }
    }

    /// Borrow a zeroed buffer of length `len` (≤ the pool's capacity).
    pub(crate) fn take(&self, len: usize) -> Vec<u8> {
        debug_assert!(len <= self.capacity);
        let mut buf = self
            .free
            .lock()
            .expect("buffer pool poisoned")
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(self.capacity));
        buf.clear();
        buf.resize(len, 0);
        buf
    }

    /// Return a buffer. Foreign buffers are simply dropped.
    pub(crate) fn put(&self, buf: Vec<u8>) {
        if buf.capacity() == 0 {
            return;
        }
        let mut free = self.free.lock().expect("buffer pool poisoned");
        if free.len() < POOL_LIMIT {
            free.push(buf);
        }
    }
}

/// Pool for segment bodies and scratch datagrams.
pub(crate) static XMIT_POOL: BufferPool = BufferPool::new(DEFAULT_MTU);

/// Pool for whole reassembled payloads.
pub(crate) static PAYLOAD_POOL: BufferPool = BufferPool::new(MAX_PAYLOAD);

//! Pooled application payload buffers.

use std::ops::{Deref, DerefMut};

use crate::pool::PAYLOAD_POOL;

/// A whole application message delivered by (or handed to) the transport.
///
/// The backing buffer is borrowed from a process-wide pool and returned on
/// drop, so every exit path of a forwarding task releases it exactly once.
pub struct Payload {
    buf: Vec<u8>,
}

impl Payload {
    /// Borrow a zeroed payload of length `len`.
    pub fn with_len(len: usize) -> Self {
        Self { buf: PAYLOAD_POOL.take(len) }
    }

    /// Borrow a payload holding a copy of `data`.
    pub fn copy_from(data: &[u8]) -> Self {
        let mut p = Self::with_len(data.len());
        p.buf.copy_from_slice(data);
        p
    }

    /// Shorten or zero-extend to `len`.
    pub fn resize(&mut self, len: usize) {
        self.buf.resize(len, 0);
    }
}

impl Deref for Payload {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl DerefMut for Payload {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Drop for Payload {
    fn drop(&mut self) {
        PAYLOAD_POOL.put(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips_through_the_pool() {
        let data = [1u8, 2, 3, 4];
        let p = Payload::copy_from(&data);
        assert_eq!(&*p, &data);
        drop(p);

        let q = Payload::with_len(8);
        assert_eq!(&*q, &[0u8; 8]);
    }
}

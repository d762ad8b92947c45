//! Session XOR keystream ("login pad").
//!
//! After the token exchange both peers know `client_seed ^ server_seed`;
//! each expands it into the same 4096-byte pad and XORs every subsequent
//! framed packet against it.

use crate::mt19937::Mt19937_64;

/// A 4096-byte XOR pad expanded from a 64-bit seed.
pub struct KeyBlock {
    seed: u64,
    data: [u8; 4096],
}

impl KeyBlock {
    /// Expand `seed` into a pad.
    ///
    /// The expansion re-seeds the generator once with its own first output
    /// and discards one further draw before filling the pad; both sides of
    /// the handshake perform the identical dance.
    pub fn new(seed: u64) -> Self {
        let mut rng = Mt19937_64::new(seed);
        let v = rng.next_u64();
        rng.seed(v);
        rng.next_u64();

        let mut data = [0u8; 4096];
        for chunk in data.chunks_exact_mut(8) {
            chunk.copy_from_slice(&rng.next_u64().to_be_bytes());
        }
        Self { seed, data }
    }

    /// The seed this pad was expanded from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The raw pad bytes.
    pub fn key(&self) -> &[u8] {
        &self.data
    }

    /// XOR `buf` in place against the pad, tiling modulo 4096.
    ///
    /// Involutive: applying it twice restores the input.
    pub fn xor(&self, buf: &mut [u8]) {
        for (i, b) in buf.iter_mut().enumerate() {
            *b ^= self.data[i % 4096];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_involutive() {
        let block = KeyBlock::new(0x1234_5678_9ABC_DEF0);
        let original: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let mut buf = original.clone();
        block.xor(&mut buf);
        assert_ne!(buf, original);
        block.xor(&mut buf);
        assert_eq!(buf, original);
    }

    #[test]
    fn same_seed_same_pad() {
        let a = KeyBlock::new(42);
        let b = KeyBlock::new(42);
        assert_eq!(a.key(), b.key());
    }
}

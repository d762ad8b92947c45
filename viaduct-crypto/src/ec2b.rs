//! Shared-key pad derivation from an `Ec2b` blob.
//!
//! The dispatch server hands clients a small binary blob (magic `Ec2b`, a
//! 16-byte scrambled key and 2048 bytes of data). Both sides derive the
//! same 4096-byte XOR pad from it: the key is unscrambled through an
//! AES-decryption-shaped transform, folded with the data words into a
//! 64-bit seed, and the seed is expanded with MT19937-64.

use crate::aes_tables::{
    AES_XOR_PAD_0, AES_XOR_PAD_1, GMUL_11, GMUL_13, GMUL_14, GMUL_9, KEY_XOR_PAD, SBOX_INV,
    SHIFT_ROWS_INV,
};
use crate::mt19937::Mt19937_64;
use crate::CryptoError;

const KEY_LEN: usize = 16;
const DATA_LEN: usize = 2048;
const BLOB_LEN: usize = 4 + 4 + KEY_LEN + 4 + DATA_LEN;

/// A parsed `Ec2b` blob and the XOR pad derived from it.
pub struct Ec2b {
    key: [u8; KEY_LEN],
    data: [u8; DATA_LEN],
    seed: u64,
    pad: [u8; 4096],
}

impl Ec2b {
    /// Parse a blob and derive its pad.
    pub fn load(blob: &[u8]) -> Result<Self, CryptoError> {
        if blob.len() < BLOB_LEN || &blob[0..4] != b"Ec2b" {
            return Err(CryptoError::InvalidKeyMaterial);
        }
        let key_len = u32::from_le_bytes(blob[4..8].try_into().unwrap());
        if key_len as usize != KEY_LEN {
            return Err(CryptoError::InvalidKeyMaterial);
        }
        let data_len = u32::from_le_bytes(blob[24..28].try_into().unwrap());
        if data_len as usize != DATA_LEN {
            return Err(CryptoError::InvalidKeyMaterial);
        }

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&blob[8..8 + KEY_LEN]);
        let mut data = [0u8; DATA_LEN];
        data.copy_from_slice(&blob[28..28 + DATA_LEN]);
        Ok(Self::derive(key, data))
    }

    /// Build a blob from fresh random key material (test and tooling use).
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        let mut data = [0u8; DATA_LEN];
        getrandom::getrandom(&mut key).expect("getrandom");
        getrandom::getrandom(&mut data).expect("getrandom");
        Self::derive(key, data)
    }

    fn derive(key: [u8; KEY_LEN], data: [u8; DATA_LEN]) -> Self {
        let mut scrambled = key;
        key_scramble(&mut scrambled);
        let seed = fold_seed(&scrambled, &data);

        let mut rng = Mt19937_64::new(seed);
        let mut pad = [0u8; 4096];
        for chunk in pad.chunks_exact_mut(8) {
            chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
        }
        Self { key, data, seed, pad }
    }

    /// Re-serialize the blob in wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BLOB_LEN);
        out.extend_from_slice(b"Ec2b");
        out.extend_from_slice(&(KEY_LEN as u32).to_le_bytes());
        out.extend_from_slice(&self.key);
        out.extend_from_slice(&(DATA_LEN as u32).to_le_bytes());
        out.extend_from_slice(&self.data);
        out
    }

    /// The derived 64-bit seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// XOR `buf` in place against the pad, tiling modulo 4096.
    pub fn xor(&self, buf: &mut [u8]) {
        for (i, b) in buf.iter_mut().enumerate() {
            *b ^= self.pad[i % 4096];
        }
    }
}

/// Ten rounds of the inverse-cipher-shaped scramble, keyed by the fixed
/// XOR pads rather than an expanded AES key schedule.
fn key_scramble(key: &mut [u8; 16]) {
    let mut round_keys = [[0u8; 16]; 11];
    for (r, rk) in round_keys.iter_mut().enumerate() {
        for (i, b) in rk.iter_mut().enumerate() {
            for j in 0..16 {
                let idx = (r << 8) + (i << 4) + j;
                *b ^= AES_XOR_PAD_1[idx] ^ AES_XOR_PAD_0[idx];
            }
        }
    }

    xor_round_key(key, &round_keys[0]);
    for rk in &round_keys[1..10] {
        sub_bytes_inv(key);
        shift_rows_inv(key);
        mix_cols_inv(key);
        xor_round_key(key, rk);
    }
    sub_bytes_inv(key);
    shift_rows_inv(key);
    xor_round_key(key, &round_keys[10]);

    for (b, k) in key.iter_mut().zip(KEY_XOR_PAD.iter()) {
        *b ^= k;
    }
}

fn xor_round_key(key: &mut [u8; 16], round_key: &[u8; 16]) {
    for (b, k) in key.iter_mut().zip(round_key.iter()) {
        *b ^= k;
    }
}

fn sub_bytes_inv(key: &mut [u8; 16]) {
    for b in key.iter_mut() {
        *b = SBOX_INV[*b as usize];
    }
}

fn shift_rows_inv(key: &mut [u8; 16]) {
    let tmp = *key;
    for (i, b) in key.iter_mut().enumerate() {
        *b = tmp[SHIFT_ROWS_INV[i] as usize];
    }
}

fn mix_cols_inv(key: &mut [u8; 16]) {
    for col in key.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0] as usize, col[1] as usize, col[2] as usize, col[3] as usize);
        col[0] = GMUL_14[a0] ^ GMUL_9[a3] ^ GMUL_13[a2] ^ GMUL_11[a1];
        col[1] = GMUL_14[a1] ^ GMUL_9[a0] ^ GMUL_13[a3] ^ GMUL_11[a2];
        col[2] = GMUL_14[a2] ^ GMUL_9[a1] ^ GMUL_13[a0] ^ GMUL_11[a3];
        col[3] = GMUL_14[a3] ^ GMUL_9[a2] ^ GMUL_13[a1] ^ GMUL_11[a0];
    }
}

fn fold_seed(key: &[u8; 16], data: &[u8; DATA_LEN]) -> u64 {
    let mut v = !0xCEAC_3B5A_8678_37AC_u64;
    v ^= u64::from_le_bytes(key[0..8].try_into().unwrap());
    v ^= u64::from_le_bytes(key[8..16].try_into().unwrap());
    for word in data.chunks_exact(8) {
        v ^= u64::from_le_bytes(word.try_into().unwrap());
    }
    v
}

//! CTR-DRBG (Counter-mode Deterministic Random Bit Generator).
//!
//! Counter-mode construction in the shape of NIST SP 800-90A §10.2, but
//! driven by the simplified [`spn`](crate::spn) cipher instead of AES and
//! without a derivation function: seed material is XORed directly into the
//! update keystream, so only the first 48 bytes of a seed influence the
//! state transition.

use crate::provider::Drbg;
use crate::spn::{SpnKey, SPN_BLOCK_SIZE, SPN_KEY_SIZE};
use zeroize::Zeroize;

/// Cipher key length in bytes.
const KEY_LEN: usize = SPN_KEY_SIZE;
/// Cipher block length in bytes.
const BLOCK_LEN: usize = SPN_BLOCK_SIZE;
/// Update width = key length + block length.
const SEED_LEN: usize = KEY_LEN + BLOCK_LEN;

/// CTR-DRBG context.
pub struct CtrDrbg {
    /// Cipher key (32 bytes).
    key: [u8; KEY_LEN],
    /// Counter block (16 bytes, big-endian).
    counter: [u8; BLOCK_LEN],
    /// Number of generate requests since last (re)seed.
    reseed_counter: u64,
}

impl Drop for CtrDrbg {
    fn drop(&mut self) {
        self.key.zeroize();
        self.counter.zeroize();
    }
}

/// Encrypt a single block under `key` in place.
fn encrypt_block(key: &[u8; KEY_LEN], block: &mut [u8; BLOCK_LEN]) {
    SpnKey::new(key).encrypt_block(block);
}

/// Increment a 128-bit counter (big-endian, wraps on overflow).
fn increment_counter(counter: &mut [u8; BLOCK_LEN]) {
    for b in counter.iter_mut().rev() {
        *b = b.wrapping_add(1);
        if *b != 0 {
            break;
        }
    }
}

impl CtrDrbg {
    /// Instantiate from seed material of any length.
    ///
    /// Key and counter start at zero and the seed is mixed in through one
    /// update call; bytes past the 48-byte update width are ignored.
    pub fn new(seed: &[u8]) -> Self {
        let mut drbg = CtrDrbg {
            key: [0u8; KEY_LEN],
            counter: [0u8; BLOCK_LEN],
            reseed_counter: 1,
        };
        drbg.update(seed);
        drbg
    }

    /// State transition: generate 48 bytes of keystream, XOR in the
    /// overlapping prefix of `provided_data`, and split the result into the
    /// new key and counter.
    fn update(&mut self, provided_data: &[u8]) {
        let mut temp = [0u8; SEED_LEN];
        let mut offset = 0;

        while offset < SEED_LEN {
            increment_counter(&mut self.counter);
            let mut block = self.counter;
            encrypt_block(&self.key, &mut block);

            let copy_len = (SEED_LEN - offset).min(BLOCK_LEN);
            temp[offset..offset + copy_len].copy_from_slice(&block[..copy_len]);
            offset += copy_len;
        }

        for (t, d) in temp.iter_mut().zip(provided_data.iter()) {
            *t ^= d;
        }

        self.key.copy_from_slice(&temp[..KEY_LEN]);
        self.counter.copy_from_slice(&temp[KEY_LEN..]);
        temp.zeroize();
    }

    /// Generate `num_bits` pseudorandom bits as `ceil(num_bits / 8)` bytes.
    pub fn generate(&mut self, num_bits: usize) -> Vec<u8> {
        let num_bytes = num_bits.div_ceil(8);
        let mut out = Vec::with_capacity(num_bytes + BLOCK_LEN);

        while out.len() < num_bytes {
            increment_counter(&mut self.counter);
            let mut block = self.counter;
            encrypt_block(&self.key, &mut block);
            out.extend_from_slice(&block);
        }
        out.truncate(num_bytes);

        self.update(&[]);
        self.reseed_counter += 1;
        out
    }

    /// Mix fresh seed material into the state and reset the reseed counter.
    pub fn reseed(&mut self, seed: &[u8]) {
        self.update(seed);
        self.reseed_counter = 1;
    }

    #[cfg(test)]
    fn snapshot(&self) -> ([u8; KEY_LEN], [u8; BLOCK_LEN]) {
        (self.key, self.counter)
    }
}

impl Drbg for CtrDrbg {
    fn generate(&mut self, num_bits: usize) -> Vec<u8> {
        CtrDrbg::generate(self, num_bits)
    }

    fn reseed(&mut self, seed: &[u8]) {
        CtrDrbg::reseed(self, seed);
    }

    fn name(&self) -> &'static str {
        "CTR-DRBG"
    }

    fn state_size(&self) -> usize {
        KEY_LEN + BLOCK_LEN + std::mem::size_of::<u64>()
    }
}

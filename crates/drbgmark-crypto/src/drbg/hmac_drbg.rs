//! HMAC-DRBG (NIST SP 800-90A §10.1.2), HMAC-SHA-256 profile.
//!
//! State is the HMAC key K and chaining value V, both 32 bytes. Output is
//! the chained sequence `V = HMAC(K, V)`; the update function rekeys with
//! domain-separation bytes 0x00/0x01.

use crate::hmac::{HmacSha256, HMAC_OUTPUT_SIZE};
use crate::provider::Drbg;
use zeroize::Zeroize;

/// HMAC-SHA-256 output size, the width of both state values.
const OUT_LEN: usize = HMAC_OUTPUT_SIZE;

/// HMAC-DRBG context.
pub struct HmacDrbg {
    /// HMAC key K (32 bytes).
    k: [u8; OUT_LEN],
    /// Chaining value V (32 bytes).
    v: [u8; OUT_LEN],
    /// Number of generate requests since last (re)seed.
    reseed_counter: u64,
}

impl Drop for HmacDrbg {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

impl HmacDrbg {
    /// Instantiate from seed material of any length (SP 800-90A §10.1.2.3):
    /// K = 0x00.., V = 0x01.., then one update with the seed.
    pub fn new(seed: &[u8]) -> Self {
        let mut drbg = HmacDrbg {
            k: [0x00u8; OUT_LEN],
            v: [0x01u8; OUT_LEN],
            reseed_counter: 1,
        };
        drbg.update(seed);
        drbg
    }

    /// HMAC-DRBG update function (SP 800-90A §10.1.2.2).
    fn update(&mut self, provided_data: &[u8]) {
        // K = HMAC(K, V || 0x00 || provided_data); V = HMAC(K, V)
        let mut msg = Vec::with_capacity(OUT_LEN + 1 + provided_data.len());
        msg.extend_from_slice(&self.v);
        msg.push(0x00);
        msg.extend_from_slice(provided_data);
        self.k = HmacSha256::mac(&self.k, &msg);
        self.v = HmacSha256::mac(&self.k, &self.v);

        if !provided_data.is_empty() {
            // Second round with domain byte 0x01.
            msg.clear();
            msg.extend_from_slice(&self.v);
            msg.push(0x01);
            msg.extend_from_slice(provided_data);
            self.k = HmacSha256::mac(&self.k, &msg);
            self.v = HmacSha256::mac(&self.k, &self.v);
        }
    }

    /// Generate `num_bits` pseudorandom bits as `ceil(num_bits / 8)` bytes.
    pub fn generate(&mut self, num_bits: usize) -> Vec<u8> {
        let num_bytes = num_bits.div_ceil(8);
        let mut out = Vec::with_capacity(num_bytes + OUT_LEN);

        while out.len() < num_bytes {
            self.v = HmacSha256::mac(&self.k, &self.v);
            out.extend_from_slice(&self.v);
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
    fn snapshot(&self) -> ([u8; OUT_LEN], [u8; OUT_LEN]) {
        (self.k, self.v)
    }
}

impl Drbg for HmacDrbg {
    fn generate(&mut self, num_bits: usize) -> Vec<u8> {
        HmacDrbg::generate(self, num_bits)
    }

    fn reseed(&mut self, seed: &[u8]) {
        HmacDrbg::reseed(self, seed);
    }

    fn name(&self) -> &'static str {
        "HMAC-DRBG"
    }

    fn state_size(&self) -> usize {
        OUT_LEN + OUT_LEN + std::mem::size_of::<u64>()
    }
}

//! Hash-DRBG (NIST SP 800-90A §10.1.1), SHA-256 profile.
//!
//! State is a pair of 55-byte (440-bit) big-endian values: the working value
//! V and the derived constant C. Generation hashes an incrementing copy of
//! V; the state transition is fixed-width modular addition
//! `V += Hash(0x03 || V) + C + reseed_counter`.

use super::add_be_mod;
use crate::provider::Drbg;
use crate::sha2::Sha256;
use zeroize::Zeroize;

/// Seed length in bytes for the SHA-256 profile (SP 800-90A Table 2).
const SEED_LEN: usize = 55;
/// Seed length in bits, the width of all modular arithmetic on V and C.
const SEED_BITS: u32 = (SEED_LEN * 8) as u32;

/// Hash-DRBG context.
pub struct HashDrbg {
    /// Working state value V (55 bytes, big-endian).
    v: [u8; SEED_LEN],
    /// Derived constant C (55 bytes, big-endian).
    c: [u8; SEED_LEN],
    /// Number of generate requests since last (re)seed.
    reseed_counter: u64,
}

impl Drop for HashDrbg {
    fn drop(&mut self) {
        self.v.zeroize();
        self.c.zeroize();
    }
}

/// Hash_df: derive `ceil(n_bits / 8)` bytes from `input` by hashing
/// `counter || be32(n_bits) || input` for a 1-based counter byte
/// (SP 800-90A §10.3.1).
fn hash_df(input: &[u8], n_bits: u32) -> Vec<u8> {
    let n_bytes = (n_bits as usize).div_ceil(8);
    let mut temp = Vec::with_capacity(n_bytes + 32);
    let mut counter: u8 = 1;

    while temp.len() < n_bytes {
        let mut msg = Vec::with_capacity(1 + 4 + input.len());
        msg.push(counter);
        msg.extend_from_slice(&n_bits.to_be_bytes());
        msg.extend_from_slice(input);

        temp.extend_from_slice(&Sha256::digest(&msg));
        counter = counter.wrapping_add(1);
    }

    temp.truncate(n_bytes);
    temp
}

impl HashDrbg {
    /// Instantiate from seed material of any length (SP 800-90A §10.1.1.2):
    /// `V = Hash_df(seed, 440)`, `C = Hash_df(0x00 || V, 440)`.
    pub fn new(seed: &[u8]) -> Self {
        let mut v = [0u8; SEED_LEN];
        v.copy_from_slice(&hash_df(seed, SEED_BITS));

        let mut drbg = HashDrbg {
            v,
            c: [0u8; SEED_LEN],
            reseed_counter: 1,
        };
        drbg.derive_c();
        drbg
    }

    /// `C = Hash_df(0x00 || V, 440)`.
    fn derive_c(&mut self) {
        let mut c_input = Vec::with_capacity(1 + SEED_LEN);
        c_input.push(0x00);
        c_input.extend_from_slice(&self.v);
        self.c.copy_from_slice(&hash_df(&c_input, SEED_BITS));
    }

    /// Hashgen (SP 800-90A §10.1.1.4): hash an incrementing working copy of
    /// V until `num_bytes` are collected.
    fn hashgen(&self, num_bytes: usize) -> Vec<u8> {
        let mut data = self.v;
        let mut out = Vec::with_capacity(num_bytes + 32);

        while out.len() < num_bytes {
            out.extend_from_slice(&Sha256::digest(&data));
            add_be_mod(&mut data, &[1]);
        }

        data.zeroize();
        out.truncate(num_bytes);
        out
    }

    /// Generate `num_bits` pseudorandom bits as `ceil(num_bits / 8)` bytes.
    pub fn generate(&mut self, num_bits: usize) -> Vec<u8> {
        let out = self.hashgen(num_bits.div_ceil(8));

        // H = Hash(0x03 || V)
        let mut h_input = Vec::with_capacity(1 + SEED_LEN);
        h_input.push(0x03);
        h_input.extend_from_slice(&self.v);
        let h = Sha256::digest(&h_input);

        // V = (V + H + C + reseed_counter) mod 2^440
        add_be_mod(&mut self.v, &h);
        let c = self.c;
        add_be_mod(&mut self.v, &c);
        add_be_mod(&mut self.v, &self.reseed_counter.to_be_bytes());

        self.reseed_counter += 1;
        out
    }

    /// Reseed (SP 800-90A §10.1.1.3):
    /// `V = Hash_df(0x01 || V || seed, 440)`, then re-derive C.
    pub fn reseed(&mut self, seed: &[u8]) {
        let mut seed_material = Vec::with_capacity(1 + SEED_LEN + seed.len());
        seed_material.push(0x01);
        seed_material.extend_from_slice(&self.v);
        seed_material.extend_from_slice(seed);

        self.v.copy_from_slice(&hash_df(&seed_material, SEED_BITS));
        seed_material.zeroize();

        self.derive_c();
        self.reseed_counter = 1;
    }

    #[cfg(test)]
    fn snapshot(&self) -> ([u8; SEED_LEN], [u8; SEED_LEN]) {
        (self.v, self.c)
    }
}

impl Drbg for HashDrbg {
    fn generate(&mut self, num_bits: usize) -> Vec<u8> {
        HashDrbg::generate(self, num_bits)
    }

    fn reseed(&mut self, seed: &[u8]) {
        HashDrbg::reseed(self, seed);
    }

    fn name(&self) -> &'static str {
        "Hash-DRBG"
    }

    fn state_size(&self) -> usize {
        SEED_LEN + SEED_LEN + std::mem::size_of::<u64>()
    }
}

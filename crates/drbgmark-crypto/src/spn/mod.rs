//! Simplified substitution-permutation-network block cipher.
//!
//! 16-byte block, 32-byte key, ten rounds of round-key XOR, S-box
//! substitution, byte permutation, and (for all but the final round) a
//! 4-byte-group linear mixing step.
//!
//! This is NOT AES and offers no established security margin; it borrows the
//! AES S-box table but nothing else survives from a real cipher. It exists
//! solely as the block primitive inside [`CtrDrbg`](crate::drbg::CtrDrbg),
//! where the comparison only needs a deterministic, well-diffusing
//! permutation.

use zeroize::Zeroize;

/// Block size in bytes (128 bits).
pub const SPN_BLOCK_SIZE: usize = 16;

/// Key size in bytes (256 bits).
pub const SPN_KEY_SIZE: usize = 32;

/// Number of rounds.
const ROUNDS: usize = 10;

/// Fixed byte substitution table (the AES S-box, reused as a convenient
/// known-good 8-bit permutation).
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// An SPN cipher key.
///
/// The fixed-width array makes a wrong-sized key a compile-time
/// impossibility rather than a runtime error.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SpnKey {
    key: [u8; SPN_KEY_SIZE],
}

impl SpnKey {
    /// Create a cipher instance from a 32-byte key.
    pub fn new(key: &[u8; SPN_KEY_SIZE]) -> Self {
        SpnKey { key: *key }
    }

    /// Encrypt a single 16-byte block in place.
    pub fn encrypt_block(&self, block: &mut [u8; SPN_BLOCK_SIZE]) {
        for round in 0..ROUNDS {
            // Round-key XOR: a 16-byte slice taken cyclically from the key.
            for (i, b) in block.iter_mut().enumerate() {
                *b ^= self.key[(round * SPN_BLOCK_SIZE + i) % SPN_KEY_SIZE];
            }

            // SubBytes
            for b in block.iter_mut() {
                *b = SBOX[*b as usize];
            }

            // Byte permutation
            let prev = *block;
            for i in 0..SPN_BLOCK_SIZE {
                block[i] = prev[(i + i / 4) % SPN_BLOCK_SIZE];
            }

            // Linear mixing over 4-byte groups, skipped in the last round.
            // Writes happen lane by lane; only the first lane's original
            // value is needed again, saved in `u`.
            if round < ROUNDS - 1 {
                for group in block.chunks_exact_mut(4) {
                    let t = group[0] ^ group[1] ^ group[2] ^ group[3];
                    let u = group[0];
                    group[0] ^= t ^ ((group[0] ^ group[1]) << 1);
                    group[1] ^= t ^ ((group[1] ^ group[2]) << 1);
                    group[2] ^= t ^ ((group[2] ^ group[3]) << 1);
                    group[3] ^= t ^ ((group[3] ^ u) << 1);
                }
            }
        }
    }
}

//! Deterministic Random Bit Generators.
//!
//! Three mechanisms behind the [`Drbg`] capability trait:
//! - CTR-DRBG — counter mode over the SPN block cipher
//! - Hash-DRBG (NIST SP 800-90A §10.1.1) — SHA-256 profile
//! - HMAC-DRBG (NIST SP 800-90A §10.1.2) — HMAC-SHA-256
//!
//! All three are instantiated from an arbitrary-length seed, carry a
//! `reseed_counter` that starts at 1 and increments on every generate call,
//! and accept reseeding at any time.

use crate::provider::Drbg;
use drbgmark_types::DrbgAlgId;

pub mod ctr_drbg;
pub use ctr_drbg::CtrDrbg;

pub mod hash_drbg;
pub use hash_drbg::HashDrbg;

pub mod hmac_drbg;
pub use hmac_drbg::HmacDrbg;

/// Instantiate a mechanism from seed material.
pub fn instantiate(alg: DrbgAlgId, seed: &[u8]) -> Box<dyn Drbg> {
    match alg {
        DrbgAlgId::CtrDrbg => Box::new(CtrDrbg::new(seed)),
        DrbgAlgId::HashDrbg => Box::new(HashDrbg::new(seed)),
        DrbgAlgId::HmacDrbg => Box::new(HmacDrbg::new(seed)),
    }
}

/// Big-endian modular addition: `v = (v + addend) mod 2^(8*len)`.
///
/// The addend is aligned to the least significant end and may be shorter
/// than `v`; carry past the most significant byte is discarded.
pub(crate) fn add_be_mod(v: &mut [u8], addend: &[u8]) {
    let len = v.len();
    let alen = addend.len().min(len);
    let mut carry: u16 = 0;
    for i in (0..len).rev() {
        let a = if i >= len - alen {
            addend[addend.len() - (len - i)] as u16
        } else {
            0
        };
        let sum = v[i] as u16 + a + carry;
        v[i] = sum as u8;
        carry = sum >> 8;
    }
}

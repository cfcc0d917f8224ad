#![forbid(unsafe_code)]
#![doc = "Deterministic random bit generators and their underlying primitives."]

//! Three DRBG mechanisms behind one capability trait:
//!
//! - [`drbg::CtrDrbg`] — counter mode over a 16-byte-block SPN cipher
//! - [`drbg::HashDrbg`] — NIST SP 800-90A Hash_DRBG, SHA-256 profile
//! - [`drbg::HmacDrbg`] — NIST SP 800-90A HMAC_DRBG, SHA-256 profile
//!
//! Every operation in this crate is total over its documented input domain:
//! empty seeds, empty provided-data, and zero-bit requests are all valid.

pub mod drbg;
pub mod hmac;
pub mod provider;
pub mod sha2;
pub mod spn;

pub use drbg::{instantiate, CtrDrbg, HashDrbg, HmacDrbg};
pub use provider::Drbg;

#![forbid(unsafe_code)]
#![doc = "Common types, mechanism identifiers, and error codes for drbgmark."]

pub mod algorithm;
pub mod error;

pub use algorithm::*;
pub use error::*;

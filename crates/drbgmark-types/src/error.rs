/// Errors raised by the benchmarking front end.
///
/// The cryptographic core itself is total over its input domain and has no
/// error taxonomy; everything here belongs to argument parsing and report
/// emission.
#[derive(Debug, thiserror::Error)]
pub enum DrbgError {
    #[error("unknown mechanism: {0} (use ctr, hash, or hmac)")]
    UnknownMechanism(String),
    #[error("invalid hex string")]
    InvalidHex,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

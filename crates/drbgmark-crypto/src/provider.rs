//! Capability trait for DRBG mechanisms.
//!
//! The three mechanisms have unrelated internal state shapes, so the trait
//! is a minimal four-method capability set rather than a shared base with
//! common fields. Every method is total: empty seeds and zero-bit requests
//! are valid inputs, not errors.

/// A deterministic random bit generator.
///
/// Each instance exclusively owns its secret state; every call mutates that
/// state in place. Concurrent use of one instance must be serialized by the
/// caller, but distinct instances share nothing and may run in parallel.
pub trait Drbg: Send + Sync {
    /// Generate `num_bits` pseudorandom bits, returned as
    /// `ceil(num_bits / 8)` bytes. `num_bits = 0` yields an empty vector but
    /// still advances the internal state.
    ///
    /// Bits beyond `num_bits` in the final byte are left as generated;
    /// callers that need bit-exact lengths mask them off.
    fn generate(&mut self, num_bits: usize) -> Vec<u8>;

    /// Mix fresh seed material (any length, including empty) into the state
    /// and reset the reseed counter to 1.
    fn reseed(&mut self, seed: &[u8]);

    /// Display name of the mechanism.
    fn name(&self) -> &'static str;

    /// Internal state size in bytes.
    fn state_size(&self) -> usize;
}

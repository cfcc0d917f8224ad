//! HMAC-SHA-256 (RFC 2104).
//!
//! HMAC(K, m) = H((K' XOR opad) || H((K' XOR ipad) || m))
//!
//! where K' is the key padded/hashed to the 64-byte SHA-256 block size,
//! ipad = 0x36, opad = 0x5c. The DRBG profile always supplies 32-byte keys,
//! which are zero-padded; longer keys are hashed down first.

use crate::sha2::{Sha256, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};
use zeroize::Zeroize;

/// HMAC-SHA-256 output size in bytes.
pub const HMAC_OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;

/// HMAC-SHA-256 context.
pub struct HmacSha256 {
    /// Inner hash, initialized with the ipad-xored key.
    inner: Sha256,
    /// Outer hash, initialized with the opad-xored key.
    outer: Sha256,
    /// Processed key block, kept for reset.
    key_block: [u8; SHA256_BLOCK_SIZE],
}

impl HmacSha256 {
    /// Create a new HMAC context with the given key.
    pub fn new(key: &[u8]) -> Self {
        let mut key_block = [0u8; SHA256_BLOCK_SIZE];
        if key.len() > SHA256_BLOCK_SIZE {
            let mut hashed = Sha256::digest(key);
            key_block[..SHA256_OUTPUT_SIZE].copy_from_slice(&hashed);
            hashed.zeroize();
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut ctx = HmacSha256 {
            inner: Sha256::new(),
            outer: Sha256::new(),
            key_block,
        };
        ctx.absorb_pads();
        ctx
    }

    /// Feed data into the MAC computation.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalize the MAC and return the 32-byte tag.
    ///
    /// Call [`reset`](Self::reset) before reusing the context.
    pub fn finish(&mut self) -> [u8; HMAC_OUTPUT_SIZE] {
        let mut inner_hash = self.inner.finish();
        self.outer.update(&inner_hash);
        inner_hash.zeroize();
        self.outer.finish()
    }

    /// Reset the context for a new message under the same key.
    pub fn reset(&mut self) {
        self.inner.reset();
        self.outer.reset();
        self.absorb_pads();
    }

    /// One-shot HMAC computation.
    pub fn mac(key: &[u8], data: &[u8]) -> [u8; HMAC_OUTPUT_SIZE] {
        let mut ctx = Self::new(key);
        ctx.update(data);
        ctx.finish()
    }

    fn absorb_pads(&mut self) {
        let mut pad = [0u8; SHA256_BLOCK_SIZE];
        for (p, k) in pad.iter_mut().zip(self.key_block.iter()) {
            *p = k ^ 0x36;
        }
        self.inner.update(&pad);
        for (p, k) in pad.iter_mut().zip(self.key_block.iter()) {
            *p = k ^ 0x5c;
        }
        self.outer.update(&pad);
        pad.zeroize();
    }
}

impl Drop for HmacSha256 {
    fn drop(&mut self) {
        self.key_block.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    // RFC 4231 Test Case 1
    #[test]
    fn test_hmac_sha256_case1() {
        let key = [0x0b; 20];
        let data = b"Hi There";
        let expected = "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7";

        assert_eq!(hex(&HmacSha256::mac(&key, data)), expected);
    }

    // RFC 4231 Test Case 2
    #[test]
    fn test_hmac_sha256_case2() {
        let key = b"Jefe";
        let data = b"what do ya want for nothing?";
        let expected = "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";

        assert_eq!(hex(&HmacSha256::mac(key, data)), expected);
    }

    // RFC 4231 Test Case 3
    #[test]
    fn test_hmac_sha256_case3() {
        let key = [0xaa; 20];
        let data = [0xdd; 50];
        let expected = "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe";

        assert_eq!(hex(&HmacSha256::mac(&key, &data)), expected);
    }

    // RFC 4231 Test Case 4
    #[test]
    fn test_hmac_sha256_case4() {
        let key: Vec<u8> = (0x01..=0x19).collect();
        let data = [0xcd; 50];
        let expected = "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b";

        assert_eq!(hex(&HmacSha256::mac(&key, &data)), expected);
    }

    // RFC 4231 Test Case 6 (key longer than block size)
    #[test]
    fn test_hmac_sha256_case6() {
        let key = [0xaa; 131];
        let data = b"Test Using Larger Than Block-Size Key - Hash Key First";
        let expected = "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54";

        assert_eq!(hex(&HmacSha256::mac(&key, data)), expected);
    }

    // RFC 4231 Test Case 7 (key and data longer than block size)
    #[test]
    fn test_hmac_sha256_case7() {
        let key = [0xaa; 131];
        let data =
            b"This is a test using a larger than block-size key and a larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.";
        let expected = "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2";

        assert_eq!(hex(&HmacSha256::mac(&key, data)), expected);
    }

    #[test]
    fn test_hmac_reset() {
        let key = b"Jefe";
        let data = b"what do ya want for nothing?";
        let expected = "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";

        let mut ctx = HmacSha256::new(key);
        ctx.update(data);
        assert_eq!(hex(&ctx.finish()), expected);

        ctx.reset();
        ctx.update(data);
        assert_eq!(hex(&ctx.finish()), expected);
    }

    // 32-byte zero-padded key, the exact profile the DRBGs use
    #[test]
    fn test_hmac_32_byte_key_matches_padded() {
        let key = [0x42u8; 32];
        let mut padded = [0u8; 64];
        padded[..32].copy_from_slice(&key);

        assert_eq!(
            HmacSha256::mac(&key, b"drbg profile"),
            HmacSha256::mac(&padded, b"drbg profile")
        );
    }
}

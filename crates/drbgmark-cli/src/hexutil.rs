//! Hex encoding/decoding for seeds and generated output.

use drbgmark_types::DrbgError;

/// Encode bytes as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a hex string; rejects odd lengths and non-hex characters.
pub fn decode(s: &str) -> Result<Vec<u8>, DrbgError> {
    if s.len() % 2 != 0 || !s.is_ascii() {
        return Err(DrbgError::InvalidHex);
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| DrbgError::InvalidHex))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let bytes = [0x00, 0x01, 0xab, 0xff];
        assert_eq!(encode(&bytes), "0001abff");
        assert_eq!(decode("0001abff").unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode("abc").is_err());
        assert!(decode("zz").is_err());
        assert!(decode("").unwrap().is_empty());
    }
}

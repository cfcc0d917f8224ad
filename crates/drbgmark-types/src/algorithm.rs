use crate::error::DrbgError;

/// DRBG mechanism identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrbgAlgId {
    /// Counter-mode DRBG over a 16-byte-block SPN cipher.
    CtrDrbg,
    /// Hash-DRBG over SHA-256 (SP 800-90A §10.1.1).
    HashDrbg,
    /// HMAC-DRBG over HMAC-SHA-256 (SP 800-90A §10.1.2).
    HmacDrbg,
}

impl DrbgAlgId {
    /// All mechanisms, in the order the comparison harness runs them.
    pub const ALL: [DrbgAlgId; 3] = [Self::CtrDrbg, Self::HashDrbg, Self::HmacDrbg];

    /// Display name of the mechanism.
    pub fn name(self) -> &'static str {
        match self {
            Self::CtrDrbg => "CTR-DRBG",
            Self::HashDrbg => "Hash-DRBG",
            Self::HmacDrbg => "HMAC-DRBG",
        }
    }
}

impl std::str::FromStr for DrbgAlgId {
    type Err = DrbgError;

    /// Accepts both short (`ctr`) and display (`CTR-DRBG`) spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ctr" | "ctr-drbg" => Ok(Self::CtrDrbg),
            "hash" | "hash-drbg" => Ok(Self::HashDrbg),
            "hmac" | "hmac-drbg" => Ok(Self::HmacDrbg),
            _ => Err(DrbgError::UnknownMechanism(s.to_string())),
        }
    }
}

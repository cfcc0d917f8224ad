//! Generate pseudorandom bytes from one mechanism and print them as hex.

use drbgmark_crypto::drbg::instantiate;
use drbgmark_types::DrbgAlgId;

use crate::hexutil;

/// Default seed width in bytes when sourcing from system entropy.
const SEED_LEN: usize = 48;

pub fn run(
    num: usize,
    mechanism: &str,
    seed_hex: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    if num == 0 || num > 1_048_576 {
        return Err("num must be between 1 and 1048576".into());
    }
    let alg: DrbgAlgId = mechanism.parse()?;

    let seed = match seed_hex {
        Some(h) => hexutil::decode(h)?,
        None => {
            let mut seed = vec![0u8; SEED_LEN];
            getrandom::getrandom(&mut seed).map_err(|e| format!("getrandom failed: {e}"))?;
            seed
        }
    };

    let mut drbg = instantiate(alg, &seed);
    let out = drbg.generate(num * 8);
    println!("{}", hexutil::encode(&out));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_hmac() {
        run(16, "hmac", None).unwrap();
    }

    #[test]
    fn test_rand_fixed_seed_all_mechanisms() {
        for mech in ["ctr", "hash", "hmac"] {
            run(32, mech, Some("00112233445566778899aabbccddeeff")).unwrap();
        }
    }

    #[test]
    fn test_rand_zero_bytes_rejected() {
        assert!(run(0, "hmac", None).is_err());
    }

    #[test]
    fn test_rand_unknown_mechanism_rejected() {
        assert!(run(16, "aes", None).is_err());
    }
}

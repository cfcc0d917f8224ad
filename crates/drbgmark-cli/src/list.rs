//! List available DRBG mechanisms and their internal state sizes.

use drbgmark_crypto::drbg::instantiate;
use drbgmark_types::DrbgAlgId;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("DRBG mechanisms:");
    for alg in DrbgAlgId::ALL {
        let drbg = instantiate(alg, &[]);
        println!("  {:10} state: {:3} bytes", drbg.name(), drbg.state_size());
    }
    Ok(())
}

//! Mechanism-independent properties, exercised through the `Drbg` trait the
//! way the benchmark harness drives the generators.

use drbgmark_crypto::drbg::instantiate;
use drbgmark_types::DrbgAlgId;

const SEED: &[u8] = b"shared comparison seed: 48 bytes from entropy...";

#[test]
fn determinism_from_shared_seed() {
    for alg in DrbgAlgId::ALL {
        let mut a = instantiate(alg, SEED);
        let mut b = instantiate(alg, SEED);
        assert_eq!(
            a.generate(4096),
            b.generate(4096),
            "{} not deterministic",
            alg.name()
        );
    }
}

#[test]
fn length_contract() {
    for alg in DrbgAlgId::ALL {
        let mut drbg = instantiate(alg, SEED);
        for (num_bits, expect_bytes) in
            [(0usize, 0usize), (1, 1), (7, 1), (8, 1), (9, 2), (1_000_000, 125_000)]
        {
            assert_eq!(
                drbg.generate(num_bits).len(),
                expect_bytes,
                "{}: generate({num_bits})",
                alg.name()
            );
        }
    }
}

#[test]
fn reseed_changes_trajectory() {
    for alg in DrbgAlgId::ALL {
        let mut reseeded = instantiate(alg, SEED);
        let mut control = instantiate(alg, SEED);

        // Bring both to the same post-seed state.
        let _ = reseeded.generate(256);
        let _ = control.generate(256);

        reseeded.reseed(b"different seed material");
        assert_ne!(
            reseeded.generate(1024),
            control.generate(1024),
            "{}: reseed did not change trajectory",
            alg.name()
        );
    }
}

#[test]
fn different_seeds_diverge() {
    for alg in DrbgAlgId::ALL {
        let mut a = instantiate(alg, b"seed one");
        let mut b = instantiate(alg, b"seed two");
        assert_ne!(a.generate(1024), b.generate(1024), "{}", alg.name());
    }
}

#[test]
fn set_bit_fraction_near_half() {
    // Regression guard on gross bias, not a randomness certification.
    const NUM_BITS: usize = 1_000_000;
    for alg in DrbgAlgId::ALL {
        let mut drbg = instantiate(alg, SEED);
        let data = drbg.generate(NUM_BITS);

        let ones: u32 = data.iter().map(|b| b.count_ones()).sum();
        let fraction = ones as f64 / NUM_BITS as f64;
        assert!(
            (fraction - 0.5).abs() < 0.01,
            "{}: set-bit fraction {fraction}",
            alg.name()
        );
    }
}

#[test]
fn advertised_names_and_state_sizes() {
    let expected = [
        (DrbgAlgId::CtrDrbg, "CTR-DRBG", 56usize),
        (DrbgAlgId::HashDrbg, "Hash-DRBG", 118),
        (DrbgAlgId::HmacDrbg, "HMAC-DRBG", 72),
    ];
    for (alg, name, state_size) in expected {
        let drbg = instantiate(alg, SEED);
        assert_eq!(drbg.name(), name);
        assert_eq!(drbg.state_size(), state_size);
    }
}

#[test]
fn mechanisms_produce_distinct_streams() {
    // Same seed, three mechanisms: outputs must be unrelated.
    let mut outputs: Vec<Vec<u8>> = DrbgAlgId::ALL
        .iter()
        .map(|&alg| instantiate(alg, SEED).generate(1024))
        .collect();
    outputs.dedup();
    assert_eq!(outputs.len(), 3);
}

//! Benchmark harness: drives every mechanism through the `Drbg` trait and
//! records time, space, and bit-distribution metrics.

use std::time::Instant;

use drbgmark_crypto::drbg::instantiate;
use drbgmark_types::DrbgAlgId;

use crate::hexutil;
use crate::report;

/// Bit lengths tested per mechanism: 10^1 through 10^7.
pub const BIT_LENGTHS: [usize; 7] = [10, 100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Default seed width in bytes when sourcing from system entropy.
const SEED_LEN: usize = 48;

/// Metrics from one generate call.
pub struct BenchResult {
    pub name: &'static str,
    pub num_bits: usize,
    /// Wall-clock generation time in microseconds.
    pub generation_time_us: f64,
    pub state_size: usize,
    pub output_size: usize,
    pub zeros: usize,
    pub ones: usize,
    /// ones / zeros.
    pub ratio: f64,
    /// Absolute deviation of the set-bit fraction from 0.5.
    pub bias: f64,
    pub bits_per_us: f64,
}

/// Count zero and one bits over the first `num_bits` bits of `data`.
pub fn count_bits(data: &[u8], num_bits: usize) -> (usize, usize) {
    let mut ones = 0usize;
    let mut counted = 0usize;

    for &byte in data {
        if counted + 8 <= num_bits {
            ones += byte.count_ones() as usize;
            counted += 8;
        } else {
            for bit in (0..8).rev() {
                if counted == num_bits {
                    break;
                }
                ones += ((byte >> bit) & 1) as usize;
                counted += 1;
            }
            break;
        }
    }

    (counted - ones, ones)
}

/// Time one generate call and derive all metrics.
pub fn run_one(drbg: &mut dyn drbgmark_crypto::Drbg, num_bits: usize) -> BenchResult {
    let state_size = drbg.state_size();
    let name = drbg.name();

    let start = Instant::now();
    let data = drbg.generate(num_bits);
    let generation_time_us = start.elapsed().as_secs_f64() * 1e6;

    let (zeros, ones) = count_bits(&data, num_bits);
    let ratio = if zeros > 0 { ones as f64 / zeros as f64 } else { 0.0 };
    let bias = if num_bits > 0 {
        (0.5 - ones as f64 / num_bits as f64).abs()
    } else {
        0.0
    };
    let bits_per_us = if generation_time_us > 0.0 {
        num_bits as f64 / generation_time_us
    } else {
        0.0
    };

    BenchResult {
        name,
        num_bits,
        generation_time_us,
        state_size,
        output_size: data.len(),
        zeros,
        ones,
        ratio,
        bias,
        bits_per_us,
    }
}

pub fn run(
    seed_hex: Option<&str>,
    csv: &str,
    html: Option<&str>,
    plot: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let seed = match seed_hex {
        Some(h) => hexutil::decode(h)?,
        None => {
            let mut seed = vec![0u8; SEED_LEN];
            getrandom::getrandom(&mut seed).map_err(|e| format!("getrandom failed: {e}"))?;
            seed
        }
    };

    println!("drbgmark: DRBG comparison benchmark");
    println!("seed: {} bytes", seed.len());
    println!();

    println!("internal state sizes:");
    for alg in DrbgAlgId::ALL {
        let drbg = instantiate(alg, &seed);
        println!("  {:10} {:4} bytes", drbg.name(), drbg.state_size());
    }
    println!();

    let total = DrbgAlgId::ALL.len() * BIT_LENGTHS.len();
    let mut current = 0;
    let mut results = Vec::with_capacity(total);

    for alg in DrbgAlgId::ALL {
        let mut drbg = instantiate(alg, &seed);
        // Reseed from the shared seed so every mechanism starts the ladder
        // from an equivalent post-seed state.
        drbg.reseed(&seed);

        for num_bits in BIT_LENGTHS {
            current += 1;
            eprint!("\r  [{current}/{total}] {:10} {num_bits:>10} bits", drbg.name());
            results.push(run_one(drbg.as_mut(), num_bits));
        }
    }
    eprintln!();
    println!();

    print_table(&results);
    print_summary(&results);

    report::export_csv(&results, csv)?;
    println!("csv written to {csv}");
    if let Some(path) = html {
        report::write_html(&results, path)?;
        println!("html report written to {path}");
    }
    if let Some(path) = plot {
        report::write_plot_script(csv, path)?;
        println!("plot script written to {path}");
    }

    Ok(())
}

fn print_table(results: &[BenchResult]) {
    println!(
        "{:10} {:>10} {:>14} {:>12} {:>12} {:>12}",
        "DRBG", "bits", "time (us)", "zeros", "ones", "bias (%)"
    );
    for r in results {
        println!(
            "{:10} {:>10} {:>14.2} {:>12} {:>12} {:>12.6}",
            r.name,
            r.num_bits,
            r.generation_time_us,
            r.zeros,
            r.ones,
            r.bias * 100.0
        );
    }
    println!();
}

fn print_summary(results: &[BenchResult]) {
    println!("summary:");
    for alg in DrbgAlgId::ALL {
        let rows: Vec<&BenchResult> = results.iter().filter(|r| r.name == alg.name()).collect();
        if rows.is_empty() {
            continue;
        }
        let total_time_ms: f64 = rows.iter().map(|r| r.generation_time_us).sum::<f64>() / 1000.0;
        let avg_bias: f64 = rows.iter().map(|r| r.bias).sum::<f64>() / rows.len() as f64;
        let max_throughput = rows.iter().map(|r| r.bits_per_us).fold(0.0, f64::max);

        println!("  {}:", alg.name());
        println!("    state size:     {} bytes", rows[0].state_size);
        println!("    total time:     {total_time_ms:.2} ms");
        println!("    avg bias:       {:.6} %", avg_bias * 100.0);
        println!("    max throughput: {max_throughput:.2} bits/us");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bits_full_bytes() {
        // 0xF0 0x0F = 8 ones, 8 zeros over 16 bits.
        assert_eq!(count_bits(&[0xF0, 0x0F], 16), (8, 8));
        assert_eq!(count_bits(&[0xFF], 8), (0, 8));
        assert_eq!(count_bits(&[0x00], 8), (8, 0));
    }

    #[test]
    fn test_count_bits_partial_final_byte() {
        // Only the top 4 bits of 0xF0 are counted.
        assert_eq!(count_bits(&[0xF0], 4), (0, 4));
        // 10 bits of 0xFF 0xC0: all ones.
        assert_eq!(count_bits(&[0xFF, 0xC0], 10), (0, 10));
        assert_eq!(count_bits(&[], 0), (0, 0));
    }

    #[test]
    fn test_run_one_metrics() {
        let mut drbg = instantiate(DrbgAlgId::HmacDrbg, b"bench harness test seed");
        let r = run_one(drbg.as_mut(), 1000);

        assert_eq!(r.name, "HMAC-DRBG");
        assert_eq!(r.num_bits, 1000);
        assert_eq!(r.output_size, 125);
        assert_eq!(r.zeros + r.ones, 1000);
        assert_eq!(r.state_size, 72);
        assert!(r.bias < 0.5);
    }

    #[test]
    fn test_run_one_sub_byte_request() {
        let mut drbg = instantiate(DrbgAlgId::CtrDrbg, &[0x42; 48]);
        let r = run_one(drbg.as_mut(), 10);
        assert_eq!(r.output_size, 2);
        assert_eq!(r.zeros + r.ones, 10);
    }
}

//! Primitive and generator throughput benchmarks.
//!
//! Run with: cargo bench -p drbgmark-crypto

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use drbgmark_crypto::drbg::{CtrDrbg, HashDrbg, HmacDrbg};
use drbgmark_crypto::hmac::HmacSha256;
use drbgmark_crypto::sha2::Sha256;
use drbgmark_crypto::spn::SpnKey;

fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for size in [64usize, 1024, 16384, 1048576] {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];

        group.bench_with_input(BenchmarkId::new("digest", size), &size, |b, _| {
            b.iter(|| Sha256::digest(&data));
        });
    }

    group.finish();
}

fn bench_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac-sha256");

    let key = [0x42u8; 32];
    for size in [64usize, 1024, 16384] {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];

        group.bench_with_input(BenchmarkId::new("mac", size), &size, |b, _| {
            b.iter(|| HmacSha256::mac(&key, &data));
        });
    }

    group.finish();
}

fn bench_spn(c: &mut Criterion) {
    let key = [0x42u8; 32];
    let cipher = SpnKey::new(&key);
    let mut block = [0u8; 16];

    c.bench_function("spn/encrypt_block", |b| {
        b.iter(|| cipher.encrypt_block(&mut block));
    });
}

fn bench_drbg_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("drbg-generate");
    let seed = [0x42u8; 48];

    for num_bits in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Bytes((num_bits / 8) as u64));

        let mut ctr = CtrDrbg::new(&seed);
        group.bench_with_input(BenchmarkId::new("ctr", num_bits), &num_bits, |b, &n| {
            b.iter(|| ctr.generate(n));
        });

        let mut hash = HashDrbg::new(&seed);
        group.bench_with_input(BenchmarkId::new("hash", num_bits), &num_bits, |b, &n| {
            b.iter(|| hash.generate(n));
        });

        let mut hmac = HmacDrbg::new(&seed);
        group.bench_with_input(BenchmarkId::new("hmac", num_bits), &num_bits, |b, &n| {
            b.iter(|| hmac.generate(n));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sha256,
    bench_hmac,
    bench_spn,
    bench_drbg_generate
);
criterion_main!(benches);

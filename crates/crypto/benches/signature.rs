//! Benchmarks for header generation and verification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hooksign_crypto::{generate_header, verify_header_with_tolerance};

const SECRET: &str = "8e1138dbb41c5726420bd0c909ecb9a70ea01eff";

fn generate_test_payload(size: usize) -> String {
    let text = "{\"event\":\"delivery.created\",\"id\":42} ";
    text.repeat(size / text.len() + 1)[..size].to_string()
}

fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature");

    for size in [256, 4096, 65536].iter() {
        let payload = generate_test_payload(*size);
        let header = generate_header(&payload, SECRET, Some(1632994609));

        group.bench_with_input(BenchmarkId::new("generate", size), &payload, |b, payload| {
            b.iter(|| generate_header(black_box(payload), SECRET, Some(1632994609)))
        });

        group.bench_with_input(BenchmarkId::new("verify", size), &payload, |b, payload| {
            b.iter(|| verify_header_with_tolerance(black_box(payload), header.as_str(), SECRET, 0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_signature);
criterion_main!(benches);

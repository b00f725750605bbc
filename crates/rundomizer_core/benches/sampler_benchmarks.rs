//! Criterion benchmarks for the sampler.
//!
//! Compares the modulo and rejection policies across domain sizes, and the
//! cost of the OS entropy source against a seeded generator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rundomizer_core::sampler::{BiasPolicy, Sampler, SeededEntropy};
use rundomizer_core::types::SampleRequest;

/// Benchmark single integer draws per policy and domain size.
fn bench_sample_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_int");

    for max in [6i64, 1000, 100_000, (1 << 31) + 1] {
        for policy in [BiasPolicy::Modulo, BiasPolicy::Rejection] {
            let mut sampler = Sampler::new(SeededEntropy::from_seed(42)).with_policy(policy);
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), max),
                &max,
                |b, &max| {
                    b.iter(|| sampler.sample_int(black_box(1), black_box(max)).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark batch draws at the generator caps.
fn bench_sample_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_many");

    for count in [6usize, 1000, 100_000] {
        let request = SampleRequest::range(1, 100).with_count(count);
        let mut sampler = Sampler::new(SeededEntropy::from_seed(7));
        group.bench_with_input(BenchmarkId::new("seeded", count), &request, |b, request| {
            b.iter(|| sampler.sample_many(black_box(request)).unwrap());
        });
    }

    let request = SampleRequest::range(1, 100).with_count(1000);
    let mut sampler = Sampler::from_os();
    group.bench_function("os_1000", |b| {
        b.iter(|| sampler.sample_many(black_box(&request)).unwrap());
    });

    group.finish();
}

/// Benchmark distinct draws from a full participant list.
fn bench_sample_distinct(c: &mut Criterion) {
    let participants: Vec<String> = (0..1000).map(|i| format!("P{}", i)).collect();
    let mut sampler = Sampler::new(SeededEntropy::from_seed(3));

    c.bench_function("sample_distinct_10_of_1000", |b| {
        b.iter(|| sampler.sample_distinct(black_box(&participants), 10).unwrap());
    });
}

criterion_group!(benches, bench_sample_int, bench_sample_many, bench_sample_distinct);
criterion_main!(benches);

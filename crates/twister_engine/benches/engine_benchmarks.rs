//! Criterion benchmarks for twister_engine primitives.
//!
//! Measures single-draw throughput of the uniform and Gaussian
//! primitives and the cost of stream-position jumps at several
//! distances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use twister_engine::RandomEngine;

/// Benchmark the elementary one-draw primitives.
fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("uniform_int", |b| {
        let mut engine = RandomEngine::new(42);
        b.iter(|| engine.uniform_int(black_box(0), black_box(1000)));
    });

    group.bench_function("uniform_float", |b| {
        let mut engine = RandomEngine::new(42);
        b.iter(|| engine.uniform_float(black_box(-1.0), black_box(1.0)));
    });

    group.bench_function("gaussian", |b| {
        let mut engine = RandomEngine::new(42);
        b.iter(|| engine.gaussian(black_box(0.0), black_box(1.0)));
    });

    group.finish();
}

/// Benchmark composite operations whose cost scales with a caller count.
fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("composites");

    for force in [2u32, 8, 32] {
        group.bench_with_input(BenchmarkId::new("biased_float", force), &force, |b, &force| {
            let mut engine = RandomEngine::new(42);
            b.iter(|| engine.biased_float(0.0, 1.0, black_box(0.5), force));
        });
    }

    let weights: Vec<f64> = (0..64).map(|i| f64::from(i % 7)).collect();
    group.bench_function("weighted_index_64", |b| {
        let mut engine = RandomEngine::new(42);
        b.iter(|| engine.weighted_index(black_box(&weights)));
    });

    group.finish();
}

/// Benchmark forward discards and reset-and-replay rewinds.
fn bench_stream_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_position");

    for distance in [1_000u64, 100_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::new("discard", distance), &distance, |b, &d| {
            b.iter(|| {
                let mut engine = RandomEngine::new(42);
                engine.discard(black_box(d));
                engine
            });
        });

        group.bench_with_input(BenchmarkId::new("rewind", distance), &distance, |b, &d| {
            let mut engine = RandomEngine::new(42);
            engine.advance(d + 1);
            b.iter(|| {
                engine.jump_to_count(black_box(d));
                engine.advance(1);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_primitives,
    bench_composites,
    bench_stream_position
);
criterion_main!(benches);

//! Kernel benchmark: scalar loop vs ndarray-vectorized reduction.
//!
//! Run with:
//! - `cargo bench --bench mean_bench`
//! - `cargo bench --bench mean_bench harmonic_mean/Scalar -- --noplot`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use harmony::{Strategy, harmonic_mean_with};

/// Deterministic values in [1, 100]. Same formula always produces the same
/// data for reproducible comparisons.
fn generate_values(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 1.0 + ((i as f64 * 0.37).sin() + 1.0) * 49.5)
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_mean");

    for &size in &[1_000usize, 100_000, 1_000_000] {
        let values = generate_values(size);
        group.throughput(Throughput::Elements(size as u64));

        for strategy in [Strategy::Scalar, Strategy::Vectorized] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), size),
                &values,
                |b, values| b.iter(|| harmonic_mean_with(black_box(values), strategy).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);

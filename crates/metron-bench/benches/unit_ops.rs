//! Criterion micro-benchmarks for static and dynamic unit arithmetic.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use metron_core::definitions::{micrometres, seconds};
use metron_core::{DynUnit, Length, Velocity};

/// Benchmark: 10K static velocity computations.
fn bench_static_arith_10k(c: &mut Criterion) {
    let d = micrometres(10.0);
    let t = seconds(2.0);

    c.bench_function("static_arith_10k", |b| {
        b.iter(|| {
            let mut acc = Velocity::ZERO;
            for _ in 0..10_000 {
                acc += black_box(d) / black_box(t);
            }
            black_box(acc);
        });
    });
}

/// Benchmark: The same computation on dynamic units, including the
/// run-time dimension check on every addition.
fn bench_dynamic_arith_10k(c: &mut Criterion) {
    let d = DynUnit::from(micrometres(10.0));
    let t = DynUnit::from(seconds(2.0));

    c.bench_function("dynamic_arith_10k", |b| {
        b.iter(|| {
            let mut acc = DynUnit::ZERO;
            for _ in 0..10_000 {
                acc += black_box(d) / black_box(t);
            }
            black_box(acc);
        });
    });
}

/// Benchmark: Narrow 10K dynamic values into a static type.
fn bench_narrowing_10k(c: &mut Criterion) {
    let values: Vec<DynUnit> = (0..10_000)
        .map(|i| DynUnit::from(Length::new(i as f64)))
        .collect();

    c.bench_function("narrowing_10k", |b| {
        b.iter(|| {
            let mut ok = 0usize;
            for &v in &values {
                if Length::try_from(black_box(v)).is_ok() {
                    ok += 1;
                }
            }
            black_box(ok);
        });
    });
}

criterion_group!(
    benches,
    bench_static_arith_10k,
    bench_dynamic_arith_10k,
    bench_narrowing_10k
);
criterion_main!(benches);

//! Criterion micro-benchmarks for vector operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use metron_bench::length_points;
use metron_core::Angle;
use metron_vector::{Vector2, Vector3};
use smallvec::SmallVec;

/// Benchmark: Pairwise distances over 1000 consecutive 3D points.
fn bench_distance_1k(c: &mut Criterion) {
    let points = length_points(1001, 5);

    c.bench_function("distance_1k", |b| {
        b.iter(|| {
            for pair in points.windows(2) {
                black_box(pair[0].distance(pair[1]));
            }
        });
    });
}

/// Benchmark: Cross products over 1000 consecutive 3D points.
fn bench_cross_1k(c: &mut Criterion) {
    let points = length_points(1001, 6);

    c.bench_function("cross_1k", |b| {
        b.iter(|| {
            for pair in points.windows(2) {
                black_box(pair[0].cross(pair[1]));
            }
        });
    });
}

/// Benchmark: Rotate 1000 planar vectors.
fn bench_rotate_1k(c: &mut Criterion) {
    let points: Vec<Vector2<f64>> = (0..1000)
        .map(|i| Vector2::new(i as f64, 1000.0 - i as f64))
        .collect();
    let angle = Angle::new(0.3);

    c.bench_function("rotate_1k", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(p.rotate(black_box(angle)));
            }
        });
    });
}

/// Benchmark: Rotate an octagon held inline, 1000 steps.
fn bench_rotate_octagon(c: &mut Criterion) {
    let octagon: SmallVec<[Vector2<f64>; 8]> = (0..8)
        .map(|i| {
            let angle = Angle::new(i as f64 * std::f64::consts::FRAC_PI_4);
            Vector2::new(1.0, 0.0).rotate(angle)
        })
        .collect();
    let step = Angle::new(0.01);

    c.bench_function("rotate_octagon_1k", |b| {
        b.iter(|| {
            let mut shape = octagon.clone();
            for _ in 0..1000 {
                for p in shape.iter_mut() {
                    *p = p.rotate(black_box(step));
                }
            }
            assert!(!shape.spilled());
            black_box(shape)
        });
    });
}

/// Benchmark: Parse 1000 three-element vectors.
fn bench_parse_vector3_1k(c: &mut Criterion) {
    let texts: Vec<String> = (0..1000)
        .map(|i| format!("{i}um {}mm 0.5m", i % 17))
        .collect();

    c.bench_function("parse_vector3_1k", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(text.parse::<Vector3<metron_core::Length>>().ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_distance_1k,
    bench_cross_1k,
    bench_rotate_1k,
    bench_rotate_octagon,
    bench_parse_vector3_1k
);
criterion_main!(benches);

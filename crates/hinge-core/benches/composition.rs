//! Benchmarks for ramp function composition and arithmetic.
//!
//! Run with: cargo bench -p hinge-core

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hinge_core::RampFunction;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// A nondecreasing staircase of `n` slope changes.
fn create_inner(n: usize) -> RampFunction {
    let terms = (0..n).map(|i| {
        let coefficient = if i % 3 == 2 { -0.5 } else { 1.0 };
        (coefficient, i as f64)
    });
    RampFunction::new(-(n as f64) / 4.0, terms).unwrap()
}

/// An oscillating outer curve with `m` terms over the inner range.
fn create_outer(m: usize, span: f64) -> RampFunction {
    let terms = (0..m).map(|j| {
        let coefficient = if j % 2 == 0 { 2.0 } else { -1.5 };
        (coefficient, span * j as f64 / m as f64)
    });
    RampFunction::new(1.0, terms).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_wrap_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_with");

    for size in [8usize, 64, 256] {
        let inner = create_inner(size);
        let outer = create_outer(size, inner.evaluate(size as f64));

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&inner).wrap_with(black_box(&outer)).unwrap());
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [8usize, 64, 256] {
        let f = create_inner(size);
        let g = create_outer(size, size as f64);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&f) + black_box(&g));
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let f = create_inner(256);

    c.bench_function("evaluate_256", |b| {
        b.iter(|| black_box(&f).evaluate(black_box(128.5)));
    });
}

criterion_group!(benches, bench_wrap_with, bench_add, bench_evaluate);
criterion_main!(benches);

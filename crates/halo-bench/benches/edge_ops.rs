//! Criterion micro-benchmarks for shift and border transforms.

use criterion::{criterion_group, criterion_main, Criterion};
use halo_bench::{reference_frame, stress_frame};
use halo_edge::{expand_batch, expand_border, shift_grid, BatchConfig, EdgeFill, ShiftVector};
use std::hint::black_box;

/// Benchmark: stride-2 shift of a 512x512 frame along both axes.
fn bench_shift_reference(c: &mut Criterion) {
    let frame = reference_frame().unwrap();
    let fill = EdgeFill::from_stride(2);

    c.bench_function("shift_512_stride2", |b| {
        b.iter(|| {
            let out = shift_grid(&frame, ShiftVector::new(3, -5), fill).unwrap();
            black_box(out);
        });
    });
}

/// Benchmark: zero-fill vs stride-2 border on a 512x512 frame.
fn bench_border_reference(c: &mut Criterion) {
    let frame = reference_frame().unwrap();

    c.bench_function("border_512_zero", |b| {
        b.iter(|| black_box(expand_border(&frame, 8, EdgeFill::Zero).unwrap()));
    });
    c.bench_function("border_512_stride2", |b| {
        b.iter(|| black_box(expand_border(&frame, 8, EdgeFill::from_stride(2)).unwrap()));
    });
}

/// Benchmark: stride-2 border on a 2048x2048 frame.
fn bench_border_stress(c: &mut Criterion) {
    let frame = stress_frame().unwrap();

    c.bench_function("border_2048_stride2", |b| {
        b.iter(|| black_box(expand_border(&frame, 16, EdgeFill::from_stride(2)).unwrap()));
    });
}

/// Benchmark: 32 reference frames bordered serially vs on the pool.
fn bench_border_batch(c: &mut Criterion) {
    let frames: Vec<_> = (0..32).map(|_| reference_frame().unwrap()).collect();
    let fill = EdgeFill::from_stride(2);
    let serial = BatchConfig {
        worker_count: Some(1),
    };
    let pooled = BatchConfig::default();

    c.bench_function("batch32_border_serial", |b| {
        b.iter(|| black_box(expand_batch(&frames, 8, fill, &serial).unwrap()));
    });
    c.bench_function("batch32_border_pooled", |b| {
        b.iter(|| black_box(expand_batch(&frames, 8, fill, &pooled).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_shift_reference,
    bench_border_reference,
    bench_border_stress,
    bench_border_batch
);
criterion_main!(benches);

//! Criterion benchmarks for geoeff_kernel.
//!
//! Benchmarks cover:
//! - Point generation (1K, 10K, 100K points)
//! - Single-distance efficiency evaluation
//! - Full distance sweeps, sequential vs parallel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geoeff_kernel::geometry::{
    generate_circular, generate_gaussian, generate_isotropic, DetectorShape, PointBatch,
    SourceProfile,
};
use geoeff_kernel::mc::{evaluate, ExecutionMode, SweepConfig, SweepDriver};

fn bench_point_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_generation");

    for n in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("isotropic", n), &n, |b, &n| {
            let mut batch = PointBatch::new(n);
            b.iter(|| {
                generate_isotropic(&mut batch, black_box(1.5), 42);
                black_box(batch.count_hits())
            });
        });
        group.bench_with_input(BenchmarkId::new("circular", n), &n, |b, &n| {
            let mut batch = PointBatch::new(n);
            b.iter(|| {
                generate_circular(&mut batch, black_box(0.5), 42);
                black_box(batch.count_hits())
            });
        });
        group.bench_with_input(BenchmarkId::new("gaussian", n), &n, |b, &n| {
            let mut batch = PointBatch::new(n);
            b.iter(|| {
                generate_gaussian(&mut batch, black_box(0.5), 42);
                black_box(batch.count_hits())
            });
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for n in [10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("uniform_source", n), &n, |b, &n| {
            b.iter(|| evaluate(black_box(1.0), SourceProfile::Uniform { radius: 0.5 }, n, 7))
        });
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(10);

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let config = SweepConfig::builder()
            .z_range(0.0, 5.0)
            .n_points(16)
            .source(SourceProfile::Gaussian { sigma: 0.3 })
            .detector(DetectorShape::Annular { ratio: 0.5 })
            .sample_power(5)
            .mode(mode)
            .build()
            .unwrap();
        let driver = SweepDriver::new(config).unwrap();

        group.bench_function(BenchmarkId::new("annular_16x1e5", format!("{mode:?}")), |b| {
            b.iter(|| black_box(driver.run().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_point_generation, bench_evaluate, bench_sweep);
criterion_main!(benches);

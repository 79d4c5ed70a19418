//! Criterion micro-benchmarks for the per-iteration kinetics.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plasmetch_bench::trench_profile;
use plasmetch_core::{Dimension, Parameters};
use plasmetch_kinetics::{Sf6O2SurfaceModel, SurfaceModel};
use plasmetch_process::ProcessModel;

/// Benchmark: coverage update alone at several surface sizes.
fn bench_update_coverages(c: &mut Criterion) {
    let params = Parameters::default();
    let mut group = c.benchmark_group("update_coverages");
    for n in [1_000usize, 10_000, 100_000] {
        let profile = trench_profile(n, 42);
        let mut model = Sf6O2SurfaceModel::new(Dimension::Two);
        model.initialize_coverages(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                model
                    .update_coverages(&params, &profile.rates, &profile.materials)
                    .unwrap();
                black_box(model.coverages());
            });
        });
    }
    group.finish();
}

/// Benchmark: full advance (update + velocities + adapter) on 10K points.
fn bench_advance_10k(c: &mut Criterion) {
    let profile = trench_profile(10_000, 42);
    let mut model = ProcessModel::sf6o2(Parameters::default(), Dimension::Two).unwrap();
    model.initialize(10_000);

    c.bench_function("advance_10k", |b| {
        b.iter(|| {
            let v = model
                .advance(&profile.rates, &profile.coordinates, &profile.materials)
                .unwrap();
            black_box(v);
        });
    });
}

criterion_group!(benches, bench_update_coverages, bench_advance_10k);
criterion_main!(benches);

//! Criterion benchmarks for point-shift application.
//!
//! Benchmarks cover:
//! - Single curve application across node counts
//! - Node resolution with identifier and label matches
//! - Batch application, sequential versus rayon

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use market_core::{Curve, InterpolatedNodalCurve, Tenor};
use market_scenarios::{apply_scenarios, apply_to_curves, BatchConfig, CurvePointShifts, ShiftType};

/// Generate a monthly tenor curve with `n_nodes` nodes.
fn generate_curve(name: &str, n_nodes: u32) -> InterpolatedNodalCurve<f64> {
    let tenors: Vec<Tenor> = (1..=n_nodes).map(Tenor::months).collect();
    let values: Vec<f64> = (0..n_nodes).map(|i| 0.01 + 0.0001 * i as f64).collect();
    InterpolatedNodalCurve::from_tenors(name, &tenors, &values).unwrap()
}

/// Shift every other node, half by identifier and half by label.
fn generate_shifts(n_nodes: u32) -> CurvePointShifts<f64> {
    let mut builder = CurvePointShifts::builder(ShiftType::Absolute);
    for m in (1..=n_nodes).step_by(2) {
        if m % 4 == 1 {
            builder.add_shift(Tenor::months(m), 0.0001);
        } else {
            builder.add_shift(format!("{}M", m), 0.0001);
        }
    }
    builder.build()
}

/// Benchmark a single application against curves of growing size.
fn bench_apply_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_single");

    for n_nodes in [10, 50, 360] {
        let curve = generate_curve("BENCH", n_nodes);
        let shifts = generate_shifts(n_nodes);

        group.bench_with_input(BenchmarkId::new("nodes", n_nodes), &curve, |b, curve| {
            b.iter(|| shifts.apply(black_box(curve)));
        });
    }

    group.finish();
}

/// Benchmark resolution of adjustments without the rebuild.
fn bench_node_adjustments(c: &mut Criterion) {
    let curve = generate_curve("BENCH", 360);
    let shifts = generate_shifts(360);
    let nodes = curve.metadata().parameters().unwrap();

    c.bench_function("node_adjustments_360", |b| {
        b.iter(|| shifts.node_adjustments(black_box(nodes)));
    });
}

/// Benchmark one scenario over many curves.
fn bench_apply_to_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_to_curves");
    let shifts = generate_shifts(60);

    for n_curves in [100, 1000, 10000] {
        let curves: Vec<_> = (0..n_curves)
            .map(|i| generate_curve(&format!("CURVE-{}", i), 60))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("sequential", n_curves),
            &curves,
            |b, curves| {
                let config = BatchConfig::sequential();
                b.iter(|| apply_to_curves(&shifts, black_box(curves), &config));
            },
        );

        group.bench_with_input(BenchmarkId::new("parallel", n_curves), &curves, |b, curves| {
            let config = BatchConfig::new(64, 0);
            b.iter(|| apply_to_curves(&shifts, black_box(curves), &config));
        });
    }

    group.finish();
}

/// Benchmark a key-rate ladder, one scenario per node.
fn bench_ladder(c: &mut Criterion) {
    let curve = generate_curve("LADDER", 120);
    let ladder: Vec<CurvePointShifts<f64>> = (1..=120)
        .map(|m| {
            CurvePointShifts::builder(ShiftType::Absolute)
                .add_shift(Tenor::months(m), 0.0001)
                .build()
        })
        .collect();

    c.bench_function("ladder_120", |b| {
        b.iter(|| apply_scenarios(black_box(&ladder), &curve, &BatchConfig::default()));
    });
}

criterion_group!(
    benches,
    bench_apply_single,
    bench_node_adjustments,
    bench_apply_to_curves,
    bench_ladder
);
criterion_main!(benches);

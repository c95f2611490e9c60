//! Benchmarks for per-point field evaluation.
//!
//! Run with: cargo bench -p mesh-tpms
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-tpms -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-tpms -- --baseline main

#![allow(missing_docs, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mesh_tpms::{
    Field, PatternTransition, TpmsKind, TpmsPattern, TransitionParams, WallThickened,
};
use nalgebra::Point3;

const SAMPLES: usize = 4096;

/// Points along a skewed line through several unit cells.
fn sample_points() -> Vec<Point3<f64>> {
    (0..SAMPLES)
        .map(|i| {
            let t = i as f64 / SAMPLES as f64;
            Point3::new(8.0f64.mul_add(t, -4.0), 5.0 * t, 3.0f64.mul_add(-t, 1.0))
        })
        .collect()
}

fn bench_patterns(c: &mut Criterion) {
    let points = sample_points();
    let mut group = c.benchmark_group("pattern");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    for kind in TpmsKind::ALL {
        let pattern = TpmsPattern::unit(kind);
        group.bench_with_input(BenchmarkId::from_parameter(kind.name()), &points, |b, points| {
            b.iter(|| {
                points
                    .iter()
                    .map(|&p| pattern.evaluate(black_box(p)))
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let points = sample_points();
    let mut group = c.benchmark_group("composite");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    let shell = WallThickened::gyroid(1.0, Point3::origin(), 0.3).expect("valid shell");
    group.bench_function("wall_thickened", |b| {
        b.iter(|| points.iter().map(|&p| shell.evaluate(black_box(p))).sum::<f64>());
    });

    let transition = PatternTransition::reference();
    group.bench_function("transition", |b| {
        b.iter(|| {
            points
                .iter()
                .map(|&p| transition.evaluate(black_box(p)))
                .sum::<f64>()
        });
    });

    let field = Field::transition(
        TpmsPattern::unit(TpmsKind::SchwarzDiamond),
        TpmsPattern::unit(TpmsKind::SchwarzPrimitive),
        &TransitionParams::default(),
    )
    .expect("valid ramp");
    group.bench_function("field_enum_transition", |b| {
        b.iter(|| points.iter().map(|&p| field.evaluate(black_box(p))).sum::<f64>());
    });

    group.finish();
}

criterion_group!(benches, bench_patterns, bench_composites);
criterion_main!(benches);

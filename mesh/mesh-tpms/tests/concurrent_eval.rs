//! Shared fields evaluated from many worker threads.

#![allow(clippy::cast_precision_loss)]

use std::sync::Arc;

use mesh_tpms::{
    Field, FieldConfig, ImplicitField, PatternParams, ShellParams, TpmsKind, TransitionParams,
};
use nalgebra::Point3;
use rayon::prelude::*;

/// Sample points on a regular grid, the way a voxelizer would.
fn grid(resolution: usize, extent: f64) -> Vec<Point3<f64>> {
    let step = 2.0 * extent / resolution as f64;
    let mut points = Vec::with_capacity(resolution * resolution * resolution);
    for i in 0..resolution {
        for j in 0..resolution {
            for k in 0..resolution {
                points.push(Point3::new(
                    (i as f64).mul_add(step, -extent),
                    (j as f64).mul_add(step, -extent),
                    (k as f64).mul_add(step, -extent),
                ));
            }
        }
    }
    points
}

fn lattice_field() -> Field {
    FieldConfig::transition(
        FieldConfig::WallThickened(
            ShellParams::gyroid(1.5, Point3::new(0.2, 0.0, -0.1), 0.4),
        ),
        FieldConfig::transition(
            FieldConfig::Pattern(PatternParams::new(TpmsKind::SchwarzDiamond)),
            FieldConfig::Pattern(PatternParams::new(TpmsKind::Lidinoid).with_unit_size(2.0)),
            TransitionParams::default(),
        ),
        TransitionParams::default().with_ramp(-1.0, 2.0),
    )
    .build()
    .unwrap()
}

#[test]
fn parallel_matches_sequential() {
    let field = lattice_field();
    let points = grid(24, 4.0);

    let sequential: Vec<f64> = points.iter().map(|&p| field.evaluate(p)).collect();
    let parallel: Vec<f64> = points.par_iter().map(|&p| field.evaluate(p)).collect();

    assert_eq!(sequential.len(), parallel.len());
    for (a, b) in sequential.iter().zip(&parallel) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn shared_trait_object_across_threads() {
    let field: Arc<dyn ImplicitField> = Arc::new(lattice_field());
    let points = grid(16, 3.0);

    let solid = points
        .par_iter()
        .filter(|&&p| field.evaluate(p) < 0.0)
        .count();
    let void = points
        .par_iter()
        .filter(|&&p| field.evaluate(p) >= 0.0)
        .count();

    assert_eq!(solid + void, points.len());
    assert!(solid > 0, "lattice should contain solid");
    assert!(void > 0, "lattice should contain void");
}

#[test]
fn scoped_threads_share_borrowed_field() {
    let field = lattice_field();
    let points = grid(12, 2.0);
    let expected: Vec<f64> = points.iter().map(|&p| field.evaluate(p)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| points.iter().map(|&p| field.evaluate(p)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            let values = handle.join().unwrap();
            assert_eq!(values, expected);
        }
    });
}

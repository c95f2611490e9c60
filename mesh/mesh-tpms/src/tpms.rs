//! Triply Periodic Minimal Surface (TPMS) functions.
//!
//! Each function maps a point to a signed scalar whose zero level set is the
//! minimal surface. The sign tells the two labyrinths apart.

use nalgebra::Point3;
use std::f64::consts::TAU;
use tracing::debug;

use crate::error::TpmsResult;
use crate::params::{check_unit_size, PatternParams};
use crate::types::TpmsKind;

/// Frequency scale for `kind` at the given unit cell size.
#[inline]
#[must_use]
pub fn frequency_scale(kind: TpmsKind, unit_size: f64) -> f64 {
    kind.frequency_factor() * TAU / unit_size
}

#[inline]
fn gyroid_scaled(x: f64, y: f64, z: f64) -> f64 {
    z.sin()
        .mul_add(x.cos(), x.sin().mul_add(y.cos(), y.sin() * z.cos()))
}

#[inline]
fn schwarz_primitive_scaled(x: f64, y: f64, z: f64) -> f64 {
    x.cos() + y.cos() + z.cos()
}

#[inline]
fn schwarz_diamond_scaled(x: f64, y: f64, z: f64) -> f64 {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();

    (cx * cy).mul_add(cz, -(sx * sy * sz))
}

#[inline]
fn lidinoid_scaled(x: f64, y: f64, z: f64) -> f64 {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    let (s2x, c2x) = (2.0 * x).sin_cos();
    let (s2y, c2y) = (2.0 * y).sin_cos();
    let (s2z, c2z) = (2.0 * z).sin_cos();

    let helical = s2x * cy * sz + s2y * cz * sx + s2z * cx * sy;
    let planar = c2x * c2y + c2y * c2z + c2z * c2x;

    0.5 * (helical - planar)
}

#[inline]
fn evaluate_scaled(kind: TpmsKind, scale: f64, point: &Point3<f64>) -> f64 {
    let x = point.x * scale;
    let y = point.y * scale;
    let z = point.z * scale;

    match kind {
        TpmsKind::Gyroid => gyroid_scaled(x, y, z),
        TpmsKind::Lidinoid => lidinoid_scaled(x, y, z),
        TpmsKind::SchwarzPrimitive => schwarz_primitive_scaled(x, y, z),
        TpmsKind::SchwarzDiamond => schwarz_diamond_scaled(x, y, z),
    }
}

/// Evaluates the Gyroid TPMS function.
///
/// The gyroid equation is:
/// `sin(x) * cos(y) + sin(y) * cos(z) + sin(z) * cos(x) = 0`
/// with coordinates scaled by `2π / unit_size`.
///
/// # Arguments
///
/// * `point` - The 3D point to evaluate
/// * `unit_size` - Size of one period of the surface, must be positive
///
/// # Examples
///
/// ```
/// use mesh_tpms::gyroid;
/// use nalgebra::Point3;
///
/// let value = gyroid(Point3::origin(), 10.0);
/// assert!(value.abs() < 1e-12);
/// ```
#[must_use]
pub fn gyroid(point: Point3<f64>, unit_size: f64) -> f64 {
    evaluate_scaled(
        TpmsKind::Gyroid,
        frequency_scale(TpmsKind::Gyroid, unit_size),
        &point,
    )
}

/// Evaluates the Schwarz primitive TPMS function.
///
/// `cos(x) + cos(y) + cos(z) = 0` with coordinates scaled by
/// `2π / unit_size`.
///
/// # Examples
///
/// ```
/// use mesh_tpms::schwarz_primitive;
/// use nalgebra::Point3;
///
/// let value = schwarz_primitive(Point3::origin(), 1.0);
/// assert!((value - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn schwarz_primitive(point: Point3<f64>, unit_size: f64) -> f64 {
    evaluate_scaled(
        TpmsKind::SchwarzPrimitive,
        frequency_scale(TpmsKind::SchwarzPrimitive, unit_size),
        &point,
    )
}

/// Evaluates the Schwarz diamond TPMS function.
///
/// `cos(x)*cos(y)*cos(z) - sin(x)*sin(y)*sin(z) = 0` with coordinates
/// scaled by `π / unit_size`.
#[must_use]
pub fn schwarz_diamond(point: Point3<f64>, unit_size: f64) -> f64 {
    evaluate_scaled(
        TpmsKind::SchwarzDiamond,
        frequency_scale(TpmsKind::SchwarzDiamond, unit_size),
        &point,
    )
}

/// Evaluates the Lidinoid TPMS function.
///
/// ```text
/// 0.5 * (sin(2x)cos(y)sin(z) + sin(2y)cos(z)sin(x) + sin(2z)cos(x)sin(y))
/// - 0.5 * (cos(2x)cos(2y) + cos(2y)cos(2z) + cos(2z)cos(2x)) = 0
/// ```
///
/// with coordinates scaled by `π / unit_size`.
#[must_use]
pub fn lidinoid(point: Point3<f64>, unit_size: f64) -> f64 {
    evaluate_scaled(
        TpmsKind::Lidinoid,
        frequency_scale(TpmsKind::Lidinoid, unit_size),
        &point,
    )
}

/// A TPMS pattern with a fixed unit cell size.
///
/// The frequency scale is computed once at construction; evaluation is
/// allocation-free and safe to share across threads.
///
/// # Examples
///
/// ```
/// use mesh_tpms::{TpmsKind, TpmsPattern};
/// use nalgebra::Point3;
///
/// let pattern = TpmsPattern::new(TpmsKind::SchwarzPrimitive, 1.0).unwrap();
/// assert!((pattern.evaluate(Point3::origin()) - 3.0).abs() < 1e-12);
///
/// assert!(TpmsPattern::new(TpmsKind::Gyroid, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TpmsPattern {
    kind: TpmsKind,
    unit_size: f64,
    scale: f64,
}

impl TpmsPattern {
    /// Creates a pattern of `kind` with the given unit cell size.
    ///
    /// # Errors
    ///
    /// Returns [`TpmsError::InvalidUnitSize`](crate::TpmsError::InvalidUnitSize)
    /// if `unit_size` is not finite and positive, or is so small that the
    /// frequency scale overflows.
    pub fn new(kind: TpmsKind, unit_size: f64) -> TpmsResult<Self> {
        let scale = check_unit_size(kind, unit_size)?;
        debug!(kind = kind.name(), unit_size, scale, "Created TPMS pattern");
        Ok(Self {
            kind,
            unit_size,
            scale,
        })
    }

    /// Creates a pattern from [`PatternParams`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation.
    pub fn from_params(params: &PatternParams) -> TpmsResult<Self> {
        Self::new(params.kind, params.unit_size)
    }

    /// Creates a pattern with a unit cell of size 1.
    #[must_use]
    pub fn unit(kind: TpmsKind) -> Self {
        Self {
            kind,
            unit_size: 1.0,
            scale: frequency_scale(kind, 1.0),
        }
    }

    /// Creates a gyroid pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit_size` is invalid.
    pub fn gyroid(unit_size: f64) -> TpmsResult<Self> {
        Self::new(TpmsKind::Gyroid, unit_size)
    }

    /// Creates a Lidinoid pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit_size` is invalid.
    pub fn lidinoid(unit_size: f64) -> TpmsResult<Self> {
        Self::new(TpmsKind::Lidinoid, unit_size)
    }

    /// Creates a Schwarz primitive pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit_size` is invalid.
    pub fn schwarz_primitive(unit_size: f64) -> TpmsResult<Self> {
        Self::new(TpmsKind::SchwarzPrimitive, unit_size)
    }

    /// Creates a Schwarz diamond pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit_size` is invalid.
    pub fn schwarz_diamond(unit_size: f64) -> TpmsResult<Self> {
        Self::new(TpmsKind::SchwarzDiamond, unit_size)
    }

    /// Surface family of this pattern.
    #[must_use]
    pub const fn kind(&self) -> TpmsKind {
        self.kind
    }

    /// Unit cell size the pattern was built with.
    #[must_use]
    pub const fn unit_size(&self) -> f64 {
        self.unit_size
    }

    /// Angular frequency applied to each coordinate.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Spatial period along every axis, `2π / scale`.
    #[must_use]
    pub fn period(&self) -> f64 {
        TAU / self.scale
    }

    /// Evaluates the field at `point`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        evaluate_scaled(self.kind, self.scale, &point)
    }
}

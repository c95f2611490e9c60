//! Split-wall shells around a zero-thickness TPMS surface.
//!
//! The raw pattern only defines a surface. To get printable material the
//! field is remapped so that a band around the surface becomes solid:
//!
//! ```text
//! band  = |d| - t/2
//! value = min(max(d, band), max(-d, band))
//! ```
//!
//! which simplifies to `max(-|d|, |d| - t/2)`. The band `0 < |d| < t/2` is
//! solid on both sides of the surface, and the surface itself stays on the
//! zero level set, splitting the wall in two. The deepest point of each half
//! wall sits at `|d| = t/4` with value `-t/4`. With `t = 0` no solid remains
//! and the value is `|d|`.

use nalgebra::Point3;
use tracing::debug;

use crate::error::TpmsResult;
use crate::params::{check_wall_thickness, ShellParams};
use crate::tpms::TpmsPattern;
use crate::types::TpmsKind;

/// Remaps a raw surface value `d` into a split wall of `wall_thickness`.
///
/// # Examples
///
/// ```
/// use mesh_tpms::split_wall;
///
/// // On the surface
/// assert_eq!(split_wall(0.0, 1.0), 0.0);
/// // Middle of a half wall
/// assert_eq!(split_wall(0.25, 1.0), -0.25);
/// // Far from the surface
/// assert_eq!(split_wall(-2.0, 1.0), 1.5);
/// ```
#[inline]
#[must_use]
pub fn split_wall(d: f64, wall_thickness: f64) -> f64 {
    let band = 0.5f64.mul_add(-wall_thickness, d.abs());
    d.max(band).min((-d).max(band))
}

/// A TPMS pattern thickened into split walls, centred on a point.
///
/// # Examples
///
/// ```
/// use mesh_tpms::WallThickened;
/// use nalgebra::Point3;
///
/// let shell = WallThickened::gyroid(1.0, Point3::origin(), 0.2).unwrap();
///
/// // The gyroid passes through the centre
/// assert!(shell.evaluate(Point3::origin()).abs() < 1e-12);
///
/// assert!(WallThickened::gyroid(1.0, Point3::origin(), -1.0).is_err());
/// assert!(WallThickened::gyroid(0.0, Point3::origin(), 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallThickened {
    base: TpmsPattern,
    center: Point3<f64>,
    wall_thickness: f64,
}

impl WallThickened {
    /// Creates a shell from [`ShellParams`].
    ///
    /// # Errors
    ///
    /// Returns an error if the unit size is not finite and positive, or the
    /// wall thickness is negative or not finite.
    pub fn new(params: &ShellParams) -> TpmsResult<Self> {
        params.validate()?;
        let base = TpmsPattern::new(params.kind, params.unit_size)?;
        Self::with_base(base, params.center, params.wall_thickness)
    }

    /// Creates a gyroid shell.
    ///
    /// # Errors
    ///
    /// Same as [`WallThickened::new`].
    pub fn gyroid(unit_size: f64, center: Point3<f64>, wall_thickness: f64) -> TpmsResult<Self> {
        Self::new(&ShellParams::gyroid(unit_size, center, wall_thickness))
    }

    /// Creates a shell around an existing pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TpmsError::InvalidWallThickness`](crate::TpmsError::InvalidWallThickness)
    /// if `wall_thickness` is negative or not finite.
    pub fn with_base(
        base: TpmsPattern,
        center: Point3<f64>,
        wall_thickness: f64,
    ) -> TpmsResult<Self> {
        check_wall_thickness(wall_thickness)?;
        debug!(
            kind = base.kind().name(),
            unit_size = base.unit_size(),
            wall_thickness,
            center = ?center,
            "Created wall-thickened field"
        );
        Ok(Self {
            base,
            center,
            wall_thickness,
        })
    }

    /// The pattern the walls are built around.
    #[must_use]
    pub const fn base(&self) -> &TpmsPattern {
        &self.base
    }

    /// Surface family of the base pattern.
    #[must_use]
    pub const fn kind(&self) -> TpmsKind {
        self.base.kind()
    }

    /// Origin of the pattern's local frame.
    #[must_use]
    pub const fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Wall thickness.
    #[must_use]
    pub const fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    /// Evaluates the base pattern in the local frame, before thickening.
    #[inline]
    #[must_use]
    pub fn surface_value(&self, point: Point3<f64>) -> f64 {
        self.base.evaluate(Point3::from(point - self.center))
    }

    /// Evaluates the shell at `point`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        split_wall(self.surface_value(point), self.wall_thickness)
    }
}

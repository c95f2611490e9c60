//! Construction parameters for TPMS fields.

use nalgebra::Point3;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TpmsError, TpmsResult};
use crate::tpms::frequency_scale;
use crate::types::{RampAxis, TpmsKind};

/// Default start of the transition ramp along its axis.
pub const DEFAULT_RAMP_START: f64 = -2.0;

/// Default length of the transition ramp along its axis.
pub const DEFAULT_RAMP_SPAN: f64 = 5.0;

/// Checks `unit_size` for `kind` and returns the resulting frequency scale.
///
/// Tiny positive sizes overflow the scale to infinity, so the scale itself
/// must come out finite and non-zero as well.
pub(crate) fn check_unit_size(kind: TpmsKind, unit_size: f64) -> TpmsResult<f64> {
    if unit_size.is_finite() && unit_size > 0.0 {
        let scale = frequency_scale(kind, unit_size);
        if scale.is_finite() && scale != 0.0 {
            return Ok(scale);
        }
    }
    warn!(unit_size, kind = kind.name(), "Rejected unit size");
    Err(TpmsError::InvalidUnitSize(unit_size))
}

pub(crate) fn check_wall_thickness(wall_thickness: f64) -> TpmsResult<()> {
    if wall_thickness.is_finite() && wall_thickness >= 0.0 {
        Ok(())
    } else {
        warn!(wall_thickness, "Rejected wall thickness");
        Err(TpmsError::InvalidWallThickness(wall_thickness))
    }
}

/// Parameters for a single TPMS pattern.
///
/// # Examples
///
/// ```
/// use mesh_tpms::{PatternParams, TpmsKind};
///
/// let params = PatternParams::new(TpmsKind::SchwarzDiamond).with_unit_size(8.0);
/// assert!(params.validate().is_ok());
/// assert!(PatternParams::default().with_unit_size(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternParams {
    /// Surface family to evaluate.
    pub kind: TpmsKind,

    /// Edge length of one unit cell in model units.
    pub unit_size: f64,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            kind: TpmsKind::Gyroid,
            unit_size: 1.0,
        }
    }
}

impl PatternParams {
    /// Creates parameters for `kind` with a unit cell of size 1.
    #[must_use]
    pub const fn new(kind: TpmsKind) -> Self {
        Self {
            kind,
            unit_size: 1.0,
        }
    }

    /// Sets the surface family.
    #[must_use]
    pub const fn with_kind(mut self, kind: TpmsKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the unit cell size.
    #[must_use]
    pub const fn with_unit_size(mut self, unit_size: f64) -> Self {
        self.unit_size = unit_size;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TpmsError::InvalidUnitSize`] if the unit size is not a
    /// finite positive number, or is too small for a finite frequency scale.
    pub fn validate(&self) -> TpmsResult<()> {
        check_unit_size(self.kind, self.unit_size).map(|_| ())
    }
}

/// Parameters for a wall-thickened (split wall) field.
///
/// # Examples
///
/// ```
/// use mesh_tpms::ShellParams;
/// use nalgebra::Point3;
///
/// let params = ShellParams::default()
///     .with_unit_size(10.0)
///     .with_center(Point3::new(5.0, 5.0, 5.0))
///     .with_wall_thickness(0.4);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShellParams {
    /// Surface family the walls are built around.
    pub kind: TpmsKind,

    /// Edge length of one unit cell in model units.
    pub unit_size: f64,

    /// Origin of the pattern's local frame.
    pub center: Point3<f64>,

    /// Wall thickness, in field units.
    pub wall_thickness: f64,
}

impl Default for ShellParams {
    fn default() -> Self {
        Self {
            kind: TpmsKind::Gyroid,
            unit_size: 1.0,
            center: Point3::origin(),
            wall_thickness: 0.0,
        }
    }
}

impl ShellParams {
    /// Creates gyroid shell parameters.
    #[must_use]
    pub const fn gyroid(unit_size: f64, center: Point3<f64>, wall_thickness: f64) -> Self {
        Self {
            kind: TpmsKind::Gyroid,
            unit_size,
            center,
            wall_thickness,
        }
    }

    /// Sets the surface family.
    #[must_use]
    pub const fn with_kind(mut self, kind: TpmsKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the unit cell size.
    #[must_use]
    pub const fn with_unit_size(mut self, unit_size: f64) -> Self {
        self.unit_size = unit_size;
        self
    }

    /// Sets the pattern center.
    #[must_use]
    pub const fn with_center(mut self, center: Point3<f64>) -> Self {
        self.center = center;
        self
    }

    /// Sets the wall thickness.
    #[must_use]
    pub const fn with_wall_thickness(mut self, wall_thickness: f64) -> Self {
        self.wall_thickness = wall_thickness;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TpmsError::InvalidUnitSize`] or
    /// [`TpmsError::InvalidWallThickness`] for the first invalid value.
    pub fn validate(&self) -> TpmsResult<()> {
        check_unit_size(self.kind, self.unit_size)?;
        check_wall_thickness(self.wall_thickness)
    }
}

/// Parameters for the blend ramp of a transition.
///
/// The blend weight is `clamp((p[axis] - ramp_start) / ramp_span, 0, 1)`.
///
/// # Examples
///
/// ```
/// use mesh_tpms::{RampAxis, TransitionParams};
///
/// let params = TransitionParams::default();
/// assert_eq!(params.ramp_start, -2.0);
/// assert_eq!(params.ramp_span, 5.0);
/// assert_eq!(params.axis, RampAxis::X);
///
/// let params = params.with_ramp(0.0, 10.0).with_axis(RampAxis::Z);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitionParams {
    /// Coordinate where the blend leaves the low pattern.
    pub ramp_start: f64,

    /// Distance over which the blend reaches the high pattern.
    pub ramp_span: f64,

    /// Axis the ramp runs along.
    pub axis: RampAxis,
}

impl Default for TransitionParams {
    fn default() -> Self {
        Self {
            ramp_start: DEFAULT_RAMP_START,
            ramp_span: DEFAULT_RAMP_SPAN,
            axis: RampAxis::X,
        }
    }
}

impl TransitionParams {
    /// Sets the ramp start and span.
    #[must_use]
    pub const fn with_ramp(mut self, start: f64, span: f64) -> Self {
        self.ramp_start = start;
        self.ramp_span = span;
        self
    }

    /// Sets the ramp axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: RampAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Coordinate where the blend reaches the high pattern.
    ///
    /// Overflows to infinity when `ramp_start + ramp_span` exceeds
    /// [`f64::MAX`]. Evaluation only uses the start and span, so such a
    /// ramp still blends correctly.
    #[must_use]
    pub fn ramp_end(&self) -> f64 {
        self.ramp_start + self.ramp_span
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TpmsError::InvalidRampStart`] if the start is not finite, or
    /// [`TpmsError::InvalidRampSpan`] if the span is not finite and positive.
    pub fn validate(&self) -> TpmsResult<()> {
        if !self.ramp_start.is_finite() {
            warn!(ramp_start = self.ramp_start, "Rejected ramp start");
            return Err(TpmsError::InvalidRampStart(self.ramp_start));
        }
        if !(self.ramp_span.is_finite() && self.ramp_span > 0.0) {
            warn!(ramp_span = self.ramp_span, "Rejected ramp span");
            return Err(TpmsError::InvalidRampSpan(self.ramp_span));
        }
        Ok(())
    }
}

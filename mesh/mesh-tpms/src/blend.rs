//! Numeric helpers for blending two fields.

use nalgebra::Point3;
use tracing::debug;

use crate::error::TpmsResult;
use crate::params::TransitionParams;
use crate::types::RampAxis;

/// Linear interpolation between `a` and `b` with a fixed weight `t`.
///
/// Returns exactly `a` at `t = 0` and exactly `b` at `t = 1`.
///
/// # Examples
///
/// ```
/// use mesh_tpms::lerp;
///
/// assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
/// assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
/// assert!((lerp(2.0, 6.0, 0.25) - 3.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    t.mul_add(b, (1.0 - t) * a)
}

/// Affine ramp from `start` over `span`, clamped to `[0, 1]`.
///
/// NaN input yields NaN.
///
/// # Examples
///
/// ```
/// use mesh_tpms::ramp_ratio;
///
/// assert_eq!(ramp_ratio(-5.0, -2.0, 5.0), 0.0);
/// assert!((ramp_ratio(0.5, -2.0, 5.0) - 0.5).abs() < 1e-12);
/// assert_eq!(ramp_ratio(7.0, -2.0, 5.0), 1.0);
/// ```
#[inline]
#[must_use]
pub fn ramp_ratio(value: f64, start: f64, span: f64) -> f64 {
    ((value - start) / span).clamp(0.0, 1.0)
}

/// A validated, position-only blend rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendRamp {
    start: f64,
    span: f64,
    axis: RampAxis,
}

impl Default for BlendRamp {
    fn default() -> Self {
        let params = TransitionParams::default();
        Self {
            start: params.ramp_start,
            span: params.ramp_span,
            axis: params.axis,
        }
    }
}

impl BlendRamp {
    /// Creates a ramp from transition parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail [`TransitionParams::validate`].
    pub fn new(params: &TransitionParams) -> TpmsResult<Self> {
        params.validate()?;
        debug!(
            start = params.ramp_start,
            span = params.ramp_span,
            axis = ?params.axis,
            "Created blend ramp"
        );
        Ok(Self {
            start: params.ramp_start,
            span: params.ramp_span,
            axis: params.axis,
        })
    }

    /// Coordinate where the ramp starts.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Length of the ramp.
    #[must_use]
    pub const fn span(&self) -> f64 {
        self.span
    }

    /// Axis the ramp runs along.
    #[must_use]
    pub const fn axis(&self) -> RampAxis {
        self.axis
    }

    /// Blend weight at `point`; 0 selects the low field, 1 the high field.
    #[inline]
    #[must_use]
    pub fn ratio(&self, point: &Point3<f64>) -> f64 {
        ramp_ratio(point[self.axis.index()], self.start, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TpmsError;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints_exact() {
        let (a, b) = (0.123_456_789, -2.718_281_828);
        assert_eq!(lerp(a, b, 0.0).to_bits(), a.to_bits());
        assert_eq!(lerp(a, b, 1.0).to_bits(), b.to_bits());
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_relative_eq!(lerp(-1.0, 3.0, 0.5), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ramp_ratio_saturates() {
        assert_relative_eq!(ramp_ratio(-100.0, -2.0, 5.0), 0.0);
        assert_relative_eq!(ramp_ratio(-2.0, -2.0, 5.0), 0.0);
        assert_relative_eq!(ramp_ratio(3.0, -2.0, 5.0), 1.0);
        assert_relative_eq!(ramp_ratio(100.0, -2.0, 5.0), 1.0);
        assert_relative_eq!(ramp_ratio(0.0, -2.0, 5.0), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_ramp_ratio_nan_propagates() {
        assert!(ramp_ratio(f64::NAN, -2.0, 5.0).is_nan());
    }

    #[test]
    fn test_default_ramp_matches_params() {
        let ramp = BlendRamp::default();
        assert_eq!(ramp, BlendRamp::new(&TransitionParams::default()).unwrap());
        assert_relative_eq!(ramp.start(), -2.0);
        assert_relative_eq!(ramp.span(), 5.0);
        assert_eq!(ramp.axis(), RampAxis::X);
    }

    #[test]
    fn test_ramp_uses_axis() {
        let params = TransitionParams::default()
            .with_ramp(0.0, 2.0)
            .with_axis(RampAxis::Y);
        let ramp = BlendRamp::new(&params).unwrap();

        assert_relative_eq!(ramp.ratio(&Point3::new(100.0, 1.0, -100.0)), 0.5);
        assert_relative_eq!(ramp.ratio(&Point3::new(0.0, -1.0, 0.0)), 0.0);
        assert_relative_eq!(ramp.ratio(&Point3::new(0.0, 5.0, 0.0)), 1.0);
    }

    #[test]
    fn test_ramp_rejects_zero_span() {
        let params = TransitionParams::default().with_ramp(-2.0, 0.0);
        assert_eq!(BlendRamp::new(&params), Err(TpmsError::InvalidRampSpan(0.0)));
    }
}

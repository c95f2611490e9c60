//! Spatial transitions between two fields.

use nalgebra::Point3;
use tracing::debug;

use crate::blend::{lerp, BlendRamp};
use crate::error::TpmsResult;
use crate::field::ImplicitField;
use crate::params::TransitionParams;
use crate::tpms::TpmsPattern;
use crate::types::TpmsKind;

/// A transition between two plain patterns.
pub type PatternTransition = Transition<TpmsPattern, TpmsPattern>;

/// Blends a `low` field into a `high` field along a linear ramp.
///
/// Before the ramp the value is exactly `low`, after it exactly `high`,
/// and in between `(1 - r) * low + r * high` with `r` rising linearly.
///
/// # Examples
///
/// ```
/// use mesh_tpms::{PatternTransition, TpmsKind, TpmsPattern};
/// use nalgebra::Point3;
///
/// let transition = PatternTransition::reference();
/// let diamond = TpmsPattern::unit(TpmsKind::SchwarzDiamond);
///
/// let p = Point3::new(-2.0, 0.3, 0.7);
/// assert_eq!(transition.evaluate(p), diamond.evaluate(p));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<L, H> {
    low: L,
    high: H,
    ramp: BlendRamp,
}

impl<L, H> Transition<L, H> {
    /// Creates a transition using the default ramp (x from -2 to 3).
    #[must_use]
    pub fn new(low: L, high: H) -> Self {
        Self::with_ramp(low, high, BlendRamp::default())
    }

    /// Creates a transition with a custom ramp.
    ///
    /// # Errors
    ///
    /// Returns an error if the ramp parameters are invalid.
    pub fn with_params(low: L, high: H, params: &TransitionParams) -> TpmsResult<Self> {
        Ok(Self::with_ramp(low, high, BlendRamp::new(params)?))
    }

    /// Creates a transition from an already validated ramp.
    #[must_use]
    pub fn with_ramp(low: L, high: H, ramp: BlendRamp) -> Self {
        debug!(
            start = ramp.start(),
            span = ramp.span(),
            axis = ?ramp.axis(),
            "Created transition"
        );
        Self { low, high, ramp }
    }

    /// Field used before the ramp.
    #[must_use]
    pub const fn low(&self) -> &L {
        &self.low
    }

    /// Field used after the ramp.
    #[must_use]
    pub const fn high(&self) -> &H {
        &self.high
    }

    /// The blend rule.
    #[must_use]
    pub const fn ramp(&self) -> &BlendRamp {
        &self.ramp
    }
}

impl<L: ImplicitField, H: ImplicitField> Transition<L, H> {
    /// Evaluates the blended field at `point`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        let ratio = self.ramp.ratio(&point);
        if ratio <= 0.0 {
            return self.low.evaluate(point);
        }
        if ratio >= 1.0 {
            return self.high.evaluate(point);
        }
        lerp(self.low.evaluate(point), self.high.evaluate(point), ratio)
    }
}

impl PatternTransition {
    /// Diamond-to-primitive transition over `x ∈ [-2, 3]` at unit cell size.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(
            TpmsPattern::unit(TpmsKind::SchwarzDiamond),
            TpmsPattern::unit(TpmsKind::SchwarzPrimitive),
        )
    }
}

//! The point-evaluation contract shared by every field.

use nalgebra::Point3;
use std::sync::Arc;

use crate::error::TpmsResult;
use crate::params::TransitionParams;
use crate::shell::WallThickened;
use crate::tpms::TpmsPattern;
use crate::transition::Transition;

/// A scalar field over 3D space whose zero level set is a surface.
///
/// Negative values are solid, positive values are void. Implementations
/// are immutable and may be evaluated concurrently from any thread.
///
/// # Examples
///
/// ```
/// use mesh_tpms::{ImplicitField, TpmsKind, TpmsPattern};
///
/// fn sample<F: ImplicitField>(field: &F) -> f64 {
///     field.evaluate_xyz(0.0, 0.0, 0.0)
/// }
///
/// let pattern = TpmsPattern::unit(TpmsKind::SchwarzPrimitive);
/// assert!((sample(&pattern) - 3.0).abs() < 1e-12);
/// ```
pub trait ImplicitField: Send + Sync {
    /// Evaluates the field at `point`.
    fn evaluate(&self, point: Point3<f64>) -> f64;

    /// Evaluates the field at `(x, y, z)`.
    #[inline]
    fn evaluate_xyz(&self, x: f64, y: f64, z: f64) -> f64 {
        self.evaluate(Point3::new(x, y, z))
    }
}

impl<T: ImplicitField + ?Sized> ImplicitField for &T {
    #[inline]
    fn evaluate(&self, point: Point3<f64>) -> f64 {
        (**self).evaluate(point)
    }
}

impl<T: ImplicitField + ?Sized> ImplicitField for Box<T> {
    #[inline]
    fn evaluate(&self, point: Point3<f64>) -> f64 {
        (**self).evaluate(point)
    }
}

impl<T: ImplicitField + ?Sized> ImplicitField for Arc<T> {
    #[inline]
    fn evaluate(&self, point: Point3<f64>) -> f64 {
        (**self).evaluate(point)
    }
}

impl ImplicitField for TpmsPattern {
    #[inline]
    fn evaluate(&self, point: Point3<f64>) -> f64 {
        Self::evaluate(self, point)
    }
}

impl ImplicitField for WallThickened {
    #[inline]
    fn evaluate(&self, point: Point3<f64>) -> f64 {
        Self::evaluate(self, point)
    }
}

impl<L: ImplicitField, H: ImplicitField> ImplicitField for Transition<L, H> {
    #[inline]
    fn evaluate(&self, point: Point3<f64>) -> f64 {
        Self::evaluate(self, point)
    }
}

/// Any field this crate can build.
///
/// Transitions hold their sub-fields behind an [`Arc`], so cloning a field
/// tree is cheap and sub-trees can be shared.
///
/// # Examples
///
/// ```
/// use mesh_tpms::{Field, TpmsKind, TpmsPattern, TransitionParams};
/// use nalgebra::Point3;
///
/// let field = Field::transition(
///     TpmsPattern::unit(TpmsKind::SchwarzDiamond),
///     TpmsPattern::unit(TpmsKind::SchwarzPrimitive),
///     &TransitionParams::default(),
/// )
/// .unwrap();
///
/// // Pure primitive past the end of the ramp
/// assert!((field.evaluate(Point3::new(4.0, 0.0, 0.0)) - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A single TPMS pattern.
    Pattern(TpmsPattern),

    /// A split-wall shell around a pattern.
    WallThickened(WallThickened),

    /// A blend between two fields.
    Transition(Arc<Transition<Field, Field>>),
}

impl Field {
    /// Builds a transition between two fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the ramp parameters are invalid.
    pub fn transition(
        low: impl Into<Self>,
        high: impl Into<Self>,
        params: &TransitionParams,
    ) -> TpmsResult<Self> {
        let transition = Transition::with_params(low.into(), high.into(), params)?;
        Ok(Self::Transition(Arc::new(transition)))
    }

    /// Evaluates the field at `point`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        match self {
            Self::Pattern(pattern) => pattern.evaluate(point),
            Self::WallThickened(shell) => shell.evaluate(point),
            Self::Transition(transition) => transition.evaluate(point),
        }
    }

    /// Number of leaf patterns in this field tree.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        match self {
            Self::Pattern(_) | Self::WallThickened(_) => 1,
            Self::Transition(transition) => {
                transition.low().pattern_count() + transition.high().pattern_count()
            }
        }
    }
}

impl ImplicitField for Field {
    #[inline]
    fn evaluate(&self, point: Point3<f64>) -> f64 {
        Self::evaluate(self, point)
    }
}

impl From<TpmsPattern> for Field {
    fn from(pattern: TpmsPattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<WallThickened> for Field {
    fn from(shell: WallThickened) -> Self {
        Self::WallThickened(shell)
    }
}

impl From<Transition<Self, Self>> for Field {
    fn from(transition: Transition<Self, Self>) -> Self {
        Self::Transition(Arc::new(transition))
    }
}

//! Error types for TPMS field construction.

use thiserror::Error;

/// Result type alias for field construction.
pub type TpmsResult<T> = Result<T, TpmsError>;

/// Errors that can occur while constructing an implicit field.
///
/// Evaluation never fails; every error is raised when a field is built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum TpmsError {
    /// The unit cell size is non-positive or not finite.
    #[error("unit size must be finite and positive, got {0}")]
    InvalidUnitSize(f64),

    /// The wall thickness is negative or not finite.
    #[error("wall thickness must be finite and non-negative, got {0}")]
    InvalidWallThickness(f64),

    /// The blend ramp span is non-positive or not finite.
    #[error("ramp span must be finite and positive, got {0}")]
    InvalidRampSpan(f64),

    /// The blend ramp start is not finite.
    #[error("ramp start must be finite, got {0}")]
    InvalidRampStart(f64),
}

impl TpmsError {
    /// Returns the offending parameter value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::InvalidUnitSize(v)
            | Self::InvalidWallThickness(v)
            | Self::InvalidRampSpan(v)
            | Self::InvalidRampStart(v) => v,
        }
    }
}

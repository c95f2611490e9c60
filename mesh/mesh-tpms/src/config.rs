//! Declarative description of a field tree.
//!
//! A [`FieldConfig`] is plain data: it can be written by hand, loaded from a
//! file with the `serde` feature, and turned into an evaluable [`Field`]
//! with [`FieldConfig::build`], which validates every parameter on the way.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TpmsResult;
use crate::field::Field;
use crate::params::{PatternParams, ShellParams, TransitionParams};
use crate::shell::WallThickened;
use crate::tpms::TpmsPattern;
use crate::types::TpmsKind;

/// Description of a field to build.
///
/// # Examples
///
/// ```
/// use mesh_tpms::{FieldConfig, PatternParams, TpmsKind, TransitionParams};
/// use nalgebra::Point3;
///
/// let config = FieldConfig::transition(
///     FieldConfig::Pattern(PatternParams::new(TpmsKind::SchwarzDiamond)),
///     FieldConfig::Pattern(PatternParams::new(TpmsKind::SchwarzPrimitive)),
///     TransitionParams::default(),
/// );
///
/// let field = config.build().unwrap();
/// assert!((field.evaluate(Point3::new(10.0, 0.0, 0.0)) - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum FieldConfig {
    /// A single pattern.
    Pattern(PatternParams),

    /// A split-wall shell.
    WallThickened(ShellParams),

    /// A blend between two sub-fields.
    Transition {
        /// Field before the ramp.
        low: Box<FieldConfig>,
        /// Field after the ramp.
        high: Box<FieldConfig>,
        /// Ramp placement.
        #[cfg_attr(feature = "serde", serde(default))]
        ramp: TransitionParams,
    },
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::Pattern(PatternParams::default())
    }
}

impl FieldConfig {
    /// Describes a transition between two sub-fields.
    #[must_use]
    pub fn transition(low: Self, high: Self, ramp: TransitionParams) -> Self {
        Self::Transition {
            low: Box::new(low),
            high: Box::new(high),
            ramp,
        }
    }

    /// The diamond-to-primitive transition with default ramp at unit cell size.
    #[must_use]
    pub fn reference_transition() -> Self {
        Self::transition(
            Self::Pattern(PatternParams::new(TpmsKind::SchwarzDiamond)),
            Self::Pattern(PatternParams::new(TpmsKind::SchwarzPrimitive)),
            TransitionParams::default(),
        )
    }

    /// Validates every parameter without building anything.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found, depth first.
    pub fn validate(&self) -> TpmsResult<()> {
        match self {
            Self::Pattern(params) => params.validate(),
            Self::WallThickened(params) => params.validate(),
            Self::Transition { low, high, ramp } => {
                low.validate()?;
                high.validate()?;
                ramp.validate()
            }
        }
    }

    /// Builds the described field.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found, depth first.
    pub fn build(&self) -> TpmsResult<Field> {
        let field = match self {
            Self::Pattern(params) => Field::Pattern(TpmsPattern::from_params(params)?),
            Self::WallThickened(params) => Field::WallThickened(WallThickened::new(params)?),
            Self::Transition { low, high, ramp } => {
                Field::transition(low.build()?, high.build()?, ramp)?
            }
        };
        debug!(patterns = field.pattern_count(), "Built field from config");
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TpmsError;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_default_builds_unit_gyroid() {
        let field = FieldConfig::default().build().unwrap();
        assert_eq!(field, Field::Pattern(TpmsPattern::unit(TpmsKind::Gyroid)));
    }

    #[test]
    fn test_reference_transition_matches_direct() {
        let field = FieldConfig::reference_transition().build().unwrap();
        let direct = crate::transition::PatternTransition::reference();

        for i in -10..=10 {
            let p = Point3::new(f64::from(i) * 0.5, 0.3, -0.2);
            assert_relative_eq!(field.evaluate(p), direct.evaluate(p), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_wall_thickened_config() {
        let config = FieldConfig::WallThickened(ShellParams::gyroid(1.0, Point3::origin(), 4.0));
        let field = config.build().unwrap();
        assert_relative_eq!(field.evaluate(Point3::new(0.25, 0.0, 0.0)), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nested_error_surfaces() {
        let config = FieldConfig::transition(
            FieldConfig::Pattern(PatternParams::default()),
            FieldConfig::WallThickened(ShellParams::default().with_wall_thickness(-1.0)),
            TransitionParams::default(),
        );
        assert_eq!(config.validate(), Err(TpmsError::InvalidWallThickness(-1.0)));
        assert_eq!(config.build(), Err(TpmsError::InvalidWallThickness(-1.0)));
    }

    #[test]
    fn test_ramp_error_surfaces() {
        let config = FieldConfig::transition(
            FieldConfig::default(),
            FieldConfig::default(),
            TransitionParams::default().with_ramp(0.0, -1.0),
        );
        assert_eq!(config.build(), Err(TpmsError::InvalidRampSpan(-1.0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = FieldConfig::transition(
            FieldConfig::reference_transition(),
            FieldConfig::WallThickened(ShellParams::gyroid(2.0, Point3::new(1.0, 0.0, 0.0), 0.4)),
            TransitionParams::default().with_ramp(5.0, 2.0),
        );

        let json = serde_json::to_string(&config).ok();
        assert!(json.is_some());

        let parsed: Result<FieldConfig, _> = serde_json::from_str(&json.unwrap_or_default());
        assert_eq!(parsed.ok(), Some(config));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_ramp_defaults() {
        let json = r#"{
            "type": "transition",
            "low": { "type": "pattern", "kind": "schwarz_diamond", "unit_size": 1.0 },
            "high": { "type": "pattern", "kind": "schwarz_primitive", "unit_size": 1.0 }
        }"#;
        let parsed: FieldConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, FieldConfig::reference_transition());
    }
}

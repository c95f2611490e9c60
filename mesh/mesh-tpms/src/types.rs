//! Core types shared by the field implementations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The triply periodic minimal surface families this crate can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TpmsKind {
    /// Schoen gyroid.
    ///
    /// No straight lines or planar symmetry, self-supporting when printed.
    #[default]
    Gyroid,

    /// Lidinoid, the helical relative of the gyroid.
    Lidinoid,

    /// Schwarz primitive (P) surface with cubic symmetry.
    SchwarzPrimitive,

    /// Schwarz diamond (D) surface.
    SchwarzDiamond,
}

impl TpmsKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Gyroid,
        Self::Lidinoid,
        Self::SchwarzPrimitive,
        Self::SchwarzDiamond,
    ];

    /// Returns the display name of this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gyroid => "Gyroid",
            Self::Lidinoid => "Lidinoid",
            Self::SchwarzPrimitive => "Schwarz-P",
            Self::SchwarzDiamond => "Schwarz-D",
        }
    }

    /// Multiplier applied to `2π / unit_size` to get the frequency scale.
    ///
    /// Lidinoid and diamond run at half frequency so that one unit cell
    /// holds a complete motif.
    #[must_use]
    pub const fn frequency_factor(&self) -> f64 {
        match self {
            Self::Gyroid | Self::SchwarzPrimitive => 1.0,
            Self::Lidinoid | Self::SchwarzDiamond => 0.5,
        }
    }

    /// Returns true if the field is invariant under any permutation of axes.
    #[must_use]
    pub const fn is_fully_symmetric(&self) -> bool {
        matches!(self, Self::SchwarzPrimitive | Self::SchwarzDiamond)
    }
}

impl fmt::Display for TpmsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coordinate axis a blend ramp runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RampAxis {
    /// The x axis.
    #[default]
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl RampAxis {
    /// Index of the axis into a point's coordinates.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

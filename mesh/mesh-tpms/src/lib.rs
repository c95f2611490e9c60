//! Implicit triply periodic minimal surface (TPMS) fields for lattice infill.
//!
//! This crate evaluates signed scalar fields whose zero level set is a TPMS.
//! Negative values are solid, positive values are void. Voxelizers, meshers
//! and lattice placement sit downstream and only need point evaluation.
//!
//! # Patterns
//!
//! - **Gyroid**: smooth and self-supporting, no planar symmetry
//! - **Lidinoid**: helical gyroid relative, half frequency
//! - **Schwarz-P**: primitive surface with cubic symmetry
//! - **Schwarz-D**: diamond surface, half frequency
//!
//! # Quick Start
//!
//! ```
//! use mesh_tpms::{TpmsKind, TpmsPattern};
//! use nalgebra::Point3;
//!
//! let gyroid = TpmsPattern::new(TpmsKind::Gyroid, 10.0).unwrap();
//! let value = gyroid.evaluate(Point3::new(2.5, 0.0, 0.0));
//! assert!((value - 1.0).abs() < 1e-12);
//! ```
//!
//! # Walls
//!
//! A raw pattern is an infinitely thin surface. [`WallThickened`] turns it
//! into split walls of a given thickness around a centre point:
//!
//! ```
//! use mesh_tpms::WallThickened;
//! use nalgebra::Point3;
//!
//! let walls = WallThickened::gyroid(10.0, Point3::new(5.0, 5.0, 5.0), 0.8).unwrap();
//! let value = walls.evaluate(Point3::new(5.1, 5.0, 5.0));
//! assert!(value < 0.0);
//! ```
//!
//! # Transitions
//!
//! [`Transition`] blends any two fields along a linear ramp:
//!
//! ```
//! use mesh_tpms::{Field, TpmsKind, TpmsPattern, TransitionParams};
//! use nalgebra::Point3;
//!
//! let field = Field::transition(
//!     TpmsPattern::unit(TpmsKind::SchwarzDiamond),
//!     TpmsPattern::unit(TpmsKind::SchwarzPrimitive),
//!     &TransitionParams::default().with_ramp(0.0, 10.0),
//! )
//! .unwrap();
//! let value = field.evaluate(Point3::origin());
//! assert!((value - 1.0).abs() < 1e-12);
//! ```
//!
//! # Threading
//!
//! Every field is immutable after construction and `Send + Sync`.
//! Evaluation does not allocate, so a single field can be shared across
//! worker threads sampling a voxel grid.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod blend;
mod config;
mod error;
mod field;
mod params;
mod shell;
mod tpms;
mod transition;
mod types;

pub use blend::{lerp, ramp_ratio, BlendRamp};
pub use config::FieldConfig;
pub use error::{TpmsError, TpmsResult};
pub use field::{Field, ImplicitField};
pub use params::{
    PatternParams, ShellParams, TransitionParams, DEFAULT_RAMP_SPAN, DEFAULT_RAMP_START,
};
pub use shell::{split_wall, WallThickened};
pub use tpms::{
    frequency_scale, gyroid, lidinoid, schwarz_diamond, schwarz_primitive, TpmsPattern,
};
pub use transition::{PatternTransition, Transition};
pub use types::{RampAxis, TpmsKind};

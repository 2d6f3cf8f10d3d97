//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the model selector (`ModelKind`) and its parameters (`ModelParameters`)
//! - grid / simulation settings (`GridSpec`, `EvalConfig`, `SimulationConfig`)
//! - the saved light-curve schema (`LightCurveFile`)

pub mod types;

pub use types::*;

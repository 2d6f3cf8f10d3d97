//! Light-curve model implementations.
//!
//! Models are implemented as small, pure functions so that callers can evaluate
//! them on any time array, from any thread.

pub mod model;

pub use model::*;

//! Input/output helpers.
//!
//! - parameter JSON read + validation (`params`)
//! - CSV exports (`export`)
//! - light-curve JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod params;

pub use curve::*;
pub use export::*;
pub use params::*;

//! Mathematical utilities: peak profiles and time grids.

pub mod grid;
pub mod profile;

pub use grid::*;
pub use profile::*;

//! Evidence lookup and A/B comparison.
//!
//! - file discovery + read (`lookup`)
//! - numeric text parsing (`parse`)
//! - log Bayes factor between the two models (`compare`)

pub mod compare;
pub mod lookup;
pub mod parse;

pub use compare::*;
pub use lookup::*;
pub use parse::*;

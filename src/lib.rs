//! `lightcurve-evidence` library crate.
//!
//! Closed-form light-curve models (A: Gaussian-like, B: Lorentzian-like) and a
//! lookup for precomputed Bayesian evidences stored under
//! `results/event<ID>_<model>/`.
//!
//! The binary (`lce`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the model functions can be called directly from other analysis code

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod evidence;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

pub use domain::{ModelKind, ModelParameters};
pub use error::{AppError, ErrorKind};
pub use evidence::{EvidenceLookup, get_evidence};
pub use models::{model_a_lightcurve, model_b_lightcurve};

//! Tracing subscriber setup for the `lce` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. The filter comes from `RUST_LOG` and defaults to `warn` so
//! normal output stays clean. Logs go to stderr, reports to stdout.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

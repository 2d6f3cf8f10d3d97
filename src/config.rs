//! Runtime configuration resolved from command-line flags.
//!
//! The results root is never taken from the environment: it is `--results-dir`
//! when given, else `results` relative to the working directory.

use std::path::PathBuf;

use tracing::debug;

use crate::evidence::{DEFAULT_RESULTS_DIR, EvidenceLookup, SelectionPolicy};

/// Results root: explicit flag, else `results`.
pub fn resolve_results_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR))
}

/// Build an evidence lookup from CLI-level settings.
pub fn evidence_lookup(results_dir: Option<PathBuf>, first_sorted: bool) -> EvidenceLookup {
    let policy = if first_sorted {
        SelectionPolicy::FirstSorted
    } else {
        SelectionPolicy::ExactlyOne
    };
    let root = resolve_results_dir(results_dir);
    debug!(root = %root.display(), ?policy, "evidence lookup configured");
    EvidenceLookup::new(root).with_policy(policy)
}

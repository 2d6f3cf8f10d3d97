//! Locate and read precomputed evidence values.
//!
//! Layout consumed:
//!
//! ```text
//! <root>/event<ID>_<model>/<anything>evidence.txt<anything>
//! ```
//!
//! `root` defaults to `results` (relative to the working directory).

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ModelKind;
use crate::error::AppError;
use crate::evidence::parse::parse_evidence;

/// Default results root, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Substring that marks an evidence file.
pub const EVIDENCE_MARKER: &str = "evidence.txt";

/// What to do when a results directory contains several evidence files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Require exactly one match; several is a lookup error.
    #[default]
    ExactlyOne,
    /// Take the lexicographically first file name.
    FirstSorted,
}

/// Evidence lookup rooted at a results directory.
#[derive(Debug, Clone)]
pub struct EvidenceLookup {
    root: PathBuf,
    policy: SelectionPolicy,
}

impl Default for EvidenceLookup {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_DIR)
    }
}

impl EvidenceLookup {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: SelectionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// `<root>/event<event_id>_<model>`.
    pub fn event_dir(&self, event_id: impl Display, model: &str) -> PathBuf {
        self.root.join(format!("event{event_id}_{model}"))
    }

    /// Find the evidence file inside `dir` according to the selection policy.
    pub fn find_evidence_file(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let entries = fs::read_dir(dir).map_err(|e| {
            AppError::filesystem(format!("Failed to list results directory '{}': {e}", dir.display()))
        })?;

        let mut matches: Vec<(String, PathBuf)> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                AppError::filesystem(format!("Failed to read entry in '{}': {e}", dir.display()))
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.contains(EVIDENCE_MARKER) {
                continue;
            }
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            matches.push((name, entry.path()));
        }
        matches.sort_by(|a, b| a.0.cmp(&b.0));

        match (matches.len(), self.policy) {
            (0, _) => Err(AppError::lookup(format!(
                "No file containing '{EVIDENCE_MARKER}' in '{}'.",
                dir.display()
            ))),
            (1, _) | (_, SelectionPolicy::FirstSorted) => Ok(matches.swap_remove(0).1),
            (_, SelectionPolicy::ExactlyOne) => {
                let names: Vec<&str> = matches.iter().map(|(n, _)| n.as_str()).collect();
                Err(AppError::lookup(format!(
                    "Expected one evidence file in '{}', found {}: {}.",
                    dir.display(),
                    names.len(),
                    names.join(", ")
                )))
            }
        }
    }

    /// Evidence for `event_id` under the given model label.
    pub fn evidence(&self, event_id: impl Display, model: &str) -> Result<f64, AppError> {
        let dir = self.event_dir(&event_id, model);
        debug!(dir = %dir.display(), "resolving evidence file");

        let path = self.find_evidence_file(&dir)?;
        debug!(file = %path.display(), "reading evidence");

        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                AppError::parse(format!("Evidence file '{}' is not valid UTF-8.", path.display()))
            }
            _ => AppError::filesystem(format!("Failed to read '{}': {e}", path.display())),
        })?;

        parse_evidence(&text).map_err(|e| {
            AppError::parse(format!("Invalid evidence file '{}': {}", path.display(), e.message()))
        })
    }

    /// Evidence for `event_id` under `model`.
    pub fn evidence_for(&self, event_id: impl Display, model: ModelKind) -> Result<f64, AppError> {
        self.evidence(event_id, model.label())
    }
}

/// Read the evidence of `event_id` for `model` from `results/`.
///
/// Pass `ModelKind::default().label()` (`"A"`) for the conventional default.
pub fn get_evidence(event_id: impl Display, model: &str) -> Result<f64, AppError> {
    EvidenceLookup::default().evidence(event_id, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn reads_first_value_of_matching_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("event42_A");
        write(&dir, "run1_evidence.txt", "3.14 0.01");
        write(&dir, "run1_posterior.txt", "9 9 9");

        let lookup = EvidenceLookup::new(tmp.path());
        assert_eq!(lookup.evidence(42, "A").unwrap(), 3.14);
        assert_eq!(lookup.evidence_for("42", ModelKind::A).unwrap(), 3.14);
    }

    #[test]
    fn missing_directory_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = EvidenceLookup::new(tmp.path()).evidence(7, "B").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Filesystem);
        assert!(err.to_string().contains("event7_B"), "{err}");
    }

    #[test]
    fn no_matching_file_is_lookup_error() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("event1_A"), "summary.txt", "1.0");
        let err = EvidenceLookup::new(tmp.path()).evidence(1, "A").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn several_matches_follow_policy() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("event3_A");
        write(&dir, "b_evidence.txt", "2.0");
        write(&dir, "a_evidence.txt", "1.0");

        let strict = EvidenceLookup::new(tmp.path());
        let err = strict.evidence(3, "A").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(err.to_string().contains("a_evidence.txt, b_evidence.txt"), "{err}");

        let lenient = strict.with_policy(SelectionPolicy::FirstSorted);
        assert_eq!(lenient.evidence(3, "A").unwrap(), 1.0);
    }

    #[test]
    fn directories_named_like_evidence_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("event5_B");
        fs::create_dir_all(dir.join("old_evidence.txt.d")).unwrap();
        write(&dir, "evidence.txt", "-12.5\n");
        assert_eq!(EvidenceLookup::new(tmp.path()).evidence(5, "B").unwrap(), -12.5);
    }

    #[test]
    fn malformed_content_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("event9_A"), "evidence.txt", "not-a-number\n");
        let err = EvidenceLookup::new(tmp.path()).evidence(9, "A").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("evidence.txt"), "{err}");
    }

    #[test]
    fn default_root_is_results() {
        let lookup = EvidenceLookup::default();
        assert_eq!(lookup.event_dir(42, "A"), Path::new("results").join("event42_A"));
        assert_eq!(lookup.policy(), SelectionPolicy::ExactlyOne);
    }

    #[test]
    fn get_evidence_reads_relative_results_dir() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("results").join("event42_A"), "run1_evidence.txt", "3.14 0.01");

        // The working directory is process-wide; restore it even if the lookup fails.
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(tmp.path()).unwrap();
        let value = get_evidence(42, "A");
        std::env::set_current_dir(previous).unwrap();

        assert_eq!(value.unwrap(), 3.14);
    }
}

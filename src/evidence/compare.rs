//! Model comparison from stored evidences (A vs B).
//!
//! Stored values are treated as natural-log evidences, so the log Bayes factor
//! is a plain difference:
//!
//! `ln B_AB = ln Z_A - ln Z_B`
//!
//! Strength follows the Kass & Raftery (1995) scale on `|ln B|`:
//! - `< 1`: inconclusive
//! - `1..3`: positive
//! - `3..5`: strong
//! - `>= 5`: very strong

use std::fmt::Display;

use serde::Serialize;

use crate::domain::ModelKind;
use crate::error::AppError;
use crate::evidence::lookup::EvidenceLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    Inconclusive,
    Positive,
    Strong,
    VeryStrong,
}

impl EvidenceStrength {
    pub fn from_log_bayes_factor(ln_b: f64) -> Self {
        let m = ln_b.abs();
        if m < 1.0 {
            EvidenceStrength::Inconclusive
        } else if m < 3.0 {
            EvidenceStrength::Positive
        } else if m < 5.0 {
            EvidenceStrength::Strong
        } else {
            EvidenceStrength::VeryStrong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EvidenceStrength::Inconclusive => "inconclusive",
            EvidenceStrength::Positive => "positive",
            EvidenceStrength::Strong => "strong",
            EvidenceStrength::VeryStrong => "very strong",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvidenceComparison {
    pub event_id: String,
    pub evidence_a: f64,
    pub evidence_b: f64,
    /// `ln Z_A - ln Z_B`; positive favours A.
    pub log_bayes_factor: f64,
    /// `None` when the two evidences are equal.
    pub preferred: Option<ModelKind>,
    pub strength: EvidenceStrength,
}

impl EvidenceComparison {
    pub fn from_evidences(event_id: impl Display, evidence_a: f64, evidence_b: f64) -> Result<Self, AppError> {
        let log_bayes_factor = evidence_a - evidence_b;
        if !log_bayes_factor.is_finite() {
            return Err(AppError::numeric(format!(
                "Cannot compare evidences {evidence_a} and {evidence_b}: non-finite Bayes factor."
            )));
        }

        let preferred = if log_bayes_factor > 0.0 {
            Some(ModelKind::A)
        } else if log_bayes_factor < 0.0 {
            Some(ModelKind::B)
        } else {
            None
        };

        Ok(Self {
            event_id: event_id.to_string(),
            evidence_a,
            evidence_b,
            log_bayes_factor,
            preferred,
            strength: EvidenceStrength::from_log_bayes_factor(log_bayes_factor),
        })
    }
}

/// Read both evidences for `event_id` and compare them.
pub fn compare_models(lookup: &EvidenceLookup, event_id: impl Display) -> Result<EvidenceComparison, AppError> {
    let evidence_a = lookup.evidence_for(&event_id, ModelKind::A)?;
    let evidence_b = lookup.evidence_for(&event_id, ModelKind::B)?;
    EvidenceComparison::from_evidences(event_id, evidence_a, evidence_b)
}

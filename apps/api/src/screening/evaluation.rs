//! Evaluator: maps a similarity score to a screening outcome.

use serde::{Deserialize, Serialize};

/// Outcome of screening a résumé against the job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    Approved,
    #[serde(rename = "Partially approved")]
    PartiallyApproved,
    Rejected,
}

impl Evaluation {
    pub fn label(&self) -> &'static str {
        match self {
            Evaluation::Approved => "Approved",
            Evaluation::PartiallyApproved => "Partially approved",
            Evaluation::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Strict lower bounds: a score must exceed `approve` to be approved and `partial`
/// to be partially approved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub approve: f32,
    pub partial: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            approve: 0.85,
            partial: 0.65,
        }
    }
}

pub fn evaluate(similarity_score: f32, thresholds: &Thresholds) -> Evaluation {
    if similarity_score > thresholds.approve {
        Evaluation::Approved
    } else if similarity_score > thresholds.partial {
        Evaluation::PartiallyApproved
    } else {
        Evaluation::Rejected
    }
}

//! Error and status kinds for project evaluation
//!
//! Failures are local to a single project. The batch service converts them
//! into per-project statuses instead of aborting the run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Evaluation failure for a single project
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Malformed project record (life < 1, negative initial cost, tax rate
    /// outside [0, 100], or non-finite inputs)
    #[error("invalid project '{name}': {reason}")]
    InvalidProject { name: String, reason: String },

    /// Discount rate at or below -100% makes every discount factor for
    /// t >= 1 undefined
    #[error("invalid discount rate {rate_percent}%: rate must be greater than -100%")]
    InvalidRate { rate_percent: f64 },

    /// Discounted costs evaluate to exactly zero, so the B/C ratio is
    /// undefined
    #[error("benefit/cost ratio undefined: discounted costs are zero")]
    DivisionUndefined,

    /// No internal rate of return exists in the search range
    #[error("no internal rate of return: {reason}")]
    NoIrr { reason: String },
}

/// Per-project outcome reported in an evaluation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalStatus {
    /// Metric computed successfully
    Ok,
    /// IRR iteration cap was reached before the bracket met tolerance; the
    /// value is the best estimate, not a verified root
    LowConfidence,
    /// Project record failed validation
    InvalidProject,
    /// Discount rate at or below -100%
    InvalidRate,
    /// B/C ratio with zero discounted costs
    DivisionUndefined,
    /// No IRR in the cash flows (no sign change, or no bracket in range)
    NoIrr,
}

impl EvalStatus {
    /// True when the result carries a usable metric value
    pub fn has_value(&self) -> bool {
        matches!(self, EvalStatus::Ok | EvalStatus::LowConfidence)
    }

    /// Short label for table output
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalStatus::Ok => "ok",
            EvalStatus::LowConfidence => "low-confidence",
            EvalStatus::InvalidProject => "invalid-project",
            EvalStatus::InvalidRate => "invalid-rate",
            EvalStatus::DivisionUndefined => "division-undefined",
            EvalStatus::NoIrr => "no-irr",
        }
    }
}

impl From<&EvalError> for EvalStatus {
    fn from(err: &EvalError) -> Self {
        match err {
            EvalError::InvalidProject { .. } => EvalStatus::InvalidProject,
            EvalError::InvalidRate { .. } => EvalStatus::InvalidRate,
            EvalError::DivisionUndefined => EvalStatus::DivisionUndefined,
            EvalError::NoIrr { .. } => EvalStatus::NoIrr,
        }
    }
}

//! Cash-flow series construction from project parameters
//!
//! A project's raw financial parameters are converted into one net cash
//! flow per period: the initial outlay at period 0, the after-tax operating
//! flow each year of the project's life, and the salvage value added to the
//! final year. Every metric evaluator works from this series.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::project::Project;

/// Amounts smaller than this are treated as zero for sign tests
const SIGN_EPSILON: f64 = 1e-10;

/// Ordered per-period net cash flows for one project, period 0 through n
///
/// Built fresh for each evaluation call and discarded after use. The length
/// is always `life + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    amounts: Vec<f64>,
}

impl CashFlowSeries {
    /// Build the series from a project record
    ///
    /// Period 0 is `-initial_cost`; periods 1..n are
    /// `(income - maintenance) * (1 - tax/100)`; period n additionally
    /// receives the salvage value. Fails if the project's invariants do
    /// not hold.
    pub fn from_project(project: &Project) -> Result<Self, EvalError> {
        project.validate()?;

        let n = project.life as usize;
        let net_flow = project.net_annual_flow();

        let mut amounts = Vec::with_capacity(n + 1);
        amounts.push(-project.initial_cost);
        amounts.extend(std::iter::repeat(net_flow).take(n));
        amounts[n] += project.salvage_value;

        Ok(Self { amounts })
    }

    /// All per-period amounts, indexed by period
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Number of periods after period 0 (the project life)
    pub fn periods(&self) -> usize {
        self.amounts.len() - 1
    }

    /// True if the series contains at least one positive and one negative
    /// amount, the precondition for an IRR to exist
    pub fn has_sign_change(&self) -> bool {
        let has_positive = self.amounts.iter().any(|&cf| cf > SIGN_EPSILON);
        let has_negative = self.amounts.iter().any(|&cf| cf < -SIGN_EPSILON);
        has_positive && has_negative
    }
}

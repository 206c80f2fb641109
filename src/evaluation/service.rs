//! Batch evaluation orchestration
//!
//! Applies one chosen metric to each project independently and collects the
//! results in input order. Per-project failures become result statuses and
//! never abort the rest of the batch. Projects share no mutable state, so
//! the batch maps across the rayon thread pool when enabled.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{bc_ratio, irr, npw};
use crate::cashflow::CashFlowSeries;
use crate::error::{EvalError, EvalStatus};
use crate::evaluation::IrrConfig;
use crate::project::Project;

/// Metric applied to every project in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Net Present Worth at the project's (or overridden) rate
    Npw,
    /// Benefit/Cost ratio at the project's (or overridden) rate
    BcRatio,
    /// Internal Rate of Return; ignores supplied rates
    Irr,
}

impl Method {
    /// Display label matching the report headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Npw => "NPW",
            Method::BcRatio => "B/C Ratio",
            Method::Irr => "IRR",
        }
    }
}

/// Configuration for a batch evaluation run
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Global discount-rate override in percent; when None, each project's
    /// own interest rate is used (NPW and B/C only; IRR ignores rates)
    pub rate_override: Option<f64>,

    /// IRR search tuning
    pub irr: IrrConfig,

    /// Evaluate projects across the rayon thread pool
    pub parallel: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rate_override: None,
            irr: IrrConfig::default(),
            parallel: true,
        }
    }
}

/// One project's outcome for the chosen metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Project name, copied from the input record
    pub project: String,

    /// Metric that was applied
    pub method: Method,

    /// Full-precision metric value; None when the status is a failure kind
    pub value: Option<f64>,

    /// Outcome for this project
    pub status: EvalStatus,
}

impl EvaluationResult {
    /// Metric value rounded to two decimals for display; internal contracts
    /// (monotonicity, root tolerance) are defined on the unrounded value
    pub fn display_value(&self) -> Option<f64> {
        self.value.map(|v| (v * 100.0).round() / 100.0)
    }
}

/// Batch evaluator for a collection of projects
pub struct EvaluationService {
    config: ServiceConfig,
}

impl EvaluationService {
    /// Create a service with the given configuration
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Evaluate every project with the chosen metric
    ///
    /// Output order matches input order. Each result is written to its own
    /// slot; nothing is shared between projects during the batch.
    pub fn evaluate(&self, projects: &[Project], method: Method) -> Vec<EvaluationResult> {
        warn_duplicate_names(projects);

        if self.config.parallel && projects.len() > 1 {
            projects
                .par_iter()
                .map(|p| self.evaluate_one(p, method))
                .collect()
        } else {
            projects
                .iter()
                .map(|p| self.evaluate_one(p, method))
                .collect()
        }
    }

    /// Evaluate a single project with the chosen metric
    pub fn evaluate_one(&self, project: &Project, method: Method) -> EvaluationResult {
        match self.compute(project, method) {
            Ok((value, status)) => EvaluationResult {
                project: project.name.clone(),
                method,
                value: Some(value),
                status,
            },
            Err(err) => {
                log::debug!("evaluation failed for '{}': {}", project.name, err);
                EvaluationResult {
                    project: project.name.clone(),
                    method,
                    value: None,
                    status: EvalStatus::from(&err),
                }
            }
        }
    }

    fn compute(&self, project: &Project, method: Method) -> Result<(f64, EvalStatus), EvalError> {
        let series = CashFlowSeries::from_project(project)?;
        let rate_percent = self.config.rate_override.unwrap_or(project.interest_rate);

        match method {
            Method::Npw => {
                let value = npw::present_worth(&series, rate_percent)?;
                Ok((value, EvalStatus::Ok))
            }
            Method::BcRatio => {
                let value = bc_ratio::ratio(project, rate_percent)?;
                Ok((value, EvalStatus::Ok))
            }
            Method::Irr => {
                let solution = irr::solve_with(&series, &self.config.irr)?;
                let status = if solution.converged {
                    EvalStatus::Ok
                } else {
                    EvalStatus::LowConfidence
                };
                Ok((solution.rate_percent, status))
            }
        }
    }
}

impl Default for EvaluationService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

/// Duplicate names make the comparison table ambiguous to readers; they are
/// permitted but flagged
fn warn_duplicate_names(projects: &[Project]) {
    let mut seen = HashSet::new();
    for p in projects {
        if !seen.insert(p.name.as_str()) {
            log::warn!("duplicate project name '{}' in comparison batch", p.name);
        }
    }
}

//! Benefit/Cost (B/C) ratio evaluation
//!
//! Benefits and costs are discounted separately: benefits are the after-tax
//! income stream, costs are the initial outlay plus the discounted
//! maintenance stream. Salvage value is excluded from benefits by
//! convention, so B/C and NPW agree on viability only for projects without
//! salvage value.

use crate::error::EvalError;
use crate::project::Project;

/// Discounted benefits over discounted costs at a rate given in percent
///
/// A ratio above 1 signals viability at the given rate; ratios at or below
/// 1 are reported, never rejected. Fails with `DivisionUndefined` when the
/// discounted costs are exactly zero (no initial cost and no maintenance).
pub fn ratio(project: &Project, rate_percent: f64) -> Result<f64, EvalError> {
    project.validate()?;

    let rate = rate_percent / 100.0;
    if !rate.is_finite() || rate <= -1.0 {
        return Err(EvalError::InvalidRate { rate_percent });
    }

    let after_tax_income = project.after_tax_income();
    let mut benefits = 0.0;
    let mut costs = project.initial_cost;

    for t in 1..=project.life {
        let discount = (1.0 + rate).powi(t as i32);
        benefits += after_tax_income / discount;
        costs += project.annual_maintenance / discount;
    }

    if costs == 0.0 {
        return Err(EvalError::DivisionUndefined);
    }

    Ok(benefits / costs)
}

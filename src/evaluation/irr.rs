//! Internal Rate of Return (IRR) solver
//!
//! IRR is the rate at which the present worth of a cash-flow series is
//! zero. No closed form exists beyond two periods, so the solver brackets a
//! sign change of NPW and refines it with a Newton/bisection hybrid: Newton
//! steps for speed when they land inside the bracket, bisection midpoints
//! otherwise, with the bracket shrunk by sign on every iteration.
//!
//! For non-conventional cash flows several IRRs can exist. The scan reports
//! the first bracket found walking up from the most negative rate; this is
//! a documented policy, not a claim about which root is "correct".

use serde::{Deserialize, Serialize};

use super::npw::{npw_and_derivative, npw_at_rate};
use crate::cashflow::CashFlowSeries;
use crate::error::EvalError;

/// Tuning knobs for the IRR search
#[derive(Debug, Clone)]
pub struct IrrConfig {
    /// Lower end of the bracket scan, as a decimal rate
    pub lower_bound: f64,

    /// Upper end of the bracket scan, as a decimal rate
    pub upper_bound: f64,

    /// Multiplicative step applied to the growth factor (1 + rate) while
    /// scanning for a bracket; must be greater than 1
    pub step_factor: f64,

    /// Bracket width below which the root is accepted, in decimal rate units
    pub tolerance: f64,

    /// Hard cap on refinement iterations
    pub max_iterations: u32,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            lower_bound: -0.99, // -99%
            upper_bound: 10.0,  // +1000%
            step_factor: 1.25,
            tolerance: 1e-7,
            max_iterations: 100,
        }
    }
}

/// Solver output: the root in percent plus whether the bracket met tolerance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSolution {
    /// Annual rate in percent that zeroes the present worth
    pub rate_percent: f64,

    /// False when the iteration cap was hit before the bracket met
    /// tolerance; the rate is then the best estimate, not a verified root
    pub converged: bool,
}

/// Solve for the IRR of a cash-flow series with default search settings
pub fn solve(series: &CashFlowSeries) -> Result<IrrSolution, EvalError> {
    solve_with(series, &IrrConfig::default())
}

/// Solve for the IRR with explicit search settings
pub fn solve_with(series: &CashFlowSeries, config: &IrrConfig) -> Result<IrrSolution, EvalError> {
    let amounts = series.amounts();

    // A series that never changes sign cannot cross zero NPW at any rate
    if !series.has_sign_change() {
        return Err(EvalError::NoIrr {
            reason: "cash flows never change sign".to_string(),
        });
    }

    let (mut lo, mut hi, mut npw_lo) = find_bracket(amounts, config).ok_or_else(|| EvalError::NoIrr {
        reason: format!(
            "no sign change in present worth between {:.0}% and {:.0}%",
            config.lower_bound * 100.0,
            config.upper_bound * 100.0
        ),
    })?;

    let mut rate = 0.5 * (lo + hi);
    let mut converged = false;

    for _ in 0..config.max_iterations {
        if hi - lo < config.tolerance {
            rate = 0.5 * (lo + hi);
            converged = true;
            break;
        }

        let (npw, dnpw) = npw_and_derivative(amounts, rate);
        if npw == 0.0 {
            converged = true;
            break;
        }

        // Shrink the bracket using the new sample's sign
        if npw * npw_lo < 0.0 {
            hi = rate;
        } else {
            lo = rate;
            npw_lo = npw;
        }

        // Newton step when it lands strictly inside the bracket, bisection
        // midpoint otherwise
        let newton = rate - npw / dnpw;
        rate = if newton.is_finite() && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };

        log::debug!("irr refine: bracket [{:.9}, {:.9}] rate {:.9}", lo, hi, rate);
    }

    Ok(IrrSolution {
        rate_percent: rate * 100.0,
        converged,
    })
}

/// Scan upward from the lower bound in geometric steps of the growth factor
/// (1 + rate) until two adjacent samples have opposite-sign NPW
///
/// Returns (lo, hi, npw at lo). A sample landing exactly on a root is
/// returned as a zero-width bracket.
fn find_bracket(amounts: &[f64], config: &IrrConfig) -> Option<(f64, f64, f64)> {
    let mut growth = 1.0 + config.lower_bound;
    let mut prev_rate = config.lower_bound;
    let mut prev_npw = npw_at_rate(amounts, prev_rate);

    if prev_npw == 0.0 {
        return Some((prev_rate, prev_rate, prev_npw));
    }

    loop {
        growth *= config.step_factor;
        let rate = (growth - 1.0).min(config.upper_bound);
        let npw = npw_at_rate(amounts, rate);

        if npw == 0.0 {
            return Some((rate, rate, npw));
        }
        if prev_npw * npw < 0.0 {
            return Some((prev_rate, rate, prev_npw));
        }
        if rate >= config.upper_bound {
            return None;
        }

        prev_rate = rate;
        prev_npw = npw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;
    use approx::assert_relative_eq;

    fn series_for(project: &Project) -> CashFlowSeries {
        CashFlowSeries::from_project(project).unwrap()
    }

    #[test]
    fn test_reference_irr() {
        // IC=1000, SV=0, n=5, I=400, M=100, T=0: IRR ~ 15.24%
        let p = Project::new("Ref", 1000.0, 0.0, 5, 400.0, 100.0, 0.0, 10.0);
        let solution = solve(&series_for(&p)).unwrap();

        assert!(solution.converged);
        assert_relative_eq!(solution.rate_percent, 15.24, epsilon = 0.01);
    }

    #[test]
    fn test_root_property() {
        // NPW at the returned rate must be near zero
        let p = Project::new("Ref", 1000.0, 0.0, 5, 400.0, 100.0, 0.0, 10.0);
        let series = series_for(&p);
        let solution = solve(&series).unwrap();

        let residual = npw_at_rate(series.amounts(), solution.rate_percent / 100.0);
        assert!(residual.abs() < 1e-2, "residual NPW {} too large", residual);
    }

    #[test]
    fn test_single_period_exact() {
        // -1000 now, +1100 in one year: IRR is exactly 10%
        let p = Project::new("OneYear", 1000.0, 0.0, 1, 1100.0, 0.0, 0.0, 5.0);
        let solution = solve(&series_for(&p)).unwrap();

        assert!(solution.converged);
        assert_relative_eq!(solution.rate_percent, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_all_negative_flows_have_no_irr() {
        // Outlay followed by pure losses
        let p = Project::new("Losing", 500.0, 0.0, 4, 50.0, 200.0, 0.0, 10.0);
        let result = solve(&series_for(&p));
        assert!(matches!(result, Err(EvalError::NoIrr { .. })));
    }

    #[test]
    fn test_all_positive_flows_have_no_irr() {
        // No outlay, pure income
        let p = Project::new("FreeLunch", 0.0, 0.0, 3, 100.0, 0.0, 0.0, 10.0);
        let result = solve(&series_for(&p));
        assert!(matches!(result, Err(EvalError::NoIrr { .. })));
    }

    #[test]
    fn test_all_zero_flows_have_no_irr() {
        let p = Project::new("Zero", 0.0, 0.0, 3, 0.0, 0.0, 0.0, 10.0);
        let result = solve(&series_for(&p));
        assert!(matches!(result, Err(EvalError::NoIrr { .. })));
    }

    #[test]
    fn test_negative_irr_found() {
        // Project that never earns back its outlay: root below zero
        let p = Project::new("Sunk", 1000.0, 0.0, 5, 150.0, 0.0, 0.0, 10.0);
        let series = series_for(&p);
        let solution = solve(&series).unwrap();

        assert!(solution.converged);
        assert!(solution.rate_percent < 0.0);
        let residual = npw_at_rate(series.amounts(), solution.rate_percent / 100.0);
        assert!(residual.abs() < 1e-2);
    }

    #[test]
    fn test_convergence_independent_of_bracket_scan() {
        // A conventional series has a unique IRR; different scan settings
        // must land on the same root
        let p = Project::new("Conv", 1000.0, 100.0, 7, 350.0, 80.0, 20.0, 9.0);
        let series = series_for(&p);

        let default = solve(&series).unwrap();

        let coarse = IrrConfig {
            step_factor: 2.0,
            ..IrrConfig::default()
        };
        let narrow = IrrConfig {
            lower_bound: -0.5,
            upper_bound: 3.0,
            ..IrrConfig::default()
        };

        let from_coarse = solve_with(&series, &coarse).unwrap();
        let from_narrow = solve_with(&series, &narrow).unwrap();

        assert_relative_eq!(default.rate_percent, from_coarse.rate_percent, epsilon = 1e-4);
        assert_relative_eq!(default.rate_percent, from_narrow.rate_percent, epsilon = 1e-4);
    }

    #[test]
    fn test_iteration_cap_flags_low_confidence() {
        // A tolerance no bracket can meet forces the cap to trigger
        let p = Project::new("Ref", 1000.0, 0.0, 5, 400.0, 100.0, 0.0, 10.0);
        let config = IrrConfig {
            tolerance: 0.0,
            max_iterations: 3,
            ..IrrConfig::default()
        };
        let solution = solve_with(&series_for(&p), &config).unwrap();

        assert!(!solution.converged);
        // Even the capped estimate should be in the right neighborhood
        assert!(solution.rate_percent > -99.0 && solution.rate_percent < 1000.0);
    }

    #[test]
    fn test_deterministic() {
        let p = Project::new("Det", 2500.0, 500.0, 10, 800.0, 250.0, 25.0, 8.0);
        let series = series_for(&p);
        let a = solve(&series).unwrap();
        let b = solve(&series).unwrap();
        assert_eq!(a, b);
    }
}

//! Net Present Worth (NPW) discounting
//!
//! Discounts a cash-flow series to time 0 at a given rate. The analytic
//! derivative of NPW with respect to the rate is also provided for the IRR
//! solver's Newton steps.

use crate::cashflow::CashFlowSeries;
use crate::error::EvalError;

/// Discount a cash-flow series to present worth at a rate given in percent
///
/// Computes `sum over t of amount(t) / (1 + r)^t` with `r = rate_percent / 100`.
/// Requires `r > -1`; at exactly -100% every discount factor for t >= 1 is
/// undefined.
pub fn present_worth(series: &CashFlowSeries, rate_percent: f64) -> Result<f64, EvalError> {
    let rate = rate_percent / 100.0;
    if !rate.is_finite() || rate <= -1.0 {
        return Err(EvalError::InvalidRate { rate_percent });
    }
    Ok(npw_at_rate(series.amounts(), rate))
}

/// NPW at a rate given as a decimal; callers are responsible for bounds
pub(crate) fn npw_at_rate(amounts: &[f64], rate: f64) -> f64 {
    amounts
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// NPW and its derivative with respect to the decimal rate
pub(crate) fn npw_and_derivative(amounts: &[f64], rate: f64) -> (f64, f64) {
    let mut npw = 0.0;
    let mut dnpw = 0.0;

    for (t, &cf) in amounts.iter().enumerate() {
        npw += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpw -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npw, dnpw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;
    use approx::assert_relative_eq;

    fn reference_series() -> CashFlowSeries {
        // IC=1000, SV=0, n=5, I=400, M=100, T=0
        let p = Project::new("Ref", 1000.0, 0.0, 5, 400.0, 100.0, 0.0, 10.0);
        CashFlowSeries::from_project(&p).unwrap()
    }

    #[test]
    fn test_reference_npw_at_ten_percent() {
        // -1000 + 300 * [1 - 1.1^-5] / 0.1 = 137.24
        let npw = present_worth(&reference_series(), 10.0).unwrap();
        assert_relative_eq!(npw, 137.236, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        let npw = present_worth(&reference_series(), 0.0).unwrap();
        assert_relative_eq!(npw, 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rate_at_or_below_minus_100_rejected() {
        assert!(present_worth(&reference_series(), -100.0).is_err());
        assert!(present_worth(&reference_series(), -150.0).is_err());
        assert!(present_worth(&reference_series(), f64::NAN).is_err());
        // Just above the pole is still defined
        assert!(present_worth(&reference_series(), -99.9).is_ok());
    }

    #[test]
    fn test_npw_strictly_decreasing_in_rate() {
        // Positive net per-period flows: NPW must fall as the rate rises
        let series = reference_series();
        let rates = [-50.0, -10.0, 0.0, 5.0, 10.0, 25.0, 100.0, 500.0];
        let values: Vec<f64> = rates
            .iter()
            .map(|&r| present_worth(&series, r).unwrap())
            .collect();

        for pair in values.windows(2) {
            assert!(pair[0] > pair[1], "NPW must decrease: {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let series = reference_series();
        let amounts = series.amounts();
        let h = 1e-7;

        for &rate in &[-0.5, 0.0, 0.1, 0.5, 2.0] {
            let (_, dnpw) = npw_and_derivative(amounts, rate);
            let numeric = (npw_at_rate(amounts, rate + h) - npw_at_rate(amounts, rate - h)) / (2.0 * h);
            assert_relative_eq!(dnpw, numeric, epsilon = 1e-3, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_salvage_discounted_at_final_period() {
        let p = Project::new("Salvage", 0.0, 1000.0, 10, 0.0, 0.0, 0.0, 10.0);
        let series = CashFlowSeries::from_project(&p).unwrap();
        let npw = present_worth(&series, 10.0).unwrap();
        assert_relative_eq!(npw, 1000.0 / 1.1f64.powi(10), epsilon = 1e-9);
    }
}

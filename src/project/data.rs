//! Project data structures matching the intake record format

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// A candidate capital project, immutable once submitted
///
/// Monetary fields are in consistent currency units; rates are percentages
/// (a `tax_rate` of 25.0 means 25%). Periods are whole years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Identifying name, unique within a comparison batch (advisory only;
    /// duplicates are flagged, not rejected)
    pub name: String,

    /// Capital outlay at period 0 (non-negative)
    pub initial_cost: f64,

    /// Residual value recovered once, at the end of period `life`
    pub salvage_value: f64,

    /// Project life in years, at least 1
    pub life: u32,

    /// Gross benefit realized each period 1..=life
    pub annual_income: f64,

    /// Cost realized each period 1..=life
    pub annual_maintenance: f64,

    /// Flat tax percentage in [0, 100], applied to net operating cash flow;
    /// salvage value is not taxed
    pub tax_rate: f64,

    /// Required rate of return in percent, used for NPW and B/C discounting
    /// (IRR solves for the equivalent rate instead)
    pub interest_rate: f64,
}

impl Project {
    /// Create a new project record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        initial_cost: f64,
        salvage_value: f64,
        life: u32,
        annual_income: f64,
        annual_maintenance: f64,
        tax_rate: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            initial_cost,
            salvage_value,
            life,
            annual_income,
            annual_maintenance,
            tax_rate,
            interest_rate,
        }
    }

    /// Net per-period operating cash flow after tax: (I - M) * (1 - T/100)
    pub fn net_annual_flow(&self) -> f64 {
        (self.annual_income - self.annual_maintenance) * (1.0 - self.tax_rate / 100.0)
    }

    /// Annual income net of tax, the per-period benefit term for B/C
    pub fn after_tax_income(&self) -> f64 {
        self.annual_income * (1.0 - self.tax_rate / 100.0)
    }

    /// Re-validate intake invariants
    ///
    /// Construction and range checking belong to the intake layer; the core
    /// still checks defensively before any metric is computed.
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.name.is_empty() {
            return Err(self.invalid("name is empty"));
        }
        if self.life < 1 {
            return Err(self.invalid("life must be at least 1 period"));
        }
        if !self.initial_cost.is_finite() || self.initial_cost < 0.0 {
            return Err(self.invalid("initial cost must be finite and non-negative"));
        }
        if !self.tax_rate.is_finite() || !(0.0..=100.0).contains(&self.tax_rate) {
            return Err(self.invalid("tax rate must be within [0, 100]"));
        }
        for (field, value) in [
            ("salvage_value", self.salvage_value),
            ("annual_income", self.annual_income),
            ("annual_maintenance", self.annual_maintenance),
            ("interest_rate", self.interest_rate),
        ] {
            if !value.is_finite() {
                return Err(self.invalid(&format!("{} must be finite", field)));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> EvalError {
        EvalError::InvalidProject {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

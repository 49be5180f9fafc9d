//! Monthly compounding at an annual growth rate
//!
//! An annual rate `r` compounds monthly at the equivalent factor
//! `(1 + r)^(1/12)`, so twelve monthly steps reproduce exactly one year.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RudderError};

/// Annual rate of return with its monthly-equivalent growth factor
///
/// Always finite and above -100%; deserialization goes through [`GrowthRate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GrowthRate {
    annual_rate: f64,
}

impl GrowthRate {
    /// Validate and wrap an annual rate
    pub fn new(annual_rate: f64) -> Result<Self> {
        if !annual_rate.is_finite() || annual_rate <= -1.0 {
            return Err(RudderError::InvalidRate(annual_rate));
        }
        Ok(Self { annual_rate })
    }

    /// Built-in assumptions known to be valid
    pub(super) const fn preset(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Annual rate (e.g. 0.05 for 5%)
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Monthly growth factor `(1 + r)^(1/12)`
    pub fn monthly_factor(&self) -> f64 {
        (1.0 + self.annual_rate).powf(1.0 / 12.0)
    }

    /// Growth over `months` months
    pub fn accumulation_factor(&self, months: u32) -> f64 {
        self.monthly_factor().powi(months as i32)
    }

    /// Value at the end of `months` of a level contribution paid each month.
    ///
    /// The contribution made `k` months before the end has grown for `k`
    /// months, for `k` in `0..months`.
    pub fn future_value_of_contributions(&self, contribution: f64, months: u32) -> f64 {
        let factor = self.monthly_factor();
        (0..months)
            .map(|k| contribution * factor.powi(k as i32))
            .sum()
    }

    /// Value today of `amount` due in `months` months
    pub fn present_value(&self, amount: f64, months: u32) -> f64 {
        amount / self.accumulation_factor(months)
    }
}

impl TryFrom<f64> for GrowthRate {
    type Error = RudderError;

    fn try_from(annual_rate: f64) -> Result<Self> {
        Self::new(annual_rate)
    }
}

impl From<GrowthRate> for f64 {
    fn from(rate: GrowthRate) -> f64 {
        rate.annual_rate
    }
}

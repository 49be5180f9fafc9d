//! Persistence collaborator for investments and retirement parameters
//!
//! The engine never touches storage. Callers load a snapshot, run the pure
//! computations on it, and save explicitly after a mutation.

mod json;
mod memory;

pub use json::{JsonFileStore, DEFAULT_STORE_PATH};
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RudderError};
use crate::portfolio::Investment;

/// The user's retirement goal and savings plan
///
/// Zero year, month or income means "not yet configured".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RetirementParameters {
    /// Calendar year of retirement
    pub retirement_year: i32,

    /// Month of retirement (1-12, 0 = unset)
    pub retirement_month: u32,

    /// Planned contribution per month
    pub monthly_contribution: f64,

    /// Desired income per month in retirement
    pub target_monthly_income: f64,
}

impl RetirementParameters {
    pub fn new(
        retirement_year: i32,
        retirement_month: u32,
        monthly_contribution: f64,
        target_monthly_income: f64,
    ) -> Self {
        Self {
            retirement_year,
            retirement_month,
            monthly_contribution,
            target_monthly_income,
        }
    }

    /// True once a retirement date has been picked
    pub fn has_retirement_date(&self) -> bool {
        self.retirement_year != 0 && self.retirement_month != 0
    }

    /// Reject values no picker could produce
    pub fn validate(&self) -> Result<()> {
        if self.retirement_month > 12 {
            return Err(RudderError::InvalidMonth(self.retirement_month));
        }
        check_amount("monthly contribution", self.monthly_contribution)?;
        check_amount("target monthly income", self.target_monthly_income)?;
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RudderError::InvalidAmount { field, value });
    }
    Ok(())
}

/// Durable store for the investment list and retirement parameters
pub trait RecordStore {
    /// Load the saved investments (empty when nothing was saved)
    fn load_investments(&self) -> Result<Vec<Investment>>;

    /// Replace the saved investments
    fn save_investments(&mut self, investments: &[Investment]) -> Result<()>;

    /// Load the saved parameters (unconfigured default when nothing was saved)
    fn load_retirement_parameters(&self) -> Result<RetirementParameters>;

    /// Replace the saved parameters
    fn save_retirement_parameters(&mut self, params: &RetirementParameters) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let params = RetirementParameters::default();
        assert!(!params.has_retirement_date());
        assert_eq!(params.target_monthly_income, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_month() {
        let params = RetirementParameters::new(2052, 13, 800.0, 5000.0);
        assert!(matches!(params.validate(), Err(RudderError::InvalidMonth(13))));
    }

    #[test]
    fn test_validate_amounts() {
        let params = RetirementParameters::new(2052, 10, -1.0, 5000.0);
        assert!(matches!(
            params.validate(),
            Err(RudderError::InvalidAmount { field: "monthly contribution", .. })
        ));

        let params = RetirementParameters::new(2052, 10, 800.0, f64::INFINITY);
        assert!(params.validate().is_err());
    }
}

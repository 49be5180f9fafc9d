//! Reduce a set of investments to an allocation vector and total value

use log::debug;
use serde::{Deserialize, Serialize};

use super::data::{AllocationVector, AssetCategory, Investment};

/// Portfolio composition at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Normalized weight per category (all zero when `total_value` is 0)
    pub allocation: AllocationVector,

    /// Sum of purchase values
    pub total_value: f64,
}

impl PortfolioSummary {
    /// True when there is nothing to measure risk against
    pub fn is_empty(&self) -> bool {
        self.total_value == 0.0
    }
}

/// Sum purchase values per category and normalize by the portfolio total.
///
/// A zero total yields the all-zero vector rather than NaN weights.
pub fn aggregate(investments: &[Investment]) -> PortfolioSummary {
    let mut sums = AllocationVector::zero();

    for investment in investments {
        let value = investment.purchase_value;
        match investment.category {
            AssetCategory::Cash => sums.cash += value,
            AssetCategory::Bonds => sums.bonds += value,
            AssetCategory::RealEstate => sums.real_estate += value,
            AssetCategory::Stocks => sums.stocks += value,
        }
    }

    let total_value = sums.total();
    if total_value == 0.0 {
        debug!("aggregate: {} investments with zero total value", investments.len());
        return PortfolioSummary {
            allocation: AllocationVector::zero(),
            total_value: 0.0,
        };
    }

    PortfolioSummary {
        allocation: AllocationVector::new(
            sums.cash / total_value,
            sums.bonds / total_value,
            sums.real_estate / total_value,
            sums.stocks / total_value,
        ),
        total_value,
    }
}

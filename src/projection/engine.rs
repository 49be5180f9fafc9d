//! Retirement corpus and present-value target range

use log::debug;
use serde::{Deserialize, Serialize};

use super::growth::GrowthRate;
use crate::error::{Result, RudderError};
use crate::horizon::HorizonMonths;

/// Sustainable annual withdrawal rate behind the required corpus (4% rule)
pub const WITHDRAWAL_RATE: f64 = 0.04;

/// Default optimistic annual growth assumption
pub const DEFAULT_HIGH_RATE: f64 = 0.05;

/// Default pessimistic annual growth assumption
pub const DEFAULT_LOW_RATE: f64 = 0.03;

/// Pair of growth assumptions bounding the target range
///
/// `high` is never below `low`; serialized as `[high, low]` and re-ordered
/// on the way back in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct RateBounds {
    high: GrowthRate,
    low: GrowthRate,
}

impl RateBounds {
    /// Build from two annual rates given in either order
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let a = GrowthRate::new(a)?;
        let b = GrowthRate::new(b)?;
        let (high, low) = if a.annual_rate() >= b.annual_rate() { (a, b) } else { (b, a) };
        Ok(Self { high, low })
    }

    const fn preset(high: f64, low: f64) -> Self {
        Self {
            high: GrowthRate::preset(high),
            low: GrowthRate::preset(low),
        }
    }

    /// Higher growth rate, yields the lower bound of the range
    pub fn high(&self) -> GrowthRate {
        self.high
    }

    /// Lower growth rate, yields the upper bound of the range
    pub fn low(&self) -> GrowthRate {
        self.low
    }
}

impl Default for RateBounds {
    fn default() -> Self {
        Self::preset(DEFAULT_HIGH_RATE, DEFAULT_LOW_RATE)
    }
}

impl TryFrom<(f64, f64)> for RateBounds {
    type Error = RudderError;

    fn try_from((a, b): (f64, f64)) -> Result<Self> {
        Self::new(a, b)
    }
}

impl From<RateBounds> for (f64, f64) {
    fn from(bounds: RateBounds) -> (f64, f64) {
        (bounds.high.annual_rate(), bounds.low.annual_rate())
    }
}

/// Configuration for retirement projections
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Growth assumptions bounding the target range
    pub rate_bounds: RateBounds,
}

impl ProjectionConfig {
    /// Tighter 4.5% / 3.5% growth assumptions
    pub fn narrow() -> Self {
        Self {
            rate_bounds: RateBounds::preset(0.045, 0.035),
        }
    }

    /// Config with custom growth rates (either order)
    pub fn with_rates(a: f64, b: f64) -> Result<Self> {
        Ok(Self {
            rate_bounds: RateBounds::new(a, b)?,
        })
    }
}

/// Present-value band the portfolio should sit in today
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub lower: f64,
    pub upper: f64,
}

impl TargetRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Range as a fraction of `scale` (the unit range when `scale` is 0)
    pub fn normalized(&self, scale: f64) -> TargetRange {
        if scale == 0.0 {
            return TargetRange { lower: 0.0, upper: 1.0 };
        }
        TargetRange {
            lower: self.lower / scale,
            upper: self.upper / scale,
        }
    }
}

/// Result of a retirement projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    /// Corpus needed at retirement to fund the target income
    pub required_corpus: f64,

    /// Months projected
    pub horizon_months: u32,

    /// Where the portfolio should be today
    pub range: TargetRange,

    /// Portfolio value as a fraction of the required corpus
    pub gauge_value: f64,
}

/// Corpus funding `target_monthly_income` under the 4% withdrawal rule
pub fn required_corpus(target_monthly_income: f64) -> f64 {
    target_monthly_income * 12.0 / WITHDRAWAL_RATE
}

/// Portfolio value as a fraction of the required corpus (0 when nothing is required)
pub fn wealth_gauge_value(total_value: f64, required_corpus: f64) -> f64 {
    if required_corpus == 0.0 {
        0.0
    } else {
        total_value / required_corpus
    }
}

/// Projects the required corpus back to a present-value target
#[derive(Debug, Clone, Default)]
pub struct RetirementProjector {
    config: ProjectionConfig,
}

impl RetirementProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Value needed today under `rate` so that, with the planned
    /// contributions, the portfolio reaches `corpus` in `months` months
    pub fn target_value(
        &self,
        corpus: f64,
        monthly_contribution: f64,
        months: u32,
        rate: GrowthRate,
    ) -> f64 {
        let contributions = rate.future_value_of_contributions(monthly_contribution, months);
        rate.present_value(corpus - contributions, months)
    }

    /// Project the target range; `None` when the horizon is unknown or past
    pub fn project(
        &self,
        target_monthly_income: f64,
        monthly_contribution: f64,
        horizon: HorizonMonths,
        total_value: f64,
    ) -> Option<RetirementProjection> {
        let Some(months) = horizon.projectable_months() else {
            debug!("projection unavailable for horizon {:?}", horizon);
            return None;
        };

        let corpus = required_corpus(target_monthly_income);
        let bounds = self.config.rate_bounds;
        let optimistic = self.target_value(corpus, monthly_contribution, months, bounds.high());
        let pessimistic = self.target_value(corpus, monthly_contribution, months, bounds.low());

        // Contributions alone can outgrow the corpus, where faster growth
        // raises the (negative) target; the range stays ordered regardless.
        let range = TargetRange {
            lower: optimistic.min(pessimistic),
            upper: optimistic.max(pessimistic),
        };

        Some(RetirementProjection {
            required_corpus: corpus,
            horizon_months: months,
            range,
            gauge_value: wealth_gauge_value(total_value, corpus),
        })
    }
}

/// Project with the default 5% / 3% growth assumptions
pub fn retirement_projection(
    target_monthly_income: f64,
    monthly_contribution: f64,
    horizon: HorizonMonths,
    total_value: f64,
) -> Option<RetirementProjection> {
    RetirementProjector::default().project(
        target_monthly_income,
        monthly_contribution,
        horizon,
        total_value,
    )
}

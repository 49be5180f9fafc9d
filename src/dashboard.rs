//! Dashboard evaluation: the risk gauge and the wealth gauge
//!
//! Combines aggregation, horizon, glide path, risk score and projection
//! into one report computed from a snapshot of the user's records.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::allocation::target_allocation;
use crate::horizon::{remaining_horizon_months, HorizonMonths};
use crate::portfolio::{aggregate, AllocationVector, Investment, PortfolioSummary};
use crate::projection::{
    required_corpus, wealth_gauge_value, ProjectionConfig, RetirementProjection,
    RetirementProjector, TargetRange,
};
use crate::risk::{neutral_score, risk_score, RiskAssessment, TargetBand};
use crate::store::RetirementParameters;

/// Risk gauge reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskGauge {
    /// Score, `None` for an empty portfolio
    pub reading: Option<RiskAssessment>,

    /// Acceptable band for the current target allocation
    pub band: TargetBand,
}

/// Wealth gauge reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WealthGauge {
    /// Corpus needed at retirement
    pub required_corpus: f64,

    /// Portfolio value as a fraction of `required_corpus`
    pub value: f64,

    /// Projection, `None` when the horizon is unknown or past
    pub projection: Option<RetirementProjection>,

    /// Target range as a fraction of `required_corpus`
    pub target_band: TargetRange,

    /// Portfolio value lies within the projected target range
    pub in_range: bool,
}

/// Everything the dashboard shows for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub horizon: HorizonMonths,
    pub summary: PortfolioSummary,
    pub target_allocation: AllocationVector,
    pub risk: RiskGauge,
    pub wealth: WealthGauge,
}

/// Evaluates dashboard reports with a fixed projection config
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    projector: RetirementProjector,
}

impl Dashboard {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            projector: RetirementProjector::new(config),
        }
    }

    /// Build the report for `investments` and `params` as of `today`
    pub fn evaluate(
        &self,
        investments: &[Investment],
        params: &RetirementParameters,
        today: NaiveDate,
    ) -> DashboardReport {
        let summary = aggregate(investments);
        let horizon =
            remaining_horizon_months(params.retirement_year, params.retirement_month, today);
        let target = target_allocation(horizon);

        let reading = if summary.is_empty() {
            debug!("empty portfolio, no risk reading");
            None
        } else {
            Some(risk_score(&summary.allocation, &target))
        };
        let risk = RiskGauge {
            reading,
            band: TargetBand::around(neutral_score(&target)),
        };

        let corpus = required_corpus(params.target_monthly_income);
        let projection = self.projector.project(
            params.target_monthly_income,
            params.monthly_contribution,
            horizon,
            summary.total_value,
        );
        let target_band = match &projection {
            Some(p) => p.range.normalized(corpus),
            None => TargetRange { lower: 0.0, upper: 1.0 },
        };
        let in_range = projection
            .as_ref()
            .is_some_and(|p| p.range.contains(summary.total_value));
        let wealth = WealthGauge {
            required_corpus: corpus,
            value: wealth_gauge_value(summary.total_value, corpus),
            projection,
            target_band,
            in_range,
        };

        DashboardReport {
            as_of: today,
            horizon,
            summary,
            target_allocation: target,
            risk,
            wealth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::AssetCategory;
    use crate::store::{MemoryStore, RecordStore};
    use approx::assert_abs_diff_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    fn sample_portfolio() -> Vec<Investment> {
        let d = NaiveDate::from_ymd_opt(2023, 7, 10).unwrap();
        vec![
            Investment::new(AssetCategory::Stocks, "US Stocks", 16_276.51, d),
            Investment::new(AssetCategory::Stocks, "Developed International Markets", 7_536.54, d),
            Investment::new(AssetCategory::Stocks, "Emerging International Markets", 7_777.87, d),
            Investment::new(AssetCategory::RealEstate, "Index Fund", 4_466.02, d),
            Investment::new(AssetCategory::Bonds, "Long-term Corporate Bonds", 1_572.85, d),
            Investment::new(AssetCategory::Bonds, "Emerging Markets Government Bonds", 1_629.84, d),
            Investment::new(AssetCategory::Bonds, "Dividend Growth Fund", 3_418.18, d),
            Investment::new(AssetCategory::Cash, "Brokerage Cash", 4_176.82, d),
        ]
    }

    #[test]
    fn test_configured_report() {
        let params = RetirementParameters::new(2052, 10, 800.0, 5000.0);
        let report = Dashboard::default().evaluate(&sample_portfolio(), &params, today());

        assert_eq!(report.horizon, HorizonMonths::Available(312));
        assert_eq!(report.target_allocation, AllocationVector::new(0.05, 0.15, 0.10, 0.70));

        let reading = report.risk.reading.unwrap();
        assert_eq!(reading.band, report.risk.band);
        assert!(reading.score >= 0.0 && reading.score <= 1.0);

        let projection = report.wealth.projection.unwrap();
        assert_abs_diff_eq!(report.wealth.required_corpus, 1_500_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            report.wealth.value,
            46_854.63 / 1_500_000.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            report.wealth.target_band.lower,
            projection.range.lower / projection.required_corpus,
            epsilon = 1e-12
        );
        // 46k today is well short of the present-value target
        assert!(projection.range.lower > 46_854.63);
        assert!(!report.wealth.in_range);
    }

    #[test]
    fn test_in_range_from_stored_records() {
        let params = RetirementParameters::new(2036, 10, 0.0, 1000.0);
        let midpoint = {
            let horizon = remaining_horizon_months(2036, 10, today());
            let p = RetirementProjector::default()
                .project(1000.0, 0.0, horizon, 0.0)
                .unwrap();
            (p.range.lower + p.range.upper) / 2.0
        };
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let store = MemoryStore::with_records(
            vec![
                Investment::new(AssetCategory::Stocks, "Index Fund", midpoint * 0.6, d),
                Investment::new(AssetCategory::Bonds, "Treasury", midpoint * 0.4, d),
            ],
            params,
        );

        let investments = store.load_investments().unwrap();
        let params = store.load_retirement_parameters().unwrap();
        let report = Dashboard::default().evaluate(&investments, &params, today());
        assert_eq!(report.horizon, HorizonMonths::Available(120));
        assert!(report.wealth.in_range);

        let narrow = Dashboard::new(ProjectionConfig::narrow());
        let shortfall = narrow.evaluate(&investments[..1], &params, today());
        assert!(!shortfall.wealth.in_range);
    }

    #[test]
    fn test_unconfigured_goal() {
        let report = Dashboard::default().evaluate(
            &sample_portfolio(),
            &RetirementParameters::default(),
            today(),
        );
        assert_eq!(report.horizon, HorizonMonths::Unavailable);
        assert!(report.wealth.projection.is_none());
        assert!(!report.wealth.in_range);
        assert_eq!(report.wealth.required_corpus, 0.0);
        assert_eq!(report.wealth.value, 0.0);
        assert_eq!(report.wealth.target_band, TargetRange { lower: 0.0, upper: 1.0 });
        // Unknown horizon falls back to the shortest glide-path bracket
        assert_eq!(report.target_allocation, AllocationVector::new(0.10, 0.35, 0.15, 0.40));
        assert!(report.risk.reading.is_some());
    }

    #[test]
    fn test_empty_portfolio_has_no_risk_reading() {
        let params = RetirementParameters::new(2052, 10, 800.0, 5000.0);
        let report = Dashboard::default().evaluate(&[], &params, today());
        assert!(report.risk.reading.is_none());
        assert_abs_diff_eq!(report.risk.band.center(), 0.875, epsilon = 1e-12);
        assert_eq!(report.wealth.value, 0.0);
        assert!(report.wealth.projection.is_some());
    }

    #[test]
    fn test_past_retirement_date() {
        let params = RetirementParameters::new(2020, 1, 800.0, 5000.0);
        let report = Dashboard::default().evaluate(&sample_portfolio(), &params, today());
        assert!(matches!(report.horizon, HorizonMonths::Available(m) if m < 0));
        assert!(report.wealth.projection.is_none());
        assert!(report.wealth.required_corpus > 0.0);
    }
}

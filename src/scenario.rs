//! Scenario runner for what-if retirement projections
//!
//! Holds one set of retirement parameters and portfolio value, then projects
//! them under many configurations or contribution levels in parallel.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

use crate::horizon::{remaining_horizon_months, HorizonMonths};
use crate::projection::{ProjectionConfig, RetirementProjection, RetirementProjector};
use crate::store::RetirementParameters;

/// One what-if result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    /// Monthly contribution assumed
    pub monthly_contribution: f64,

    /// Config used
    pub config: ProjectionConfig,

    /// Projection, `None` when the horizon is unknown or past
    pub projection: Option<RetirementProjection>,
}

/// Pre-resolved inputs for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(params, 46_854.63, today);
/// for outcome in runner.contribution_sweep(&[400.0, 800.0, 1200.0]) {
///     println!("{:?}", outcome.projection.map(|p| p.range));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    params: RetirementParameters,
    total_value: f64,
    horizon: HorizonMonths,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Resolve the horizon once for `params` as of `today`
    pub fn new(params: RetirementParameters, total_value: f64, today: NaiveDate) -> Self {
        let horizon =
            remaining_horizon_months(params.retirement_year, params.retirement_month, today);
        Self {
            params,
            total_value,
            horizon,
            config: ProjectionConfig::default(),
        }
    }

    /// Use `config` for contribution sweeps
    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn horizon(&self) -> HorizonMonths {
        self.horizon
    }

    /// Project a single config with the base contribution
    pub fn run(&self, config: ProjectionConfig) -> ScenarioOutcome {
        self.outcome(config, self.params.monthly_contribution)
    }

    /// Project several configs with the base contribution, in input order
    pub fn run_scenarios(&self, configs: &[ProjectionConfig]) -> Vec<ScenarioOutcome> {
        configs.par_iter().map(|config| self.run(*config)).collect()
    }

    /// Project several monthly contributions with the runner's config, in input order
    pub fn contribution_sweep(&self, contributions: &[f64]) -> Vec<ScenarioOutcome> {
        contributions
            .par_iter()
            .map(|&contribution| self.outcome(self.config, contribution))
            .collect()
    }

    fn outcome(&self, config: ProjectionConfig, monthly_contribution: f64) -> ScenarioOutcome {
        let projection = RetirementProjector::new(config).project(
            self.params.target_monthly_income,
            monthly_contribution,
            self.horizon,
            self.total_value,
        );
        ScenarioOutcome {
            monthly_contribution,
            config,
            projection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(
            RetirementParameters::new(2052, 10, 800.0, 5000.0),
            46_854.63,
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        )
    }

    #[test]
    fn test_contribution_sweep_lowers_target() {
        let outcomes = runner().contribution_sweep(&[0.0, 400.0, 800.0, 1200.0]);
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[2].monthly_contribution, 800.0);

        let lowers: Vec<f64> = outcomes
            .iter()
            .map(|o| o.projection.unwrap().range.lower)
            .collect();
        assert!(lowers.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_run_scenarios_keeps_order() {
        let configs = [ProjectionConfig::default(), ProjectionConfig::narrow()];
        let outcomes = runner().run_scenarios(&configs);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[1].config, ProjectionConfig::narrow());

        let wide = outcomes[0].projection.unwrap().range;
        let narrow = outcomes[1].projection.unwrap().range;
        assert!(narrow.upper - narrow.lower < wide.upper - wide.lower);
    }

    #[test]
    fn test_unconfigured_runner_is_unavailable() {
        let runner = ScenarioRunner::new(
            RetirementParameters::default(),
            0.0,
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        );
        assert_eq!(runner.horizon(), HorizonMonths::Unavailable);
        assert!(runner.run(ProjectionConfig::default()).projection.is_none());
    }
}

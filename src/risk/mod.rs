//! Portfolio risk score relative to the target allocation
//!
//! The score is a heuristic proxy calibrated for a 0 (conservative) to
//! 1 (aggressive) gauge. Equity weight sets the neutral point; the distance
//! of the actual allocation from the target moves the reading away from it.

use serde::{Deserialize, Serialize};

use crate::portfolio::AllocationVector;

/// Equity weight that maps to a neutral score of 0
const NEUTRAL_EQUITY_FLOOR: f64 = 0.35;

/// Equity weight span covering the gauge
const NEUTRAL_EQUITY_SPAN: f64 = 0.4;

/// Distance that moves the score by one full gauge width
const DEVIATION_SCALE: f64 = 0.5;

/// Half-width of the acceptable band around the target score
pub const TARGET_BAND_HALF_WIDTH: f64 = 0.04;

/// Acceptable score interval around the target's neutral score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBand {
    pub lower: f64,
    pub upper: f64,
}

impl TargetBand {
    /// Band of `TARGET_BAND_HALF_WIDTH` around `center`
    pub fn around(center: f64) -> Self {
        Self {
            lower: center - TARGET_BAND_HALF_WIDTH,
            upper: center + TARGET_BAND_HALF_WIDTH,
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.lower && score <= self.upper
    }

    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// Signed per-category deviation of the actual allocation from the target.
///
/// Bonds, real estate and stocks are `target - actual` (positive when
/// under-allocated); cash is `actual - target`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Deviation {
    pub cash: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub stocks: f64,
}

impl Deviation {
    pub fn between(actual: &AllocationVector, target: &AllocationVector) -> Self {
        Self {
            cash: actual.cash - target.cash,
            bonds: target.bonds - actual.bonds,
            real_estate: target.real_estate - actual.real_estate,
            stocks: target.stocks - actual.stocks,
        }
    }

    /// Euclidean length of the deviation
    pub fn magnitude(&self) -> f64 {
        (self.cash.powi(2) + self.bonds.powi(2) + self.real_estate.powi(2) + self.stocks.powi(2))
            .sqrt()
    }

    /// Sum of the signed components; negative reads as riskier than target
    pub fn net(&self) -> f64 {
        self.cash + self.bonds + self.real_estate + self.stocks
    }
}

/// Risk gauge reading for a portfolio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Score clamped to [0, 1] on the side it moves toward
    pub score: f64,

    /// Neutral score of the target allocation
    pub target_metric: f64,

    /// Acceptable band around `target_metric`
    pub band: TargetBand,

    /// Per-category deviation behind the score
    pub deviation: Deviation,
}

impl RiskAssessment {
    pub fn in_band(&self) -> bool {
        self.band.contains(self.score)
    }
}

/// Neutral score of an allocation, driven by its equity weight alone
pub fn neutral_score(allocation: &AllocationVector) -> f64 {
    (allocation.stocks - NEUTRAL_EQUITY_FLOOR) / NEUTRAL_EQUITY_SPAN
}

/// Score `actual` against `target`
pub fn risk_score(actual: &AllocationVector, target: &AllocationVector) -> RiskAssessment {
    let target_metric = neutral_score(target);
    let deviation = Deviation::between(actual, target);
    let magnitude = deviation.magnitude();

    let score = if deviation.net() < 0.0 {
        (target_metric + magnitude / DEVIATION_SCALE).min(1.0)
    } else {
        (target_metric - magnitude / DEVIATION_SCALE).max(0.0)
    };

    RiskAssessment {
        score,
        target_metric,
        band: TargetBand::around(target_metric),
        deviation,
    }
}

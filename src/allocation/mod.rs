//! Target allocation glide path keyed on time to retirement
//!
//! The brackets and weights are a fixed product policy:
//!
//! | Horizon (years) | cash | bonds | real estate | stocks |
//! |-----------------|------|-------|-------------|--------|
//! | >= 25           | 0.05 | 0.15  | 0.10        | 0.70   |
//! | [15, 25)        | 0.05 | 0.20  | 0.10        | 0.65   |
//! | [5, 15)         | 0.05 | 0.275 | 0.125       | 0.55   |
//! | < 5             | 0.10 | 0.35  | 0.15        | 0.40   |

use crate::horizon::HorizonMonths;
use crate::portfolio::AllocationVector;

/// One step of the glide path: applies from `min_years` upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlideStep {
    pub min_years: f64,
    pub allocation: AllocationVector,
}

/// Steps ordered from the longest horizon down; the last one catches everything
const GLIDE_PATH: [GlideStep; 4] = [
    GlideStep {
        min_years: 25.0,
        allocation: AllocationVector::new(0.05, 0.15, 0.10, 0.70),
    },
    GlideStep {
        min_years: 15.0,
        allocation: AllocationVector::new(0.05, 0.20, 0.10, 0.65),
    },
    GlideStep {
        min_years: 5.0,
        allocation: AllocationVector::new(0.05, 0.275, 0.125, 0.55),
    },
    GlideStep {
        min_years: f64::NEG_INFINITY,
        allocation: AllocationVector::new(0.10, 0.35, 0.15, 0.40),
    },
];

/// Recommended allocation for a horizon in (fractional) years.
///
/// Each bracket includes its lower bound; negative horizons fall in the
/// shortest bracket.
pub fn allocation_for_years(years: f64) -> AllocationVector {
    GLIDE_PATH
        .iter()
        .find(|step| years >= step.min_years)
        .map(|step| step.allocation)
        .unwrap_or(GLIDE_PATH[GLIDE_PATH.len() - 1].allocation)
}

/// Recommended allocation for the remaining horizon (unavailable counts as 0)
pub fn target_allocation(horizon: HorizonMonths) -> AllocationVector {
    allocation_for_years(horizon.years())
}

/// The glide path steps, longest horizon first
pub fn glide_path() -> &'static [GlideStep] {
    &GLIDE_PATH
}

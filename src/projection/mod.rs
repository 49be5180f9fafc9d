//! Retirement projection: required corpus and today's target range

mod engine;
mod growth;

pub use engine::{
    required_corpus, retirement_projection, wealth_gauge_value, ProjectionConfig, RateBounds,
    RetirementProjection, RetirementProjector, TargetRange, DEFAULT_HIGH_RATE, DEFAULT_LOW_RATE,
    WITHDRAWAL_RATE,
};
pub use growth::GrowthRate;

//! Risk Rudder - retirement glide-path and portfolio risk engine
//!
//! This library provides:
//! - Portfolio aggregation into a normalized asset allocation
//! - Remaining horizon until a retirement month
//! - A horizon-keyed target allocation (glide path)
//! - A risk score comparing the actual allocation to the target
//! - Required retirement corpus and today's present-value target range
//!
//! The computations are pure functions of their inputs. Records live behind
//! the [`store::RecordStore`] trait and are only written by explicit saves.

pub mod allocation;
pub mod dashboard;
pub mod error;
pub mod horizon;
pub mod portfolio;
pub mod projection;
pub mod risk;
pub mod scenario;
pub mod store;

// Re-export commonly used types
pub use allocation::target_allocation;
pub use dashboard::{Dashboard, DashboardReport};
pub use error::{Result, RudderError};
pub use horizon::{remaining_horizon_months, HorizonMonths};
pub use portfolio::{aggregate, AllocationVector, AssetCategory, Investment, InvestmentBook};
pub use projection::{retirement_projection, ProjectionConfig, RetirementProjection};
pub use risk::{risk_score, RiskAssessment};
pub use scenario::ScenarioRunner;
pub use store::{JsonFileStore, MemoryStore, RecordStore, RetirementParameters};

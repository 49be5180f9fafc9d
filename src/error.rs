//! Error types for the fallible edges of the crate
//!
//! The engine itself never fails: an unavailable horizon or projection is a
//! value, not an error. Errors only come from record validation, rate
//! configuration and I/O.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised while validating, loading or saving records
#[derive(Debug, Error)]
pub enum RudderError {
    #[error("investment name must not be empty")]
    EmptyName,

    #[error("invalid purchase value {0}: must be a non-negative finite amount")]
    InvalidPurchaseValue(f64),

    #[error("unknown investment category: {0}")]
    UnknownCategory(String),

    #[error("investment {0} not found")]
    InvestmentNotFound(Uuid),

    #[error("investment {0} already exists")]
    DuplicateInvestment(Uuid),

    #[error("invalid retirement month {0}: expected 0 (unset) or 1-12")]
    InvalidMonth(u32),

    #[error("invalid {field} {value}: must be a non-negative finite amount")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("invalid annual interest rate {0}: must be finite and greater than -100%")]
    InvalidRate(f64),

    #[error("invalid date {0}: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RudderError>;

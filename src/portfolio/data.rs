//! Investment records and allocation vectors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, RudderError};

/// Asset category of an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    Cash,
    Bonds,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Stocks,
}

impl AssetCategory {
    /// All categories, in allocation-vector order
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Cash,
        AssetCategory::Bonds,
        AssetCategory::RealEstate,
        AssetCategory::Stocks,
    ];

    /// Display name, also used in CSV imports
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "Cash",
            AssetCategory::Bonds => "Bonds",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::Stocks => "Stocks",
        }
    }

    /// Parse a display name (case-insensitive, `RealEstate` accepted too)
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(AssetCategory::Cash),
            "bonds" => Ok(AssetCategory::Bonds),
            "real estate" | "realestate" | "real_estate" => Ok(AssetCategory::RealEstate),
            "stocks" => Ok(AssetCategory::Stocks),
            _ => Err(RudderError::UnknownCategory(name.to_string())),
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single investment in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// Unique identifier
    pub id: Uuid,

    /// Asset category
    pub category: AssetCategory,

    /// Name of the holding
    pub name: String,

    /// Value at which the investment was purchased
    pub purchase_value: f64,

    /// Date the investment was made
    pub date: NaiveDate,
}

impl Investment {
    /// Create a new investment with a fresh identifier
    pub fn new(
        category: AssetCategory,
        name: impl Into<String>,
        purchase_value: f64,
        date: NaiveDate,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), category, name, purchase_value, date)
    }

    /// Create an investment with a caller-supplied identifier
    pub fn with_id(
        id: Uuid,
        category: AssetCategory,
        name: impl Into<String>,
        purchase_value: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            category,
            name: name.into(),
            purchase_value,
            date,
        }
    }

    /// Check the record is complete enough to enter the book
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RudderError::EmptyName);
        }
        if !self.purchase_value.is_finite() || self.purchase_value < 0.0 {
            return Err(RudderError::InvalidPurchaseValue(self.purchase_value));
        }
        Ok(())
    }
}

/// Fractional weight per asset category
///
/// Sums to 1.0 for a funded portfolio; all-zero means "no data".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AllocationVector {
    pub cash: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub stocks: f64,
}

impl AllocationVector {
    pub const fn new(cash: f64, bonds: f64, real_estate: f64, stocks: f64) -> Self {
        Self {
            cash,
            bonds,
            real_estate,
            stocks,
        }
    }

    /// The all-zero vector used for an empty portfolio
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Weight for a single category
    pub fn weight(&self, category: AssetCategory) -> f64 {
        match category {
            AssetCategory::Cash => self.cash,
            AssetCategory::Bonds => self.bonds,
            AssetCategory::RealEstate => self.real_estate,
            AssetCategory::Stocks => self.stocks,
        }
    }

    /// Sum of the four weights
    pub fn total(&self) -> f64 {
        self.cash + self.bonds + self.real_estate + self.stocks
    }

    /// True for the "no data" sentinel
    pub fn is_zero(&self) -> bool {
        self.cash == 0.0 && self.bonds == 0.0 && self.real_estate == 0.0 && self.stocks == 0.0
    }
}

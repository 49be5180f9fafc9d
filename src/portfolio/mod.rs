//! Investment records, portfolio aggregation and CSV import

mod aggregate;
mod book;
mod data;
pub mod loader;

pub use aggregate::{aggregate, PortfolioSummary};
pub use book::InvestmentBook;
pub use data::{AllocationVector, AssetCategory, Investment};
pub use loader::{load_investments, load_investments_from_reader};

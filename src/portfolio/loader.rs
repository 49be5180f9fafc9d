//! Import investments from CSV
//!
//! Expected columns: `Category,Name,PurchaseValue,Date[,Id]`

use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;
use uuid::Uuid;

use super::{AssetCategory, Investment};
use crate::error::{Result, RudderError};

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "PurchaseValue")]
    purchase_value: f64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Id", default)]
    id: Option<Uuid>,
}

impl CsvRow {
    fn to_investment(self) -> Result<Investment> {
        let category = AssetCategory::parse(&self.category)?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| RudderError::InvalidDate(self.date.clone()))?;
        let id = self.id.unwrap_or_else(Uuid::new_v4);

        let investment = Investment::with_id(id, category, self.name, self.purchase_value, date);
        investment.validate()?;
        Ok(investment)
    }
}

/// Load all investments from a CSV file
pub fn load_investments<P: AsRef<Path>>(path: P) -> Result<Vec<Investment>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load investments from any reader (e.g., string buffer)
pub fn load_investments_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Investment>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Investment>> {
    let mut investments = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        investments.push(row.to_investment()?);
    }

    Ok(investments)
}

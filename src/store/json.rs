//! JSON file record store

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{RecordStore, RetirementParameters};
use crate::error::Result;
use crate::portfolio::Investment;

/// Default location of the store file
pub const DEFAULT_STORE_PATH: &str = "risk_rudder.json";

/// On-disk document holding both record kinds
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    investments: Vec<Investment>,
    #[serde(default)]
    retirement: RetirementParameters,
}

/// Store backed by a single JSON file
///
/// A missing file reads as an empty, unconfigured store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<StoreDocument> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("store {} not found, starting empty", self.path.display());
                Ok(StoreDocument::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_document(&self, document: &StoreDocument) -> Result<()> {
        let text = serde_json::to_string_pretty(document)?;
        // Write beside the target, then rename into place
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        info!(
            "saved {} investments to {}",
            document.investments.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl RecordStore for JsonFileStore {
    fn load_investments(&self) -> Result<Vec<Investment>> {
        Ok(self.read_document()?.investments)
    }

    fn save_investments(&mut self, investments: &[Investment]) -> Result<()> {
        let mut document = self.read_document()?;
        document.investments = investments.to_vec();
        self.write_document(&document)
    }

    fn load_retirement_parameters(&self) -> Result<RetirementParameters> {
        Ok(self.read_document()?.retirement)
    }

    fn save_retirement_parameters(&mut self, params: &RetirementParameters) -> Result<()> {
        let mut document = self.read_document()?;
        document.retirement = *params;
        self.write_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::AssetCategory;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn temp_store() -> JsonFileStore {
        let path = std::env::temp_dir().join(format!("risk_rudder_{}.json", Uuid::new_v4()));
        JsonFileStore::new(path)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let store = temp_store();
        assert!(store.load_investments().unwrap().is_empty());
        assert_eq!(
            store.load_retirement_parameters().unwrap(),
            RetirementParameters::default()
        );
    }

    #[test]
    fn test_save_keeps_other_record_kind() {
        let mut store = temp_store();
        let params = RetirementParameters::new(2052, 10, 800.0, 5000.0);
        store.save_retirement_parameters(&params).unwrap();

        let investment = Investment::new(
            AssetCategory::Bonds,
            "US Treasury",
            5000.0,
            NaiveDate::from_ymd_opt(2023, 7, 10).unwrap(),
        );
        store.save_investments(std::slice::from_ref(&investment)).unwrap();

        assert_eq!(store.load_retirement_parameters().unwrap(), params);
        assert_eq!(store.load_investments().unwrap(), vec![investment]);

        fs::remove_file(store.path()).unwrap();
    }
}

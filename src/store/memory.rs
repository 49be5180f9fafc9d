//! In-memory record store

use super::{RecordStore, RetirementParameters};
use crate::error::Result;
use crate::portfolio::Investment;

/// Store that keeps records in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    investments: Vec<Investment>,
    params: RetirementParameters,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records
    pub fn with_records(investments: Vec<Investment>, params: RetirementParameters) -> Self {
        Self {
            investments,
            params,
            saves: 0,
        }
    }

    /// Number of save calls received
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load_investments(&self) -> Result<Vec<Investment>> {
        Ok(self.investments.clone())
    }

    fn save_investments(&mut self, investments: &[Investment]) -> Result<()> {
        self.investments = investments.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_retirement_parameters(&self) -> Result<RetirementParameters> {
        Ok(self.params)
    }

    fn save_retirement_parameters(&mut self, params: &RetirementParameters) -> Result<()> {
        self.params = *params;
        self.saves += 1;
        Ok(())
    }
}

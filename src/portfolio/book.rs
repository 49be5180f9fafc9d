//! Investment list with explicit mutation and save commands

use log::debug;
use uuid::Uuid;

use super::aggregate::{aggregate, PortfolioSummary};
use super::data::Investment;
use crate::error::{Result, RudderError};
use crate::store::RecordStore;

/// Working copy of the user's investments
///
/// Mutations only change memory; call [`InvestmentBook::save`] to persist.
#[derive(Debug, Clone, Default)]
pub struct InvestmentBook {
    investments: Vec<Investment>,
    dirty: bool,
}

impl InvestmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the current snapshot from a store
    pub fn load(store: &impl RecordStore) -> Result<Self> {
        let investments = store.load_investments()?;
        debug!("loaded {} investments", investments.len());
        Ok(Self {
            investments,
            dirty: false,
        })
    }

    /// Persist the list and clear the unsaved-changes flag
    pub fn save(&mut self, store: &mut impl RecordStore) -> Result<()> {
        store.save_investments(&self.investments)?;
        self.dirty = false;
        Ok(())
    }

    /// Append a validated investment and return its id
    ///
    /// Ids are unique within the book; adding a known id is an error.
    pub fn add(&mut self, investment: Investment) -> Result<Uuid> {
        investment.validate()?;
        let id = investment.id;
        if self.investments.iter().any(|existing| existing.id == id) {
            return Err(RudderError::DuplicateInvestment(id));
        }
        self.investments.push(investment);
        self.dirty = true;
        Ok(id)
    }

    /// Replace the investment sharing `investment.id`
    pub fn edit(&mut self, investment: Investment) -> Result<()> {
        investment.validate()?;
        let slot = self
            .investments
            .iter_mut()
            .find(|existing| existing.id == investment.id)
            .ok_or(RudderError::InvestmentNotFound(investment.id))?;
        *slot = investment;
        self.dirty = true;
        Ok(())
    }

    /// Remove an investment by id, returning it if present
    pub fn remove(&mut self, id: Uuid) -> Option<Investment> {
        let index = self.investments.iter().position(|i| i.id == id)?;
        self.dirty = true;
        Some(self.investments.remove(index))
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn len(&self) -> usize {
        self.investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    /// Whether there are changes not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Aggregate the current list
    pub fn summary(&self) -> PortfolioSummary {
        aggregate(&self.investments)
    }
}

//! Ledger store: the read-only collaborator the summary engine queries
//!
//! The engine only ever calls the read side of [`LedgerStore`]. Writes live
//! on the concrete stores and validate records before they land.

mod jsonl;
mod memory;
mod records;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::types::{BudgetAllocation, LedgerEntry, MonthKey, Result, SalaryRecord, SavingsGoal};

/// Read access to a user's ledger records
pub trait LedgerStore: Send + Sync {
    /// All ledger entries for a user, unfiltered
    fn entries(&self, user_id: &str) -> Result<Vec<LedgerEntry>>;

    /// All salary records for a user
    fn salaries(&self, user_id: &str) -> Result<Vec<SalaryRecord>>;

    /// All budget allocations for a user, in store order
    fn allocations(&self, user_id: &str) -> Result<Vec<BudgetAllocation>>;

    /// All savings goals for a user
    fn goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;

    /// Display name, `None` when the user has no profile
    fn user_name(&self, user_id: &str) -> Result<Option<String>>;

    /// Allocation for a month; the most recently stored one wins
    fn allocation_for(&self, user_id: &str, month: MonthKey) -> Result<Option<BudgetAllocation>> {
        Ok(self
            .allocations(user_id)?
            .into_iter()
            .filter(|a| a.month_key == month)
            .last())
    }

    /// Full history, newest date first (stable for equal dates)
    fn history(&self, user_id: &str) -> Result<Vec<LedgerEntry>> {
        let mut entries = self.entries(user_id)?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Entries recorded under one category
    fn category_entries(&self, user_id: &str, category: &str) -> Result<Vec<LedgerEntry>> {
        Ok(self
            .entries(user_id)?
            .into_iter()
            .filter(|e| e.category_name() == category)
            .collect())
    }
}

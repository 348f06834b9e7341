//! In-memory store, used by tests and benchmarks

use super::LedgerStore;
use crate::types::{
    BudgetAllocation, LedgerEntry, Result, SalaryRecord, SavingsGoal, UserProfile,
};

/// Vec-backed [`LedgerStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<LedgerEntry>,
    salaries: Vec<SalaryRecord>,
    allocations: Vec<BudgetAllocation>,
    goals: Vec<SavingsGoal>,
    users: Vec<UserProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: LedgerEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = LedgerEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn with_salary(mut self, salary: SalaryRecord) -> Self {
        self.salaries.push(salary);
        self
    }

    pub fn with_allocation(mut self, allocation: BudgetAllocation) -> Self {
        self.allocations.push(allocation);
        self
    }

    pub fn with_goal(mut self, goal: SavingsGoal) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_user(mut self, user_id: &str, name: &str) -> Self {
        self.users.push(UserProfile {
            user_id: user_id.to_string(),
            name: name.to_string(),
        });
        self
    }
}

fn owned_by<T: Clone>(records: &[T], user_id: &str, owner: impl Fn(&T) -> &str) -> Vec<T> {
    records
        .iter()
        .filter(|r| owner(r) == user_id)
        .cloned()
        .collect()
}

impl LedgerStore for MemoryStore {
    fn entries(&self, user_id: &str) -> Result<Vec<LedgerEntry>> {
        Ok(owned_by(&self.entries, user_id, |e| e.user_id.as_str()))
    }

    fn salaries(&self, user_id: &str) -> Result<Vec<SalaryRecord>> {
        Ok(owned_by(&self.salaries, user_id, |s| s.user_id.as_str()))
    }

    fn allocations(&self, user_id: &str) -> Result<Vec<BudgetAllocation>> {
        Ok(owned_by(&self.allocations, user_id, |a| a.user_id.as_str()))
    }

    fn goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        Ok(owned_by(&self.goals, user_id, |g| g.user_id.as_str()))
    }

    fn user_name(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    #[test]
    fn test_records_scoped_by_user() {
        let store = MemoryStore::new()
            .with_entry(LedgerEntry {
                user_id: "alice".into(),
                amount: 10.0,
                kind: EntryKind::Debit,
                category: "food".into(),
                date: "2025-03-01".into(),
                description: None,
            })
            .with_entry(LedgerEntry {
                user_id: "bob".into(),
                amount: 20.0,
                kind: EntryKind::Credit,
                category: "salary".into(),
                date: "2025-03-01".into(),
                description: None,
            })
            .with_user("alice", "Alice");

        assert_eq!(store.entries("alice").unwrap().len(), 1);
        assert_eq!(store.entries("carol").unwrap().len(), 0);
        assert_eq!(store.user_name("alice").unwrap().as_deref(), Some("Alice"));
        assert!(store.user_name("bob").unwrap().is_none());
    }
}

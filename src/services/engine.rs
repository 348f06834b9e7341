//! Summary engine: fetches a user's snapshot and composes the views

use crate::store::LedgerStore;
use crate::types::{
    BudgetComplianceSummary, LedgerEntry, MonthKey, Result, WrappedSummary, DEFAULT_USER_NAME,
};

use super::budget::compose_budget;
use super::insights::{compose_wrapped, WrappedInput};

/// Request-scoped engine over a ledger store.
///
/// Holds no state besides the store; every call reads a fresh snapshot.
pub struct SummaryEngine<S> {
    store: S,
}

impl<S: LedgerStore> SummaryEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Allocated vs. spent for one month
    pub fn budget_summary(
        &self,
        user_id: &str,
        month: MonthKey,
    ) -> Result<BudgetComplianceSummary> {
        let (allocation, entries) = rayon::join(
            || self.store.allocation_for(user_id, month),
            || self.store.entries(user_id),
        );
        let allocation = allocation?;
        let entries = entries?;

        tracing::debug!(
            user_id,
            %month,
            entries = entries.len(),
            allocated = allocation.is_some(),
            "composing budget summary"
        );
        Ok(compose_budget(month, allocation.as_ref(), &entries))
    }

    /// Wrapped summary for one month, compared against the month before
    pub fn wrapped_summary(&self, user_id: &str, month: MonthKey) -> Result<WrappedSummary> {
        let ((entries, salaries), (goals, user_name)) = rayon::join(
            || {
                rayon::join(
                    || self.store.entries(user_id),
                    || self.store.salaries(user_id),
                )
            },
            || {
                rayon::join(
                    || self.store.goals(user_id),
                    || self.store.user_name(user_id),
                )
            },
        );
        let entries = entries?;
        let salaries = salaries?;
        let goals = goals?;
        let user_name = user_name?.unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

        tracing::debug!(
            user_id,
            %month,
            entries = entries.len(),
            salaries = salaries.len(),
            goals = goals.len(),
            "composing wrapped summary"
        );

        Ok(compose_wrapped(&WrappedInput {
            month,
            user_name: &user_name,
            entries: &entries,
            salaries: &salaries,
            goals: &goals,
        }))
    }

    pub fn history(&self, user_id: &str) -> Result<Vec<LedgerEntry>> {
        self.store.history(user_id)
    }

    pub fn category_entries(&self, user_id: &str, category: &str) -> Result<Vec<LedgerEntry>> {
        self.store.category_entries(user_id, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{
        BudgetAllocation, BudgetStatus, EntryKind, MonthwiseError, SalaryRecord, SavingsGoal,
    };

    fn make_entry(
        user: &str,
        kind: EntryKind,
        category: &str,
        amount: f64,
        date: &str,
    ) -> LedgerEntry {
        LedgerEntry {
            user_id: user.into(),
            amount,
            kind,
            category: category.into(),
            date: date.into(),
            description: Some(format!("{} on {}", category, date)),
        }
    }

    fn march() -> MonthKey {
        MonthKey::new(2025, 3).unwrap()
    }

    fn sample_store() -> MemoryStore {
        MemoryStore::new()
            .with_entries(vec![
                make_entry("asha", EntryKind::Credit, "salary", 20000.0, "2025-03-01"),
                make_entry("asha", EntryKind::Debit, "food", 500.0, "2025-03-03"),
                make_entry("asha", EntryKind::Debit, "rent", 6000.0, "2025-03-05"),
                make_entry("asha", EntryKind::Debit, "food", 700.0, "2025-03-18"),
                make_entry("asha", EntryKind::Debit, "rent", 6000.0, "2025-02-05"),
                make_entry("ravi", EntryKind::Debit, "food", 99999.0, "2025-03-04"),
            ])
            .with_salary(SalaryRecord {
                user_id: "asha".into(),
                amount: 18000.0,
                month_key: "2025-02".parse().unwrap(),
            })
            .with_allocation(BudgetAllocation {
                user_id: "asha".into(),
                month_key: march(),
                categories: [("food".to_string(), 1000.0), ("rent".to_string(), 6000.0)]
                    .into_iter()
                    .collect(),
            })
            .with_goal(SavingsGoal {
                user_id: "asha".into(),
                target_amount: 5000.0,
                current_amount: 5000.0,
                ..Default::default()
            })
            .with_user("asha", "Asha")
    }

    // ========== budget_summary() tests ==========

    #[test]
    fn test_budget_summary_uses_allocation() {
        let engine = SummaryEngine::new(sample_store());

        let summary = engine.budget_summary("asha", march()).unwrap();

        assert_eq!(summary.breakdown.len(), 2);
        assert_eq!(summary.breakdown[0].category, "food");
        assert_eq!(summary.breakdown[0].status, BudgetStatus::OverBudget);
        assert_eq!(summary.breakdown[1].status, BudgetStatus::WithinBudget);
        assert!((summary.total_spent - 7200.0).abs() < f64::EPSILON);
        assert!((summary.remaining_salary - -200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_budget_summary_other_user_isolated() {
        let engine = SummaryEngine::new(sample_store());

        let summary = engine.budget_summary("ravi", march()).unwrap();

        assert_eq!(summary.breakdown.len(), 1);
        assert_eq!(summary.breakdown[0].allocated, 0.0);
        assert_eq!(summary.breakdown[0].status, BudgetStatus::OverBudget);
    }

    // ========== wrapped_summary() tests ==========

    #[test]
    fn test_wrapped_summary() {
        let engine = SummaryEngine::new(sample_store());

        let s = engine.wrapped_summary("asha", march()).unwrap();

        assert_eq!(s.user_name, "Asha");
        assert_eq!(s.year, 2025);
        assert_eq!(s.month, 3);
        assert_eq!(s.total_transactions, 4);
        assert!((s.total_expenses - 7200.0).abs() < 1e-9);
        // February income comes from the salary floor: 18000 → 20000
        assert!((s.income_change - 11.1).abs() < 1e-9);
        assert_eq!(s.goals_summary.completed, 1);
        assert_eq!(
            s.biggest_transaction.unwrap().description,
            "rent on 2025-03-05"
        );
    }

    #[test]
    fn test_wrapped_summary_default_name() {
        let engine = SummaryEngine::new(sample_store());
        let s = engine.wrapped_summary("ravi", march()).unwrap();
        assert_eq!(s.user_name, "User");
        assert_eq!(s.goals_summary.total_goals, 0);
    }

    #[test]
    fn test_wrapped_summary_unknown_user_empty() {
        let engine = SummaryEngine::new(MemoryStore::new());
        let s = engine.wrapped_summary("nobody", march()).unwrap();
        assert_eq!(s.total_transactions, 0);
        assert_eq!(s.most_consistent_category, "none");
    }

    /// Store whose reads fail, to check errors propagate
    struct FailingStore;

    impl LedgerStore for FailingStore {
        fn entries(&self, _: &str) -> Result<Vec<LedgerEntry>> {
            Err(MonthwiseError::Store("disk on fire".into()))
        }
        fn salaries(&self, _: &str) -> Result<Vec<SalaryRecord>> {
            Ok(Vec::new())
        }
        fn allocations(&self, _: &str) -> Result<Vec<BudgetAllocation>> {
            Ok(Vec::new())
        }
        fn goals(&self, _: &str) -> Result<Vec<SavingsGoal>> {
            Ok(Vec::new())
        }
        fn user_name(&self, _: &str) -> Result<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn test_store_error_fails_request() {
        let engine = SummaryEngine::new(FailingStore);
        assert!(matches!(
            engine.wrapped_summary("asha", march()),
            Err(MonthwiseError::Store(_))
        ));
        assert!(engine.budget_summary("asha", march()).is_err());
    }

    // ========== history tests ==========

    #[test]
    fn test_history_and_category() {
        let engine = SummaryEngine::new(sample_store());

        let history = engine.history("asha").unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].date, "2025-03-18");
        assert_eq!(history[4].date, "2025-02-05");

        let rent = engine.category_entries("asha", "rent").unwrap();
        assert_eq!(rent.len(), 2);
        assert!(engine.category_entries("asha", "travel").unwrap().is_empty());
    }

    // ========== fixture ledger ==========

    #[test]
    fn test_fixture_ledger_march() {
        let store = crate::store::JsonlStore::new("tests/fixtures/ledger".into());
        let engine = SummaryEngine::new(store);

        let s = engine.wrapped_summary("asha", march()).unwrap();

        assert_eq!(s.user_name, "Asha");
        assert_eq!(s.total_transactions, 9);
        assert!((s.total_income - 20000.0).abs() < 1e-9);
        assert!((s.total_expenses - 11760.0).abs() < 1e-9);
        assert!((s.savings_rate - 41.2).abs() < 1e-9);
        assert!((s.income_change - 11.1).abs() < 1e-9);
        assert!((s.expense_change - 43.4).abs() < 1e-9);
        assert!((s.savings_change - -15.9).abs() < 1e-9);

        let top: Vec<&str> = s.top_categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(top, vec!["rent", "shopping", "food", "entertainment", "transport"]);
        assert_eq!(s.most_consistent_category, "food");
        assert_eq!(s.biggest_transaction.as_ref().unwrap().description, "March rent");
        assert_eq!(s.goals_summary.total_goals, 3);
        assert_eq!(s.goals_summary.completed, 1);
        assert_eq!(s.goals_summary.in_progress, 1);

        let budget = engine.budget_summary("asha", march()).unwrap();
        assert!((budget.total_budget - 20000.0).abs() < 1e-9);
        assert!((budget.total_spent - 11760.0).abs() < 1e-9);
        let shopping = budget
            .breakdown
            .iter()
            .find(|l| l.category == "shopping")
            .unwrap();
        assert_eq!(shopping.allocated, 0.0);
        assert_eq!(shopping.status, BudgetStatus::OverBudget);
    }
}

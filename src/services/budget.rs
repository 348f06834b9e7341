//! Budget compliance view: allocated vs. spent per category

use std::collections::BTreeMap;

use super::aggregator::Aggregator;
use super::filter::month_entries;
use crate::types::{
    BudgetAllocation, BudgetComplianceSummary, CategoryBudgetLine, LedgerEntry, MonthKey,
};

/// Compare a month's allocation against its debits.
///
/// Allocated categories come first in name order, followed by categories
/// that were spent on without an allocation. Those always report over budget.
pub fn compose_budget(
    month: MonthKey,
    allocation: Option<&BudgetAllocation>,
    entries: &[LedgerEntry],
) -> BudgetComplianceSummary {
    let current = month_entries(entries, month);
    let spent: BTreeMap<String, f64> = Aggregator::by_category(&current)
        .into_iter()
        .map(|(category, usage)| (category, usage.amount))
        .collect();

    let empty = BTreeMap::new();
    let allocated = allocation.map_or(&empty, |a| &a.categories);

    let mut breakdown: Vec<CategoryBudgetLine> = allocated
        .iter()
        .map(|(category, amount)| {
            let spent_amount = spent.get(category).copied().unwrap_or(0.0);
            CategoryBudgetLine::new(category.clone(), *amount, spent_amount)
        })
        .collect();

    breakdown.extend(
        spent
            .iter()
            .filter(|(category, _)| !allocated.contains_key(*category))
            .map(|(category, amount)| CategoryBudgetLine::new(category.clone(), 0.0, *amount)),
    );

    let total_budget: f64 = allocated.values().sum();
    let total_spent: f64 = spent.values().sum();

    BudgetComplianceSummary {
        month_key: month,
        total_budget,
        total_spent,
        remaining_salary: total_budget - total_spent,
        breakdown,
    }
}

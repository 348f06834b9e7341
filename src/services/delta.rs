//! Month-over-month percentage deltas

use super::aggregator::FlowTotals;

/// Signed percentage change; a zero baseline reports 0
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Savings change over the absolute previous savings, so the sign follows
/// the direction of the move even when the baseline was negative
pub fn savings_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous.abs() * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthDeltas {
    pub income_change: f64,
    pub expense_change: f64,
    pub savings_change: f64,
}

impl MonthDeltas {
    pub fn between(current: &FlowTotals, previous: &FlowTotals) -> Self {
        Self {
            income_change: percent_change(current.income, previous.income),
            expense_change: percent_change(current.expenses, previous.expenses),
            savings_change: savings_change(current.savings(), previous.savings()),
        }
    }
}

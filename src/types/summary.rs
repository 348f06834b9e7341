//! Derived summary shapes returned to callers

use serde::{Deserialize, Serialize};

use super::MonthKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OverBudget,
    WithinBudget,
}

impl BudgetStatus {
    pub fn from_amounts(allocated: f64, spent: f64) -> Self {
        if spent > allocated {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::WithinBudget
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::OverBudget => "over_budget",
            BudgetStatus::WithinBudget => "within_budget",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBudgetLine {
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
}

impl CategoryBudgetLine {
    pub fn new(category: impl Into<String>, allocated: f64, spent: f64) -> Self {
        Self {
            category: category.into(),
            allocated,
            spent,
            remaining: allocated - spent,
            status: BudgetStatus::from_amounts(allocated, spent),
        }
    }
}

/// Allocated vs. spent for one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetComplianceSummary {
    pub month_key: MonthKey,
    pub total_budget: f64,
    pub total_spent: f64,
    /// Budget headroom (`total_budget - total_spent`), not salary left over
    pub remaining_salary: f64,
    pub breakdown: Vec<CategoryBudgetLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyData {
    pub week_label: String,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiggestTransaction {
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GoalSummary {
    pub total_goals: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub total_saved: f64,
    pub total_target: f64,
}

/// Retrospective insights for one user-month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WrappedSummary {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub user_name: String,

    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub savings_rate: f64,

    pub income_change: f64,
    pub expense_change: f64,
    pub savings_change: f64,

    pub total_transactions: u64,
    pub average_daily_spending: f64,

    pub top_categories: Vec<CategoryBreakdown>,
    pub most_consistent_category: String,

    pub biggest_transaction: Option<BiggestTransaction>,

    pub weekly_data: Vec<WeeklyData>,
    pub highest_spending_week: String,
    pub best_savings_week: String,

    pub goals_summary: GoalSummary,

    pub daily_average_spend: f64,
    pub transactions_per_week: f64,
    pub top_spending_day_of_week: String,
    pub fun_comparisons: Vec<String>,
    pub streak_days_under_budget: u32,
}

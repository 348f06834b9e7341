//! Salary allocation and savings-goal planning

use std::collections::BTreeMap;

use super::insights::round_to;
use crate::types::{BudgetAllocation, MonthKey, MonthwiseError, Result, SavingsGoal};

/// Share of salary predicted for each category
pub const ALLOCATION_SHARES: &[(&str, f64)] = &[
    ("food", 0.20),
    ("rent", 0.30),
    ("transport", 0.10),
    ("entertainment", 0.10),
    ("savings", 0.20),
    ("misc", 0.10),
];

/// Goals shorter than this go to a recurring deposit
const SHORT_TERM_MONTHS: u32 = 12;

const SHORT_TERM_SUGGESTION: &str = "Recurring Deposit (RD)";
const SHORT_TERM_RETURN: f64 = 1.06;
const LONG_TERM_SUGGESTION: &str = "SIP (Index Fund)";
const LONG_TERM_RETURN: f64 = 1.12;

/// Split a salary into the standard category shares
pub fn predict_allocation(user_id: &str, month: MonthKey, salary: f64) -> BudgetAllocation {
    let categories: BTreeMap<String, f64> = ALLOCATION_SHARES
        .iter()
        .map(|(category, share)| (category.to_string(), round_to(salary * share, 2)))
        .collect();

    BudgetAllocation {
        user_id: user_id.to_string(),
        month_key: month,
        categories,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalPlan {
    pub suggestion: String,
    pub monthly_amount: f64,
    pub expected_return: f64,
}

impl GoalPlan {
    /// Savings goal record carrying this plan, nothing saved yet
    pub fn into_goal(self, user_id: &str, target: f64, months: u32) -> SavingsGoal {
        SavingsGoal {
            user_id: user_id.to_string(),
            target_amount: target,
            current_amount: 0.0,
            duration_months: Some(months),
            suggestion: Some(self.suggestion),
            monthly_amount: Some(self.monthly_amount),
            expected_return: Some(self.expected_return),
        }
    }
}

/// Monthly contribution and instrument for reaching `target` in `months`
pub fn suggest_plan(target: f64, months: u32) -> Result<GoalPlan> {
    if months == 0 {
        return Err(MonthwiseError::InvalidInput(
            "goal duration must be at least one month".into(),
        ));
    }
    if !target.is_finite() || target < 0.0 {
        return Err(MonthwiseError::InvalidInput(format!(
            "goal target must be a non-negative amount, got {}",
            target
        )));
    }

    let (suggestion, growth) = if months < SHORT_TERM_MONTHS {
        (SHORT_TERM_SUGGESTION, SHORT_TERM_RETURN)
    } else {
        (LONG_TERM_SUGGESTION, LONG_TERM_RETURN)
    };

    Ok(GoalPlan {
        suggestion: suggestion.to_string(),
        monthly_amount: round_to(target / months as f64, 2),
        expected_return: round_to(target * growth, 2),
    })
}

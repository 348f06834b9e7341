//! Insight composer for the monthly wrapped summary

use std::collections::HashMap;

use super::aggregator::{Aggregator, CategoryUsage, FlowTotals};
use super::bucketer::{TemporalBuckets, WEEK_COUNT};
use super::catalog::{icon_for, DAY_NAMES, FALLBACK_LABEL, FALLBACK_UNIT_PRICE, FUN_COMPARISONS};
use super::delta::MonthDeltas;
use super::filter::month_entries;
use crate::types::{
    BiggestTransaction, CategoryBreakdown, GoalSummary, LedgerEntry, MonthKey, SalaryRecord,
    SavingsGoal, WeeklyData, WrappedSummary,
};

/// Number of categories reported in `top_categories`
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Reported when the month has no debits
pub const NO_CATEGORY: &str = "none";

/// Snapshot of one user's records the summary is computed from
#[derive(Debug, Clone, Copy)]
pub struct WrappedInput<'a> {
    pub month: MonthKey,
    pub user_name: &'a str,
    pub entries: &'a [LedgerEntry],
    pub salaries: &'a [SalaryRecord],
    pub goals: &'a [SavingsGoal],
}

/// Round to `digits` decimals; exact halves go to the even neighbour
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round_ties_even() / factor
}

/// Highest salary recorded for the month
pub fn salary_for(salaries: &[SalaryRecord], month: MonthKey) -> Option<f64> {
    salaries
        .iter()
        .filter(|s| s.month_key == month)
        .map(|s| s.amount)
        .reduce(f64::max)
}

/// Month flows where a recorded salary acts as a floor on income
pub fn month_flows(
    entries: &[&LedgerEntry],
    salaries: &[SalaryRecord],
    month: MonthKey,
) -> FlowTotals {
    let mut totals = Aggregator::totals(entries);
    if let Some(salary) = salary_for(salaries, month) {
        if salary > totals.income {
            totals.income = salary;
        }
    }
    totals
}

/// Top categories by amount; equal amounts ordered by name
pub fn top_categories(
    usage: &HashMap<String, CategoryUsage>,
    total_expenses: f64,
) -> Vec<CategoryBreakdown> {
    let mut ranked: Vec<(&String, &CategoryUsage)> = usage.iter().collect();
    ranked.sort_by(|a, b| b.1.amount.total_cmp(&a.1.amount).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(TOP_CATEGORY_LIMIT)
        .map(|(category, u)| {
            let percentage = if total_expenses > 0.0 {
                u.amount / total_expenses * 100.0
            } else {
                0.0
            };
            CategoryBreakdown {
                category: category.clone(),
                amount: round_to(u.amount, 2),
                percentage: round_to(percentage, 1),
                icon: icon_for(category).to_string(),
            }
        })
        .collect()
}

/// Category with the most debits; ties go to the smallest name
pub fn most_consistent(usage: &HashMap<String, CategoryUsage>) -> String {
    usage
        .iter()
        .max_by(|(a_name, a), (b_name, b)| a.count.cmp(&b.count).then_with(|| b_name.cmp(a_name)))
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| NO_CATEGORY.to_string())
}

/// Longest run of days whose spend stayed within `daily_budget`.
/// `None` means unbounded: every day passes.
pub fn max_streak(daily_spend: &[f64], daily_budget: Option<f64>) -> u32 {
    let mut streak = 0u32;
    let mut best = 0u32;

    for spent in daily_spend {
        let within = daily_budget.map_or(true, |budget| *spent <= budget);
        if within {
            streak += 1;
            best = best.max(streak);
        } else {
            streak = 0;
        }
    }

    best
}

pub fn fun_comparisons(usage: &HashMap<String, CategoryUsage>, total_expenses: f64) -> Vec<String> {
    let mut sentences: Vec<String> = FUN_COMPARISONS
        .iter()
        .filter_map(|c| {
            let spent = usage.get(c.category).map_or(0.0, |u| u.amount);
            let count = (spent / c.unit_price).floor() as u64;
            (count > 0).then(|| {
                format!(
                    "You spent the equivalent of {} {} on {}!",
                    count, c.label, c.category
                )
            })
        })
        .collect();

    if sentences.is_empty() && total_expenses > 0.0 {
        let count = (total_expenses / FALLBACK_UNIT_PRICE).floor() as u64;
        sentences.push(format!("Your total spending equals {} {}", count, FALLBACK_LABEL));
    }

    sentences
}

pub fn goals_summary(goals: &[SavingsGoal]) -> GoalSummary {
    let mut summary = GoalSummary {
        total_goals: goals.len() as u32,
        ..Default::default()
    };

    for goal in goals {
        summary.total_target += goal.target_amount;
        summary.total_saved += goal.current_amount;
        if goal.is_completed() {
            summary.completed += 1;
        } else if goal.is_in_progress() {
            summary.in_progress += 1;
        }
    }

    summary.total_saved = round_to(summary.total_saved, 2);
    summary.total_target = round_to(summary.total_target, 2);
    summary
}

/// Index of the largest value; the leftmost wins on ties
fn first_max_index(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(0, |best, (i, v)| if *v > values[best] { i } else { best })
}

fn week_label(index: usize) -> String {
    format!("Week {}", index + 1)
}

fn weekly_data(buckets: &TemporalBuckets) -> Vec<WeeklyData> {
    buckets
        .weeks
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let income = round_to(w.income, 2);
            let expenses = round_to(w.expenses, 2);
            WeeklyData {
                week_label: week_label(i),
                income,
                expenses,
                savings: round_to(income - expenses, 2),
            }
        })
        .collect()
}

/// Build the wrapped summary for `input.month`
pub fn compose_wrapped(input: &WrappedInput<'_>) -> WrappedSummary {
    let month = input.month;
    let days_in_month = month.days_in_month();

    let current_entries = month_entries(input.entries, month);
    let previous_entries = month_entries(input.entries, month.previous());

    let current = month_flows(&current_entries, input.salaries, month);
    let previous = month_flows(&previous_entries, input.salaries, month.previous());
    let deltas = MonthDeltas::between(&current, &previous);

    let usage = Aggregator::by_category(&current_entries);
    let buckets = TemporalBuckets::from_entries(&current_entries, month);

    let total_savings = current.savings();
    let savings_rate = if current.income > 0.0 {
        total_savings / current.income * 100.0
    } else {
        0.0
    };
    let daily_average = current.expenses / days_in_month as f64;
    let transactions_per_week = current.entry_count as f64 / WEEK_COUNT as f64;

    let daily_budget = (current.income > 0.0).then(|| current.income / days_in_month as f64);

    let week_expenses: Vec<f64> = buckets.weeks.iter().map(|w| w.expenses).collect();
    let week_savings: Vec<f64> = buckets.weeks.iter().map(|w| w.savings()).collect();

    let biggest_transaction =
        Aggregator::biggest_debit(&current_entries).map(|e| BiggestTransaction {
            amount: round_to(e.amount, 2),
            category: e.category_name().to_string(),
            date: e.date.clone(),
            description: e.description.clone().unwrap_or_default(),
        });

    WrappedSummary {
        year: month.year(),
        month: month.month(),
        month_name: month.month_name().to_string(),
        user_name: input.user_name.to_string(),

        total_income: round_to(current.income, 2),
        total_expenses: round_to(current.expenses, 2),
        total_savings: round_to(total_savings, 2),
        savings_rate: round_to(savings_rate, 1),

        income_change: round_to(deltas.income_change, 1),
        expense_change: round_to(deltas.expense_change, 1),
        savings_change: round_to(deltas.savings_change, 1),

        total_transactions: current.entry_count,
        average_daily_spending: round_to(daily_average, 2),

        top_categories: top_categories(&usage, current.expenses),
        most_consistent_category: most_consistent(&usage),

        biggest_transaction,

        weekly_data: weekly_data(&buckets),
        highest_spending_week: week_label(first_max_index(&week_expenses)),
        best_savings_week: week_label(first_max_index(&week_savings)),

        goals_summary: goals_summary(input.goals),

        daily_average_spend: round_to(daily_average, 2),
        transactions_per_week: round_to(transactions_per_week, 1),
        top_spending_day_of_week: DAY_NAMES[first_max_index(&buckets.weekdays)].to_string(),
        fun_comparisons: fun_comparisons(&usage, current.expenses),
        streak_days_under_budget: max_streak(&buckets.days, daily_budget),
    }
}

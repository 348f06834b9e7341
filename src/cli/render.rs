//! Plain-text rendering of summaries for the terminal

use std::fmt::Write;

use crate::services::GoalPlan;
use crate::types::{BudgetAllocation, BudgetComplianceSummary, LedgerEntry, WrappedSummary};

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

pub fn budget(summary: &BudgetComplianceSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Budget for {}", summary.month_key);
    let _ = writeln!(out, "  Total budget: {:>12.2}", summary.total_budget);
    let _ = writeln!(out, "  Total spent:  {:>12.2}", summary.total_spent);
    let _ = writeln!(out, "  Remaining:    {:>12.2}", summary.remaining_salary);

    if summary.breakdown.is_empty() {
        let _ = writeln!(out, "\n  No allocation or spending recorded.");
        return out;
    }

    let _ = writeln!(
        out,
        "\n  {:<16} {:>12} {:>12} {:>12}  STATUS",
        "CATEGORY", "ALLOCATED", "SPENT", "REMAINING"
    );
    for line in &summary.breakdown {
        let _ = writeln!(
            out,
            "  {:<16} {:>12.2} {:>12.2} {:>12.2}  {}",
            line.category,
            line.allocated,
            line.spent,
            line.remaining,
            line.status.as_str()
        );
    }
    out
}

pub fn wrapped(s: &WrappedSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}'s {} {} wrapped", s.user_name, s.month_name, s.year);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Income   {:>12.2}  ({} vs last month)",
        s.total_income,
        signed(s.income_change)
    );
    let _ = writeln!(
        out,
        "  Expenses {:>12.2}  ({} vs last month)",
        s.total_expenses,
        signed(s.expense_change)
    );
    let _ = writeln!(
        out,
        "  Savings  {:>12.2}  ({} vs last month)",
        s.total_savings,
        signed(s.savings_change)
    );
    let _ = writeln!(out, "  Savings rate: {:.1}%", s.savings_rate);
    let _ = writeln!(
        out,
        "  {} transactions, {:.1} per week, {:.2} spent per day",
        s.total_transactions, s.transactions_per_week, s.average_daily_spending
    );

    if !s.top_categories.is_empty() {
        let _ = writeln!(out, "\nTop categories");
        for c in &s.top_categories {
            let _ = writeln!(
                out,
                "  {} {:<14} {:>12.2}  {:>5.1}%",
                c.icon, c.category, c.amount, c.percentage
            );
        }
    }
    let _ = writeln!(out, "  Most frequent: {}", s.most_consistent_category);

    if let Some(big) = &s.biggest_transaction {
        let _ = write!(
            out,
            "\nBiggest spend: {:.2} on {} ({})",
            big.amount, big.category, big.date
        );
        if !big.description.is_empty() {
            let _ = write!(out, " {}", big.description);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "\nWeeks");
    for w in &s.weekly_data {
        let _ = writeln!(
            out,
            "  {:<7} in {:>10.2}  out {:>10.2}  saved {:>10.2}",
            w.week_label, w.income, w.expenses, w.savings
        );
    }
    let _ = writeln!(out, "  Highest spending: {}", s.highest_spending_week);
    let _ = writeln!(out, "  Best savings:     {}", s.best_savings_week);
    let _ = writeln!(out, "  Big spending day: {}", s.top_spending_day_of_week);
    let _ = writeln!(
        out,
        "  Longest streak under budget: {} days",
        s.streak_days_under_budget
    );

    let g = &s.goals_summary;
    if g.total_goals > 0 {
        let _ = writeln!(
            out,
            "\nGoals: {} total, {} completed, {} in progress ({:.2} of {:.2} saved)",
            g.total_goals, g.completed, g.in_progress, g.total_saved, g.total_target
        );
    }

    if !s.fun_comparisons.is_empty() {
        let _ = writeln!(out);
        for line in &s.fun_comparisons {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

pub fn entries(entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}  {:<6}  {:<14} {:>12}  DESCRIPTION",
        "DATE", "TYPE", "CATEGORY", "AMOUNT"
    );
    for e in entries {
        let _ = writeln!(
            out,
            "{:<10}  {:<6}  {:<14} {:>12.2}  {}",
            e.date,
            e.kind,
            e.category_name(),
            e.amount,
            e.description.as_deref().unwrap_or("")
        );
    }
    out
}

pub fn allocation(allocation: &BudgetAllocation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Predicted allocation for {}", allocation.month_key);
    for (category, amount) in &allocation.categories {
        let _ = writeln!(out, "  {:<16} {:>12.2}", category, amount);
    }
    let _ = writeln!(out, "  {:<16} {:>12.2}", "total", allocation.total());
    out
}

pub fn plan(plan: &GoalPlan, target: f64, months: u32) -> String {
    format!(
        "Save {:.2} per month for {} months to reach {:.2}.\nSuggested: {} (expected {:.2})\n",
        plan.monthly_amount, months, target, plan.suggestion, plan.expected_return
    )
}

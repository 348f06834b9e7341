//! Subcommands that append records to the ledger

use clap::Args;

use super::{render, Context};
use crate::services::{predict_allocation, suggest_plan};
use crate::types::{EntryKind, LedgerEntry, MonthKey, SalaryRecord};

/// Record a transaction
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, non-negative
    #[arg(long)]
    pub amount: f64,

    /// credit or debit
    #[arg(long)]
    pub kind: EntryKind,

    /// Category name
    #[arg(long)]
    pub category: String,

    /// Date as YYYY-MM-DD
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: String,

    /// Free-form note
    #[arg(long)]
    pub description: Option<String>,
}

impl AddArgs {
    pub fn run(self, ctx: &Context) -> anyhow::Result<()> {
        let entry = LedgerEntry {
            user_id: ctx.user_id.clone(),
            amount: self.amount,
            kind: self.kind,
            category: self.category.trim().to_string(),
            date: self.date,
            description: self.description.filter(|d| !d.trim().is_empty()),
        };
        ctx.store().add_entry(&entry)?;

        println!(
            "Recorded {} of {:.2} in {} on {}",
            entry.kind,
            entry.amount,
            entry.category_name(),
            entry.date
        );
        Ok(())
    }
}

/// Record a month's salary and store the predicted allocation
#[derive(Args, Debug)]
pub struct SalaryArgs {
    /// Month as YYYY-MM
    #[arg(long, value_name = "YYYY-MM")]
    pub month: MonthKey,

    /// Salary amount
    #[arg(long)]
    pub amount: f64,
}

impl SalaryArgs {
    pub fn run(self, ctx: &Context) -> anyhow::Result<()> {
        let salary = SalaryRecord {
            user_id: ctx.user_id.clone(),
            amount: self.amount,
            month_key: self.month,
        };
        ctx.store().add_salary(&salary)?;

        let allocation = predict_allocation(&ctx.user_id, self.month, self.amount);
        ctx.store().add_allocation(&allocation)?;

        print!("{}", render::allocation(&allocation));
        Ok(())
    }
}

/// Create a savings goal with a plan suggestion
#[derive(Args, Debug)]
pub struct GoalArgs {
    /// Amount to save
    #[arg(long)]
    pub target: f64,

    /// Months to reach the target
    #[arg(long)]
    pub months: u32,
}

impl GoalArgs {
    pub fn run(self, ctx: &Context) -> anyhow::Result<()> {
        let plan = suggest_plan(self.target, self.months)?;
        let text = render::plan(&plan, self.target, self.months);

        let goal = plan.into_goal(&ctx.user_id, self.target, self.months);
        ctx.store().add_goal(&goal)?;

        print!("{}", text);
        Ok(())
    }
}

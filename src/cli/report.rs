//! Read-only report subcommands

use clap::Args;

use super::{print_json, render, Context};
use crate::types::MonthKey;

/// Show allocated vs. spent per category
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Month as YYYY-MM (defaults to the current month)
    #[arg(long, value_name = "YYYY-MM")]
    pub month: Option<MonthKey>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl BudgetArgs {
    pub fn run(self, ctx: &Context) -> anyhow::Result<()> {
        let month = self.month.unwrap_or_else(MonthKey::current);
        let summary = ctx.engine.budget_summary(&ctx.user_id, month)?;

        if self.json {
            print_json(&summary)
        } else {
            print!("{}", render::budget(&summary));
            Ok(())
        }
    }
}

/// Show the month's wrapped insights
#[derive(Args, Debug)]
pub struct WrappedArgs {
    /// Calendar year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month number 1-12 (defaults to the current month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl WrappedArgs {
    pub fn run(self, ctx: &Context) -> anyhow::Result<()> {
        let month = MonthKey::resolve(self.year, self.month)?;
        let summary = ctx.engine.wrapped_summary(&ctx.user_id, month)?;

        if self.json {
            print_json(&summary)
        } else {
            print!("{}", render::wrapped(&summary));
            Ok(())
        }
    }
}

/// List every transaction, newest first
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl HistoryArgs {
    pub fn run(self, ctx: &Context) -> anyhow::Result<()> {
        let entries = ctx.engine.history(&ctx.user_id)?;

        if self.json {
            print_json(&entries)
        } else {
            print!("{}", render::entries(&entries));
            Ok(())
        }
    }
}

/// List transactions recorded under one category
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Category name, e.g. food
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CategoryArgs {
    pub fn run(self, ctx: &Context) -> anyhow::Result<()> {
        let entries = ctx.engine.category_entries(&ctx.user_id, &self.name)?;

        if self.json {
            print_json(&entries)
        } else {
            print!("{}", render::entries(&entries));
            Ok(())
        }
    }
}

mod record;
mod render;
mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::services::SummaryEngine;
use crate::store::JsonlStore;

pub use record::{AddArgs, GoalArgs, SalaryArgs};
pub use report::{BudgetArgs, CategoryArgs, HistoryArgs, WrappedArgs};

/// Monthly budget compliance and spending insights
#[derive(Parser)]
#[command(name = "monthwise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Ledger data directory (overrides config and MONTHWISE_DATA_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// User ID (defaults to `default_user` from config.json)
    #[arg(long, global = true, value_name = "ID")]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show allocated vs. spent per category for a month
    Budget(BudgetArgs),

    /// Show the month's wrapped insights
    Wrapped(WrappedArgs),

    /// List all transactions, newest first
    History(HistoryArgs),

    /// List transactions of one category
    Category(CategoryArgs),

    /// Record a transaction
    Add(AddArgs),

    /// Record a month's salary and its predicted allocation
    Salary(SalaryArgs),

    /// Create a savings goal with a plan suggestion
    Goal(GoalArgs),
}

/// Resolved store and user shared by every subcommand
pub struct Context {
    pub engine: SummaryEngine<JsonlStore>,
    pub user_id: String,
}

impl Context {
    pub fn store(&self) -> &JsonlStore {
        self.engine.store()
    }
}

impl Cli {
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let config = config.with_data_dir(self.data_dir);
        let user_id = config.resolve_user(self.user.as_deref())?;
        tracing::debug!(
            data_dir = %config.data_dir.display(),
            user_id = %user_id,
            "resolved context"
        );

        let ctx = Context {
            engine: SummaryEngine::new(JsonlStore::new(config.data_dir)),
            user_id,
        };

        match self.command {
            Commands::Budget(args) => args.run(&ctx),
            Commands::Wrapped(args) => args.run(&ctx),
            Commands::History(args) => args.run(&ctx),
            Commands::Category(args) => args.run(&ctx),
            Commands::Add(args) => args.run(&ctx),
            Commands::Salary(args) => args.run(&ctx),
            Commands::Goal(args) => args.run(&ctx),
        }
    }
}

/// Print a value as pretty JSON on stdout
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Services for ledger aggregation and summary composition

pub mod aggregator;
pub mod budget;
pub mod bucketer;
pub mod catalog;
pub mod delta;
pub mod engine;
pub mod filter;
pub mod insights;
pub mod planner;

pub use aggregator::Aggregator;
pub use engine::SummaryEngine;
pub use planner::{predict_allocation, suggest_plan, GoalPlan};

//! monthwise: monthly budget compliance and spending insights over a
//! personal ledger.
//!
//! The [`services::SummaryEngine`] reads a user's records from a
//! [`store::LedgerStore`] and composes two views: a budget compliance
//! summary and a retrospective "wrapped" summary for one calendar month.

pub mod cli;
pub mod config;
pub mod services;
pub mod store;
pub mod types;

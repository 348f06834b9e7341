//! Ledger record types as handed over by the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{MonthKey, MonthwiseError};

/// Category used when an entry has none
pub const MISC_CATEGORY: &str = "misc";

/// Display name used when the store has no profile for a user
pub const DEFAULT_USER_NAME: &str = "User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Income
    Credit,
    /// Expense
    Debit,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Credit => f.pad("credit"),
            EntryKind::Debit => f.pad("debit"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = MonthwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(EntryKind::Credit),
            "debit" => Ok(EntryKind::Debit),
            other => Err(MonthwiseError::InvalidInput(format!(
                "entry type must be 'credit' or 'debit', got '{}'",
                other
            ))),
        }
    }
}

/// One income or expense record.
///
/// `date` is kept as the stored string: month membership is a prefix test,
/// and only the bucketing views parse it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub user_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LedgerEntry {
    pub fn is_credit(&self) -> bool {
        self.kind == EntryKind::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.kind == EntryKind::Debit
    }

    /// Category name, blank falls back to `misc`
    pub fn category_name(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            MISC_CATEGORY
        } else {
            trimmed
        }
    }

    /// Parsed `YYYY-MM-DD` date, `None` when malformed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryRecord {
    pub user_id: String,
    pub amount: f64,
    #[serde(rename = "month")]
    pub month_key: MonthKey,
}

/// Per-category allocation for one month, produced by the predictor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetAllocation {
    pub user_id: String,
    #[serde(rename = "month")]
    pub month_key: MonthKey,
    pub categories: BTreeMap<String, f64>,
}

impl BudgetAllocation {
    pub fn total(&self) -> f64 {
        self.categories.values().sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SavingsGoal {
    pub user_id: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub duration_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<f64>,
}

impl SavingsGoal {
    pub fn is_completed(&self) -> bool {
        self.target_amount > 0.0 && self.current_amount >= self.target_amount
    }

    pub fn is_in_progress(&self) -> bool {
        !self.is_completed() && self.current_amount > 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
}

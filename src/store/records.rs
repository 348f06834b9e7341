//! Store line shapes and boundary validation
//!
//! Lines are decoded into loose raw shapes first, then converted into the
//! typed records the engine consumes. Anything that cannot be converted is
//! rejected here, never inside the engine.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::types::{
    BudgetAllocation, EntryKind, LedgerEntry, MonthKey, MonthwiseError, Result, SalaryRecord,
    SavingsGoal, UserProfile, MISC_CATEGORY,
};

/// A record type stored one-per-line in a named collection
pub(crate) trait StoreRecord: Sized + Send {
    const COLLECTION: &'static str;

    fn from_line(line: &mut [u8]) -> Result<Self>;

    fn owner(&self) -> &str;
}

fn decode<T: DeserializeOwned>(line: &mut [u8]) -> Result<T> {
    simd_json::from_slice(line).map_err(|e| MonthwiseError::Parse(e.to_string()))
}

fn required_user(user_id: Option<String>) -> Result<String> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(MonthwiseError::InvalidInput("missing user_id".into())),
    }
}

/// Amounts must be finite and non-negative
pub(crate) fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(MonthwiseError::InvalidInput(format!(
            "amount must be a non-negative number, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Write-time date check; reads tolerate malformed dates.
///
/// Only the zero-padded form is accepted, since month membership is a
/// prefix test on the stored string.
pub(crate) fn validate_date(date: &str) -> Result<()> {
    let invalid =
        || MonthwiseError::InvalidInput(format!("date must be YYYY-MM-DD, got '{}'", date));
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(invalid());
    }
    Ok(())
}

/// Transaction line: `{"user_id","amount","type","category","date","description"}`
#[derive(Deserialize)]
struct RawTransaction {
    user_id: Option<String>,
    amount: Option<f64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    category: Option<String>,
    date: Option<String>,
    description: Option<String>,
}

impl StoreRecord for LedgerEntry {
    const COLLECTION: &'static str = "transactions";

    fn from_line(line: &mut [u8]) -> Result<Self> {
        let raw: RawTransaction = decode(line)?;
        let kind = raw
            .kind
            .as_deref()
            .ok_or_else(|| MonthwiseError::InvalidInput("missing type".into()))?
            .parse::<EntryKind>()?;

        Ok(LedgerEntry {
            user_id: required_user(raw.user_id)?,
            amount: validate_amount(raw.amount.unwrap_or(0.0))?,
            kind,
            category: raw
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| MISC_CATEGORY.to_string()),
            date: raw.date.unwrap_or_default(),
            description: raw.description,
        })
    }

    fn owner(&self) -> &str {
        &self.user_id
    }
}

#[derive(Deserialize)]
struct RawSalary {
    user_id: Option<String>,
    amount: Option<f64>,
    month: Option<String>,
}

impl StoreRecord for SalaryRecord {
    const COLLECTION: &'static str = "salaries";

    fn from_line(line: &mut [u8]) -> Result<Self> {
        let raw: RawSalary = decode(line)?;
        let month = raw
            .month
            .ok_or_else(|| MonthwiseError::InvalidInput("missing month".into()))?;

        Ok(SalaryRecord {
            user_id: required_user(raw.user_id)?,
            amount: validate_amount(raw.amount.unwrap_or(0.0))?,
            month_key: month.parse::<MonthKey>()?,
        })
    }

    fn owner(&self) -> &str {
        &self.user_id
    }
}

#[derive(Deserialize)]
struct RawAllocation {
    user_id: Option<String>,
    month: Option<String>,
    #[serde(default)]
    categories: BTreeMap<String, f64>,
}

impl StoreRecord for BudgetAllocation {
    const COLLECTION: &'static str = "allocations";

    fn from_line(line: &mut [u8]) -> Result<Self> {
        let raw: RawAllocation = decode(line)?;
        let month = raw
            .month
            .ok_or_else(|| MonthwiseError::InvalidInput("missing month".into()))?;
        for amount in raw.categories.values() {
            validate_amount(*amount)?;
        }

        Ok(BudgetAllocation {
            user_id: required_user(raw.user_id)?,
            month_key: month.parse::<MonthKey>()?,
            categories: raw.categories,
        })
    }

    fn owner(&self) -> &str {
        &self.user_id
    }
}

#[derive(Deserialize)]
struct RawGoal {
    user_id: Option<String>,
    target_amount: Option<f64>,
    current_amount: Option<f64>,
    duration_months: Option<u32>,
    suggestion: Option<String>,
    monthly_amount: Option<f64>,
    expected_return: Option<f64>,
}

impl StoreRecord for SavingsGoal {
    const COLLECTION: &'static str = "goals";

    fn from_line(line: &mut [u8]) -> Result<Self> {
        let raw: RawGoal = decode(line)?;

        Ok(SavingsGoal {
            user_id: required_user(raw.user_id)?,
            target_amount: validate_amount(raw.target_amount.unwrap_or(0.0))?,
            current_amount: validate_amount(raw.current_amount.unwrap_or(0.0))?,
            duration_months: raw.duration_months,
            suggestion: raw.suggestion,
            monthly_amount: raw.monthly_amount,
            expected_return: raw.expected_return,
        })
    }

    fn owner(&self) -> &str {
        &self.user_id
    }
}

#[derive(Deserialize)]
struct RawUser {
    user_id: Option<String>,
    name: Option<String>,
}

impl StoreRecord for UserProfile {
    const COLLECTION: &'static str = "users";

    fn from_line(line: &mut [u8]) -> Result<Self> {
        let raw: RawUser = decode(line)?;

        Ok(UserProfile {
            user_id: required_user(raw.user_id)?,
            name: raw.name.unwrap_or_else(|| crate::types::DEFAULT_USER_NAME.to_string()),
        })
    }

    fn owner(&self) -> &str {
        &self.user_id
    }
}

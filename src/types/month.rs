//! Calendar month identity (`YYYY-MM`)

use chrono::{Datelike, Local, Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::{MonthwiseError, Result};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid regex"))
}

/// A calendar month, rendered as `YYYY-MM`.
///
/// Entries belong to a month when their date string starts with this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(MonthwiseError::InvalidMonth(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Current month in the local timezone
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Resolve optional year/month, each defaulting to the current one
    pub fn resolve(year: Option<i32>, month: Option<u32>) -> Result<Self> {
        let now = Self::current();
        Self::new(year.unwrap_or(now.year), month.unwrap_or(now.month))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// The preceding month; January rolls back to December of the prior year
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        self.first_day()
            .and_then(|first| {
                first
                    .checked_add_months(Months::new(1))
                    .map(|next| (next - first).num_days() as u32)
            })
            .unwrap_or(31)
    }

    /// String-prefix membership test used by the month filter
    pub fn contains_date(&self, date: &str) -> bool {
        date.starts_with(&self.to_string())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthwiseError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = month_key_regex()
            .captures(s.trim())
            .ok_or_else(|| MonthwiseError::InvalidMonth(format!("expected YYYY-MM, got '{}'", s)))?;
        let year = caps[1]
            .parse::<i32>()
            .map_err(|e| MonthwiseError::InvalidMonth(e.to_string()))?;
        let month = caps[2]
            .parse::<u32>()
            .map_err(|e| MonthwiseError::InvalidMonth(e.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthwiseError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

//! Temporal bucketing of a month's entries
//!
//! Three views over the same month: four week buckets, seven weekday
//! buckets and one bucket per calendar day. Entries whose date does not
//! parse are left out of all three.

use chrono::Datelike;

use crate::types::{LedgerEntry, MonthKey};

/// Number of week buckets; the last one absorbs days 22 to month end
pub const WEEK_COUNT: usize = 4;

/// Week bucket for a day of month: 1-7 → 0, 8-14 → 1, 15-21 → 2, 22+ → 3
pub fn week_index(day: u32) -> usize {
    ((day.saturating_sub(1) / 7) as usize).min(WEEK_COUNT - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeekBucket {
    pub income: f64,
    pub expenses: f64,
}

impl WeekBucket {
    pub fn savings(&self) -> f64 {
        self.income - self.expenses
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemporalBuckets {
    pub weeks: [WeekBucket; WEEK_COUNT],
    /// Debit spend per weekday, Monday = 0
    pub weekdays: [f64; 7],
    /// Debit spend per day of month, index 0 = day 1
    pub days: Vec<f64>,
}

impl TemporalBuckets {
    pub fn new(days_in_month: u32) -> Self {
        Self {
            weeks: [WeekBucket::default(); WEEK_COUNT],
            weekdays: [0.0; 7],
            days: vec![0.0; days_in_month as usize],
        }
    }

    /// Bucket a month's entries
    pub fn from_entries(entries: &[&LedgerEntry], month: MonthKey) -> Self {
        let mut buckets = Self::new(month.days_in_month());

        for entry in entries {
            let Some(date) = entry.parsed_date() else {
                continue;
            };

            let week = &mut buckets.weeks[week_index(date.day())];
            if entry.is_credit() {
                week.income += entry.amount;
                continue;
            }
            week.expenses += entry.amount;

            buckets.weekdays[date.weekday().num_days_from_monday() as usize] += entry.amount;
            if let Some(day) = buckets.days.get_mut(date.day0() as usize) {
                *day += entry.amount;
            }
        }

        buckets
    }
}

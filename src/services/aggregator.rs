//! Aggregator service for per-category and per-month totals

use crate::types::LedgerEntry;
use std::collections::HashMap;

/// Debit amount and count for one category
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryUsage {
    pub amount: f64,
    pub count: u64,
}

impl CategoryUsage {
    pub fn add(&mut self, entry: &LedgerEntry) {
        self.amount += entry.amount;
        self.count = self.count.saturating_add(1);
    }
}

/// Income and expense totals over a set of entries
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowTotals {
    pub income: f64,
    pub expenses: f64,
    pub entry_count: u64,
}

impl FlowTotals {
    pub fn savings(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Aggregator for category and flow statistics
pub struct Aggregator;

impl Aggregator {
    /// Aggregate debit entries by category (blank → "misc"). Credits are ignored.
    pub fn by_category(entries: &[&LedgerEntry]) -> HashMap<String, CategoryUsage> {
        let mut category_map: HashMap<String, CategoryUsage> = HashMap::new();

        for entry in entries.iter().filter(|e| e.is_debit()) {
            let usage = category_map
                .entry(entry.category_name().to_string())
                .or_default();
            usage.add(entry);
        }

        category_map
    }

    /// Sum credits and debits across all entries
    pub fn totals(entries: &[&LedgerEntry]) -> FlowTotals {
        let mut totals = FlowTotals::default();

        for entry in entries {
            if entry.is_credit() {
                totals.income += entry.amount;
            } else {
                totals.expenses += entry.amount;
            }
            totals.entry_count = totals.entry_count.saturating_add(1);
        }

        totals
    }

    /// Largest debit; on equal amounts the first one encountered is kept
    pub fn biggest_debit<'a>(entries: &[&'a LedgerEntry]) -> Option<&'a LedgerEntry> {
        let mut biggest: Option<&'a LedgerEntry> = None;

        for &entry in entries.iter().filter(|e| e.is_debit()) {
            match biggest {
                None => biggest = Some(entry),
                Some(current) if entry.amount > current.amount => biggest = Some(entry),
                _ => {}
            }
        }

        biggest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    fn make_entry(kind: EntryKind, category: &str, amount: f64, description: &str) -> LedgerEntry {
        LedgerEntry {
            user_id: "u1".into(),
            amount,
            kind,
            category: category.into(),
            date: "2025-03-10".into(),
            description: Some(description.into()),
        }
    }

    fn refs(entries: &[LedgerEntry]) -> Vec<&LedgerEntry> {
        entries.iter().collect()
    }

    // ========== by_category() tests ==========

    #[test]
    fn test_by_category_empty() {
        let result = Aggregator::by_category(&[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_by_category_ignores_credits() {
        let entries = vec![
            make_entry(EntryKind::Credit, "salary", 20000.0, ""),
            make_entry(EntryKind::Debit, "food", 500.0, ""),
        ];

        let result = Aggregator::by_category(&refs(&entries));

        assert_eq!(result.len(), 1);
        assert!(!result.contains_key("salary"));
        let food = result.get("food").unwrap();
        assert!((food.amount - 500.0).abs() < f64::EPSILON);
        assert_eq!(food.count, 1);
    }

    #[test]
    fn test_by_category_sums_and_counts() {
        let entries = vec![
            make_entry(EntryKind::Debit, "food", 100.0, ""),
            make_entry(EntryKind::Debit, "rent", 3000.0, ""),
            make_entry(EntryKind::Debit, "food", 250.0, ""),
            make_entry(EntryKind::Debit, "", 40.0, ""),
        ];

        let result = Aggregator::by_category(&refs(&entries));

        assert_eq!(result.len(), 3);
        let food = result.get("food").unwrap();
        assert!((food.amount - 350.0).abs() < f64::EPSILON);
        assert_eq!(food.count, 2);
        // Blank category becomes misc
        assert_eq!(result.get("misc").unwrap().count, 1);
    }

    #[test]
    fn test_category_amounts_partition_expenses() {
        let entries = vec![
            make_entry(EntryKind::Debit, "food", 120.5, ""),
            make_entry(EntryKind::Debit, "transport", 60.25, ""),
            make_entry(EntryKind::Credit, "salary", 5000.0, ""),
            make_entry(EntryKind::Debit, "food", 9.25, ""),
        ];
        let r = refs(&entries);

        let by_category: f64 = Aggregator::by_category(&r).values().map(|u| u.amount).sum();
        let totals = Aggregator::totals(&r);

        assert!((by_category - totals.expenses).abs() < 1e-9);
    }

    // ========== totals() tests ==========

    #[test]
    fn test_totals_empty() {
        let result = Aggregator::totals(&[]);
        assert_eq!(result, FlowTotals::default());
        assert!((result.savings() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_totals_income_and_expenses() {
        let entries = vec![
            make_entry(EntryKind::Credit, "salary", 20000.0, ""),
            make_entry(EntryKind::Debit, "food", 500.0, ""),
            make_entry(EntryKind::Debit, "rent", 6000.0, ""),
        ];

        let result = Aggregator::totals(&refs(&entries));

        assert!((result.income - 20000.0).abs() < f64::EPSILON);
        assert!((result.expenses - 6500.0).abs() < f64::EPSILON);
        assert!((result.savings() - 13500.0).abs() < f64::EPSILON);
        assert_eq!(result.entry_count, 3);
    }

    // ========== biggest_debit() tests ==========

    #[test]
    fn test_biggest_debit_none_without_debits() {
        let entries = vec![make_entry(EntryKind::Credit, "salary", 100.0, "")];
        assert!(Aggregator::biggest_debit(&refs(&entries)).is_none());
    }

    #[test]
    fn test_biggest_debit_first_wins_on_tie() {
        let entries = vec![
            make_entry(EntryKind::Debit, "food", 300.0, "first"),
            make_entry(EntryKind::Credit, "salary", 9000.0, "income"),
            make_entry(EntryKind::Debit, "shopping", 300.0, "second"),
            make_entry(EntryKind::Debit, "transport", 20.0, "small"),
        ];

        let biggest = Aggregator::biggest_debit(&refs(&entries)).unwrap();

        assert_eq!(biggest.description.as_deref(), Some("first"));
    }
}

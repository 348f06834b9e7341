//! Month filter

use crate::types::{LedgerEntry, MonthKey};

/// Entries whose date string starts with the month key, in input order.
///
/// Entries with a missing or differently-shaped date never match.
pub fn month_entries(entries: &[LedgerEntry], month: MonthKey) -> Vec<&LedgerEntry> {
    let prefix = month.to_string();
    entries
        .iter()
        .filter(|e| e.date.starts_with(&prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    fn entry(date: &str) -> LedgerEntry {
        LedgerEntry {
            user_id: "u1".into(),
            amount: 1.0,
            kind: EntryKind::Debit,
            category: "food".into(),
            date: date.into(),
            description: None,
        }
    }

    #[test]
    fn test_month_entries_prefix_match() {
        let entries = vec![
            entry("2025-03-01"),
            entry("2025-02-28"),
            entry("2025-03-31"),
            entry("2024-03-15"),
        ];
        let march = month_entries(&entries, MonthKey::new(2025, 3).unwrap());
        assert_eq!(march.len(), 2);
        assert_eq!(march[0].date, "2025-03-01");
        assert_eq!(march[1].date, "2025-03-31");
    }

    #[test]
    fn test_month_entries_excludes_missing_dates() {
        let entries = vec![entry(""), entry("03/05/2025"), entry("2025-03-xx")];
        let march = month_entries(&entries, MonthKey::new(2025, 3).unwrap());
        // Prefix semantics: a malformed day still belongs to the month
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].date, "2025-03-xx");
    }

    #[test]
    fn test_month_entries_empty() {
        assert!(month_entries(&[], MonthKey::new(2025, 3).unwrap()).is_empty());
    }
}

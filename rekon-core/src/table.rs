//! Rectangular result table assembled from per-file record runs.

use crate::record::VaTransaction;
use std::collections::HashSet;

/// Ordered collection of transaction rows. Rows keep the order they were
/// appended in: line order within a file, file order across files. No
/// sorting, re-keying or deduplication happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionTable {
    records: Vec<VaTransaction>,
}

impl TransactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's record run at the end of the table.
    pub fn append(&mut self, records: Vec<VaTransaction>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[VaTransaction] {
        &self.records
    }

    /// First `n` rows, for preview display.
    pub fn head(&self, n: usize) -> &[VaTransaction] {
        &self.records[..self.records.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct source files that contributed at least one row.
    pub fn file_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.source_file.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn rec(va: &str, file: &str) -> VaTransaction {
        VaTransaction {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            va_number: va.to_string(),
            remark: "TEST".to_string(),
            credit: 10.0,
            sub_company: None,
            source_file: file.to_string(),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut table = TransactionTable::new();
        table.append(vec![rec("11111111", "a.txt"), rec("22222222", "a.txt")]);
        table.append(vec![rec("33333333", "b.txt")]);

        let vas: Vec<_> = table.records().iter().map(|r| r.va_number.as_str()).collect();
        assert_eq!(vas, ["11111111", "22222222", "33333333"]);
    }

    #[test]
    fn test_head_is_clamped_to_len() {
        let mut table = TransactionTable::new();
        table.append(vec![rec("11111111", "a.txt")]);
        assert_eq!(table.head(20).len(), 1);
        assert_eq!(table.head(0).len(), 0);
    }

    #[test]
    fn test_file_count_distinct() {
        let mut table = TransactionTable::new();
        assert_eq!(table.file_count(), 0);
        table.append(vec![rec("11111111", "a.txt"), rec("22222222", "a.txt")]);
        table.append(vec![rec("33333333", "b.txt")]);
        assert_eq!(table.file_count(), 2);
    }
}

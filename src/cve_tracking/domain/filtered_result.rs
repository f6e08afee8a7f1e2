use crate::cve_tracking::domain::{CveId, VulnerabilityRecord};
use std::collections::HashSet;

/// Records that passed retention and vendor matching, keyed by CVE id
///
/// A record is present at most once even when it matched several vendor
/// terms. Iteration follows insertion order so that classification and
/// the rendered reports are deterministic.
#[derive(Debug, Clone, Default)]
pub struct FilteredResult {
    records: Vec<VulnerabilityRecord>,
    seen: HashSet<CveId>,
}

impl FilteredResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record unless one with the same id is already present.
    /// Returns true when the record was actually added.
    pub fn insert(&mut self, record: VulnerabilityRecord) -> bool {
        if self.seen.contains(record.id()) {
            return false;
        }
        self.seen.insert(record.id().clone());
        self.records.push(record);
        true
    }

    pub fn contains(&self, id: &CveId) -> bool {
        self.seen.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VulnerabilityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str) -> VulnerabilityRecord {
        VulnerabilityRecord::new(
            CveId::new(id.to_string()).unwrap(),
            None,
            NaiveDate::from_ymd_opt(2022, 7, 27).unwrap(),
            "desc".to_string(),
            None,
        )
    }

    #[test]
    fn test_insert_new_record() {
        let mut result = FilteredResult::new();
        assert!(result.insert(record("CVE-2022-0001")));
        assert_eq!(result.len(), 1);
        assert!(result.contains(&CveId::new("CVE-2022-0001".to_string()).unwrap()));
    }

    #[test]
    fn test_insert_duplicate_id_is_rejected() {
        let mut result = FilteredResult::new();
        assert!(result.insert(record("CVE-2022-0001")));
        assert!(!result.insert(record("CVE-2022-0001")));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut result = FilteredResult::new();
        result.insert(record("CVE-2022-0003"));
        result.insert(record("CVE-2022-0001"));
        result.insert(record("CVE-2022-0002"));

        let ids: Vec<&str> = result.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["CVE-2022-0003", "CVE-2022-0001", "CVE-2022-0002"]);
    }

    #[test]
    fn test_empty_result() {
        let result = FilteredResult::new();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }
}

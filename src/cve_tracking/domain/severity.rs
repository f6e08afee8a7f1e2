use crate::cve_tracking::domain::VulnerabilityRecord;

/// The four mutually exclusive classification groups for a record
///
/// UNSPECIFIED holds records with no v3 impact block as well as records
/// whose `baseSeverity` label is not one of the three recognized values
/// (the exact-match rule means e.g. `CRITICAL` also lands here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityBucket {
    High,
    Medium,
    Low,
    Unspecified,
}

impl SeverityBucket {
    /// All buckets in reporting order
    pub const ALL: [SeverityBucket; 4] = [
        SeverityBucket::High,
        SeverityBucket::Medium,
        SeverityBucket::Low,
        SeverityBucket::Unspecified,
    ];

    /// The label used in report headers and artifact filenames
    pub fn label(&self) -> &'static str {
        match self {
            SeverityBucket::High => "HIGH",
            SeverityBucket::Medium => "MEDIUM",
            SeverityBucket::Low => "LOW",
            SeverityBucket::Unspecified => "UNSPECIFIED",
        }
    }
}

impl std::fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The four severity-ordered record sequences produced by classification
///
/// Within each bucket, records keep the iteration order of the
/// FilteredResult they were classified from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeverityBuckets {
    high: Vec<VulnerabilityRecord>,
    medium: Vec<VulnerabilityRecord>,
    low: Vec<VulnerabilityRecord>,
    unspecified: Vec<VulnerabilityRecord>,
}

impl SeverityBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: SeverityBucket, record: VulnerabilityRecord) {
        match bucket {
            SeverityBucket::High => self.high.push(record),
            SeverityBucket::Medium => self.medium.push(record),
            SeverityBucket::Low => self.low.push(record),
            SeverityBucket::Unspecified => self.unspecified.push(record),
        }
    }

    pub fn records(&self, bucket: SeverityBucket) -> &[VulnerabilityRecord] {
        match bucket {
            SeverityBucket::High => &self.high,
            SeverityBucket::Medium => &self.medium,
            SeverityBucket::Low => &self.low,
            SeverityBucket::Unspecified => &self.unspecified,
        }
    }

    /// Total record count across all four buckets
    pub fn total(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len() + self.unspecified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cve_tracking::domain::CveId;
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
    fn test_bucket_labels() {
        assert_eq!(SeverityBucket::High.label(), "HIGH");
        assert_eq!(SeverityBucket::Medium.label(), "MEDIUM");
        assert_eq!(SeverityBucket::Low.label(), "LOW");
        assert_eq!(SeverityBucket::Unspecified.label(), "UNSPECIFIED");
    }

    #[test]
    fn test_bucket_display_matches_label() {
        for bucket in SeverityBucket::ALL {
            assert_eq!(format!("{}", bucket), bucket.label());
        }
    }

    #[test]
    fn test_buckets_push_and_read_back() {
        let mut buckets = SeverityBuckets::new();
        buckets.push(SeverityBucket::High, record("CVE-2022-0001"));
        buckets.push(SeverityBucket::High, record("CVE-2022-0002"));
        buckets.push(SeverityBucket::Low, record("CVE-2022-0003"));

        assert_eq!(buckets.records(SeverityBucket::High).len(), 2);
        assert_eq!(buckets.records(SeverityBucket::Medium).len(), 0);
        assert_eq!(buckets.records(SeverityBucket::Low).len(), 1);
        assert_eq!(buckets.total(), 3);
        assert!(!buckets.is_empty());
    }

    #[test]
    fn test_buckets_preserve_insertion_order() {
        let mut buckets = SeverityBuckets::new();
        buckets.push(SeverityBucket::Unspecified, record("CVE-2022-0002"));
        buckets.push(SeverityBucket::Unspecified, record("CVE-2022-0001"));

        let ids: Vec<&str> = buckets
            .records(SeverityBucket::Unspecified)
            .iter()
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(ids, vec!["CVE-2022-0002", "CVE-2022-0001"]);
    }

    #[test]
    fn test_empty_buckets() {
        let buckets = SeverityBuckets::new();
        assert!(buckets.is_empty());
        assert_eq!(buckets.total(), 0);
    }
}

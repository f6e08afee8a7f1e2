use crate::cve_tracking::domain::{FilteredResult, SeverityBucket, SeverityBuckets};

/// SeverityClassifier - buckets filtered records by their severity label
///
/// A single pass over the FilteredResult fills all four buckets; the
/// `baseSeverity` label is compared case-sensitively against the three
/// recognized values, and anything else (absent block included) lands in
/// UNSPECIFIED. Bucket order follows the input iteration order.
pub struct SeverityClassifier;

impl SeverityClassifier {
    /// Classifies every record of the result into exactly one bucket
    pub fn classify(result: &FilteredResult) -> SeverityBuckets {
        let mut buckets = SeverityBuckets::new();

        for record in result.iter() {
            let bucket = match record.base_severity() {
                Some("HIGH") => SeverityBucket::High,
                Some("MEDIUM") => SeverityBucket::Medium,
                Some("LOW") => SeverityBucket::Low,
                _ => SeverityBucket::Unspecified,
            };
            buckets.push(bucket, record.clone());
        }

        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cve_tracking::domain::{CveId, SeverityMetrics, VulnerabilityRecord};
    use chrono::NaiveDate;

    fn record(id: &str, base_severity: Option<&str>) -> VulnerabilityRecord {
        let severity = base_severity.map(|label| SeverityMetrics {
            base_score: Some(5.0),
            base_severity: Some(label.to_string()),
            exploitability_score: None,
            impact_score: None,
            attack_vector: None,
            attack_complexity: None,
            privileges_required: None,
            user_interaction: None,
        });
        VulnerabilityRecord::new(
            CveId::new(id.to_string()).unwrap(),
            None,
            NaiveDate::from_ymd_opt(2022, 7, 27).unwrap(),
            "desc".to_string(),
            severity,
        )
    }

    fn filtered(records: Vec<VulnerabilityRecord>) -> FilteredResult {
        let mut result = FilteredResult::new();
        for r in records {
            result.insert(r);
        }
        result
    }

    #[test]
    fn test_classify_recognized_labels() {
        let result = filtered(vec![
            record("CVE-2022-0001", Some("HIGH")),
            record("CVE-2022-0002", Some("MEDIUM")),
            record("CVE-2022-0003", Some("LOW")),
        ]);
        let buckets = SeverityClassifier::classify(&result);
        assert_eq!(buckets.records(SeverityBucket::High).len(), 1);
        assert_eq!(buckets.records(SeverityBucket::Medium).len(), 1);
        assert_eq!(buckets.records(SeverityBucket::Low).len(), 1);
        assert_eq!(buckets.records(SeverityBucket::Unspecified).len(), 0);
    }

    #[test]
    fn test_classify_missing_severity_is_unspecified() {
        let result = filtered(vec![record("CVE-2022-0001", None)]);
        let buckets = SeverityClassifier::classify(&result);
        assert_eq!(buckets.records(SeverityBucket::Unspecified).len(), 1);
    }

    #[test]
    fn test_classify_unrecognized_label_is_unspecified() {
        // CRITICAL exists in CVSS v3.1 but is not a recognized bucket label
        let result = filtered(vec![
            record("CVE-2022-0001", Some("CRITICAL")),
            record("CVE-2022-0002", Some("NONE")),
        ]);
        let buckets = SeverityClassifier::classify(&result);
        assert_eq!(buckets.records(SeverityBucket::Unspecified).len(), 2);
        assert_eq!(buckets.records(SeverityBucket::High).len(), 0);
    }

    #[test]
    fn test_classify_label_match_is_case_sensitive() {
        let result = filtered(vec![record("CVE-2022-0001", Some("high"))]);
        let buckets = SeverityClassifier::classify(&result);
        assert_eq!(buckets.records(SeverityBucket::High).len(), 0);
        assert_eq!(buckets.records(SeverityBucket::Unspecified).len(), 1);
    }

    #[test]
    fn test_classify_partitions_without_overlap_or_omission() {
        let result = filtered(vec![
            record("CVE-2022-0001", Some("HIGH")),
            record("CVE-2022-0002", Some("CRITICAL")),
            record("CVE-2022-0003", None),
            record("CVE-2022-0004", Some("MEDIUM")),
            record("CVE-2022-0005", Some("LOW")),
        ]);
        let buckets = SeverityClassifier::classify(&result);
        assert_eq!(buckets.total(), result.len());

        let mut all_ids: Vec<&str> = SeverityBucket::ALL
            .iter()
            .flat_map(|b| buckets.records(*b).iter().map(|r| r.id().as_str()))
            .collect();
        all_ids.sort_unstable();
        all_ids.dedup();
        assert_eq!(all_ids.len(), result.len());
    }

    #[test]
    fn test_classify_preserves_iteration_order_within_buckets() {
        let result = filtered(vec![
            record("CVE-2022-0005", Some("HIGH")),
            record("CVE-2022-0001", Some("HIGH")),
            record("CVE-2022-0003", Some("HIGH")),
        ]);
        let buckets = SeverityClassifier::classify(&result);
        let ids: Vec<&str> = buckets
            .records(SeverityBucket::High)
            .iter()
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(ids, vec!["CVE-2022-0005", "CVE-2022-0001", "CVE-2022-0003"]);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let result = filtered(vec![
            record("CVE-2022-0001", Some("HIGH")),
            record("CVE-2022-0002", None),
        ]);
        let first = SeverityClassifier::classify(&result);
        let second = SeverityClassifier::classify(&result);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_empty_result() {
        let buckets = SeverityClassifier::classify(&FilteredResult::new());
        assert!(buckets.is_empty());
    }
}

use crate::shared::Result;
use chrono::NaiveDate;

/// Maximum length for CVE identifiers (security limit)
const MAX_CVE_ID_LENGTH: usize = 64;

/// NewType wrapper for a CVE identifier with shape validation
///
/// Accepts the `CVE-YYYY-NNNN` form (four-digit year, four or more digits
/// in the sequence part, per the CVE numbering scheme).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CveId(String);

impl CveId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("CVE id cannot be empty");
        }

        if id.len() > MAX_CVE_ID_LENGTH {
            anyhow::bail!(
                "CVE id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_CVE_ID_LENGTH
            );
        }

        let mut parts = id.splitn(3, '-');
        let prefix = parts.next().unwrap_or("");
        let year = parts.next().unwrap_or("");
        let sequence = parts.next().unwrap_or("");

        let valid = prefix == "CVE"
            && year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && sequence.len() >= 4
            && sequence.chars().all(|c| c.is_ascii_digit());

        if !valid {
            anyhow::bail!(
                "Invalid CVE id: {}. Expected the CVE-YYYY-NNNN form",
                id
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical NVD detail page for this CVE
    pub fn detail_url(&self) -> String {
        format!("https://nvd.nist.gov/vuln/detail/{}", self.0)
    }
}

impl std::fmt::Display for CveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CVSS v3 severity metrics extracted from a feed entry's impact block
///
/// Present only when the source entry carries an `impact.baseMetricV3`
/// block; v2-only entries yield no metrics at all.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityMetrics {
    pub base_score: Option<f64>,
    pub base_severity: Option<String>,
    pub exploitability_score: Option<f64>,
    pub impact_score: Option<f64>,
    pub attack_vector: Option<String>,
    pub attack_complexity: Option<String>,
    pub privileges_required: Option<String>,
    pub user_interaction: Option<String>,
}

/// Canonical vulnerability record, immutable once built
///
/// `published` is optional: the feed occasionally omits it, and nothing
/// downstream depends on it. `last_modified` is mandatory because the
/// retention filter is defined over it.
#[derive(Debug, Clone, PartialEq)]
pub struct VulnerabilityRecord {
    id: CveId,
    published: Option<NaiveDate>,
    last_modified: NaiveDate,
    description: String,
    severity: Option<SeverityMetrics>,
}

impl VulnerabilityRecord {
    pub fn new(
        id: CveId,
        published: Option<NaiveDate>,
        last_modified: NaiveDate,
        description: String,
        severity: Option<SeverityMetrics>,
    ) -> Self {
        Self {
            id,
            published,
            last_modified,
            description,
            severity,
        }
    }

    pub fn id(&self) -> &CveId {
        &self.id
    }

    pub fn published(&self) -> Option<NaiveDate> {
        self.published
    }

    pub fn last_modified(&self) -> NaiveDate {
        self.last_modified
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Option<&SeverityMetrics> {
        self.severity.as_ref()
    }

    /// The `baseSeverity` label, if the record carries v3 metrics at all
    pub fn base_severity(&self) -> Option<&str> {
        self.severity
            .as_ref()
            .and_then(|metrics| metrics.base_severity.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cve_id_new_valid() {
        let id = CveId::new("CVE-2022-35672".to_string()).unwrap();
        assert_eq!(id.as_str(), "CVE-2022-35672");
    }

    #[test]
    fn test_cve_id_new_long_sequence() {
        // Sequence parts longer than four digits are legal
        let id = CveId::new("CVE-2024-123456".to_string()).unwrap();
        assert_eq!(id.as_str(), "CVE-2024-123456");
    }

    #[test]
    fn test_cve_id_new_empty() {
        assert!(CveId::new("".to_string()).is_err());
    }

    #[test]
    fn test_cve_id_new_wrong_prefix() {
        assert!(CveId::new("GHSA-2022-35672".to_string()).is_err());
    }

    #[test]
    fn test_cve_id_new_short_sequence() {
        assert!(CveId::new("CVE-2022-123".to_string()).is_err());
    }

    #[test]
    fn test_cve_id_new_non_numeric_year() {
        assert!(CveId::new("CVE-20XX-35672".to_string()).is_err());
    }

    #[test]
    fn test_cve_id_detail_url() {
        let id = CveId::new("CVE-2022-35672".to_string()).unwrap();
        assert_eq!(
            id.detail_url(),
            "https://nvd.nist.gov/vuln/detail/CVE-2022-35672"
        );
    }

    #[test]
    fn test_record_accessors() {
        let id = CveId::new("CVE-2022-35672".to_string()).unwrap();
        let record = VulnerabilityRecord::new(
            id.clone(),
            Some(date(2022, 7, 27)),
            date(2022, 7, 27),
            "Adobe Acrobat Reader out-of-bounds read".to_string(),
            None,
        );
        assert_eq!(record.id(), &id);
        assert_eq!(record.published(), Some(date(2022, 7, 27)));
        assert_eq!(record.last_modified(), date(2022, 7, 27));
        assert!(record.description().contains("Adobe"));
        assert!(record.severity().is_none());
        assert!(record.base_severity().is_none());
    }

    #[test]
    fn test_record_base_severity_from_metrics() {
        let id = CveId::new("CVE-2022-35672".to_string()).unwrap();
        let metrics = SeverityMetrics {
            base_score: Some(7.8),
            base_severity: Some("HIGH".to_string()),
            exploitability_score: Some(1.8),
            impact_score: Some(5.9),
            attack_vector: Some("LOCAL".to_string()),
            attack_complexity: Some("LOW".to_string()),
            privileges_required: Some("NONE".to_string()),
            user_interaction: Some("REQUIRED".to_string()),
        };
        let record = VulnerabilityRecord::new(
            id,
            None,
            date(2022, 7, 27),
            "desc".to_string(),
            Some(metrics),
        );
        assert_eq!(record.base_severity(), Some("HIGH"));
        assert_eq!(record.severity().unwrap().base_score, Some(7.8));
    }
}

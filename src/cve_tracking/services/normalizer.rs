use crate::cve_tracking::domain::{CveId, SeverityMetrics, VulnerabilityRecord};
use crate::cve_tracking::feed::RawCveItem;
use crate::shared::Result;
use chrono::NaiveDate;

/// Result of normalizing one feed batch
///
/// `skipped` counts entries that were dropped because a mandatory field
/// was missing or unparseable. The batch itself never fails.
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub records: Vec<VulnerabilityRecord>,
    pub skipped: usize,
}

/// RecordNormalizer - converts raw feed entries into canonical records
///
/// Mandatory fields are the CVE id and `lastModifiedDate`; everything
/// else degrades gracefully (missing description becomes an empty
/// string, missing v3 impact block becomes an absent severity).
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Normalizes a whole feed batch, skipping malformed entries
    ///
    /// # Arguments
    /// * `items` - Raw feed entries in input order
    ///
    /// # Returns
    /// The canonical records plus a count of skipped entries
    pub fn normalize_batch(items: &[RawCveItem]) -> NormalizedBatch {
        let mut records = Vec::with_capacity(items.len());
        let mut skipped = 0;

        for item in items {
            match Self::normalize(item) {
                Ok(record) => records.push(record),
                Err(_) => skipped += 1,
            }
        }

        NormalizedBatch { records, skipped }
    }

    /// Normalizes a single raw entry
    ///
    /// # Errors
    /// Returns an error if the CVE id or `lastModifiedDate` is missing
    /// or malformed.
    pub fn normalize(item: &RawCveItem) -> Result<VulnerabilityRecord> {
        let raw_id = item
            .cve
            .as_ref()
            .and_then(|cve| cve.meta.as_ref())
            .and_then(|meta| meta.id.as_deref())
            .ok_or_else(|| anyhow::anyhow!("feed entry has no CVE id"))?;
        let id = CveId::new(raw_id.to_string())?;

        let last_modified = item
            .last_modified_date
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("feed entry {} has no lastModifiedDate", id))
            .and_then(|raw| Self::parse_feed_date(raw))?;

        // publishedDate is optional; a bad value degrades to None
        let published = item
            .published_date
            .as_deref()
            .and_then(|raw| Self::parse_feed_date(raw).ok());

        Ok(VulnerabilityRecord::new(
            id,
            published,
            last_modified,
            Self::select_description(item),
            Self::extract_severity(item),
        ))
    }

    /// Truncates a feed timestamp like `2022-07-27T17:15Z` to a calendar date
    fn parse_feed_date(raw: &str) -> Result<NaiveDate> {
        let day_part = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("invalid feed date {}: {}", raw, e))
    }

    /// Picks the `en`-tagged description variant
    ///
    /// When several variants carry the `en` tag, the last one in input
    /// order wins (iterate-and-overwrite). No `en` variant yields an
    /// empty description, which downstream never vendor-matches.
    fn select_description(item: &RawCveItem) -> String {
        let mut description = String::new();

        let variants = item
            .cve
            .as_ref()
            .and_then(|cve| cve.description.as_ref())
            .map(|d| d.description_data.as_slice())
            .unwrap_or(&[]);

        for variant in variants {
            if variant.lang.as_deref() == Some("en") {
                if let Some(value) = &variant.value {
                    description = value.clone();
                }
            }
        }

        description
    }

    /// Extracts CVSS v3 metrics; v2-only or missing impact blocks yield None
    fn extract_severity(item: &RawCveItem) -> Option<SeverityMetrics> {
        let v3 = item.impact.as_ref()?.base_metric_v3.as_ref()?;
        let cvss = v3.cvss_v3.as_ref();

        Some(SeverityMetrics {
            base_score: cvss.and_then(|c| c.base_score),
            base_severity: cvss.and_then(|c| c.base_severity.clone()),
            exploitability_score: v3.exploitability_score,
            impact_score: v3.impact_score,
            attack_vector: cvss.and_then(|c| c.attack_vector.clone()),
            attack_complexity: cvss.and_then(|c| c.attack_complexity.clone()),
            privileges_required: cvss.and_then(|c| c.privileges_required.clone()),
            user_interaction: cvss.and_then(|c| c.user_interaction.clone()),
        })
    }
}

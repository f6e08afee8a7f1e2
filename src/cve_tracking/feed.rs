//! Serde DTOs for the NVD JSON 1.1 "recent" feed.
//!
//! Every nested field is optional or defaulted so that a structurally
//! damaged entry still deserializes; deciding which fields are mandatory
//! is the normalizer's job, not the parser's.

use serde::Deserialize;

/// Top-level shape of one feed snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeed {
    #[serde(rename = "CVE_data_timestamp")]
    pub timestamp: Option<String>,
    #[serde(rename = "CVE_Items", default)]
    pub items: Vec<RawCveItem>,
}

/// One raw vulnerability entry as it appears in the feed
#[derive(Debug, Clone, Deserialize)]
pub struct RawCveItem {
    pub cve: Option<RawCveDetail>,
    pub impact: Option<RawImpact>,
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
    #[serde(rename = "lastModifiedDate")]
    pub last_modified_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCveDetail {
    #[serde(rename = "CVE_data_meta")]
    pub meta: Option<RawCveMeta>,
    pub description: Option<RawDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCveMeta {
    #[serde(rename = "ID")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDescription {
    #[serde(default)]
    pub description_data: Vec<RawDescriptionItem>,
}

/// One localized description variant
#[derive(Debug, Clone, Deserialize)]
pub struct RawDescriptionItem {
    pub lang: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImpact {
    #[serde(rename = "baseMetricV3")]
    pub base_metric_v3: Option<RawBaseMetricV3>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBaseMetricV3 {
    #[serde(rename = "cvssV3")]
    pub cvss_v3: Option<RawCvssV3>,
    #[serde(rename = "exploitabilityScore")]
    pub exploitability_score: Option<f64>,
    #[serde(rename = "impactScore")]
    pub impact_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCvssV3 {
    #[serde(rename = "baseScore")]
    pub base_score: Option<f64>,
    #[serde(rename = "baseSeverity")]
    pub base_severity: Option<String>,
    #[serde(rename = "attackVector")]
    pub attack_vector: Option<String>,
    #[serde(rename = "attackComplexity")]
    pub attack_complexity: Option<String>,
    #[serde(rename = "privilegesRequired")]
    pub privileges_required: Option<String>,
    #[serde(rename = "userInteraction")]
    pub user_interaction: Option<String>,
}

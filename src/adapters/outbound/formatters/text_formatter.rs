use crate::cve_tracking::domain::{SeverityBucket, VulnerabilityRecord};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextReportFormatter adapter for plain-text report artifacts
///
/// One artifact per severity bucket: a count header, then the NVD detail
/// URL, last-modified date, and description for every record.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// The count header shared by all formats
    pub fn header(count: usize, severity: SeverityBucket, days: u32) -> String {
        format!(
            "{} {} severity vulnerabilities relating to your vendor list over the past {} days:",
            count, severity, days
        )
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(
        &self,
        records: &[VulnerabilityRecord],
        severity: SeverityBucket,
        days: u32,
    ) -> Result<String> {
        let mut output = String::new();
        output.push_str(&Self::header(records.len(), severity, days));
        output.push_str("\n\n");

        for record in records {
            output.push_str(&record.id().detail_url());
            output.push('\n');
            output.push_str(&format!(
                "Last Modified: {}\n",
                record.last_modified().format("%Y-%m-%d")
            ));
            output.push_str(&format!("Description: {}\n\n", record.description()));
        }

        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

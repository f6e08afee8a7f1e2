use crate::cve_tracking::domain::{SeverityBucket, VulnerabilityRecord};
use crate::shared::Result;

/// ReportFormatter port for rendering one severity bucket
///
/// A pure function from (bucket, severity label, retention window) to a
/// self-contained textual artifact. One artifact is produced per bucket,
/// four per run.
pub trait ReportFormatter {
    /// Renders the records of one bucket into report text
    ///
    /// # Arguments
    /// * `records` - The bucket contents, already in reporting order
    /// * `severity` - The bucket's severity label
    /// * `days` - The retention window the run was invoked with
    fn format(
        &self,
        records: &[VulnerabilityRecord],
        severity: SeverityBucket,
        days: u32,
    ) -> Result<String>;

    /// File extension for artifacts produced by this formatter
    fn file_extension(&self) -> &'static str;
}

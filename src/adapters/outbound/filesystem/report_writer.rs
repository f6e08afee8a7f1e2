use crate::cve_tracking::domain::SeverityBucket;
use crate::ports::outbound::ReportSink;
use crate::shared::error::TrackError;
use crate::shared::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// FileReportSink adapter for writing report artifacts to a directory
///
/// The output directory is created on first use. Artifact names embed
/// the run date and the severity label.
pub struct FileReportSink {
    output_dir: PathBuf,
}

impl FileReportSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Conventional artifact name: `<date>-<SEVERITY>-report.<ext>`
    pub fn report_file_name(date: NaiveDate, severity: SeverityBucket, extension: &str) -> String {
        format!(
            "{}-{}-report.{}",
            date.format("%Y-%m-%d"),
            severity.label(),
            extension
        )
    }
}

impl ReportSink for FileReportSink {
    fn persist(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| TrackError::ReportWrite {
            path: self.output_dir.clone(),
            details: e.to_string(),
        })?;

        let path = self.output_dir.join(file_name);
        fs::write(&path, content).map_err(|e| TrackError::ReportWrite {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }
}

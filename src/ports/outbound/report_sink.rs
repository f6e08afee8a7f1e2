use crate::shared::Result;
use std::path::PathBuf;

/// ReportSink port for persisting report artifacts
///
/// This port abstracts where rendered reports end up (a directory on
/// disk, stdout, a test buffer).
pub trait ReportSink {
    /// Persists one named artifact and returns where it landed
    ///
    /// # Arguments
    /// * `file_name` - Artifact name, including extension
    /// * `content` - The rendered report text
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be written
    fn persist(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - reports were generated (possibly with zero matches)
    Success = 0,
    /// Invalid command-line arguments (bad retention window, etc.)
    InvalidArguments = 2,
    /// Application error (feed download, archive, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for CVE tracking.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Failed to download the CVE feed from {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection and try again")]
    FeedDownload { url: String, details: String },

    #[error("Failed to open the CVE feed archive\nDetails: {details}\n\n💡 Hint: The downloaded archive may be truncated or corrupt; re-run to download a fresh copy")]
    FeedArchive { details: String },

    #[error("Failed to parse the CVE feed JSON\nDetails: {details}\n\n💡 Hint: The NVD feed format may have changed; check for a newer release of cve-track")]
    FeedParse { details: String },

    #[error("Vendor list file not found: {path}\n\n💡 Hint: {suggestion}")]
    VendorFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read vendor list file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    VendorFileRead { path: PathBuf, details: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWrite { path: PathBuf, details: String },

    /// Validation error for caller-supplied values (retention window, ids)
    #[error("Validation error: {message}")]
    Validation { message: String },
}

use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::formatters::{HtmlReportFormatter, TextReportFormatter};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::TrackError;
use crate::shared::Result;

/// The upstream feed only covers a rolling 7-day window, so larger
/// values can never surface additional records.
pub const MAX_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy)]
pub enum ReportFormat {
    Text,
    Html,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "html" => Ok(ReportFormat::Html),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'html'",
                s
            )),
        }
    }
}

impl ReportFormat {
    /// Creates a formatter instance for the specified report format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            ReportFormat::Text => Box::new(TextReportFormatter::new()),
            ReportFormat::Html => Box::new(HtmlReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified report format
    pub fn progress_message(&self) -> &'static str {
        match self {
            ReportFormat::Text => "📝 Generating plain-text reports...",
            ReportFormat::Html => "📝 Generating HTML reports...",
        }
    }
}

/// Track recent NVD CVEs for the vendors you care about
#[derive(Parser, Debug)]
#[command(name = "cve-track")]
#[command(version)]
#[command(about = "Track recent NVD CVEs for the vendors you care about", long_about = None)]
pub struct Args {
    /// Path to the vendor list file (one vendor or product name per line)
    #[arg(short, long, default_value = "vendors.txt")]
    pub file: PathBuf,

    /// Retention window in days (the feed only covers the past 7)
    #[arg(short, long, default_value_t = 7)]
    pub days: u32,

    /// Report format: text or html
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// Directory where report artifacts are written
    #[arg(short, long, default_value = "reports")]
    pub output_dir: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validates caller-supplied values before the core is invoked
    pub fn validate(&self) -> Result<()> {
        if self.days > MAX_WINDOW_DAYS {
            return Err(TrackError::Validation {
                message: format!(
                    "retention window of {} days exceeds the {}-day coverage of the NVD recent feed",
                    self.days, MAX_WINDOW_DAYS
                ),
            }
            .into());
        }
        Ok(())
    }
}

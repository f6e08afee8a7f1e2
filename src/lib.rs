//! cve-track - vendor-focused CVE tracking for the NVD recent feed
//!
//! This library downloads one snapshot of the NVD "recent" CVE feed,
//! filters it against a caller-supplied vendor list, buckets the matches
//! by severity, and renders one static report per bucket.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cve_tracking`): the canonical record model, the
//!   raw feed shape, and the pure pipeline transforms
//! - **Application Layer** (`application`): the tracking use case and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use cve_track::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let feed_source = NvdFeedClient::new()?;
//! let vendor_source = FileVendorListSource::new(PathBuf::from("vendors.txt"));
//!
//! let use_case = TrackCvesUseCase::new(feed_source, vendor_source);
//! let response = use_case.execute(TrackRequest::new(7))?;
//!
//! let formatter = TextReportFormatter::new();
//! for bucket in SeverityBucket::ALL {
//!     let report = formatter.format(response.buckets.records(bucket), bucket, 7)?;
//!     println!("{}", report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod cve_tracking;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{FileReportSink, FileVendorListSource};
    pub use crate::adapters::outbound::formatters::{HtmlReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::network::NvdFeedClient;
    pub use crate::application::dto::{TrackRequest, TrackResponse};
    pub use crate::application::use_cases::TrackCvesUseCase;
    pub use crate::cve_tracking::domain::{
        CveId, FilteredResult, SeverityBucket, SeverityBuckets, SeverityMetrics, VendorList,
        VulnerabilityRecord,
    };
    pub use crate::cve_tracking::feed::{RawCveItem, RawFeed};
    pub use crate::cve_tracking::services::{
        RecordNormalizer, RetentionFilter, SeverityClassifier, VendorMatcher,
    };
    pub use crate::ports::outbound::{FeedSource, ReportFormatter, ReportSink, VendorListSource};
    pub use crate::shared::Result;
}

pub mod filtered_result;
pub mod record;
pub mod severity;
pub mod vendor_list;

pub use filtered_result::FilteredResult;
pub use record::{CveId, SeverityMetrics, VulnerabilityRecord};
pub use severity::{SeverityBucket, SeverityBuckets};
pub use vendor_list::VendorList;

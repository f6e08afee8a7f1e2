pub mod classifier;
pub mod normalizer;
pub mod retention;
pub mod vendor_matcher;

pub use classifier::SeverityClassifier;
pub use normalizer::{NormalizedBatch, RecordNormalizer};
pub use retention::RetentionFilter;
pub use vendor_matcher::VendorMatcher;

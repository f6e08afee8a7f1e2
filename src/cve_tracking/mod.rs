/// CVE tracking bounded context
///
/// `domain` holds the canonical record model, `feed` the raw NVD feed
/// shape, and `services` the pure transforms of the pipeline
/// (normalize, retain, match, classify).
pub mod domain;
pub mod feed;
pub mod services;

use crate::cve_tracking::domain::SeverityBuckets;

/// Response DTO for one tracking run
///
/// Carries the classified buckets plus the batch statistics the CLI
/// reports on stderr.
#[derive(Debug, Clone)]
pub struct TrackResponse {
    /// The four severity-bucketed record sequences
    pub buckets: SeverityBuckets,
    /// Entries successfully normalized from the feed batch
    pub normalized: usize,
    /// Entries dropped during normalization (missing mandatory fields)
    pub skipped: usize,
    /// Records that passed retention and vendor matching
    pub matched: usize,
    /// The retention window the run used
    pub days: u32,
}

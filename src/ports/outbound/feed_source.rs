use crate::cve_tracking::feed::RawFeed;
use crate::shared::Result;

/// FeedSource port for obtaining one feed batch
///
/// This port hides retrieval and decompression: implementations may
/// download and unzip the NVD archive, read a local snapshot, or serve
/// a fixture in tests. The core only ever sees the raw batch shape.
pub trait FeedSource {
    /// Fetches one snapshot of recent vulnerability entries
    ///
    /// # Errors
    /// Returns an error if:
    /// - The feed cannot be retrieved
    /// - The archive cannot be opened
    /// - The payload is not valid feed JSON
    fn fetch_recent(&self) -> Result<RawFeed>;
}

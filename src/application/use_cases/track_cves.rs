use crate::application::dto::{TrackRequest, TrackResponse};
use crate::cve_tracking::domain::{SeverityBuckets, VendorList};
use crate::cve_tracking::feed::RawCveItem;
use crate::cve_tracking::services::{
    RecordNormalizer, RetentionFilter, SeverityClassifier, VendorMatcher,
};
use crate::ports::outbound::{FeedSource, VendorListSource};
use crate::shared::Result;
use chrono::NaiveDate;

/// TrackCvesUseCase - the filtering-and-classification pipeline
///
/// Orchestrates one run: fetch the feed batch, read the vendor terms,
/// then normalize, retain, vendor-match and classify. The transforms
/// themselves are pure; only the two injected ports do I/O.
///
/// # Type Parameters
/// * `F` - FeedSource implementation
/// * `V` - VendorListSource implementation
pub struct TrackCvesUseCase<F: FeedSource, V: VendorListSource> {
    feed_source: F,
    vendor_source: V,
}

impl<F: FeedSource, V: VendorListSource> TrackCvesUseCase<F, V> {
    /// Creates a new use case with injected dependencies
    pub fn new(feed_source: F, vendor_source: V) -> Self {
        Self {
            feed_source,
            vendor_source,
        }
    }

    /// Executes one tracking run
    ///
    /// # Returns
    /// The severity buckets plus batch statistics
    ///
    /// # Errors
    /// Returns an error if the feed or the vendor list cannot be obtained;
    /// malformed individual entries are skipped, never fatal.
    pub fn execute(&self, request: TrackRequest) -> Result<TrackResponse> {
        // Vendor list first: a missing file should fail before the download
        let vendors = self.vendor_source.read_vendors()?;
        let feed = self.feed_source.fetch_recent()?;

        let (buckets, normalized, skipped, matched) = Self::run_pipeline(
            &feed.items,
            &vendors,
            request.days,
            request.reference_date,
        );

        Ok(TrackResponse {
            buckets,
            normalized,
            skipped,
            matched,
            days: request.days,
        })
    }

    /// The pure core entry point: raw batch in, severity buckets out
    ///
    /// Exposed separately from `execute` so callers (and tests) can run
    /// the pipeline without any I/O collaborators.
    ///
    /// # Returns
    /// `(buckets, normalized_count, skipped_count, matched_count)`
    pub fn run_pipeline(
        items: &[RawCveItem],
        vendors: &VendorList,
        days: u32,
        reference_date: NaiveDate,
    ) -> (SeverityBuckets, usize, usize, usize) {
        let batch = RecordNormalizer::normalize_batch(items);
        let normalized = batch.records.len();
        let skipped = batch.skipped;

        let retained = RetentionFilter::retain(batch.records, days, reference_date);
        let filtered = VendorMatcher::filter(retained, vendors);
        let matched = filtered.len();

        let buckets = SeverityClassifier::classify(&filtered);

        (buckets, normalized, skipped, matched)
    }
}

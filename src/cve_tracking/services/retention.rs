use crate::cve_tracking::domain::VulnerabilityRecord;
use chrono::{Days, NaiveDate};

/// RetentionFilter - keeps records inside a trailing calendar-day window
///
/// A record survives when `last_modified >= reference_date - days`,
/// boundary day inclusive. The reference date is passed in explicitly so
/// the filter stays a pure function; callers pass today's date.
///
/// The upstream feed only covers a rolling 7-day window, so any larger
/// `days` value is accepted but cannot surface additional records.
pub struct RetentionFilter;

impl RetentionFilter {
    /// Filters a record sequence down to the retention window
    ///
    /// # Arguments
    /// * `records` - Normalized records in input order
    /// * `days` - Trailing window size; 0 keeps only records modified on
    ///   the reference date
    /// * `reference_date` - The "today" the window trails from
    pub fn retain(
        records: Vec<VulnerabilityRecord>,
        days: u32,
        reference_date: NaiveDate,
    ) -> Vec<VulnerabilityRecord> {
        let cutoff = reference_date
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);

        records
            .into_iter()
            .filter(|record| record.last_modified() >= cutoff)
            .collect()
    }
}

use crate::cve_tracking::domain::VendorList;
use crate::shared::Result;

/// VendorListSource port for obtaining the vendor terms
///
/// Implementations read the backing resource (typically a one-term-per-
/// line text file); absence of that resource is the implementation's
/// failure to report, not the core's.
pub trait VendorListSource {
    /// Reads the configured vendor terms in order
    ///
    /// # Errors
    /// Returns an error if the backing resource is missing or unreadable
    fn read_vendors(&self) -> Result<VendorList>;
}

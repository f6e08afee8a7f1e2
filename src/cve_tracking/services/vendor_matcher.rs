use crate::cve_tracking::domain::{FilteredResult, VendorList, VulnerabilityRecord};

/// VendorMatcher - selects records whose description mentions a vendor
///
/// Matching is a case-insensitive, unanchored substring test with OR
/// semantics across terms. The unanchored match is deliberate:
/// "Apple" also matches "Applesoft". Records with an empty
/// description never match, and a
/// record matching several terms appears in the result exactly once.
pub struct VendorMatcher;

impl VendorMatcher {
    /// Filters records down to those mentioning at least one vendor term
    ///
    /// # Arguments
    /// * `records` - Retained records in input order
    /// * `vendors` - Vendor terms to match against descriptions
    ///
    /// # Returns
    /// A FilteredResult with at most one entry per record id, in input order
    pub fn filter(records: Vec<VulnerabilityRecord>, vendors: &VendorList) -> FilteredResult {
        let lowered_terms: Vec<String> = vendors
            .terms()
            .iter()
            .map(|term| term.to_lowercase())
            .collect();

        let mut result = FilteredResult::new();

        for record in records {
            if record.description().is_empty() {
                continue;
            }
            let description = record.description().to_lowercase();
            if lowered_terms.iter().any(|term| description.contains(term)) {
                result.insert(record);
            }
        }

        result
    }
}

use cve_track::prelude::*;

/// Mock VendorListSource serving a fixed term list
pub struct MockVendorListSource {
    terms: Vec<String>,
}

impl MockVendorListSource {
    pub fn new(terms: &[&str]) -> Self {
        Self {
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl VendorListSource for MockVendorListSource {
    fn read_vendors(&self) -> Result<VendorList> {
        Ok(VendorList::new(self.terms.clone()))
    }
}

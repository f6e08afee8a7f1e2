use crate::cve_tracking::domain::VendorList;
use crate::ports::outbound::VendorListSource;
use crate::shared::error::TrackError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// FileVendorListSource adapter for reading vendor terms from a file
///
/// One vendor or product name per line; blank lines are dropped by the
/// VendorList constructor.
pub struct FileVendorListSource {
    path: PathBuf,
}

impl FileVendorListSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl VendorListSource for FileVendorListSource {
    fn read_vendors(&self) -> Result<VendorList> {
        if !self.path.exists() {
            return Err(TrackError::VendorFileNotFound {
                path: self.path.clone(),
                suggestion: "Create a text file with one vendor or product name per line, \
                             or pass its location with --file"
                    .to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| TrackError::VendorFileRead {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        Ok(VendorList::new(content.lines().map(String::from).collect()))
    }
}

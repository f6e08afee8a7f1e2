use cve_track::prelude::*;

/// Mock FeedSource serving a fixed JSON snapshot
pub struct MockFeedSource {
    json: String,
}

impl MockFeedSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    pub fn empty() -> Self {
        Self::new(r#"{"CVE_Items": []}"#)
    }
}

impl FeedSource for MockFeedSource {
    fn fetch_recent(&self) -> Result<RawFeed> {
        Ok(serde_json::from_str(&self.json)?)
    }
}

use crate::cve_tracking::feed::RawFeed;
use crate::ports::outbound::FeedSource;
use crate::shared::error::TrackError;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::io::{Cursor, Read};
use std::time::Duration;

/// NVD feed client for fetching the recent CVE snapshot
///
/// Downloads the zipped JSON 1.1 "recent" feed, decompresses it in
/// memory, and parses the batch. Fail fast: no retries, a 60 second
/// timeout, and a versioned user agent.
pub struct NvdFeedClient {
    client: Client,
    feed_url: String,
}

impl NvdFeedClient {
    const FEED_URL: &'static str =
        "https://nvd.nist.gov/feeds/json/cve/1.1/nvdcve-1.1-recent.json.zip";
    const ARCHIVE_MEMBER: &'static str = "nvdcve-1.1-recent.json";
    const TIMEOUT_SECONDS: u64 = 60;

    /// Creates a new feed client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cve-track/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            feed_url: Self::FEED_URL.to_string(),
        })
    }

    /// Downloads the feed archive bytes
    fn download(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.feed_url).send().map_err(|e| {
            TrackError::FeedDownload {
                url: self.feed_url.clone(),
                details: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            return Err(TrackError::FeedDownload {
                url: self.feed_url.clone(),
                details: format!("server returned status code {}", response.status()),
            }
            .into());
        }

        let bytes = response.bytes().map_err(|e| TrackError::FeedDownload {
            url: self.feed_url.clone(),
            details: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }

    /// Extracts the feed JSON from the downloaded zip archive
    ///
    /// Looks for the canonical member name first and falls back to the
    /// first entry, so a renamed member does not break the run.
    fn extract_feed_json(archive_bytes: &[u8]) -> Result<String> {
        let reader = Cursor::new(archive_bytes);
        let mut archive =
            zip::ZipArchive::new(reader).map_err(|e| TrackError::FeedArchive {
                details: e.to_string(),
            })?;

        if archive.is_empty() {
            return Err(TrackError::FeedArchive {
                details: "archive contains no entries".to_string(),
            }
            .into());
        }

        let index = archive.index_for_name(Self::ARCHIVE_MEMBER).unwrap_or(0);
        let mut entry = archive.by_index(index).map_err(|e| TrackError::FeedArchive {
            details: e.to_string(),
        })?;

        let mut json = String::new();
        entry
            .read_to_string(&mut json)
            .map_err(|e| TrackError::FeedArchive {
                details: e.to_string(),
            })?;

        Ok(json)
    }
}

impl FeedSource for NvdFeedClient {
    fn fetch_recent(&self) -> Result<RawFeed> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .expect("Failed to set progress bar template"),
        );
        spinner.set_message("Downloading the recent NVD CVE feed...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = self.download();
        spinner.finish_and_clear();
        let archive_bytes = result?;

        let json = Self::extract_feed_json(&archive_bytes)?;

        let feed: RawFeed = serde_json::from_str(&json).map_err(|e| TrackError::FeedParse {
            details: e.to_string(),
        })?;

        Ok(feed)
    }
}

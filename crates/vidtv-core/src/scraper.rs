//! Main scraper API
//!
//! Combines the HTTP client with the listing and detail parsers. The
//! infallible methods collapse every failure into an empty list or `None`;
//! the `try_` variants keep the error for callers that want it.

use std::time::Duration;

use tracing::{debug, warn};

use crate::client::{ClientConfig, VidtvClient};
use crate::error::{Result, ScrapeError};
use crate::parser::{find_media_endpoints, parse_video_detail, parse_video_list};
use crate::types::{VideoDetail, VideoSummary};
use crate::url::{build_detail_url, build_listing_url, video_key_for};

/// Scraper for listing and detail pages
pub struct VideoScraper {
    client: VidtvClient,
    config: ClientConfig,
}

impl VideoScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new scraper with custom configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = VidtvClient::with_config(&config)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a scraper sharing an existing HTTP client
    pub fn with_client(client: VidtvClient, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Fetch one listing page
    ///
    /// # Returns
    /// Video summaries in page order. Empty on any failure, so an exhausted
    /// page and a network error look the same.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> vidtv_core::Result<()> {
    /// use vidtv_core::VideoScraper;
    /// let scraper = VideoScraper::new()?;
    /// for video in scraper.get_videos(1).await {
    ///     println!("{} [{}] {}", video.id, video.duration, video.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_videos(&self, page: u32) -> Vec<VideoSummary> {
        match self.try_get_videos(page).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!(page, error = %e, "listing fetch failed");
                Vec::new()
            }
        }
    }

    /// Fetch one listing page, keeping the error
    ///
    /// # Errors
    /// - `HttpError` if the network request fails or times out
    /// - `Status` for non-2xx responses
    /// - `ParseError` if a built-in selector fails to compile
    pub async fn try_get_videos(&self, page: u32) -> Result<Vec<VideoSummary>> {
        let url = build_listing_url(&self.config.site_url, page);
        let html = self.client.fetch(&url).await?;
        parse_video_list(&html)
    }

    /// Fetch and parse a detail page
    ///
    /// # Returns
    /// `None` when the fetch fails or the page lacks a title or playable source
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> vidtv_core::Result<()> {
    /// use vidtv_core::VideoScraper;
    /// let scraper = VideoScraper::new()?;
    /// if let Some(detail) = scraper.get_video_detail("ph5f1a2b3c4d5e").await {
    ///     println!("{}: {}", detail.title, detail.video_url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_video_detail(&self, video_id: &str) -> Option<VideoDetail> {
        match self.try_get_video_detail(video_id).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(video_id, error = %e, "detail fetch failed");
                None
            }
        }
    }

    /// Fetch and parse a detail page, keeping transport errors
    ///
    /// Accepts a bare video key or a detail page URL carrying `viewkey`.
    /// `Ok(None)` means the page was fetched but could not be parsed.
    ///
    /// # Errors
    /// - `InvalidId` if `video_id` is blank or a URL without a `viewkey`
    /// - `HttpError` / `Status` for transport failures
    pub async fn try_get_video_detail(&self, video_id: &str) -> Result<Option<VideoDetail>> {
        let Some(key) = video_key_for(video_id) else {
            return Err(ScrapeError::InvalidId(if video_id.trim().is_empty() {
                "Video ID cannot be empty".to_string()
            } else {
                format!("No viewkey in {}", video_id.trim())
            }));
        };
        let video_id = key.as_str();

        let url = build_detail_url(&self.config.site_url, video_id);
        let html = self.client.fetch(&url).await?;

        if self.config.probe_media_endpoints {
            let endpoints = find_media_endpoints(&html, &self.config.endpoint_keyword);
            debug!(video_id, ?endpoints, "media endpoint scan");
        }

        Ok(parse_video_detail(video_id, &html))
    }

    /// Fetch any page and scan it for media endpoint candidates
    ///
    /// Uses the shorter probe timeout. Failures yield an empty list.
    pub async fn find_media_endpoints(&self, page_url: &str) -> Vec<String> {
        let timeout = Duration::from_secs(self.config.probe_timeout_secs);
        match self.client.fetch_with_timeout(page_url, timeout).await {
            Ok(html) => find_media_endpoints(&html, &self.config.endpoint_keyword),
            Err(e) => {
                warn!(page_url, error = %e, "endpoint scan fetch failed");
                Vec::new()
            }
        }
    }

    /// Configuration this scraper was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

//! Video repository
//!
//! Single data-access entry point for the player UI. Listing and detail
//! calls go to the scraper; the backend path goes to the extraction client.
//! Nothing is cached: every call is a fresh round trip.

use crate::api::ExtractionClient;
use crate::client::{ClientConfig, VidtvClient};
use crate::error::{Result, ScrapeError};
use crate::scraper::VideoScraper;
use crate::types::{VideoDetail, VideoInfo, VideoSummary};
use crate::url::page_url_for;

/// Composes the scraper and the extraction backend behind one interface
pub struct VideoRepository {
    scraper: VideoScraper,
    api: ExtractionClient,
    site_url: String,
}

impl VideoRepository {
    /// Create a repository with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a repository; both sources share one HTTP client
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = VidtvClient::with_config(&config)?;
        let api = ExtractionClient::new(client.clone(), &config);
        let site_url = config.site_url.clone();
        let scraper = VideoScraper::with_client(client, config);

        Ok(Self {
            scraper,
            api,
            site_url,
        })
    }

    /// Video summaries for a listing page, empty on any failure
    pub async fn get_videos(&self, page: u32) -> Vec<VideoSummary> {
        self.scraper.get_videos(page).await
    }

    /// Scraped detail for a video key, `None` on any failure
    pub async fn get_video_detail(&self, video_id: &str) -> Option<VideoDetail> {
        self.scraper.get_video_detail(video_id).await
    }

    /// Backend video info for a video key or page URL
    ///
    /// A bare key is expanded to its detail page URL before posting; an
    /// absolute URL is sent as-is.
    ///
    /// # Errors
    /// - `InvalidId` if `id_or_url` is empty or whitespace only; nothing is sent
    /// - every [`ExtractionClient::get_video_info`] error, passed through so
    ///   callers can read [`ScrapeError::user_message`]
    pub async fn get_video_info_from_api(&self, id_or_url: &str) -> Result<VideoInfo> {
        let id_or_url = id_or_url.trim();
        if id_or_url.is_empty() {
            return Err(ScrapeError::InvalidId(
                "Video ID cannot be empty".to_string(),
            ));
        }

        let page_url = page_url_for(&self.site_url, id_or_url);
        self.api.get_video_info(&page_url).await
    }

    /// Backend path mapped straight to a playable detail
    ///
    /// `Ok(None)` when the backend answered but listed no formats.
    pub async fn get_video_detail_from_api(&self, id_or_url: &str) -> Result<Option<VideoDetail>> {
        let info = self.get_video_info_from_api(id_or_url).await?;
        Ok(info.to_video_detail())
    }

    /// Underlying scraper, for the endpoint scan
    pub fn scraper(&self) -> &VideoScraper {
        &self.scraper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_creation() {
        assert!(VideoRepository::new().is_ok());
    }

    #[test]
    fn test_repository_shares_config() {
        let config = ClientConfig::with_base_urls("http://site.local/", "http://backend.local");
        let repo = VideoRepository::with_config(config).unwrap();
        assert_eq!(repo.site_url, "http://site.local");
        assert_eq!(repo.scraper().config().backend_url, "http://backend.local");
    }
}

//! Extraction backend client
//!
//! Posts a page URL to `/api/video-info` and decodes the format-list
//! envelope. Unlike the scraper, failures here stay distinguishable:
//! connectivity, non-2xx status, empty body and undecodable body each map to
//! their own [`ScrapeError`] variant.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::client::{ClientConfig, VidtvClient};
use crate::error::{Result, ScrapeError};
use crate::types::VideoInfo;
use crate::url::{build_video_info_url, is_absolute_http};

/// Request body of `POST /api/video-info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoUrlRequest {
    pub url: String,
}

/// Client for the extraction backend
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    client: VidtvClient,
    endpoint: String,
    timeout: Duration,
}

impl ExtractionClient {
    /// Create a backend client sharing an existing HTTP client
    pub fn new(client: VidtvClient, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint: build_video_info_url(&config.backend_url),
            timeout: Duration::from_secs(config.api_timeout_secs),
        }
    }

    /// Create a backend client with its own HTTP client
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let client = VidtvClient::with_config(config)?;
        Ok(Self::new(client, config))
    }

    /// Asks the backend to extract formats for a page URL
    ///
    /// # Arguments
    /// * `page_url` - Absolute URL of the video page
    ///
    /// # Returns
    /// The decoded envelope. It may still carry an `error` and no formats;
    /// use [`VideoInfo::to_video_detail`] to get something playable.
    ///
    /// # Errors
    /// - `InvalidUrl` if `page_url` is not an absolute http(s) URL
    /// - `HttpError` for connectivity failures and timeouts
    /// - `Status` for non-2xx responses, carrying the code
    /// - `EmptyBody` when a 2xx response has no body
    /// - `DecodeError` when the body is not a valid envelope
    pub async fn get_video_info(&self, page_url: &str) -> Result<VideoInfo> {
        let page_url = page_url.trim();
        if !is_absolute_http(page_url) {
            return Err(ScrapeError::InvalidUrl(page_url.to_string()));
        }

        let request = VideoUrlRequest {
            url: page_url.to_string(),
        };
        let body = self
            .client
            .post_json(&self.endpoint, request, self.timeout)
            .await?;

        let info = decode_video_info(&body)?;
        if let Some(error) = &info.error {
            warn!(page_url, %error, "backend reported an extraction error");
        }
        debug!(
            page_url,
            formats = info.formats.as_ref().map_or(0, Vec::len),
            "backend returned video info"
        );

        Ok(info)
    }

    /// Backend endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decodes a backend response body
pub fn decode_video_info(body: &str) -> Result<VideoInfo> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(ScrapeError::EmptyBody);
    }
    Ok(serde_json::from_str(trimmed)?)
}

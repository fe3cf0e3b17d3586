//! HTTP client and configuration
//!
//! Wraps a single `reqwest::Client` carrying the fixed desktop user agent.
//! Every round trip runs on a detached tokio task: dropping the caller's
//! future does not abort a request that is already in flight.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ScrapeError};

const DEFAULT_SITE_URL: &str = "https://www.pornhub.com";
const DEFAULT_BACKEND_URL: &str = "http://192.168.1.199:8080";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const DEFAULT_ENDPOINT_KEYWORD: &str = "get_media";

/// Configuration for the scraper and the extraction backend client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the video site (default: the live site)
    pub site_url: String,
    /// Base URL of the extraction backend (default: a LAN address)
    pub backend_url: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Timeout for listing and detail pages in seconds (default: 30)
    pub timeout_secs: u64,
    /// Timeout for backend calls in seconds (default: 100)
    pub api_timeout_secs: u64,
    /// Timeout for the endpoint scan fetch in seconds (default: 10)
    pub probe_timeout_secs: u64,
    /// Run the media endpoint scan on every detail page (default: false)
    pub probe_media_endpoints: bool,
    /// Keyword the endpoint scan looks for (default: "get_media")
    pub endpoint_keyword: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 30,
            api_timeout_secs: 100,
            probe_timeout_secs: 10,
            probe_media_endpoints: false,
            endpoint_keyword: DEFAULT_ENDPOINT_KEYWORD.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `VIDTV_*` environment variables
    ///
    /// Unparsable numeric values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("VIDTV_SITE_URL").filter(|v| !v.trim().is_empty()) {
            config.site_url = url.trim().to_string();
        }
        if let Some(url) = lookup("VIDTV_BACKEND_URL").filter(|v| !v.trim().is_empty()) {
            config.backend_url = url.trim().to_string();
        }
        if let Some(ua) = lookup("VIDTV_USER_AGENT").filter(|v| !v.trim().is_empty()) {
            config.user_agent = ua;
        }
        if let Some(secs) = lookup("VIDTV_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config.timeout_secs = secs;
        }
        if let Some(secs) = lookup("VIDTV_API_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config.api_timeout_secs = secs;
        }
        if let Some(flag) = lookup("VIDTV_PROBE_ENDPOINTS") {
            config.probe_media_endpoints =
                matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        config.normalized()
    }

    /// Default config with the given site and backend base URLs
    pub fn with_base_urls(site_url: impl Into<String>, backend_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            backend_url: backend_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        self.site_url = self.site_url.trim_end_matches('/').to_string();
        self.backend_url = self.backend_url.trim_end_matches('/').to_string();
        self
    }
}

/// Shared HTTP client for site pages and backend calls
#[derive(Debug, Clone)]
pub struct VidtvClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl VidtvClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
                );
                headers
            })
            .build()
            .map_err(ScrapeError::HttpError)?;

        Ok(Self {
            http,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Fetch a page body with the default timeout
    ///
    /// # Errors
    /// - `HttpError` - Network errors or timeout
    /// - `Status` - Any non-2xx response
    pub async fn fetch(&self, url: &str) -> Result<String> {
        self.fetch_with_timeout(url, self.timeout).await
    }

    /// Fetch a page body with an explicit timeout
    pub async fn fetch_with_timeout(&self, url: &str, timeout: Duration) -> Result<String> {
        let http = self.http.clone();
        let url = url.to_string();

        detached(async move {
            debug!(%url, "GET");
            let response = http.get(&url).timeout(timeout).send().await?;
            let status = response.status();
            debug!(%url, status = status.as_u16(), "GET finished");

            if !status.is_success() {
                return Err(ScrapeError::Status {
                    code: status.as_u16(),
                    url,
                });
            }

            Ok(response.text().await?)
        })
        .await
    }

    /// POST a JSON body and return the raw response body
    ///
    /// # Errors
    /// - `HttpError` - Network errors or timeout
    /// - `Status` - Any non-2xx response
    pub async fn post_json<B>(&self, url: &str, body: B, timeout: Duration) -> Result<String>
    where
        B: Serialize + Send + 'static,
    {
        let http = self.http.clone();
        let url = url.to_string();

        detached(async move {
            debug!(%url, "POST");
            let response = http.post(&url).timeout(timeout).json(&body).send().await?;
            let status = response.status();
            debug!(%url, status = status.as_u16(), "POST finished");

            if !status.is_success() {
                return Err(ScrapeError::Status {
                    code: status.as_u16(),
                    url,
                });
            }

            Ok(response.text().await?)
        })
        .await
    }

    /// Default page timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Runs a round trip on its own task so caller cancellation does not abort it
async fn detached<F, T>(task: F) -> Result<T>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| ScrapeError::TaskFailed(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.api_timeout_secs, 100);
        assert_eq!(config.probe_timeout_secs, 10);
        assert!(!config.probe_media_endpoints);
        assert_eq!(config.endpoint_keyword, "get_media");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_config_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VIDTV_SITE_URL", "http://127.0.0.1:9000/"),
            ("VIDTV_BACKEND_URL", "http://127.0.0.1:9001"),
            ("VIDTV_TIMEOUT_SECS", "5"),
            ("VIDTV_API_TIMEOUT_SECS", "not-a-number"),
            ("VIDTV_PROBE_ENDPOINTS", "true"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.site_url, "http://127.0.0.1:9000");
        assert_eq!(config.backend_url, "http://127.0.0.1:9001");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.api_timeout_secs, 100);
        assert!(config.probe_media_endpoints);
    }

    #[test]
    fn test_config_from_empty_lookup_is_default() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_with_base_urls_trims_slash() {
        let config = ClientConfig::with_base_urls("http://a/", "http://b//");
        assert_eq!(config.site_url, "http://a");
        assert_eq!(config.backend_url, "http://b");
    }

    #[test]
    fn test_client_creation() {
        let client = VidtvClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout(), Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_detached_task_survives_dropped_caller() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let completed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&completed);

        let caller = detached(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });
        let timed_out = tokio::time::timeout(Duration::from_millis(10), caller).await;
        assert!(timed_out.is_err());
        assert!(!completed.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_connectivity() {
        let client = VidtvClient::new().unwrap();
        let err = client
            .fetch_with_timeout("http://127.0.0.1:9/", Duration::from_secs(2))
            .await
            .unwrap_err();
        assert!(err.is_connectivity(), "unexpected error: {err:?}");
    }
}

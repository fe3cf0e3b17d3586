//! Error types for the vidtv scraper
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all scraping and extraction operations
///
/// Implements Display for diagnostic messages, [`ScrapeError::user_message`]
/// for the text shown to viewers, and Serialize for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {code} for {url}")]
    Status { code: u16, url: String },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid video ID provided
    #[error("Invalid video ID: {0}")]
    InvalidId(String),

    /// Backend answered successfully but without a body
    #[error("Response body is empty")]
    EmptyBody,

    /// Backend body was not a valid video-info envelope
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Background fetch task panicked or was cancelled by the runtime
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl ScrapeError {
    /// True when the request never got a response (connect error or timeout)
    pub fn is_connectivity(&self) -> bool {
        match self {
            ScrapeError::HttpError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Message suitable for showing to the viewer
    pub fn user_message(&self) -> String {
        match self {
            _ if self.is_connectivity() => {
                "Network connection error, please try again later".to_string()
            }
            ScrapeError::Status { code, .. } => {
                format!("Failed to fetch video info (error code: {})", code)
            }
            ScrapeError::EmptyBody => "Could not retrieve video data".to_string(),
            _ => "An unknown error occurred while fetching video info".to_string(),
        }
    }
}

impl Serialize for ScrapeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for vidtv operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

//! vidtv Core Library
//!
//! Provides the data layer of the vidtv player: listing and detail scraping
//! plus a client for the external extraction backend.
//!
//! # Overview
//!
//! - HTML parsers turning listing and detail pages into [`VideoSummary`] and
//!   [`VideoDetail`] values through ordered selector fallback chains
//! - An extraction backend client returning format lists ([`VideoInfo`])
//! - A [`VideoRepository`] composing both for UI consumers
//!
//! # Example
//!
//! ```no_run
//! use vidtv_core::{ClientConfig, Result, VideoRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let repo = VideoRepository::with_config(ClientConfig::from_env())?;
//!
//!     let videos = repo.get_videos(1).await;
//!     for video in &videos {
//!         println!("{}: {} ({} views)", video.id, video.title, video.view_count);
//!     }
//!
//!     if let Some(video) = videos.first() {
//!         match repo.get_video_detail(&video.id).await {
//!             Some(detail) => println!("Play: {}", detail.video_url),
//!             None => println!("No playable source"),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure model
//!
//! Scraping failures never surface: a failed listing is an empty `Vec` and a
//! failed detail is `None`. Only the backend path returns a [`ScrapeError`],
//! whose [`ScrapeError::user_message`] is fit for display.
//!
//! Media URLs are time-limited. Do not cache them.

mod api;
mod client;
mod error;
pub mod parser;
mod repository;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use api::{ExtractionClient, VideoUrlRequest, decode_video_info};
pub use client::{ClientConfig, VidtvClient};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export parser functions
pub use parser::{find_media_endpoints, parse_video_detail, parse_video_list};

// Re-export main API
pub use crate::scraper::VideoScraper;
pub use repository::VideoRepository;

// Re-export data types
pub use types::{RemoteFormat, UNKNOWN, VideoDetail, VideoInfo, VideoQuality, VideoSummary};

// Re-export URL helper functions for convenience
pub use url::{build_detail_url, build_listing_url, build_video_info_url};

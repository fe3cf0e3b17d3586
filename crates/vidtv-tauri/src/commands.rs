//! Tauri commands for the vidtv repository
//!
//! Every failure reaches the frontend as the same generic message; the
//! detailed error is only logged.

use tauri::State;
use tracing::warn;
use vidtv_core::{VideoDetail, VideoSummary};

use crate::VideoState;

/// Message shown for any failed detail load
pub const LOAD_FAILED: &str = "Unable to load video details";

/// List one page of videos
///
/// # Arguments
/// * `state` - Managed VideoState from Tauri
/// * `page` - 1-based page number, defaults to 1
///
/// # Returns
/// Video summaries, an empty array when the page could not be loaded
#[tauri::command]
pub async fn list_videos(
    state: State<'_, VideoState>,
    page: Option<u32>,
) -> Result<Vec<VideoSummary>, String> {
    Ok(state.repository.get_videos(page.unwrap_or(1)).await)
}

/// Scrape the detail page of a video
///
/// # Errors
/// Returns [`LOAD_FAILED`] if no playable detail could be scraped
#[tauri::command]
pub async fn get_video_detail(
    state: State<'_, VideoState>,
    video_id: String,
) -> Result<VideoDetail, String> {
    state
        .repository
        .get_video_detail(&video_id)
        .await
        .ok_or_else(|| LOAD_FAILED.to_string())
}

/// Resolve a video through the extraction backend
///
/// # Errors
/// Returns [`LOAD_FAILED`] on any backend failure or when no formats came back
#[tauri::command]
pub async fn get_video_info(
    state: State<'_, VideoState>,
    video_id: String,
) -> Result<VideoDetail, String> {
    match state.repository.get_video_detail_from_api(&video_id).await {
        Ok(Some(detail)) => Ok(detail),
        Ok(None) => {
            warn!(%video_id, "backend returned no formats");
            Err(LOAD_FAILED.to_string())
        }
        Err(e) => {
            warn!(%video_id, error = %e, reason = %e.user_message(), "backend request failed");
            Err(LOAD_FAILED.to_string())
        }
    }
}

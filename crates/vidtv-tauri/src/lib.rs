//! vidtv Tauri Integration
//!
//! Provides a Tauri plugin exposing the vidtv video repository to the
//! player frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(vidtv_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const videos = await invoke('plugin:vidtv|list_videos', { page: 2 });
//! const detail = await invoke('plugin:vidtv|get_video_detail', { videoId: videos[0].id });
//! const viaBackend = await invoke('plugin:vidtv|get_video_info', { videoId: videos[0].id });
//! ```

use std::sync::Arc;

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};
use vidtv_core::{ClientConfig, VideoRepository};

mod commands;

pub use commands::LOAD_FAILED;

/// Shared repository handle
///
/// The repository holds no mutable state, so commands share it through an
/// `Arc` without locking and may run concurrently.
pub struct VideoState {
    pub(crate) repository: Arc<VideoRepository>,
}

impl VideoState {
    /// Create a new VideoState configured from `VIDTV_*` environment variables
    ///
    /// # Errors
    /// Returns error string if HTTP client initialization fails
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new VideoState with explicit configuration
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let repository = VideoRepository::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            repository: Arc::new(repository),
        })
    }
}

/// Initialize the vidtv plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("vidtv")
        .invoke_handler(tauri::generate_handler![
            commands::list_videos,
            commands::get_video_detail,
            commands::get_video_info
        ])
        .setup(|app, _api| {
            let state = VideoState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use vidtv_core::{VideoDetail, VideoQuality, VideoSummary as Video};

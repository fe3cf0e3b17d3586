//! Core data types for the vidtv scraper
//!
//! Contains the listing/detail models handed to the player UI and the
//! envelope returned by the extraction backend.

use serde::{Deserialize, Serialize};

/// Placeholder used wherever a label or title could not be resolved
pub const UNKNOWN: &str = "Unknown";

/// One video card from a listing page
///
/// Display fields are kept as the strings the site renders; nothing is
/// converted to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    /// Site-assigned opaque key (the `viewkey`)
    pub id: String,

    /// Video title
    pub title: String,

    /// Thumbnail image URL
    pub thumbnail_url: String,

    /// Duration as displayed (e.g., "12:34")
    pub duration: String,

    /// View count with everything except digits and periods removed (e.g., "1.2")
    pub view_count: String,

    /// Rating as displayed, currently always a placeholder
    pub rating: String,
}

/// One playable encoding variant of a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoQuality {
    /// Human label (e.g., "480P_2000K" or a backend format id)
    pub label: String,

    /// Direct, usually time-limited media URL
    pub url: String,

    /// Backend format identifier, when the quality came from the backend
    pub format_id: Option<String>,

    /// Delivery protocol reported by the backend (e.g., "https", "m3u8_native")
    pub protocol: Option<String>,
}

impl VideoQuality {
    /// Creates a quality entry discovered from page markup
    pub fn scraped(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            format_id: None,
            protocol: None,
        }
    }
}

/// Playable detail for one video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub id: String,
    pub title: String,

    /// Primary playable URL
    pub video_url: String,

    /// Variants in discovery order, not sorted by bitrate
    pub qualities: Vec<VideoQuality>,
}

impl VideoDetail {
    /// Returns the quality following `current`, wrapping around
    ///
    /// With no current selection (or one not in the list) the first quality
    /// is returned.
    pub fn quality_after(&self, current: Option<&VideoQuality>) -> Option<&VideoQuality> {
        if self.qualities.is_empty() {
            return None;
        }
        let next = current
            .and_then(|c| self.qualities.iter().position(|q| q == c))
            .map(|i| (i + 1) % self.qualities.len())
            .unwrap_or(0);
        self.qualities.get(next)
    }
}

/// One format descriptor from the extraction backend
///
/// Field names follow the extraction tool's JSON; camelCase spellings are
/// accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteFormat {
    #[serde(default, alias = "formatId")]
    pub format_id: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default, alias = "filesizeApprox")]
    pub filesize_approx: Option<u64>,
    /// Total bitrate in kbit/s
    #[serde(default)]
    pub tbr: Option<f64>,
    #[serde(default)]
    pub vbr: Option<f64>,
    #[serde(default)]
    pub abr: Option<f64>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Response envelope of `POST /api/video-info`
///
/// Either `formats` is populated or `error` explains why not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "webpageUrl")]
    pub webpage_url: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub formats: Option<Vec<RemoteFormat>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl VideoInfo {
    /// Maps the envelope into a playable [`VideoDetail`]
    ///
    /// The last listed format becomes the primary URL and every format is kept
    /// as a quality in response order. Returns `None` when there are no formats.
    ///
    /// `id` prefers the envelope's own `id` and only falls back to the title
    /// (then `"Unknown"`) when the backend omits it.
    pub fn to_video_detail(&self) -> Option<VideoDetail> {
        let formats = self.formats.as_deref().filter(|f| !f.is_empty())?;

        let title = self.title.clone().unwrap_or_else(|| UNKNOWN.to_string());
        let id = self
            .id
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| UNKNOWN.to_string());
        let video_url = formats
            .last()
            .and_then(|f| f.url.clone())
            .unwrap_or_default();

        let qualities = formats
            .iter()
            .map(|format| VideoQuality {
                label: format
                    .format_id
                    .clone()
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                url: format.url.clone().unwrap_or_default(),
                format_id: format.format_id.clone(),
                protocol: format.protocol.clone(),
            })
            .collect();

        Some(VideoDetail {
            id,
            title,
            video_url,
            qualities,
        })
    }
}

//! URL helper functions
//!
//! Builds listing, detail and backend URLs from a configured base.

/// Path of the backend extraction endpoint
pub const VIDEO_INFO_PATH: &str = "/api/video-info";

/// Builds the listing page URL for a 1-based page number
///
/// Page 0 is treated as page 1.
///
/// # Example
/// ```
/// use vidtv_core::url::build_listing_url;
/// let url = build_listing_url("https://site.example", 2);
/// assert_eq!(url, "https://site.example/video?page=2");
/// ```
pub fn build_listing_url(base: &str, page: u32) -> String {
    format!("{}/video?page={}", trim_base(base), page.max(1))
}

/// Builds the detail page URL for a video key
///
/// The key is percent-encoded so an arbitrary string cannot alter the query.
///
/// # Example
/// ```
/// use vidtv_core::url::build_detail_url;
/// let url = build_detail_url("https://site.example", "ph5f1a2b");
/// assert_eq!(url, "https://site.example/view_video.php?viewkey=ph5f1a2b");
/// ```
pub fn build_detail_url(base: &str, video_id: &str) -> String {
    format!(
        "{}/view_video.php?viewkey={}",
        trim_base(base),
        urlencoding::encode(video_id)
    )
}

/// Builds the backend extraction endpoint URL
///
/// # Example
/// ```
/// use vidtv_core::url::build_video_info_url;
/// let url = build_video_info_url("http://192.168.1.199:8080/");
/// assert_eq!(url, "http://192.168.1.199:8080/api/video-info");
/// ```
pub fn build_video_info_url(backend: &str) -> String {
    format!("{}{}", trim_base(backend), VIDEO_INFO_PATH)
}

/// Returns the page URL to hand to the backend for a video
///
/// An absolute `http(s)` URL is passed through unchanged; anything else is
/// treated as a video key.
pub fn page_url_for(base: &str, id_or_url: &str) -> String {
    let trimmed = id_or_url.trim();
    if is_absolute_http(trimmed) {
        trimmed.to_string()
    } else {
        build_detail_url(base, trimmed)
    }
}

/// Resolves a video key from either a bare key or a detail page URL
///
/// Returns `None` for blank input and for absolute URLs without a `viewkey`.
///
/// # Example
/// ```
/// use vidtv_core::url::video_key_for;
/// assert_eq!(video_key_for(" ph5f1 "), Some("ph5f1".to_string()));
/// assert_eq!(
///     video_key_for("https://site.example/view_video.php?viewkey=ph5f1"),
///     Some("ph5f1".to_string())
/// );
/// assert_eq!(video_key_for("   "), None);
/// ```
pub fn video_key_for(id_or_url: &str) -> Option<String> {
    let trimmed = id_or_url.trim();
    if trimmed.is_empty() {
        None
    } else if is_absolute_http(trimmed) {
        extract_viewkey(trimmed)
    } else {
        Some(trimmed.to_string())
    }
}

/// Extracts the video key from a detail page URL
///
/// # Example
/// ```
/// use vidtv_core::url::extract_viewkey;
/// let key = extract_viewkey("https://site.example/view_video.php?viewkey=ph5f1&pkey=1");
/// assert_eq!(key, Some("ph5f1".to_string()));
/// ```
pub fn extract_viewkey(url: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);

    query
        .split('&')
        .find_map(|param| param.strip_prefix("viewkey="))
        .filter(|value| !value.is_empty())
        .map(|value| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// True for `http://` and `https://` URLs
pub fn is_absolute_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

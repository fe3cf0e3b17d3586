//! Listing page parser
//!
//! Parses HTML from a paginated listing page into video summaries.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::{element_text, non_empty_attr, selector};
use crate::error::Result;
use crate::types::VideoSummary;

/// Placeholder for display fields the page does not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Attribute carrying the video key on each listing item
const VIDEO_KEY_ATTR: &str = "data-video-vkey";

/// Thumbnail attributes, tried in order
const THUMBNAIL_ATTRS: [&str; 3] = ["src", "data-image", "data-path"];

struct ItemSelectors {
    title: Selector,
    thumbnail: Selector,
    duration: Selector,
    views: Selector,
}

impl ItemSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            title: selector("span.title a")?,
            thumbnail: selector("div.phimage a img.js-videoThumb")?,
            duration: selector("var.duration")?,
            views: selector("span.views var")?,
        })
    }
}

/// Parses a listing page and returns its video summaries in page order
///
/// Items without a video key, title or thumbnail are skipped; a bad item
/// never affects its neighbours.
///
/// # Arguments
/// * `html` - Raw HTML string from a listing page
///
/// # Returns
/// Vector of [`VideoSummary`], empty if no items matched
///
/// # Errors
/// Returns `ParseError` only if a built-in selector fails to compile
pub fn parse_video_list(html: &str) -> Result<Vec<VideoSummary>> {
    let document = Html::parse_document(html);
    let item_selector = selector(&format!("li[{VIDEO_KEY_ATTR}]"))?;
    let selectors = ItemSelectors::new()?;

    let items: Vec<ElementRef> = document.select(&item_selector).collect();
    debug!(count = items.len(), "found listing items");

    let mut videos = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if let Some(video) = parse_video_item(index, item, &selectors) {
            videos.push(video);
        }
    }

    debug!(parsed = videos.len(), "parsed listing page");
    Ok(videos)
}

/// Parses a single listing item, `None` if it must be skipped
fn parse_video_item(
    index: usize,
    element: &ElementRef,
    selectors: &ItemSelectors,
) -> Option<VideoSummary> {
    let Some(id) = non_empty_attr(element, VIDEO_KEY_ATTR) else {
        warn!(index, "skipping listing item without video key");
        return None;
    };

    let title = extract_title(element, &selectors.title);
    let thumbnail_url = extract_thumbnail(element, &selectors.thumbnail);

    let (Some(title), Some(thumbnail_url)) = (title, thumbnail_url) else {
        warn!(index, %id, "skipping listing item without title or thumbnail");
        return None;
    };

    let duration = first_text(element, &selectors.duration)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let views = first_text(element, &selectors.views).unwrap_or_else(|| "0".to_string());

    debug!(index, %id, %title, "parsed listing item");

    Some(VideoSummary {
        id,
        title,
        thumbnail_url,
        duration,
        view_count: sanitize_view_count(&views),
        rating: NOT_AVAILABLE.to_string(),
    })
}

/// Title from the link text, then its `title` attribute
fn extract_title(element: &ElementRef, title_selector: &Selector) -> Option<String> {
    let link = element.select(title_selector).next()?;

    Some(element_text(&link))
        .filter(|t| !t.is_empty())
        .or_else(|| non_empty_attr(&link, "title"))
        .filter(|t| t != NOT_AVAILABLE)
}

/// Thumbnail URL from `src`, then the lazy-load data attributes
fn extract_thumbnail(element: &ElementRef, thumb_selector: &Selector) -> Option<String> {
    let img = element.select(thumb_selector).next()?;
    THUMBNAIL_ATTRS
        .iter()
        .find_map(|attr| non_empty_attr(&img, attr))
}

fn first_text(element: &ElementRef, sel: &Selector) -> Option<String> {
    element
        .select(sel)
        .next()
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
}

/// Keeps only digits and periods: "1.2M views" → "1.2"
pub fn sanitize_view_count(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

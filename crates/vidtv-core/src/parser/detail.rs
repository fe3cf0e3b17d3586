//! Detail page parser
//!
//! Extracts the title and the playable `<video>` source from a video page.
//! Both fields are resolved through ordered fallback chains; the first
//! strategy yielding a non-empty value wins.

use regex::Regex;
use scraper::Html;
use tracing::{debug, warn};

use super::{decode_html_entities, element_text, non_empty_attr, selector};
use crate::types::{UNKNOWN, VideoDetail, VideoQuality};

type Extractor = fn(&Html) -> Option<String>;

/// Title strategies, most specific first
const TITLE_STRATEGIES: [Extractor; 3] = [
    title_from_heading,
    title_from_open_graph,
    title_from_document_title,
];

/// Playable source candidates as `(selector, attribute)`, most specific first
const SOURCE_STRATEGIES: [(&str, &str); 4] = [
    ("video.mgp_videoElement source[type='video/mp4']", "src"),
    ("video > source[type='video/mp4']", "src"),
    ("video source", "src"),
    ("video[src]", "src"),
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses a detail page into a [`VideoDetail`]
///
/// The single scraped quality is labelled from a `480P_2000K`-style token in
/// the URL path, or `"Unknown"` when there is none.
///
/// # Arguments
/// * `video_id` - Video key the page was fetched for
/// * `html` - Raw HTML string from the detail page
///
/// # Returns
/// `None` unless both a title and a playable URL were found
pub fn parse_video_detail(video_id: &str, html: &str) -> Option<VideoDetail> {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let video_url = extract_video_url(&document);

    let (Some(title), Some(video_url)) = (title, video_url) else {
        warn!(video_id, "detail page is missing a title or a playable source");
        return None;
    };

    let label = extract_quality_label(&video_url).unwrap_or_else(|| UNKNOWN.to_string());
    debug!(video_id, %label, "parsed detail page");

    Some(VideoDetail {
        id: video_id.to_string(),
        title,
        qualities: vec![VideoQuality::scraped(label, video_url.clone())],
        video_url,
    })
}

/// Runs the title chain over a parsed document
pub fn extract_title(document: &Html) -> Option<String> {
    TITLE_STRATEGIES.iter().find_map(|strategy| strategy(document))
}

/// Runs the playable-source chain, returning an entity-decoded URL
pub fn extract_video_url(document: &Html) -> Option<String> {
    SOURCE_STRATEGIES.iter().find_map(|(css, attr)| {
        let sel = selector(css).ok()?;
        document
            .select(&sel)
            .find_map(|el| non_empty_attr(&el, attr))
            .map(|url| decode_html_entities(&url))
    })
}

/// Finds a resolution token such as `480P_2000K` or `720P` in a URL path
pub fn extract_quality_label(url: &str) -> Option<String> {
    let re = Regex::new(r"/(\d+P(?:_\d+K)?)/").ok()?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

// ---------------------------------------------------------------------------
// Title strategies
// ---------------------------------------------------------------------------

fn title_from_heading(document: &Html) -> Option<String> {
    let sel = selector("h1.title").ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
}

fn title_from_open_graph(document: &Html) -> Option<String> {
    let sel = selector("meta[property='og:title']").ok()?;
    document
        .select(&sel)
        .find_map(|el| non_empty_attr(&el, "content"))
}

/// `<title>` text up to the first `|`
fn title_from_document_title(document: &Html) -> Option<String> {
    let sel = selector("title").ok()?;
    let text = document.select(&sel).next().map(|el| element_text(&el))?;
    text.split('|')
        .next()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

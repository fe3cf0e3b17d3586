//! HTML parsers for site pages
//!
//! Contains modules for parsing different page types, plus the selector and
//! text helpers they share.

pub mod detail;
pub mod endpoints;
pub mod listing;

pub use detail::parse_video_detail;
pub use endpoints::find_media_endpoints;
pub use listing::parse_video_list;

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

/// Compiles a CSS selector, mapping failures to `ParseError`
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::ParseError(format!("Invalid selector {css:?}: {e:?}")))
}

/// Trimmed text content of an element
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed attribute value, `None` when missing or blank
pub(crate) fn non_empty_attr(element: &ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Decodes common HTML entities in URLs
///
/// `&amp;` goes last so `&amp;lt;` decodes once, to `&lt;`.
pub(crate) fn decode_html_entities(url: &str) -> String {
    url.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_decode_html_entities() {
        let url = "https://example.com?a=1&amp;b=2&amp;c=3";
        assert_eq!(decode_html_entities(url), "https://example.com?a=1&b=2&c=3");
    }

    #[test]
    fn test_decode_html_entities_single_pass() {
        assert_eq!(decode_html_entities("a=&amp;lt;b&amp;gt;"), "a=&lt;b&gt;");
        assert_eq!(decode_html_entities("&lt;&quot;&#39;&gt;"), "<\"'>");
    }

    #[test]
    fn test_invalid_selector() {
        let result = selector("li[");
        assert!(matches!(result, Err(ScrapeError::ParseError(_))));
    }

    #[test]
    fn test_non_empty_attr() {
        let html = Html::parse_fragment(r#"<img src="  " data-image="x.jpg">"#);
        let img = html.select(&selector("img").unwrap()).next().unwrap();
        assert_eq!(non_empty_attr(&img, "src"), None);
        assert_eq!(non_empty_attr(&img, "data-image"), Some("x.jpg".to_string()));
        assert_eq!(non_empty_attr(&img, "data-path"), None);
    }
}

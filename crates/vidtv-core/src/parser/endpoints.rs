//! Media endpoint scan
//!
//! Diagnostic keyword search for streaming-API URLs embedded in a page.
//! Candidates are unranked and unverified; nothing here feeds the parsed
//! [`VideoDetail`](crate::VideoDetail).

use regex::{Regex, RegexBuilder};
use scraper::Html;

use super::selector;

/// Scans script bodies and element attributes for URLs containing `keyword`
///
/// Matching is case-insensitive. Only absolute `http(s)` or root-relative
/// candidates are kept. The result is deduplicated in first-seen order.
pub fn find_media_endpoints(html: &str, keyword: &str) -> Vec<String> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(html);
    let needle = keyword.to_lowercase();
    let mut found = Vec::new();

    if let Some(re) = quoted_keyword_regex(keyword)
        && let Ok(script_selector) = selector("script")
    {
        for script in document.select(&script_selector) {
            let content: String = script.text().collect();
            if !content.to_lowercase().contains(&needle) {
                continue;
            }
            for caps in re.captures_iter(&content) {
                if let Some(m) = caps.get(1) {
                    push_candidate(&mut found, m.as_str());
                }
            }
        }
    }

    if let Ok(any) = selector("*") {
        for element in document.select(&any) {
            for (_, value) in element.value().attrs() {
                if value.to_lowercase().contains(&needle) {
                    push_candidate(&mut found, value);
                }
            }
        }
    }

    found
}

/// Matches a single- or double-quoted string containing the keyword
fn quoted_keyword_regex(keyword: &str) -> Option<Regex> {
    let pattern = format!(r#"['"]([^'"]*{}[^'"]*)['"]"#, regex::escape(keyword));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

fn push_candidate(found: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    let plausible = candidate.starts_with("http://")
        || candidate.starts_with("https://")
        || candidate.starts_with('/');
    if plausible && !found.iter().any(|f| f == candidate) {
        found.push(candidate.to_string());
    }
}

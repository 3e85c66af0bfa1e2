// src/core/url.rs
//
// Checks on the URL the user typed (as opposed to the URLs we extract).

use url::Url;

pub fn is_http_url(s: &str) -> bool {
    let s = s.trim();
    s.starts_with("http://") || s.starts_with("https://")
}

/// Trim and default the scheme to https.
pub fn normalize_input_url(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() || is_http_url(s) {
        s!(s)
    } else {
        join!("https://", s)
    }
}

/// First value of `key` in the query string, if the URL parses.
pub fn query_param(raw: &str, key: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    parsed
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// A Google search results page with local ("tbm=lcl") results.
pub fn is_google_local_search_url(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw.trim()) else { return false };
    let host_ok = parsed.host_str().is_some_and(|h| h.contains("google.com"));
    host_ok
        && parsed
            .query_pairs()
            .any(|(k, v)| k == "tbm" && v.contains("lcl"))
}

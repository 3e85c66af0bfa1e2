// src/core/sanitize.rs
//
// Small text cleaners shared by the extractor and the business-detail
// strategies. All of them are total: bad input gives "" back.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

fn ci(src: &str) -> Option<Regex> {
    match RegexBuilder::new(src).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            loge!("sanitize: bad pattern {src}: {e}");
            None
        }
    }
}

static PHONE_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| ci(r"^\+?1?[-.\s]?"));
static ADDRESS_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| ci(r"^Address:?\s*"));
static GOOGLE_SEARCH_SUFFIX: LazyLock<Option<Regex>> = LazyLock::new(|| ci(r"\s*-\s*Google\s*Search$"));

/// The handful of HTML entities that show up inside attribute values.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

fn strip_re(re: &Option<Regex>, s: &str) -> String {
    match re {
        Some(re) => re.replace(s, "").into_owned(),
        None => s!(s),
    }
}

/// US-style formatting for 10 digits, or 11 with a leading 1.
/// Anything else comes back as bare digits.
pub fn clean_phone_number(phone: &str) -> String {
    if phone.trim().is_empty() {
        return s!();
    }
    let stripped = strip_re(&PHONE_PREFIX, phone);
    let digits: String = stripped.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ => digits,
    }
}

pub fn clean_address(address: &str) -> String {
    let flat = normalize_ws(address);
    strip_re(&ADDRESS_PREFIX, &flat).trim().to_string()
}

pub fn clean_business_name(name: &str) -> String {
    let flat = normalize_ws(name);
    strip_re(&GOOGLE_SEARCH_SUFFIX, &flat).trim().to_string()
}

/// Unwrap `google.com/url?q=` redirects and make sure there's a scheme.
pub fn clean_website_url(raw: &str) -> String {
    let mut url = raw.trim().to_string();
    if url.is_empty() {
        return url;
    }
    if url.contains("google.com/url?q=") {
        if let Some(target) = super::url::query_param(&url, "q") {
            url = target;
        }
    }
    super::url::normalize_input_url(&url)
}

// src/emails.rs
//
// Contact addresses from a business website. Role addresses (info@,
// sales@, ...) sort ahead of personal ones; freemail and no-reply
// addresses are dropped.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::fetch::PageSource;

pub const EXCLUDED: [&str; 11] = [
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com",
    "example.com", "test.com", "placeholder.com", "domain.com",
    "noreply", "no-reply", "donotreply",
];

pub const BUSINESS_PREFIXES: [&str; 11] = [
    "info@", "contact@", "sales@", "support@",
    "hello@", "admin@", "office@", "business@",
    "inquiry@", "service@", "help@",
];

/// Paths tried, in order, when the landing page has no address.
pub const CONTACT_PATHS: [&str; 3] = ["/contact", "/contact-us", "/about"];

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .map_err(|e| loge!("Emails: regex failed: {e}"))
        .ok()
});

fn is_business(email: &str) -> bool {
    BUSINESS_PREFIXES.iter().any(|p| email.starts_with(p))
}

/// All usable addresses in `text`, lowercased, business ones first,
/// each once. Order is otherwise the order of appearance.
pub fn extract_emails_from_text(text: &str) -> Vec<String> {
    let Some(re) = EMAIL.as_ref() else { return Vec::new() };

    let mut seen = HashSet::new();
    let (business, other): (Vec<String>, Vec<String>) = re
        .find_iter(text)
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|e| !EXCLUDED.iter().any(|x| e.contains(x)))
        .filter(|e| seen.insert(e.clone()))
        .partition(|e| is_business(e));

    business.into_iter().chain(other).collect()
}

/// Best contact address for a website: the landing page first, then the
/// usual contact pages. Fetch errors are logged, never returned.
pub fn find_email(source: &dyn PageSource, url: &str) -> Option<String> {
    match source.fetch(url) {
        Ok(html) => {
            if let Some(e) = extract_emails_from_text(&html).into_iter().next() {
                return Some(e);
            }
        }
        Err(e) => {
            logw!("Emails: {url}: {e}");
            return None;
        }
    }

    let base = url.trim_end_matches('/');
    for path in CONTACT_PATHS {
        let page = join!(base, path);
        match source.fetch(&page) {
            Ok(html) => {
                if let Some(e) = extract_emails_from_text(&html).into_iter().next() {
                    logd!("Emails: found on {page}");
                    return Some(e);
                }
            }
            Err(e) => logd!("Emails: {page}: {e}"),
        }
    }
    None
}

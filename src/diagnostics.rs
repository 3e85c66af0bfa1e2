// src/diagnostics.rs
//
// What a page looked like to the extractor. Shown when nothing matched (or
// in debug mode) so the user can tell "wrong page" from "no results".

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::extract::Extraction;

pub const KEYWORDS: [&str; 6] = ["maps", "google", "place", "business", "location", "address"];

const SCAN_CHARS: usize = 5000;
const SAMPLE_CHARS: usize = 1500;
const MAX_ANY_URLS: usize = 10;
const MAX_RAW_SHOWN: usize = 3;

static ANY_URL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s"'<>]+"#)
        .map_err(|e| loge!("Diagnostics: url regex failed: {e}"))
        .ok()
});

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub content_len: usize,
    /// Case-insensitive occurrence count per keyword, in `KEYWORDS` order.
    pub keyword_counts: Vec<(&'static str, usize)>,
    pub raw_hits: usize,
    pub pattern_hits: Vec<(&'static str, usize)>,
    pub first_raw: Vec<String>,
    pub early_urls: Vec<String>,
    pub sample: String,
}

impl Diagnostics {
    pub fn analyze(page_text: &str, extraction: &Extraction) -> Self {
        let lower = page_text.to_lowercase();
        let keyword_counts = KEYWORDS
            .iter()
            .map(|k| (*k, lower.matches(k).count()))
            .collect();

        let head = prefix_chars(page_text, SCAN_CHARS);
        let early_urls = ANY_URL
            .as_ref()
            .map(|re| {
                re.find_iter(head)
                    .take(MAX_ANY_URLS)
                    .map(|m| s!(m.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            content_len: page_text.chars().count(),
            keyword_counts,
            raw_hits: extraction.raw_hits(),
            pattern_hits: extraction.pattern_hits.clone(),
            first_raw: extraction
                .candidates
                .iter()
                .take(MAX_RAW_SHOWN)
                .map(|c| c.raw.clone())
                .collect(),
            early_urls,
            sample: s!(prefix_chars(page_text, SAMPLE_CHARS)),
        }
    }

    pub fn keyword_count(&self, keyword: &str) -> usize {
        self.keyword_counts
            .iter()
            .find(|(k, _)| *k == keyword)
            .map_or(0, |(_, n)| *n)
    }
}

fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Page analysis ===")?;
        writeln!(f, "Content size: {} characters", self.content_len)?;
        for (k, n) in &self.keyword_counts {
            writeln!(f, "  '{k}': {n}")?;
        }
        writeln!(f, "Raw pattern matches: {}", self.raw_hits)?;
        for (name, n) in self.pattern_hits.iter().filter(|(_, n)| *n > 0) {
            writeln!(f, "  {name}: {n}")?;
        }
        if !self.first_raw.is_empty() {
            writeln!(f, "First candidates:")?;
            for (i, raw) in self.first_raw.iter().enumerate() {
                writeln!(f, "  {}. {raw}", i + 1)?;
            }
        }
        if self.early_urls.is_empty() {
            writeln!(f, "No URLs in the first {SCAN_CHARS} characters")?;
        } else {
            writeln!(f, "URLs in the first {SCAN_CHARS} characters:")?;
            for u in &self.early_urls {
                writeln!(f, "  {u}")?;
            }
        }
        writeln!(f, "--- Content sample ---")?;
        write!(f, "{}", self.sample)
    }
}

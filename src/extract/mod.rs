// src/extract/mod.rs
//
// Text in, URLs out: match → clean → validate → dedupe. Nothing here does
// I/O or reports progress, and nothing here fails. A bad candidate is just
// dropped; it never costs the others.

mod clean;
mod dedupe;
mod patterns;
mod validate;

pub use clean::{clean_url, has_encoded_scheme, percent_decode_lossy};
pub use dedupe::dedupe;
pub use patterns::{Matches, find_candidates};
pub use validate::{LOCATION_MARKERS, MAPS_INDICATORS, ValidationRules, is_maps_url};

/// One raw match and what became of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub raw: String,
    pub cleaned: Option<String>,
    pub valid: bool,
}

impl Candidate {
    fn evaluate(raw: String, rules: &ValidationRules) -> Self {
        let cleaned = clean_url(&raw);
        let valid = cleaned.as_deref().is_some_and(|u| rules.is_maps_url(u));
        Self { raw, cleaned, valid }
    }
}

/// Full record of one extraction pass.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub candidates: Vec<Candidate>,
    pub pattern_hits: Vec<(&'static str, usize)>,
    /// The result set.
    pub urls: Vec<String>,
}

impl Extraction {
    pub fn raw_hits(&self) -> usize {
        self.pattern_hits.iter().map(|(_, n)| n).sum()
    }

    pub fn rejected(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(|c| !c.valid)
    }
}

/// Ordered, deduplicated Maps URLs found in `page_text`.
pub fn extract_maps_urls(page_text: &str) -> Vec<String> {
    extract_with_report(page_text, &ValidationRules::default()).urls
}

pub fn extract_with_report(page_text: &str, rules: &ValidationRules) -> Extraction {
    let Matches { raw, per_pattern } = find_candidates(page_text);

    let candidates: Vec<Candidate> = raw
        .into_iter()
        .map(|r| Candidate::evaluate(r, rules))
        .collect();

    let urls = dedupe(
        candidates
            .iter()
            .filter(|c| c.valid)
            .filter_map(|c| c.cleaned.clone()),
    );

    Extraction { candidates, pattern_hits: per_pattern, urls }
}

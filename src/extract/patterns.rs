// src/extract/patterns.rs
//
// Candidate search: a fixed list of case-insensitive regexes for the link
// shapes Maps uses. Everything after the scheme runs until whitespace, a
// quote or an angle bracket; trailing junk is the cleaner's problem.

use std::{collections::HashSet, sync::LazyLock};

use regex::{Regex, RegexBuilder};

/// (name, source). Patterns with a capture group yield group 1.
const SOURCES: &[(&str, &str)] = &[
    ("place",        r#"https?://(?:www\.)?google\.com/maps/place/[^\s"'<>]+"#),
    ("coordinates",  r#"https?://(?:www\.)?google\.com/maps/[^\s"'<>]*@[-\d.,]+[^\s"'<>]*"#),
    ("maps-host",    r#"https?://maps\.google\.com/[^\s"'<>]+"#),
    ("goo.gl",       r#"https?://goo\.gl/maps/[^\s"'<>]+"#),
    ("search",       r#"https?://(?:www\.)?google\.com/maps/search/[^\s"'<>]+"#),
    ("directions",   r#"https?://(?:www\.)?google\.com/maps/dir/[^\s"'<>]+"#),
    ("viewport",     r#"https?://(?:www\.)?google\.com/maps/@[^\s"'<>]+"#),
    ("app-link",     r#"https?://maps\.app\.goo\.gl/[^\s"'<>]+"#),
    ("encoded",      r#"https?%3A(?:%2F|/){2}(?:www\.)?google\.com(?:%2F|/)maps[^\s"'<>&]+"#),
    ("encoded-host", r#"https?%3A(?:%2F|/){2}maps\.google\.com[^\s"'<>&]+"#),
    ("href",         r#"href\s*=\s*["']?(https?://[^\s"'<>]*(?:google\.com/maps|maps\.google\.com|goo\.gl/maps|maps\.app\.goo\.gl)[^\s"'<>]*)"#),
];

pub struct MapsPattern {
    pub name: &'static str,
    re: Regex,
}

static PATTERNS: LazyLock<Vec<MapsPattern>> = LazyLock::new(|| {
    SOURCES
        .iter()
        .filter_map(|&(name, src)| {
            match RegexBuilder::new(src).case_insensitive(true).build() {
                Ok(re) => Some(MapsPattern { name, re }),
                Err(e) => {
                    loge!("Pattern {name} failed to compile: {e}");
                    None
                }
            }
        })
        .collect()
});

pub fn patterns() -> &'static [MapsPattern] {
    &PATTERNS
}

/// Raw candidates plus how many hits each pattern produced.
#[derive(Clone, Debug, Default)]
pub struct Matches {
    /// Unique raw matches, in order of first appearance in the text.
    pub raw: Vec<String>,
    pub per_pattern: Vec<(&'static str, usize)>,
}

impl Matches {
    /// Total hits across all patterns, repeats included.
    pub fn total_hits(&self) -> usize {
        self.per_pattern.iter().map(|(_, n)| n).sum()
    }
}

pub fn find_candidates(text: &str) -> Matches {
    let mut hits: Vec<(usize, &str)> = Vec::new();
    let mut per_pattern = Vec::with_capacity(SOURCES.len());

    for p in patterns() {
        let mut n = 0usize;
        for caps in p.re.captures_iter(text) {
            if let Some(m) = caps.get(1).or_else(|| caps.get(0)) {
                hits.push((m.start(), m.as_str()));
                n += 1;
            }
        }
        per_pattern.push((p.name, n));
    }

    // Earliest first; at the same offset the longest match wins the slot.
    hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.len().cmp(&a.1.len())));

    let mut seen: HashSet<&str> = HashSet::with_capacity(hits.len());
    let raw = hits
        .into_iter()
        .filter(|(_, s)| seen.insert(*s))
        .map(|(_, s)| s!(s))
        .collect();

    Matches { raw, per_pattern }
}

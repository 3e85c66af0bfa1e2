// src/extract/dedupe.rs
use std::collections::HashSet;

/// Drop repeats, keeping each URL at its first position. Exact string
/// equality: no case, slash or query normalisation.
pub fn dedupe<I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    urls.into_iter()
        .filter(|u| seen.insert(u.clone()))
        .collect()
}

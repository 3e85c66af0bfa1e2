// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::maps_urls::PAGE,
    &pages::details::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Out-of-range indices fall back to the first page.
pub fn page_at(idx: usize) -> &'static dyn Page {
    PAGES.get(idx).copied().unwrap_or(&pages::maps_urls::PAGE)
}

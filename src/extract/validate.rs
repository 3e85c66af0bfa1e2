// src/extract/validate.rs
//
// Heuristic "is this really a Maps link" check. High recall on the common
// shapes is the goal; some false positives are expected.

use serde::{Deserialize, Serialize};

use super::clean::percent_decode_lossy;
use crate::config::consts::{FALLBACK_URL_LEN, MIN_URL_LEN};

/// Host/path fragments; at least one is required.
pub const MAPS_INDICATORS: [&str; 4] = [
    "google.com/maps",
    "maps.google.com",
    "goo.gl/maps",
    "maps.app.goo.gl",
];

/// Fragments that point at a concrete location.
pub const LOCATION_MARKERS: [&str; 5] = ["@", "place/", "search/", "dir/", "/maps/"];

/// Tunable thresholds. Lengths count characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Anything shorter is rejected outright.
    pub min_len: usize,
    /// Without a location marker, a URL must be longer than this.
    pub fallback_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self { min_len: MIN_URL_LEN, fallback_len: FALLBACK_URL_LEN }
    }
}

impl ValidationRules {
    pub fn is_maps_url(&self, url: &str) -> bool {
        let len = url.chars().count();
        if len < self.min_len {
            return false;
        }

        let mut lower = url.to_lowercase();
        if lower.contains("%3a") || lower.contains("%2f") {
            lower = percent_decode_lossy(&lower);
        }

        let has_indicator = MAPS_INDICATORS.iter().any(|i| lower.contains(i));
        let has_location = LOCATION_MARKERS.iter().any(|m| lower.contains(m));

        has_indicator && (has_location || len > self.fallback_len)
    }
}

/// `is_maps_url` with the default thresholds.
pub fn is_maps_url(url: &str) -> bool {
    ValidationRules::default().is_maps_url(url)
}

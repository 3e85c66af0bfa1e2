// src/config/consts.rs

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "config.toml";

// Fetch
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const PAGE_LOAD_TIMEOUT_SECS: u64 = 30;
pub const SETTLE_MS: u64 = 3_000;
pub const SCROLL_PASSES: u32 = 3;
pub const SCROLL_PAUSE_MS: u64 = 1_000;
pub const EMAIL_PAGE_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

// Validation
pub const MIN_URL_LEN: usize = 20;
pub const FALLBACK_URL_LEN: usize = 50;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "google_maps_urls";
/// Appended to the URL export stem for the business-details file.
pub const DETAILS_SUFFIX: &str = "_details";
pub const URL_HEADER: &str = "Google Maps URL";
pub const STATUS_HEADER: &str = "Status";
pub const STATUS_VALID: &str = "Valid";

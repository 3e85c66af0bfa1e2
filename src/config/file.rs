// src/config/file.rs
//
// Optional on-disk settings: .store/config.toml. Missing keys fall back to
// the built-in defaults, so a partial file is fine.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use super::{
    consts::{CONFIG_FILE, STORE_DIR},
    options::AppOptions,
};

pub fn config_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(CONFIG_FILE)
}

/// Read options from a specific file.
pub fn load_from(path: &Path) -> Result<AppOptions, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let opts: AppOptions = toml::from_str(&text)?;
    Ok(opts)
}

pub fn save_to(path: &Path, opts: &AppOptions) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, toml::to_string_pretty(opts)?)?;
    Ok(())
}

/// Load `.store/config.toml`, writing the defaults first if it doesn't exist.
pub fn load_or_init() -> Result<AppOptions, Box<dyn Error>> {
    let path = config_path();
    if !path.exists() {
        let defaults = AppOptions::default();
        save_to(&path, &defaults)?;
        logf!("Config: created default config at {}", path.display());
        return Ok(defaults);
    }
    let opts = load_from(&path)?;
    logd!("Config: loaded {}", path.display());
    Ok(opts)
}

/// Like `load_or_init`, but never fails: a broken file is logged and ignored.
pub fn load_or_default() -> AppOptions {
    match load_or_init() {
        Ok(opts) => opts,
        Err(e) => {
            loge!("Config: {} unusable ({}), using defaults", config_path().display(), e);
            AppOptions::default()
        }
    }
}

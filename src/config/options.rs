// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::extract::ValidationRules;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    /// Show diagnostics even when URLs were found.
    pub debug: bool,
    /// Business details: visit the listed website to look for an email.
    pub lookup_email: bool,
    pub fetch: FetchOptions,
    pub extract: ValidationRules,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            debug: false,
            lookup_email: true,
            fetch: FetchOptions::default(),
            extract: ValidationRules::default(),
            export: ExportOptions::default(),
        }
    }
}

/// How page markup is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Headless browser first, plain HTTP if the browser can't start.
    #[default]
    Auto,
    Browser,
    Http,
}

impl FetchMode {
    pub const ALL: [FetchMode; 3] = [FetchMode::Auto, FetchMode::Browser, FetchMode::Http];

    pub fn label(&self) -> &'static str {
        match self {
            FetchMode::Auto => "Auto",
            FetchMode::Browser => "Browser",
            FetchMode::Http => "HTTP",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub mode: FetchMode,
    pub timeout_secs: u64,
    pub page_load_timeout_secs: u64,
    pub settle_ms: u64,
    pub scroll_passes: u32,
    pub user_agent: String,
    /// Explicit Chrome binary; otherwise CHROME_PATH or auto-detect.
    pub chrome_path: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            mode: FetchMode::Auto,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            page_load_timeout_secs: PAGE_LOAD_TIMEOUT_SECS,
            settle_ms: SETTLE_MS,
            scroll_passes: SCROLL_PASSES,
            user_agent: s!(USER_AGENT),
            chrome_path: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    /// One URL per line.
    Txt,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Full output file path. The extension follows `format` unless the user
    /// typed one of their own.
    pub fn out_path(&self) -> PathBuf {
        let ext = self
            .out_path
            .user_ext
            .as_deref()
            .unwrap_or_else(|| self.format.ext());
        self.out_path.dir.join(join!(&self.out_path.file_stem, ".", ext))
    }

    /// Business details: same directory and stem plus `_details`, always `.csv`.
    pub fn details_path(&self) -> PathBuf {
        self.out_path
            .dir
            .join(join!(&self.out_path.file_stem, DETAILS_SUFFIX, ".csv"))
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse free text into dir + stem (+ optional user extension).
    /// A trailing separator means "directory, default file name".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        if crate::file::looks_like_dir_hint(Path::new(s)) {
            self.out_path.dir = PathBuf::from(s);
            self.out_path.file_stem = s!(DEFAULT_FILE);
            self.out_path.user_ext = None;
            return;
        }

        let p = Path::new(s);
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_string_lossy().into_owned();
        }
        self.out_path.user_ext = p
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .filter(|e| !e.eq_ignore_ascii_case(self.format.ext()));
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: String, // without extension
    user_ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

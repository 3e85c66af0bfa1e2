// src/log.rs
//
// File logging for both front ends. The logf!/logd!/loge! macros forward to
// `tracing`; `init()` installs a subscriber that appends to .store/debug.log
// with uptime stamps, or falls back to stderr if the file can't be opened.

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::PathBuf,
    sync::OnceLock,
};

use tracing_subscriber::{
    EnvFilter,
    fmt::{MakeWriter, time::uptime, writer::BoxMakeWriter},
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<Option<PathBuf>> = OnceLock::new();

const DEFAULT_FILTER: &str = "info,maps_scrape=debug";

/// Either the shared log file or stderr when the handle can't be cloned.
enum FileOrStderr {
    File(File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file() -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(STORE_DIR)?;
    let path = PathBuf::from(STORE_DIR).join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Safe to call more than once; only the
/// first call has an effect. Returns the log file path when logging to disk.
pub fn init() -> Option<PathBuf> {
    INIT.get_or_init(|| match open_log_file() {
        Ok((path, file)) => {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
                .with_timer(uptime())
                .with_ansi(false)
                .try_init()
                .is_ok();
            if installed {
                tracing::info!("logging to {}", path.display());
            }
            Some(path)
        }
        Err(e) => {
            init_stderr();
            tracing::warn!("log file unavailable ({e}); logging to stderr");
            None
        }
    })
    .clone()
}

/// Stderr-only logging, used when the log file can't be created.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_timer(uptime())
        .with_ansi(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

// src/fetch/mod.rs
//
// Page-source providers. Given a URL, hand back markup or a FetchError.
// The extractor never learns which provider was used.

mod browser;
mod http;

use thiserror::Error;

pub use browser::{BrowserSession, BrowserSource};
pub use http::HttpSource;

use crate::{
    config::options::{FetchMode, FetchOptions},
    progress::Progress,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request timeout - {0} took too long to respond")]
    Timeout(String),

    #[error("connection failed - check if the URL is accessible ({0})")]
    Connect(String),

    #[error("HTTP error {code} for {url}")]
    Status { code: u16, url: String },

    #[error("request failed: {0}")]
    Request(String),

    #[error("browser setup failed: {0}")]
    BrowserUnavailable(String),

    #[error("browser error: {0}")]
    Browser(String),
}

pub trait PageSource {
    fn name(&self) -> &'static str;
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Which provider actually produced the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMethod {
    Browser,
    Http,
}

impl FetchMethod {
    pub fn label(&self) -> &'static str {
        match self {
            FetchMethod::Browser => "browser",
            FetchMethod::Http => "http",
        }
    }
}

#[derive(Clone, Debug)]
pub struct FetchedPage {
    pub html: String,
    pub method: FetchMethod,
    pub title: Option<String>,
}

/// Fetch `url` according to `opts.mode`.
///
/// `Auto` tries the browser and drops to HTTP only when the browser can't be
/// started. Once a browser is up, a failed page load is an error.
pub fn fetch_page(
    url: &str,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FetchedPage, FetchError> {
    match opts.mode {
        FetchMode::Http => fetch_http(url, opts, progress),
        FetchMode::Browser => fetch_browser(url, opts, progress),
        FetchMode::Auto => {
            if let Some(p) = progress.as_deref_mut() {
                p.step(10, "Attempting to setup browser...");
            }
            match BrowserSession::launch(opts) {
                Ok(session) => render(session, url, opts, progress),
                Err(e) => {
                    logw!("Fetch: browser unavailable ({e}); falling back to HTTP");
                    if let Some(p) = progress.as_deref_mut() {
                        p.warn("Browser setup failed. Using HTTP method instead...");
                    }
                    fetch_http(url, opts, progress)
                }
            }
        }
    }
}

fn fetch_browser(
    url: &str,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FetchedPage, FetchError> {
    if let Some(p) = progress.as_deref_mut() {
        p.step(10, "Setting up browser...");
    }
    let session = BrowserSession::launch(opts)?;
    render(session, url, opts, progress)
}

// Takes the session by value: it is dropped (browser closed) on every path out.
fn render(
    session: BrowserSession,
    url: &str,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FetchedPage, FetchError> {
    if let Some(p) = progress.as_deref_mut() {
        p.step(20, &format!("Loading page: {url}"));
    }
    session.load(url)?;
    logf!("Fetch: browser loaded {url}");

    if let Some(p) = progress.as_deref_mut() {
        p.step(60, "Loading dynamic content...");
    }
    if let Err(e) = session.scroll(opts.scroll_passes) {
        logw!("Fetch: scroll failed: {e}");
        if let Some(p) = progress.as_deref_mut() {
            p.warn(&format!("Scroll issue: {e}"));
        }
    }

    let html = session.content()?;
    let title = session.title();
    if let Some(p) = progress.as_deref_mut() {
        p.step(70, &format!("Page analyzed: {} characters", html.len()));
    }
    Ok(FetchedPage { html, method: FetchMethod::Browser, title })
}

fn fetch_http(
    url: &str,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FetchedPage, FetchError> {
    if let Some(p) = progress.as_deref_mut() {
        p.step(30, "Fetching page content via HTTP...");
    }
    let source = HttpSource::new(opts)?;
    let html = source.fetch(url)?;
    logf!("Fetch: HTTP got {} chars from {url}", html.len());
    if let Some(p) = progress.as_deref_mut() {
        p.step(50, &format!("Page fetched successfully: {} characters", html.len()));
    }
    Ok(FetchedPage { html, method: FetchMethod::Http, title: None })
}

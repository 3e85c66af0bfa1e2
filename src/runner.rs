// src/runner.rs
//
// One extraction run: check the input URL, get markup, pull URLs out, and
// decide whether diagnostics are worth showing. GUI and CLI both go through
// here; progress is the only thing they plug in.

use crate::{
    config::options::AppOptions,
    core::url::is_http_url,
    diagnostics::Diagnostics,
    extract::extract_with_report,
    fetch::{FetchError, PageSource, fetch_page},
    progress::{Progress, reborrow},
};

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub urls: Vec<String>,
    /// Where the markup came from ("browser", "http", "sample", ...).
    pub source: &'static str,
    /// Page size in characters.
    pub page_len: usize,
    pub title: Option<String>,
    pub raw_hits: usize,
    pub rejected: usize,
    /// Present in debug mode, or whenever nothing was found.
    pub diagnostics: Option<Diagnostics>,
}

impl RunOutcome {
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Reject anything that isn't an absolute http(s) URL before any network work.
pub fn check_input_url(url: &str) -> Result<&str, FetchError> {
    let u = url.trim();
    if u.is_empty() {
        return Err(FetchError::InvalidUrl(s!("please enter a URL")));
    }
    if !is_http_url(u) {
        return Err(FetchError::InvalidUrl(format!(
            "{u}: URL must start with http:// or https://"
        )));
    }
    Ok(u)
}

/// Fetch `url` with the configured mode and extract Maps URLs from it.
pub fn run(
    url: &str,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome, FetchError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(url);
    }
    let res = check_input_url(url).and_then(|u| {
        let page = fetch_page(u, &opts.fetch, reborrow(&mut progress))?;
        Ok(process(&page.html, page.method.label(), page.title, opts, reborrow(&mut progress)))
    });
    conclude(res, progress)
}

/// Same as `run`, but with a caller-supplied page source.
pub fn run_with_source(
    url: &str,
    source: &dyn PageSource,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome, FetchError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(url);
    }
    let res = check_input_url(url).and_then(|u| {
        if let Some(p) = progress.as_deref_mut() {
            p.step(30, &format!("Fetching page content via {}...", source.name()));
        }
        let html = source.fetch(u)?;
        if let Some(p) = progress.as_deref_mut() {
            p.step(50, &format!("Page fetched successfully: {} characters", html.len()));
        }
        Ok(process(&html, source.name(), None, opts, reborrow(&mut progress)))
    });
    conclude(res, progress)
}

/// Extract from markup already in hand (sample data, saved pages). Never fails.
pub fn run_on_text(
    text: &str,
    label: &'static str,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RunOutcome {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(label);
        p.step(50, &format!("Analyzing {label}..."));
    }
    let out = process(text, label, None, opts, reborrow(&mut progress));
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

fn process(
    html: &str,
    source: &'static str,
    title: Option<String>,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RunOutcome {
    if let Some(p) = progress.as_deref_mut() {
        p.step(80, "Extracting Google Maps URLs...");
    }
    let extraction = extract_with_report(html, &opts.extract);
    let rejected = extraction.rejected().count();

    if let Some(p) = progress.as_deref_mut() {
        p.step(90, &format!(
            "Cleaning and validating {} candidate URLs...",
            extraction.candidates.len()
        ));
    }
    logd!(
        "Runner: {} raw hits, {} candidates, {} rejected, {} kept",
        extraction.raw_hits(),
        extraction.candidates.len(),
        rejected,
        extraction.urls.len()
    );

    let diagnostics = (opts.debug || extraction.urls.is_empty())
        .then(|| Diagnostics::analyze(html, &extraction));

    if let Some(p) = progress.as_deref_mut() {
        p.step(100, "Extraction complete!");
        if extraction.urls.is_empty() {
            p.warn("No Google Maps URLs found on this page");
        } else {
            p.log(&format!("Found {} Google Maps URLs", extraction.urls.len()));
        }
    }

    RunOutcome {
        raw_hits: extraction.raw_hits(),
        rejected,
        page_len: html.chars().count(),
        urls: extraction.urls,
        source,
        title,
        diagnostics,
    }
}

fn conclude(
    res: Result<RunOutcome, FetchError>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome, FetchError> {
    match &res {
        Ok(out) => logf!("Runner: {} URLs via {}", out.urls.len(), out.source),
        Err(e) => loge!("Runner: {e}"),
    }
    if let Some(p) = progress.as_deref_mut() {
        if let Err(e) = &res {
            p.warn(&format!("Error: {e}"));
        }
        p.finish();
    }
    res
}

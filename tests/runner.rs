// tests/runner.rs
//
// Whole runs against an in-memory page source.

use std::sync::mpsc;

use maps_scrape::config::options::AppOptions;
use maps_scrape::fetch::{FetchError, PageSource};
use maps_scrape::progress::{ChannelProgress, NullProgress, ProgressEvent, RecordingProgress};
use maps_scrape::runner::{check_input_url, run_on_text, run_with_source};
use maps_scrape::sample::{SAMPLE_EXPECTED, SAMPLE_LABEL, SAMPLE_PAGE};

struct Canned(Result<String, FetchError>);

impl PageSource for Canned {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.0.clone()
    }
}

fn steps(events: &[ProgressEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::Step(p, _) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn input_url_must_be_absolute_http() {
    assert_eq!(check_input_url("  https://example.com/x  "), Ok("https://example.com/x"));
    assert!(matches!(check_input_url(""), Err(FetchError::InvalidUrl(_))));
    assert!(matches!(check_input_url("example.com"), Err(FetchError::InvalidUrl(_))));
    assert!(matches!(check_input_url("ftp://example.com"), Err(FetchError::InvalidUrl(_))));
}

#[test]
fn found_urls_without_diagnostics() {
    let src = Canned(Ok(SAMPLE_PAGE.into()));
    let mut rec = RecordingProgress::default();
    let out = run_with_source("https://directory.example/", &src, &AppOptions::default(), Some(&mut rec)).unwrap();

    assert_eq!(out.urls, SAMPLE_EXPECTED.to_vec());
    assert_eq!(out.source, "canned");
    assert_eq!(out.page_len, SAMPLE_PAGE.chars().count());
    assert!(out.diagnostics.is_none());

    assert_eq!(rec.events.first(), Some(&ProgressEvent::Begin("https://directory.example/".into())));
    assert_eq!(steps(&rec.events), vec![30, 50, 80, 90, 100]);
    assert!(rec.events.contains(&ProgressEvent::Log("Found 3 Google Maps URLs".into())));
    assert_eq!(rec.events.last(), Some(&ProgressEvent::Finish));
}

#[test]
fn empty_result_carries_diagnostics() {
    let page = "<html><p>Our business location: see address below.</p>\
                <a href=\"https://example.com/about\">about</a></html>";
    let src = Canned(Ok(page.into()));
    let mut rec = RecordingProgress::default();
    let out = run_with_source("https://example.com/", &src, &AppOptions::default(), Some(&mut rec)).unwrap();

    assert!(out.is_empty());
    let diag = out.diagnostics.expect("diagnostics when nothing was found");
    assert_eq!(diag.content_len, page.chars().count());
    assert_eq!(diag.keyword_count("business"), 1);
    assert_eq!(diag.keyword_count("address"), 1);
    assert_eq!(diag.keyword_count("place"), 0);
    assert_eq!(diag.early_urls, vec!["https://example.com/about"]);
    assert_eq!(diag.raw_hits, 0);
    let shown = diag.to_string();
    assert!(shown.contains("'business': 1"));
    assert!(shown.contains("  https://example.com/about"));
    assert!(rec.events.contains(&ProgressEvent::Warn("No Google Maps URLs found on this page".into())));
}

#[test]
fn debug_mode_always_has_diagnostics() {
    let mut opts = AppOptions::default();
    opts.debug = true;
    let out = run_on_text(SAMPLE_PAGE, SAMPLE_LABEL, &opts, Some(&mut NullProgress));

    assert_eq!(out.urls.len(), 3);
    let diag = out.diagnostics.expect("debug diagnostics");
    assert!(diag.raw_hits >= 3);
    assert!(!diag.first_raw.is_empty());
    assert!(diag.sample.chars().count() <= 1500);
}

#[test]
fn fetch_error_is_reported_and_returned() {
    let src = Canned(Err(FetchError::Timeout("https://slow.example/".into())));
    let mut rec = RecordingProgress::default();
    let res = run_with_source("https://slow.example/", &src, &AppOptions::default(), Some(&mut rec));

    assert_eq!(res.unwrap_err(), FetchError::Timeout("https://slow.example/".into()));
    assert_eq!(steps(&rec.events), vec![30]);
    assert!(matches!(
        &rec.events[rec.events.len() - 2],
        ProgressEvent::Warn(m) if m.starts_with("Error: request timeout")
    ));
    assert_eq!(rec.events.last(), Some(&ProgressEvent::Finish));
}

#[test]
fn invalid_url_never_reaches_the_source() {
    struct Panics;
    impl PageSource for Panics {
        fn name(&self) -> &'static str { "panics" }
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            panic!("fetched {url}")
        }
    }

    let res = run_with_source("not a url", &Panics, &AppOptions::default(), None);
    assert!(matches!(res, Err(FetchError::InvalidUrl(_))));
}

#[test]
fn progress_over_a_channel() {
    let (tx, rx) = mpsc::channel();
    let mut progress = ChannelProgress::new(tx);
    let out = run_on_text(SAMPLE_PAGE, SAMPLE_LABEL, &AppOptions::default(), Some(&mut progress));
    drop(progress);

    let events: Vec<ProgressEvent> = rx.iter().collect();
    assert_eq!(out.source, SAMPLE_LABEL);
    assert_eq!(events.first(), Some(&ProgressEvent::Begin(SAMPLE_LABEL.into())));
    assert_eq!(steps(&events), vec![50, 80, 90, 100]);
    assert_eq!(events.last(), Some(&ProgressEvent::Finish));
}

// src/fetch/http.rs
use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue},
};
use url::Url;

use super::{FetchError, PageSource};
use crate::config::options::FetchOptions;

/// Plain GET with browser-like headers. No JavaScript, so pages that build
/// their result list client-side come back thin.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        Self::with_timeout(opts, Duration::from_secs(opts.timeout_secs))
    }

    pub fn with_timeout(opts: &FetchOptions, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| classify(e, url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { code: status.as_u16(), url: s!(url) });
        }
        resp.text().map_err(|e| classify(e, url))
    }
}

fn classify(e: reqwest::Error, url: &str) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(s!(url))
    } else if e.is_connect() {
        FetchError::Connect(e.to_string())
    } else if let Some(status) = e.status() {
        FetchError::Status { code: status.as_u16(), url: s!(url) }
    } else {
        FetchError::Request(e.to_string())
    }
}

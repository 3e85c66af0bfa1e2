// src/details/mod.rs
//
// Business details from a single listing or business page: name, address,
// phone, website and (optionally, from the website itself) an email.

pub mod strategies;

use std::time::Duration;

use scraper::Html;

use crate::{
    config::{
        consts::EMAIL_PAGE_TIMEOUT_SECS,
        options::{AppOptions, FetchOptions},
    },
    core::{
        sanitize::{clean_address, clean_business_name, clean_phone_number, clean_website_url},
        url::is_google_local_search_url,
    },
    emails::find_email,
    fetch::{FetchError, HttpSource, PageSource, fetch_page},
    progress::{Progress, reborrow},
    runner::check_input_url,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusinessDetails {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

pub const FIELD_LABELS: [&str; 5] = ["Business Name", "Address", "Phone", "Website", "Email"];

fn keep(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl BusinessDetails {
    /// Resolve every field from `html`, cleaned.
    pub fn from_html(html: &str) -> Self {
        let doc = Html::parse_document(html);
        let get = |chain: &[strategies::Strategy]| strategies::resolve(&doc, chain);

        Self {
            name: get(strategies::NAME).map(|s| clean_business_name(&s)).and_then(keep),
            address: get(strategies::ADDRESS).map(|s| clean_address(&s)).and_then(keep),
            phone: get(strategies::PHONE).map(|s| clean_phone_number(&s)).and_then(keep),
            website: get(strategies::WEBSITE).map(|s| clean_website_url(&s)).and_then(keep),
            email: get(strategies::EMAIL),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.website.is_none()
            && self.email.is_none()
    }

    /// Values in `FIELD_LABELS` order; missing fields are "".
    pub fn values(&self) -> [&str; 5] {
        [
            self.name.as_deref().unwrap_or(""),
            self.address.as_deref().unwrap_or(""),
            self.phone.as_deref().unwrap_or(""),
            self.website.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or(""),
        ]
    }

    /// Fill in `email` from the business website when the page didn't list one.
    pub fn fill_email(&mut self, source: &dyn PageSource) {
        if self.email.is_some() {
            return;
        }
        if let Some(site) = self.website.as_deref() {
            self.email = find_email(source, site);
        }
    }

    /// `fill_email` over plain HTTP with a short timeout. A client that
    /// can't be built just means no email.
    pub fn lookup_email(&mut self, fetch: &FetchOptions) {
        match HttpSource::with_timeout(fetch, Duration::from_secs(EMAIL_PAGE_TIMEOUT_SECS)) {
            Ok(site) => self.fill_email(&site),
            Err(e) => logw!("Details: email lookup skipped: {e}"),
        }
    }
}

/// Fetch `url` and pull business details out of it.
pub fn fetch_details(
    url: &str,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BusinessDetails, FetchError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(url);
    }
    let res = check_input_url(url).and_then(|u| {
        let page = fetch_page(u, &opts.fetch, reborrow(&mut progress))?;
        if let Some(p) = progress.as_deref_mut() {
            if is_google_local_search_url(u) {
                p.step(80, "Reading the first local search result...");
            } else {
                p.step(80, "Reading business details...");
            }
        }
        let mut details = BusinessDetails::from_html(&page.html);

        if opts.lookup_email && details.email.is_none() && details.website.is_some() {
            if let Some(p) = progress.as_deref_mut() {
                p.step(90, "Looking for an email on the business website...");
            }
            details.lookup_email(&opts.fetch);
        }
        Ok(details)
    });

    if let Some(p) = progress.as_deref_mut() {
        match &res {
            Ok(d) if d.is_empty() => p.warn("No business details found on this page"),
            Ok(_) => p.step(100, "Details extracted"),
            Err(e) => p.warn(&format!("Error: {e}")),
        }
        p.finish();
    }
    res
}

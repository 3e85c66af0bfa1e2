// tests/emails.rs
use std::cell::RefCell;
use std::collections::HashMap;

use maps_scrape::emails::{extract_emails_from_text, find_email};
use maps_scrape::fetch::{FetchError, PageSource};

/// Serves canned pages and remembers what was asked for.
#[derive(Default)]
struct FakeSite {
    pages: HashMap<String, Result<String, FetchError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeSite {
    fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.into(), Ok(body.into()));
        self
    }

    fn fail(mut self, url: &str) -> Self {
        self.pages.insert(url.into(), Err(FetchError::Connect(url.into())));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PageSource for FakeSite {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(url.into());
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Status { code: 404, url: url.into() }))
    }
}

#[test]
fn business_addresses_sort_first() {
    let found = extract_emails_from_text("Write to jane.doe@company.org or info@business.com");
    assert_eq!(found, vec!["info@business.com", "jane.doe@company.org"]);
}

#[test]
fn freemail_and_noreply_are_dropped() {
    let text = "Contact us at info@business.com or sales@company.org. \
                Also try support@testmail.gmail.com or noreply@example.com";
    assert_eq!(extract_emails_from_text(text), vec!["info@business.com", "sales@company.org"]);
}

#[test]
fn addresses_are_lowercased_and_unique() {
    assert_eq!(extract_emails_from_text("INFO@Biz.com info@biz.com"), vec!["info@biz.com"]);
    assert!(extract_emails_from_text("no addresses here").is_empty());
}

#[test]
fn landing_page_is_enough() {
    let site = FakeSite::default().page("https://shop.example/", "<p>hello@shop.example</p>");
    assert_eq!(find_email(&site, "https://shop.example/").as_deref(), Some("hello@shop.example"));
    assert_eq!(site.calls(), vec!["https://shop.example/"]);
}

#[test]
fn contact_pages_are_tried_in_order() {
    let site = FakeSite::default()
        .page("https://shop.example", "<p>nothing</p>")
        .page("https://shop.example/contact", "<p>still nothing</p>")
        .page("https://shop.example/about", "<p>owner@shop.example</p>");

    assert_eq!(find_email(&site, "https://shop.example").as_deref(), Some("owner@shop.example"));
    assert_eq!(
        site.calls(),
        vec![
            "https://shop.example",
            "https://shop.example/contact",
            "https://shop.example/contact-us",
            "https://shop.example/about",
        ]
    );
}

#[test]
fn unreachable_site_gives_up_quietly() {
    let site = FakeSite::default().fail("https://down.example");
    assert_eq!(find_email(&site, "https://down.example"), None);
    assert_eq!(site.calls().len(), 1);
}

#[test]
fn nothing_anywhere() {
    let site = FakeSite::default().page("https://quiet.example/", "<p>no contact</p>");
    assert_eq!(find_email(&site, "https://quiet.example/"), None);
    assert_eq!(site.calls().len(), 4);
    assert_eq!(site.calls()[1], "https://quiet.example/contact");
}

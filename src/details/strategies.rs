// src/details/strategies.rs
//
// Field lookups over a parsed page. Each strategy is a plain function that
// either finds a value or gives up; the chains in `mod.rs` try them in
// order. Nothing here is tied to one site's class names.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::{core::sanitize::normalize_ws, emails::extract_emails_from_text};

pub type Strategy = fn(&Html) -> Option<String>;

fn nonempty(s: String) -> Option<String> {
    let s = normalize_ws(&s);
    if s.is_empty() { None } else { Some(s) }
}

fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(css).ok()?;
    doc.select(&sel).next()
}

fn text_of(doc: &Html, css: &str) -> Option<String> {
    let el = first(doc, css)?;
    nonempty(el.text().collect::<Vec<_>>().join(" "))
}

fn attr_of(doc: &Html, css: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(css).ok()?;
    doc.select(&sel)
        .filter_map(|el| el.value().attr(attr))
        .find_map(|v| nonempty(s!(v)))
}

fn page_text(doc: &Html) -> String {
    doc.root_element().text().collect::<Vec<_>>().join(" ")
}

fn regex(src: &str) -> Option<Regex> {
    Regex::new(src)
        .map_err(|e| loge!("Details: bad pattern {src}: {e}"))
        .ok()
}

static ADDRESS_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| regex(r"(?i)\bAddress:\s*([^\n|]{5,120}?)\s*(?:\||Phone|Hours|$)"));
static PHONE_TEXT: LazyLock<Option<Regex>> =
    LazyLock::new(|| regex(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]\d{3}[-.\s]\d{4}\b"));

/* ---------------- name ---------------- */

pub fn og_title(doc: &Html) -> Option<String> {
    attr_of(doc, r#"meta[property="og:title"]"#, "content")
}

pub fn itemprop_name(doc: &Html) -> Option<String> {
    text_of(doc, r#"[itemprop="name"]"#)
        .or_else(|| attr_of(doc, r#"meta[itemprop="name"]"#, "content"))
}

pub fn heading(doc: &Html) -> Option<String> {
    text_of(doc, "h1")
}

pub fn title(doc: &Html) -> Option<String> {
    text_of(doc, "title")
}

/* ---------------- address ---------------- */

pub fn itemprop_address(doc: &Html) -> Option<String> {
    text_of(doc, r#"[itemprop="address"]"#)
        .or_else(|| text_of(doc, r#"[itemprop="streetAddress"]"#))
}

pub fn address_element(doc: &Html) -> Option<String> {
    text_of(doc, "address")
}

pub fn address_label(doc: &Html) -> Option<String> {
    let re = ADDRESS_LINE.as_ref()?;
    let text = normalize_ws(&page_text(doc));
    re.captures(&text)
        .and_then(|c| c.get(1))
        .and_then(|m| nonempty(s!(m.as_str())))
}

/* ---------------- phone ---------------- */

pub fn tel_link(doc: &Html) -> Option<String> {
    attr_of(doc, r#"a[href^="tel:"]"#, "href")
        .map(|h| s!(h.trim_start_matches("tel:")))
}

pub fn itemprop_telephone(doc: &Html) -> Option<String> {
    text_of(doc, r#"[itemprop="telephone"]"#)
        .or_else(|| attr_of(doc, "[data-phone-number]", "data-phone-number"))
}

pub fn phone_in_text(doc: &Html) -> Option<String> {
    let re = PHONE_TEXT.as_ref()?;
    re.find(&page_text(doc)).map(|m| s!(m.as_str()))
}

/* ---------------- website ---------------- */

pub fn itemprop_url(doc: &Html) -> Option<String> {
    attr_of(doc, r#"a[itemprop="url"]"#, "href")
        .or_else(|| attr_of(doc, r#"link[itemprop="url"]"#, "href"))
}

/// Outbound links on Google result pages go through `/url?q=`.
pub fn redirect_link(doc: &Html) -> Option<String> {
    attr_of(doc, r#"a[href*="/url?q=http"]"#, "href").map(|h| {
        if h.starts_with('/') { join!("https://www.google.com", &h) } else { h }
    })
}

pub fn og_url(doc: &Html) -> Option<String> {
    attr_of(doc, r#"meta[property="og:url"]"#, "content")
}

/* ---------------- email ---------------- */

pub fn mailto_link(doc: &Html) -> Option<String> {
    let href = attr_of(doc, r#"a[href^="mailto:"]"#, "href")?;
    let addr = href.trim_start_matches("mailto:");
    let addr = addr.split('?').next().unwrap_or(addr);
    extract_emails_from_text(addr).into_iter().next()
}

pub fn itemprop_email(doc: &Html) -> Option<String> {
    text_of(doc, r#"[itemprop="email"]"#)
        .and_then(|t| extract_emails_from_text(&t).into_iter().next())
}

pub fn email_in_text(doc: &Html) -> Option<String> {
    extract_emails_from_text(&page_text(doc)).into_iter().next()
}

/* ---------------- chains ---------------- */

pub const NAME: &[Strategy] = &[itemprop_name, og_title, heading, title];
pub const ADDRESS: &[Strategy] = &[itemprop_address, address_element, address_label];
pub const PHONE: &[Strategy] = &[tel_link, itemprop_telephone, phone_in_text];
pub const WEBSITE: &[Strategy] = &[itemprop_url, redirect_link, og_url];
pub const EMAIL: &[Strategy] = &[mailto_link, itemprop_email, email_in_text];

/// First value any strategy in `chain` produces.
pub fn resolve(doc: &Html, chain: &[Strategy]) -> Option<String> {
    chain.iter().find_map(|f| f(doc))
}

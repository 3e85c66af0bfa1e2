// tests/details.rs
use maps_scrape::config::options::{AppOptions, FetchOptions};
use maps_scrape::details::{BusinessDetails, FIELD_LABELS, fetch_details};
use maps_scrape::fetch::{FetchError, PageSource};
use maps_scrape::progress::{ProgressEvent, RecordingProgress};

const RICH: &str = r#"
<html>
  <head>
    <title>Joe's Pizza | Best in town</title>
    <meta property="og:title" content="Joe's Pizza">
  </head>
  <body>
    <h1>Welcome!</h1>
    <span itemprop="address">123 Main St,
        Springfield</span>
    <a href="tel:+1-555-123-4567">Call us</a>
    <a itemprop="url" href="https://joespizza.com">Website</a>
    <a href="mailto:Info@JoesPizza.com?subject=Order">Mail</a>
  </body>
</html>
"#;

const RESULTS_PAGE: &str = r#"
<html>
  <head><title>Corner Cafe - Google Search</title></head>
  <body>
    <div>Address: 9 Elm Rd, Townsville | Phone: (555) 987-6543</div>
    <a href="/url?q=https://cornercafe.example/&amp;sa=U">cornercafe.example</a>
  </body>
</html>
"#;

struct OneEmail;

impl PageSource for OneEmail {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match url {
            "https://cornercafe.example/" => Ok("<footer>hello@cornercafe.example</footer>".into()),
            _ => Err(FetchError::Status { code: 404, url: url.into() }),
        }
    }
}

#[test]
fn structured_markup() {
    let d = BusinessDetails::from_html(RICH);
    assert_eq!(d.name.as_deref(), Some("Joe's Pizza"));
    assert_eq!(d.address.as_deref(), Some("123 Main St, Springfield"));
    assert_eq!(d.phone.as_deref(), Some("(555) 123-4567"));
    assert_eq!(d.website.as_deref(), Some("https://joespizza.com"));
    assert_eq!(d.email.as_deref(), Some("info@joespizza.com"));
}

#[test]
fn search_result_fallbacks() {
    let d = BusinessDetails::from_html(RESULTS_PAGE);
    assert_eq!(d.name.as_deref(), Some("Corner Cafe"));
    assert_eq!(d.address.as_deref(), Some("9 Elm Rd, Townsville"));
    assert_eq!(d.phone.as_deref(), Some("(555) 987-6543"));
    assert_eq!(d.website.as_deref(), Some("https://cornercafe.example/"));
    assert_eq!(d.email, None);
}

#[test]
fn empty_page_has_no_details() {
    let d = BusinessDetails::from_html("<html><body><p>Nothing to see.</p></body></html>");
    assert!(d.is_empty());
    assert_eq!(d.values(), [""; 5]);
}

#[test]
fn values_line_up_with_labels() {
    let d = BusinessDetails::from_html(RESULTS_PAGE);
    let v = d.values();
    assert_eq!(FIELD_LABELS.len(), v.len());
    assert_eq!(v[0], "Corner Cafe");
    assert_eq!(v[3], "https://cornercafe.example/");
    assert_eq!(v[4], "");
}

#[test]
fn email_from_the_business_website() {
    let mut d = BusinessDetails::from_html(RESULTS_PAGE);
    d.fill_email(&OneEmail);
    assert_eq!(d.email.as_deref(), Some("hello@cornercafe.example"));
}

#[test]
fn listed_email_is_not_replaced() {
    let mut d = BusinessDetails::from_html(RICH);
    d.fill_email(&OneEmail);
    assert_eq!(d.email.as_deref(), Some("info@joespizza.com"));
}

#[test]
fn bad_input_url_fails_before_fetching() {
    let mut rec = RecordingProgress::default();
    let res = fetch_details("ftp://example.com", &AppOptions::default(), Some(&mut rec));

    assert!(matches!(res, Err(FetchError::InvalidUrl(_))));
    assert_eq!(rec.events.first(), Some(&ProgressEvent::Begin("ftp://example.com".into())));
    assert!(matches!(rec.events.get(1), Some(ProgressEvent::Warn(m)) if m.starts_with("Error: invalid URL")));
    assert_eq!(rec.events.last(), Some(&ProgressEvent::Finish));
}

#[test]
fn failed_email_lookup_keeps_other_fields() {
    let mut d = BusinessDetails::from_html(RESULTS_PAGE);
    let before = d.clone();

    // A user agent with a line break can't go into a header, so the client
    // for the website visit never gets built.
    let fetch = FetchOptions { user_agent: "broken\nagent".into(), ..FetchOptions::default() };
    d.lookup_email(&fetch);

    assert_eq!(d, before);
    assert_eq!(d.name.as_deref(), Some("Corner Cafe"));
    assert_eq!(d.email, None);
}

// tests/extract_scenarios.rs
//
// End-to-end extraction over small pages: text in, Maps URLs out.

use maps_scrape::extract::{ValidationRules, extract_maps_urls, extract_with_report, find_candidates};
use maps_scrape::sample::{SAMPLE_EXPECTED, SAMPLE_PAGE};

#[test]
fn place_link_in_href() {
    let html = r#"<a href="https://www.google.com/maps/place/Pizza+Palace/@40.7128,-74.0060,17z">View</a>"#;
    assert_eq!(
        extract_maps_urls(html),
        vec!["https://www.google.com/maps/place/Pizza+Palace/@40.7128,-74.0060,17z"]
    );
}

#[test]
fn maps_host_query_keeps_full_href() {
    let html = r#"<a href="https://maps.google.com/maps?q=coffee+shop&ll=40.7580,-73.9855&z=15">Maps</a>"#;
    assert_eq!(
        extract_maps_urls(html),
        vec!["https://maps.google.com/maps?q=coffee+shop&ll=40.7580,-73.9855&z=15"]
    );
}

#[test]
fn short_link() {
    let html = r#"<a href="https://goo.gl/maps/abc123xyz">Link</a>"#;
    assert_eq!(extract_maps_urls(html), vec!["https://goo.gl/maps/abc123xyz"]);
}

#[test]
fn unrelated_text_yields_nothing() {
    let html = r#"<p>Visit <a href="https://example.com/contact">our shop</a> today.</p>"#;
    assert!(extract_maps_urls(html).is_empty());
    assert!(extract_maps_urls("").is_empty());
}

#[test]
fn repeated_link_collapses_to_one() {
    let link = "https://www.google.com/maps/place/Cafe+Uno/@51.5,-0.12,15z";
    let html = format!(
        r#"<a href="{link}">Map</a> <div data-url='{link}'></div> see {link}"#
    );
    assert_eq!(extract_maps_urls(&html), vec![link]);
}

#[test]
fn results_keep_page_order() {
    let html = r#"
        <a href="https://goo.gl/maps/zzz999">Z</a>
        <a href="https://www.google.com/maps/place/Alpha/@1.0,2.0,10z">A</a>
        <a href="https://goo.gl/maps/zzz999">Z again</a>
        <a href="https://www.google.com/maps/dir/Here/There/@3.0,4.0,12z">Route</a>
    "#;
    assert_eq!(
        extract_maps_urls(html),
        vec![
            "https://goo.gl/maps/zzz999",
            "https://www.google.com/maps/place/Alpha/@1.0,2.0,10z",
            "https://www.google.com/maps/dir/Here/There/@3.0,4.0,12z",
        ]
    );
}

#[test]
fn every_result_is_a_unique_http_maps_url() {
    let urls = extract_maps_urls(SAMPLE_PAGE);
    for u in &urls {
        assert!(u.starts_with("http://") || u.starts_with("https://"), "{u}");
        assert!(
            ["google.com/maps", "maps.google.com", "goo.gl/maps", "maps.app.goo.gl"]
                .iter()
                .any(|i| u.contains(i)),
            "{u}"
        );
        assert_eq!(urls.iter().filter(|x| *x == u).count(), 1);
    }
}

#[test]
fn sample_page_yields_all_three_listings() {
    assert_eq!(extract_maps_urls(SAMPLE_PAGE), SAMPLE_EXPECTED.to_vec());
}

#[test]
fn html_escaped_ampersands_are_unescaped() {
    let html = r#"<a href="https://maps.google.com/maps?q=bakery&amp;ll=48.85,2.35&amp;z=14">Map</a>"#;
    assert_eq!(
        extract_maps_urls(html),
        vec!["https://maps.google.com/maps?q=bakery&ll=48.85,2.35&z=14"]
    );
}

#[test]
fn percent_encoded_link_is_decoded() {
    let html = "redirect=https%3A%2F%2Fwww.google.com%2Fmaps%2Fplace%2FHarbor+Grill end";
    assert_eq!(
        extract_maps_urls(html),
        vec!["https://www.google.com/maps/place/Harbor+Grill"]
    );

    let spaced = "r=https%3A%2F%2Fwww.google.com%2Fmaps%2Fplace%2FHarbor%20Grill%2F%4040.1%2C-73.2 end";
    let urls = extract_maps_urls(spaced);
    assert_eq!(urls, vec!["https://www.google.com/maps/place/Harbor%20Grill/@40.1,-73.2"]);
    assert!(urls.iter().all(|u| !u.chars().any(char::is_whitespace)));
}

#[test]
fn trailing_punctuation_is_dropped() {
    let text = "Find us (https://www.google.com/maps/place/Deli+Max/@40.1,-73.2,16z), or call.";
    assert_eq!(
        extract_maps_urls(text),
        vec!["https://www.google.com/maps/place/Deli+Max/@40.1,-73.2,16z"]
    );
}

#[test]
fn viewport_links() {
    let html = r#"<a href="https://www.google.com/maps/@37.7749,-122.4194,14z">view</a>"#;
    assert_eq!(
        extract_maps_urls(html),
        vec!["https://www.google.com/maps/@37.7749,-122.4194,14z"]
    );
}

#[test]
fn long_app_links_pass_on_length() {
    let short = r#"<a href="https://maps.app.goo.gl/AbCd123">share</a>"#;
    assert!(extract_maps_urls(short).is_empty());

    let long = r#"<a href="https://maps.app.goo.gl/AbCdEfGh12345?g_st=ic&utm_source=share">share</a>"#;
    assert_eq!(
        extract_maps_urls(long),
        vec!["https://maps.app.goo.gl/AbCdEfGh12345?g_st=ic&utm_source=share"]
    );
}

#[test]
fn report_counts_hits_and_rejections() {
    // The second link matches a pattern but is too vague to keep.
    let html = r#"
        <a href="https://www.google.com/maps/place/Alpha/@1.0,2.0,10z">A</a>
        <a href="https://maps.google.com/?q=1">?</a>
    "#;
    let report = extract_with_report(html, &ValidationRules::default());

    assert_eq!(report.urls, vec!["https://www.google.com/maps/place/Alpha/@1.0,2.0,10z"]);
    assert_eq!(report.candidates.len(), 2);
    assert_eq!(report.rejected().count(), 1);
    assert!(report.raw_hits() >= 2);

    let place = report.pattern_hits.iter().find(|(n, _)| *n == "place").map(|(_, c)| *c);
    assert_eq!(place, Some(1));
}

#[test]
fn looser_rules_keep_more() {
    let html = r#"<a href="https://maps.google.com/?q=1">?</a>"#;
    assert!(extract_with_report(html, &ValidationRules::default()).urls.is_empty());

    let loose = ValidationRules { min_len: 10, fallback_len: 20 };
    assert_eq!(
        extract_with_report(html, &loose).urls,
        vec!["https://maps.google.com/?q=1"]
    );
}

#[test]
fn candidates_are_unique_and_in_text_order() {
    let html = r#"
        <a href="https://goo.gl/maps/second1">b</a>
        https://goo.gl/maps/second1
        <a href="https://maps.google.com/maps?q=x">a</a>
    "#;
    let m = find_candidates(html);
    assert_eq!(
        m.raw,
        vec!["https://goo.gl/maps/second1", "https://maps.google.com/maps?q=x"]
    );
    assert!(m.total_hits() > m.raw.len());
}

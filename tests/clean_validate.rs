// tests/clean_validate.rs
//
// The three pure stages on their own: cleaner, validator, dedupe.

use maps_scrape::extract::{ValidationRules, clean_url, dedupe, has_encoded_scheme, is_maps_url};

#[test]
fn cleaner_cuts_at_quotes_and_brackets() {
    assert_eq!(
        clean_url("  https://maps.google.com/maps?q=x\" class=\"link\"").as_deref(),
        Some("https://maps.google.com/maps?q=x")
    );
    assert_eq!(
        clean_url("https://goo.gl/maps/abc</a>").as_deref(),
        Some("https://goo.gl/maps/abc")
    );
    assert_eq!(
        clean_url("https://goo.gl/maps/abc)").as_deref(),
        Some("https://goo.gl/maps/abc")
    );
}

#[test]
fn cleaner_keeps_inner_commas_drops_trailing_ones() {
    let coords = "https://www.google.com/maps/@40.7128,-74.0060,17z";
    assert_eq!(clean_url(coords).as_deref(), Some(coords));
    assert_eq!(clean_url(&format!("{coords},")).as_deref(), Some(coords));
    assert_eq!(clean_url(&format!("{coords}; next")).as_deref(), Some(coords));
    assert_eq!(clean_url("https://a.example/x;y").as_deref(), Some("https://a.example/x;y"));
}

#[test]
fn cleaner_requires_http_scheme() {
    assert_eq!(clean_url(""), None);
    assert_eq!(clean_url("   "), None);
    assert_eq!(clean_url("www.google.com/maps/place/X"), None);
    assert_eq!(clean_url("ftp://maps.google.com/maps"), None);
    assert_eq!(clean_url("\"https://maps.google.com/maps"), None);
}

#[test]
fn cleaner_decodes_fully_encoded_links() {
    assert!(has_encoded_scheme("HTTPS%3A%2F%2Fmaps.google.com"));
    assert!(has_encoded_scheme("http%3a//x"));
    assert!(!has_encoded_scheme("https://maps.google.com/?q=a%3Ab"));

    assert_eq!(
        clean_url("https%3A%2F%2Fmaps.google.com%2Fmaps%3Fq%3Dx").as_deref(),
        Some("https://maps.google.com/maps?q=x")
    );
    assert_eq!(
        clean_url("https%3A%2F%2Fgoo.gl%2Fmaps%2Fabc%0Anext").as_deref(),
        Some("https://goo.gl/maps/abc")
    );
    // Plain links keep their escapes.
    assert_eq!(
        clean_url("https://maps.google.com/maps?q=a%20b").as_deref(),
        Some("https://maps.google.com/maps?q=a%20b")
    );
}

#[test]
fn validator_wants_indicator_and_location() {
    assert!(is_maps_url("https://www.google.com/maps/place/X"));
    assert!(is_maps_url("https://goo.gl/maps/x"));
    assert!(is_maps_url("https://maps.google.com/maps/search/pizza"));

    assert!(!is_maps_url("https://example.com/place/something/@1,2"));
    assert!(!is_maps_url("https://google.com/maps"));
    assert!(!is_maps_url("http://g.co/maps/@"));
}

#[test]
fn validator_falls_back_to_length() {
    let long = "https://maps.google.com/maps?q=coffee+shop&ll=40.7580,-73.9855&z=15";
    assert!(long.chars().count() > 50);
    assert!(is_maps_url(long));

    let short = "https://maps.google.com/maps?q=coffee";
    assert!(short.chars().count() <= 50);
    assert!(!is_maps_url(short));
}

#[test]
fn validator_ignores_case_and_sees_through_encoding() {
    assert!(is_maps_url("HTTPS://WWW.GOOGLE.COM/MAPS/PLACE/X"));
    assert!(is_maps_url("https://example.com/r?u=https%3A%2F%2Fgoo.gl%2Fmaps%2Fabc"));
}

#[test]
fn validator_counts_characters() {
    let rules = ValidationRules { min_len: 25, fallback_len: 50 };
    // 23 characters, 26 bytes.
    let url = "https://goo.gl/maps/ééé";
    assert_eq!(url.chars().count(), 23);
    assert!(url.len() >= 25);
    assert!(!rules.is_maps_url(url));
}

#[test]
fn dedupe_keeps_first_occurrence() {
    let urls = ["B", "A", "B", "C"].map(String::from);
    let once = dedupe(urls);
    assert_eq!(once, vec!["B", "A", "C"]);
    assert_eq!(dedupe(once.clone()), once);
    assert_eq!(dedupe(["b", "B", "b/"].map(String::from)), vec!["b", "B", "b/"]);
    assert!(dedupe(Vec::<String>::new()).is_empty());
}

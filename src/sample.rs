// src/sample.rs
//
// Built-in directory page for "Test with sample data": three listings, one
// per common link shape (place URL, maps host query, goo.gl short link).

pub const SAMPLE_LABEL: &str = "sample business directory";

pub const SAMPLE_PAGE: &str = r#"
<html>
<head><title>Local Business Directory</title></head>
<body>
<h1>Local Businesses</h1>
<div class="business">
    <h2>Pizza Palace Downtown</h2>
    <p>Best pizza in the city!</p>
    <a href="https://www.google.com/maps/place/Pizza+Palace/@40.7128,-74.0060,17z/data=!3m1!4b1">View on Maps</a>
</div>
<div class="business">
    <h2>Coffee Corner Cafe</h2>
    <p>Great coffee and atmosphere</p>
    <a href="https://maps.google.com/maps?q=coffee+shop&ll=40.7580,-73.9855&z=15">Google Maps</a>
</div>
<div class="business">
    <h2>Downtown Auto Repair</h2>
    <p>Reliable car service since 1985</p>
    <a href="https://goo.gl/maps/abc123xyz">Maps Link</a>
</div>
</body>
</html>
"#;

/// URLs the sample page must yield, in page order.
pub const SAMPLE_EXPECTED: [&str; 3] = [
    "https://www.google.com/maps/place/Pizza+Palace/@40.7128,-74.0060,17z/data=!3m1!4b1",
    "https://maps.google.com/maps?q=coffee+shop&ll=40.7580,-73.9855&z=15",
    "https://goo.gl/maps/abc123xyz",
];

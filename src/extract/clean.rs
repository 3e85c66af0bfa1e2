// src/extract/clean.rs

/// Cut the URL here, wherever they appear.
const HARD_DELIMS: [char; 8] = ['"', '\'', '<', '>', '}', ')', ']', '\\'];

/// Cut only when trailing: `,` and `;` occur inside real Maps URLs
/// (`@40.71,-74.00,17z`).
const SOFT_DELIMS: [char; 2] = [',', ';'];

fn is_delim(c: char) -> bool {
    HARD_DELIMS.contains(&c) || SOFT_DELIMS.contains(&c)
}

/// `http%3A…` / `https%3A…`: the whole link is percent-encoded.
pub fn has_encoded_scheme(s: &str) -> bool {
    let head: String = s.chars().take(8).collect::<String>().to_ascii_lowercase();
    head.starts_with("http%3a") || head.starts_with("https%3a")
}

/// Lenient percent-decoding; invalid UTF-8 becomes U+FFFD.
pub fn percent_decode_lossy(s: &str) -> String {
    let bytes = urlencoding::decode_binary(s.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Index of the first delimiter that ends the URL, if any. Whitespace
/// always ends it.
fn cut_point(s: &str) -> Option<usize> {
    let mut it = s.char_indices().peekable();
    while let Some((i, c)) = it.next() {
        if HARD_DELIMS.contains(&c) || c.is_whitespace() {
            return Some(i);
        }
        if SOFT_DELIMS.contains(&c) {
            match it.peek() {
                None => return Some(i),
                Some(&(_, next)) if next.is_whitespace() || is_delim(next) => return Some(i),
                _ => {}
            }
        }
    }
    None
}

/// Clean one raw candidate. Returns None unless the result is an
/// `http://` / `https://` URL.
pub fn clean_url(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Encoded spaces stay encoded; a bare space would end the URL.
    let decoded = if has_encoded_scheme(trimmed) {
        percent_decode_lossy(trimmed).replace(' ', "%20")
    } else {
        s!(trimmed)
    };
    let unescaped = crate::core::sanitize::normalize_entities(&decoded);

    let end = cut_point(&unescaped).unwrap_or(unescaped.len());
    let url = unescaped[..end].trim();

    if url.starts_with("http://") || url.starts_with("https://") {
        Some(s!(url))
    } else {
        None
    }
}

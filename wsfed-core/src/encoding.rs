//! Encoding utilities — URL encoding and query string parsing.
//!
//! Outbound values use `application/x-www-form-urlencoded` rules via
//! `url::form_urlencoded`, with escapes rendered in lowercase hex
//! (`:` becomes `%3a`) to match what WS-Federation identity providers
//! historically emit and compare against.

use url::form_urlencoded;

/// Form-urlencode a single name or value, lowercase hex escapes.
pub fn url_encode(value: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
    lowercase_escapes(&encoded)
}

/// Render pairs as `name=value&name=value`, in iteration order.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", url_encode(name), url_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into `(name, values)` groups.
///
/// Groups appear in the order their name is first seen; values keep
/// their relative order. Names and values are percent-decoded and `+`
/// decodes to a space. A single leading `?` is ignored, as are pairs
/// with an empty name.
pub fn parse_query(query: &str) -> Vec<(String, Vec<String>)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        if name.is_empty() {
            tracing::debug!(value = %value, "dropping query pair with empty name");
            continue;
        }
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value.into_owned()),
            None => groups.push((name.into_owned(), vec![value.into_owned()])),
        }
    }

    groups
}

fn lowercase_escapes(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut hex_digits_left = 0;
    for c in encoded.chars() {
        if hex_digits_left > 0 {
            out.push(c.to_ascii_lowercase());
            hex_digits_left -= 1;
        } else {
            if c == '%' {
                hex_digits_left = 2;
            }
            out.push(c);
        }
    }
    out
}

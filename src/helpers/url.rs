//! URL helper functions

use lazy_static::lazy_static;
use percent_encoding::percent_decode_str;
use regex::Regex;

lazy_static! {
    /// A URI scheme (`https:`, `data:`) or a protocol-relative `//` prefix
    static ref ABSOLUTE_URL: Regex = Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:|//)").unwrap();
}

/// Bytes whose escapes `decode_uri` leaves encoded
const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Check whether an image or link reference already carries a scheme or host
///
/// # Examples
/// ```ignore
/// is_absolute_url("https://cdn.example.com/a.png") // -> true
/// is_absolute_url("/static/images/a.png")          // -> false
/// ```
pub fn is_absolute_url(reference: &str) -> bool {
    ABSOLUTE_URL.is_match(reference)
}

/// Turn a reference into an absolute URL against the site base URL
///
/// Absolute references pass through verbatim. Relative ones are joined
/// to `base` with exactly one `/` between them.
///
/// # Examples
/// ```ignore
/// absolute_url("https://example.com/", "/static/a.png") // -> "https://example.com/static/a.png"
/// ```
pub fn absolute_url(base: &str, reference: &str) -> String {
    if is_absolute_url(reference) {
        return reference.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        reference.trim_start_matches('/')
    )
}

/// Percent-decode a URI path once, leaving reserved-character escapes intact
///
/// `%2F` stays `%2F` so a decoded slug never gains path separators it
/// did not have. Returns `None` when the decoded bytes are not UTF-8.
pub fn decode_uri(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(byte) = hex_byte(bytes.get(i + 1..i + 3)) {
                if URI_RESERVED.contains(&byte) {
                    out.push_str(&decode_chunk(&input[start..i])?);
                    out.push_str(&input[i..i + 3]);
                    i += 3;
                    start = i;
                    continue;
                }
            }
        }
        i += 1;
    }

    out.push_str(&decode_chunk(&input[start..])?);
    Some(out)
}

fn decode_chunk(chunk: &str) -> Option<String> {
    percent_decode_str(chunk)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

fn hex_byte(pair: Option<&[u8]>) -> Option<u8> {
    let pair = pair?;
    if !pair.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let digits = std::str::from_utf8(pair).ok()?;
    u8::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/a.png"));
        assert!(is_absolute_url("http://example.com/a.png"));
        assert!(is_absolute_url("//cdn.example.com/a.png"));
        assert!(is_absolute_url("data:image/png;base64,AAAA"));
        assert!(!is_absolute_url("/static/images/a.png"));
        assert!(!is_absolute_url("a.png"));
        // Contains "http" but has no scheme
        assert!(!is_absolute_url("/static/images/http-status.png"));
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("https://example.com", "/static/a.png"),
            "https://example.com/static/a.png"
        );
        assert_eq!(
            absolute_url("https://example.com/", "a.png"),
            "https://example.com/a.png"
        );
        assert_eq!(
            absolute_url("https://example.com", "https://cdn.example.org/b.png"),
            "https://cdn.example.org/b.png"
        );
    }

    #[test]
    fn test_decode_uri() {
        assert_eq!(decode_uri("hello%20world").as_deref(), Some("hello world"));
        assert_eq!(
            decode_uri("2024/%E4%BD%A0%E5%A5%BD").as_deref(),
            Some("2024/你好")
        );
        assert_eq!(decode_uri("plain/slug").as_deref(), Some("plain/slug"));
    }

    #[test]
    fn test_decode_uri_keeps_reserved_escapes() {
        assert_eq!(decode_uri("a%2Fb").as_deref(), Some("a%2Fb"));
        assert_eq!(decode_uri("q%3F%20x").as_deref(), Some("q%3F x"));
    }

    #[test]
    fn test_decode_uri_decodes_once() {
        assert_eq!(decode_uri("100%2525").as_deref(), Some("100%25"));
    }

    #[test]
    fn test_decode_uri_invalid_utf8() {
        assert_eq!(decode_uri("bad%FF"), None);
    }
}

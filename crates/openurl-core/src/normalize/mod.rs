//! Address normalization.
//!
//! Turns free-form text typed by a user ("naver.com", " https://x.org/a ")
//! into a canonical absolute URL, or rejects it with [`InvalidUrl`].
//! Everything here is pure and keeps no state between calls.

mod error;
mod scheme;

pub use error::{InvalidUrl, InvalidUrlKind};
pub use scheme::{apply_scheme, has_http_scheme};

use url::Url;

/// Normalizes raw user text into an absolute URL.
///
/// Trims the input, prefixes `https://` when no http(s) scheme is present and
/// parses the result. The returned [`Url`] serializes to its canonical form
/// (lower-cased scheme and host, `/` for an empty path).
///
/// # Examples
///
/// - `normalize(Some("naver.com"))` → `https://naver.com/`
/// - `normalize(Some("   "))` → `Err(InvalidUrl { kind: Empty, .. })`
pub fn normalize(raw: Option<&str>) -> Result<Url, InvalidUrl> {
    let input = raw.unwrap_or_default();
    if input.trim().is_empty() {
        return Err(InvalidUrl::empty(input));
    }
    let candidate = apply_scheme(raw);
    Url::parse(&candidate).map_err(|e| InvalidUrl::parse(input, e))
}

/// Like [`normalize`] but returns the canonical string.
pub fn normalize_str(raw: &str) -> Result<String, InvalidUrl> {
    normalize(Some(raw)).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https_and_trailing_slash() {
        assert_eq!(normalize_str("naver.com").unwrap(), "https://naver.com/");
    }

    #[test]
    fn full_url_is_unchanged() {
        assert_eq!(
            normalize_str("https://example.com/path?q=1").unwrap(),
            "https://example.com/path?q=1"
        );
        assert_eq!(
            normalize_str("  https://example.com/path?q=1 \n").unwrap(),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn http_scheme_is_not_upgraded() {
        assert_eq!(
            normalize_str("HTTP://Example.COM/Path").unwrap(),
            "http://example.com/Path"
        );
    }

    #[test]
    fn host_with_port_and_path() {
        assert_eq!(
            normalize_str("localhost:8080/status").unwrap(),
            "https://localhost:8080/status"
        );
    }

    #[test]
    fn empty_and_whitespace_rejected() {
        for raw in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = normalize(raw).unwrap_err();
            assert_eq!(err.kind, InvalidUrlKind::Empty, "input {raw:?}");
        }
    }

    #[test]
    fn spaces_in_host_rejected() {
        let err = normalize(Some("not a url!! ")).unwrap_err();
        assert!(matches!(err.kind, InvalidUrlKind::Parse(_)));
        assert_eq!(err.input, "not a url!! ");
    }

    #[test]
    fn scheme_without_host_rejected() {
        let err = normalize(Some("https://")).unwrap_err();
        assert_eq!(err.kind, InvalidUrlKind::Parse(url::ParseError::EmptyHost));
    }

    #[test]
    fn repeated_calls_are_independent() {
        let first = normalize_str("example.org").unwrap();
        assert!(normalize_str("bad host").is_err());
        let second = normalize_str("example.org").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn error_display_mentions_input() {
        let err = normalize(Some("")).unwrap_err();
        assert_eq!(err.to_string(), "invalid URL \"\": empty input");
    }
}

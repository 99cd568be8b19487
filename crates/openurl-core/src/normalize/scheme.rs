//! Scheme detection and prefixing.

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// True if `text` starts with `http://` or `https://`, ignoring ASCII case.
pub fn has_http_scheme(text: &str) -> bool {
    starts_with_ignore_ascii_case(text, HTTP_PREFIX)
        || starts_with_ignore_ascii_case(text, HTTPS_PREFIX)
}

fn starts_with_ignore_ascii_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Trims `raw` and prefixes `https://` unless it already carries an http(s) scheme.
///
/// Absent or empty input yields an empty string. Text with a scheme is passed
/// through as-is apart from trimming; the scheme's case is not touched here.
pub fn apply_scheme(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return String::new();
    };
    let trimmed = raw.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{HTTPS_PREFIX}{trimmed}")
    }
}

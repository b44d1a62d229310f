//! Database URL grammar matching.

use super::{ConnectionError, ConnectionResult};
use percent_encoding::percent_decode_str;
use regex_lite::Regex;
use std::sync::LazyLock;

static DATABASE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^\s*",
        r"(?P<scheme>[^:]+)://",
        r"(?:(?P<username>[^:@,/?=&]+)(?::(?P<password>[^:@,/?=&]+))?@)?",
        r"(?P<hosts>[^@/?=&]+)?",
        r"(?:/(?P<endpoint>[^:@,/?=&]+)?)?",
        r"(?:\?(?P<options>.+)?)?",
        r"\s*$",
    ))
    .unwrap()
});

/// The raw segments of a database URL.
///
/// Nothing here is decoded yet; absent segments are empty strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct UrlSegments<'a> {
    pub scheme: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub hosts: &'a str,
    pub endpoint: &'a str,
    pub options: &'a str,
}

/// Split a database URL into its segments.
///
/// The whole input must match; trailing garbage is an error, not truncated.
/// Surrounding whitespace is not part of any segment.
pub(crate) fn match_url(raw: &str) -> ConnectionResult<UrlSegments<'_>> {
    if !raw.contains("://") {
        return Err(ConnectionError::MissingScheme(raw.to_string()));
    }

    let caps = DATABASE_URL
        .captures(raw.trim())
        .ok_or_else(|| ConnectionError::InvalidUrl(raw.to_string()))?;
    let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    Ok(UrlSegments {
        scheme: group("scheme"),
        username: group("username"),
        password: group("password"),
        hosts: group("hosts"),
        endpoint: group("endpoint"),
        options: group("options"),
    })
}

/// Percent-decode a URL component, treating `+` as a space.
///
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub(crate) fn url_decode(s: &str) -> String {
    if !s.contains(['%', '+']) {
        return s.to_string();
    }
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

//! Request-URL parsing
//!
//! Splits a full URL into the pieces the rest of the app works with: an
//! optional API version segment (`v1.0`, `v2`, `beta`), the request path
//! that follows it, and the raw query string.

use url::Url;

/// Parsed view of the URL currently in the input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleUrl {
    /// Path after the version segment (no leading slash, no query)
    pub request_path: String,
    /// Version segment when the first path segment looks like one
    pub query_version: Option<String>,
    /// Query string without the leading `?`, None when absent or empty
    pub search: Option<String>,
}

/// Parse a full URL typed into the input field.
///
/// Returns None when the text is not a parseable absolute URL; callers
/// treat that as "no autocomplete available" rather than an error.
pub fn parse_sample_url(raw: &str) -> Option<SampleUrl> {
    let url = Url::parse(raw).ok()?;
    let mut segments: Vec<&str> = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .collect();

    let query_version = match segments.first() {
        Some(first) if is_version_segment(first) => Some(segments.remove(0).to_string()),
        _ => None,
    };

    let search = url.query().filter(|q| !q.is_empty()).map(str::to_string);

    Some(SampleUrl {
        request_path: segments.join("/"),
        query_version,
        search,
    })
}

/// Split a query string (without the leading `?`) into name/value pairs.
///
/// A pair without `=` yields a None value; a trailing `=` yields Some("").
pub fn query_pairs(search: &str) -> Vec<(String, Option<String>)> {
    search
        .split('&')
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| match chunk.split_once('=') {
            Some((name, value)) => (name.to_string(), Some(value.to_string())),
            None => (chunk.to_string(), None),
        })
        .collect()
}

fn is_version_segment(segment: &str) -> bool {
    if segment == "beta" {
        return true;
    }
    match segment.strip_prefix('v') {
        Some(rest) => {
            rest.chars().any(|c| c.is_ascii_digit())
                && rest.chars().all(|c| c.is_ascii_digit() || c == '.')
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "sample_url_tests.rs"]
mod sample_url_tests;

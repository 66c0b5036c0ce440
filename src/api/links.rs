//! Helpers for paging links returned by the API.

use regex::Regex;
use std::sync::LazyLock;

static OFFSET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"offset=(\d+)").expect("offset pattern is a valid regex"));

/// Extracts the numeric `offset=<n>` value embedded in a link, if any.
///
/// # Example
///
/// ```rust
/// use jitters::api::parse_offset;
///
/// assert_eq!(parse_offset("https://api.twitch.tv/kraken/search/streams?limit=10&offset=20"), Some(20));
/// assert_eq!(parse_offset("https://api.twitch.tv/kraken/search/streams"), None);
/// ```
#[must_use]
pub fn parse_offset(link: &str) -> Option<u64> {
    OFFSET_PATTERN
        .captures(link)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns `true` if a forward link points past the end of the result set.
///
/// Links without an offset are never considered exhausted.
#[must_use]
pub fn is_exhausted(link: &str, total: u64) -> bool {
    parse_offset(link).is_some_and(|offset| offset >= total)
}

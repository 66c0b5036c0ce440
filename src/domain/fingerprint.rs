//! Request fingerprints.
//!
//! A request is tagged with a cheap string hash of its final URL, used as the
//! `id` of the injected script element. Only the last few characters of the
//! input affect the result, so distinct URLs with a common suffix collide.
//! It is not a security primitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hashes a string into a signed decimal fingerprint.
///
/// For each UTF-16 code unit `c`: truncate the accumulator to 32 bits and shift
/// it left by 5 (wrapping), subtract `c`, then double. The subtraction and the
/// doubling are not truncated, so the final value can exceed the `i32` range.
///
/// # Examples
///
/// ```
/// use jitters::domain::string_to_hash;
///
/// assert_eq!(string_to_hash("https://www.google.com"), "-3413940314");
/// assert_eq!(string_to_hash(""), "0");
/// ```
#[must_use]
pub fn string_to_hash(input: &str) -> String {
    let hash = input.encode_utf16().fold(0_i64, |acc, unit| {
        #[allow(clippy::cast_possible_truncation)]
        let shifted = i64::from((acc as i32).wrapping_shl(5));
        let acc = shifted - i64::from(unit);
        acc + acc
    });
    hash.to_string()
}

/// Script element id of an issued request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Fingerprints a request URL.
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        Self(string_to_hash(url))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

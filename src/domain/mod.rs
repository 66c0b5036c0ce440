//! Domain layer for the jitters widget.
//!
//! Core types with no dependency on the host page: the API payload model,
//! request fingerprints and the internal error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`stream`]: Result page and stream record models
//! - [`fingerprint`]: URL hashing and request identifiers
//!
//! # Examples
//!
//! ```
//! use jitters::domain::{ResultPage, Result};
//!
//! fn decode(json: &str) -> Result<u64> {
//!     Ok(ResultPage::from_json(json)?.total)
//! }
//! assert_eq!(decode(r#"{"_total": 4}"#).unwrap(), 4);
//! ```

pub mod error;
pub mod fingerprint;
pub mod stream;

pub use error::{JittersError, Result};
pub use fingerprint::{string_to_hash, RequestId};
pub use stream::{Channel, Links, Preview, ResultPage, StreamRecord};

//! Error types for the jitters widget.
//!
//! This module defines the centralized error type [`JittersError`] and a type alias
//! [`Result`] for internal failures. These are distinct from the user-visible
//! search failures (timeout, empty result set) which live in application state
//! and are rendered, not propagated.

use thiserror::Error;

/// Internal error type for widget operations.
///
/// Covers failures the session cannot express to the user as a search outcome:
/// undecodable API payloads, host document failures, and bad configuration.
///
/// # Examples
///
/// ```
/// use jitters::JittersError;
///
/// fn check_timeout(raw: &str) -> Result<u32, JittersError> {
///     raw.parse()
///         .map_err(|_| JittersError::Config(format!("invalid timeout_ms: {raw}")))
/// }
/// assert!(check_timeout("soon").is_err());
/// ```
#[derive(Debug, Error)]
pub enum JittersError {
    /// The JSONP payload could not be decoded into a result page.
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// The host document rejected an operation.
    ///
    /// Raised by [`Dom`](crate::ui::Dom) implementations, for instance when an
    /// element cannot be created or appended.
    #[error("DOM error: {0}")]
    Dom(String),

    /// A configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for jitters operations.
pub type Result<T> = std::result::Result<T, JittersError>;

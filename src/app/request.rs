//! Request lifecycle types.
//!
//! A session is either idle or waiting on exactly one JSONP request. The
//! pending request carries two identifiers: the fingerprint of its URL, which
//! tags the injected script element, and a per-session sequence number. URL
//! fingerprints collide for URLs sharing a suffix, so timeouts are matched on
//! the [`RequestTicket`] holding both.
//!
//! # State Machine
//!
//! ```text
//!          issue                 fulfilled
//! Idle ──────────────▶ Pending ──────────────▶ Idle
//!                         │      timed out
//!                         └────────────────▶ Idle (error)
//! ```
//!
//! Issuing while pending replaces the tracked request; timers armed for the
//! replaced one become stale and are ignored when they fire.

use crate::domain::RequestId;
use chrono::{DateTime, Utc};
use std::fmt;

/// Coarse request phase, derived from whether a request is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request in flight.
    Idle,
    /// One request in flight, awaiting its callback or its timeout.
    Pending,
}

/// Identifies one issued request within a session.
///
/// `seq` is unique per issue, even when the same URL is requested twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub seq: u64,
    pub id: RequestId,
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.id, self.seq)
    }
}

/// The request currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Sequence number assigned when the request was issued.
    pub seq: u64,

    /// Element id of the injected script.
    pub id: RequestId,

    /// Final URL, including credential and callback parameters.
    pub url: String,

    /// When the script element was injected. Used for latency logging.
    pub issued_at: DateTime<Utc>,
}

impl PendingRequest {
    #[must_use]
    pub fn new(seq: u64, url: String) -> Self {
        Self {
            seq,
            id: RequestId::for_url(&url),
            url,
            issued_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn ticket(&self) -> RequestTicket {
        RequestTicket {
            seq: self.seq,
            id: self.id.clone(),
        }
    }

    /// Milliseconds since the request was issued.
    #[must_use]
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.issued_at).num_milliseconds()
    }
}

/// User-visible search failures.
///
/// Both are recoverable: the next search clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// The request was still outstanding when its timeout fired.
    Timeout,
    /// The API answered with a total count of zero.
    NoResults,
}

impl SearchFailure {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Timeout => "Could not connect to api",
            Self::NoResults => "Your search had no results.",
        }
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

//! Result page and stream record models.
//!
//! These mirror the payload the search endpoint hands to the JSONP callback
//! (`https://dev.twitch.tv/docs/v5/reference/search/#search-streams`). They are
//! read-only to the widget: decoded once, stored as the latest page, rendered.

use super::error::Result;
use serde::{Deserialize, Serialize};

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultPage {
    /// Total number of matching streams across all pages.
    #[serde(rename = "_total", default)]
    pub total: u64,

    /// Navigation links for this page.
    #[serde(rename = "_links", default)]
    pub links: Links,

    /// Streams on this page, in API order.
    #[serde(default)]
    pub streams: Vec<StreamRecord>,
}

impl ResultPage {
    /// Decodes a page from the JSON text of a callback payload.
    ///
    /// # Errors
    ///
    /// Returns [`JittersError::Payload`](super::JittersError::Payload) when the
    /// text is not a valid result page.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns `true` when the search matched nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Paging links attached to a result page.
///
/// Each link is a ready-made URL, usually carrying `limit` and `offset` query
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// A live stream as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Game or category being streamed. The API sends `null` for uncategorized streams.
    #[serde(default)]
    pub game: Option<String>,

    /// Current viewer count.
    #[serde(default)]
    pub viewers: u64,

    #[serde(default)]
    pub preview: Preview,

    #[serde(default)]
    pub channel: Channel,
}

impl StreamRecord {
    /// Returns the preview image template, if the stream carries one.
    #[must_use]
    pub fn image_template(&self) -> Option<&str> {
        self.preview.template.as_deref().filter(|t| !t.is_empty())
    }
}

/// Preview image variants for a stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preview {
    /// URL with `{width}` and `{height}` placeholders.
    #[serde(default)]
    pub template: Option<String>,
}

/// The broadcasting channel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub display_name: String,

    /// Free-text stream title set by the broadcaster.
    #[serde(default)]
    pub status: Option<String>,
}

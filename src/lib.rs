//! Jitters: a live-stream search widget for the browser.
//!
//! Jitters drives a search box against the Twitch stream search API:
//! - JSONP transport by `<script>` injection, with per-request timeouts
//! - Result pages rendered as cards with thumbnails, a total, and paging controls
//! - Deterministic request ids derived from the request URL
//! - User-facing error panel for unreachable API and empty results

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Browser Binding (browser/, wasm32 only)            │  ← Entry point
//! │  - window.App, form wiring, JSONP callback          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching (Session)                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ API Layer (api/)      │
//! │ - Dom collaborator    │          │ - URL builder         │
//! │ - Components          │          │ - Routes              │
//! │ - Renderer            │          │ - Paging links        │
//! └───────────────────────┘          └───────────────────────┘
//!         │                                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Error types                                      │
//! │  - Result page model                                │
//! │  - URL fingerprint                                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - console_log (browser), fmt layer (native)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: Request URL construction and paging link inspection
//! - [`app`]: Session state machine with event/action model
//! - [`domain`]: Core domain types (result page, request id, errors)
//! - [`ui`]: HTML rendering through the [`Dom`](ui::Dom) collaborator
//! - [`observability`]: Console logging
//! - `browser`: `wasm-bindgen` entry point (wasm32 only)
//!
//! # Configuration
//!
//! The widget is configured with an options object passed to `new App(...)`:
//!
//! ```js
//! window.jitters = new App({ timeout_ms: "3000", trace_level: "debug" });
//! ```
//!
//! Every key is optional. See [`Config::from_map`].
//!
//! # Request Flow
//!
//! 1. **Submit**: the form handler calls `search(query)`
//! 2. **Issue**: a URL carrying `q`, `client_id` and `callback` is built, the
//!    loader is shown, a script tag with the URL fingerprint as id is injected,
//!    and a timeout is armed
//! 3. **Callback**: the API script calls `window.jitters._fetched(data)`, the page
//!    is stored, the script tag is removed and the results are rendered
//! 4. **Timeout**: if the request is still pending when its timer fires, the
//!    error panel is rendered instead
//!
//! # Examples
//!
//! ## Library Usage
//!
//! ```rust
//! use jitters::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) =
//!     handle_event(&mut state, &Event::Submit { query: "starcraft".to_string() })?;
//! assert!(!should_render);
//! assert!(state.current_request.is_some());
//! # let _ = actions;
//! # Ok::<(), jitters::JittersError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-unknown-unknown` via `wasm-bindgen`
//! - **Native**: the core builds and tests without a browser

pub mod api;
pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use app::{handle_event, Action, AppState, Event, RequestTicket, SearchFailure, Session, Timer};
pub use domain::{JittersError, RequestId, Result, ResultPage};
pub use ui::Dom;

use std::collections::BTreeMap;
use std::str::FromStr;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// Default page-global handle the widget is reachable under.
pub const DEFAULT_HANDLE: &str = "window.jitters";

/// Widget configuration.
///
/// Values come from the options object passed to the browser binding. All
/// fields have defaults.
///
/// # Example
///
/// ```rust
/// use jitters::Config;
///
/// let config = Config::default();
/// assert_eq!(config.timeout_ms, 5000);
/// assert_eq!(config.callback_name, "window.jitters._fetched");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Milliseconds to wait for the JSONP callback before reporting a failure.
    pub timeout_ms: u32,

    /// Fully qualified name of the global JSONP callback.
    ///
    /// Sent as the `callback` query parameter. Default: `window.jitters._fetched`
    pub callback_name: String,

    /// Global expression the session is reachable under.
    ///
    /// Paging links call `{handle}.fetch_next()` and `{handle}.fetch_prev()`.
    pub handle: String,

    /// API credential sent as `client_id`.
    pub client_id: String,

    /// Edge length in pixels of result thumbnails.
    pub thumbnail_size: u32,

    /// Results per page, used for the page count of the pager label.
    pub per_page: u64,

    /// Logging filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            callback_name: callback_for(DEFAULT_HANDLE),
            handle: DEFAULT_HANDLE.to_string(),
            client_id: api::CLIENT_ID.to_string(),
            thumbnail_size: ui::helpers::DEFAULT_THUMBNAIL_SIZE,
            per_page: app::DEFAULT_PER_PAGE,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `timeout_ms`, `thumbnail_size`, `per_page`: parsed as unsigned integers
    /// - `handle`: also moves the default callback to `{handle}._fetched`
    /// - `callback_name`, `client_id`, `trace_level`: taken as-is
    /// - Blank values and unknown keys are ignored
    ///
    /// # Errors
    ///
    /// Returns [`JittersError::Config`] if a numeric value does not parse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jitters::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("timeout_ms".to_string(), "3000".to_string());
    /// map.insert("handle".to_string(), "window.search".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.timeout_ms, 3000);
    /// assert_eq!(config.callback_name, "window.search._fetched");
    /// # Ok::<(), jitters::JittersError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            map.get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = get("timeout_ms") {
            config.timeout_ms = parse_number("timeout_ms", value)?;
        }
        if let Some(value) = get("thumbnail_size") {
            config.thumbnail_size = parse_number("thumbnail_size", value)?;
        }
        if let Some(value) = get("per_page") {
            config.per_page = parse_number("per_page", value)?;
        }
        if let Some(handle) = get("handle") {
            config.handle = handle.to_string();
            config.callback_name = callback_for(handle);
        }
        if let Some(callback) = get("callback_name") {
            config.callback_name = callback.to_string();
        }
        if let Some(client_id) = get("client_id") {
            config.client_id = client_id.to_string();
        }
        config.trace_level = get("trace_level").map(String::from);

        Ok(config)
    }
}

fn callback_for(handle: &str) -> String {
    format!("{handle}._fetched")
}

fn parse_number<N: FromStr>(key: &str, value: &str) -> Result<N>
where
    N::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| JittersError::Config(format!("{key}: invalid value {value:?}: {e}")))
}

/// Creates the initial session state.
///
/// # Returns
///
/// An idle `AppState` with no results, ready for event processing.
///
/// # Example
///
/// ```rust
/// use jitters::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.results.is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        timeout_ms = config.timeout_ms,
        callback = %config.callback_name,
        "initializing jitters session"
    );
    AppState::new(config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.callback_name, "window.jitters._fetched");
        assert_eq!(config.handle, "window.jitters");
        assert_eq!(config.client_id, "5lch5g05xtkp5zhfva8g3u1xlxzwvb");
        assert_eq!(config.thumbnail_size, 125);
        assert_eq!(config.per_page, 10);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn test_from_empty_map_is_default() {
        assert_eq!(Config::from_map(&BTreeMap::new()).unwrap(), Config::default());
    }

    #[test]
    fn test_from_map_overrides() {
        let config = Config::from_map(&map(&[
            ("timeout_ms", "250"),
            ("callback_name", "cb"),
            ("client_id", "abc"),
            ("thumbnail_size", "300"),
            ("per_page", "25"),
            ("trace_level", "debug"),
            ("unknown", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.callback_name, "cb");
        assert_eq!(config.client_id, "abc");
        assert_eq!(config.thumbnail_size, 300);
        assert_eq!(config.per_page, 25);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_handle_moves_default_callback() {
        let config = Config::from_map(&map(&[("handle", "window.widget")])).unwrap();
        assert_eq!(config.handle, "window.widget");
        assert_eq!(config.callback_name, "window.widget._fetched");

        let config =
            Config::from_map(&map(&[("handle", "window.widget"), ("callback_name", "other")])).unwrap();
        assert_eq!(config.callback_name, "other");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_map(&map(&[("timeout_ms", "  "), ("trace_level", "")])).unwrap();
        assert_eq!(config.timeout_ms, 5000);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = Config::from_map(&map(&[("timeout_ms", "soon")])).unwrap_err();
        assert!(matches!(err, JittersError::Config(_)));
        assert!(err.to_string().contains("timeout_ms"));

        assert!(Config::from_map(&map(&[("per_page", "-1")])).is_err());
    }

    #[test]
    fn test_initialize_is_idle() {
        let state = initialize(&Config::default());
        assert!(state.results.is_none());
        assert!(state.current_request.is_none());
        assert!(state.error.is_none());
    }
}

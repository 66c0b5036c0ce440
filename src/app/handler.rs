//! Event handling and state transition logic.
//!
//! This module implements the handler that turns user actions, JSONP callbacks
//! and timer expirations into state changes and action sequences.
//!
//! # Event Types
//!
//! - **User**: `Submit`, `Search`, `NextPage`, `PrevPage`
//! - **Transport**: `Fetch` issues a raw request, `Fetched` delivers its payload
//! - **Timer**: `TimedOut` fires once per issued request
//!
//! # Return Value
//!
//! Each call returns `(should_render, actions)`. Issuing a request never
//! renders; fulfillment and a live timeout always render exactly once.
//!
//! # Example
//!
//! ```rust
//! use jitters::app::{handle_event, AppState, Event};
//! use jitters::Config;
//!
//! let mut state = AppState::new(Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::Search { query: "starcraft".into() })?;
//! assert!(!render);
//! assert_eq!(actions.len(), 3);
//! # Ok::<(), jitters::JittersError>(())
//! ```

use crate::api::{ensure_param, url_for};
use crate::app::{Action, AppState, RequestTicket};
use crate::domain::error::Result;
use crate::domain::ResultPage;
use std::time::Duration;

/// Events entering a search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search form was submitted.
    ///
    /// Blank queries are ignored. A fresh submit resets the page counter.
    Submit { query: String },

    /// Searches for `query` without touching the page counter.
    Search { query: String },

    /// Issues a request to a ready-made URL.
    ///
    /// Missing `client_id` and `callback` parameters are appended.
    Fetch { url: String },

    /// The JSONP callback delivered a result page.
    Fetched(ResultPage),

    /// The timeout armed for `ticket` fired.
    TimedOut { ticket: RequestTicket },

    /// Follows the `next` link of the last page.
    ///
    /// The page counter moves one past the page on display, so repeating the
    /// event before the answer arrives re-requests the same page.
    NextPage,

    /// Follows the `prev` link of the last page.
    PrevPage,
}

impl Event {
    const fn name(&self) -> &'static str {
        match self {
            Self::Submit { .. } => "Submit",
            Self::Search { .. } => "Search",
            Self::Fetch { .. } => "Fetch",
            Self::Fetched(_) => "Fetched",
            Self::TimedOut { .. } => "TimedOut",
            Self::NextPage => "NextPage",
            Self::PrevPage => "PrevPage",
        }
    }
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// # Errors
///
/// Returns an error if an action cannot be prepared.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Submit { query } => {
            if query.trim().is_empty() {
                tracing::debug!("ignoring blank query");
                return Ok((false, vec![]));
            }
            state.current_page = None;
            Ok((false, issue_search(state, query)))
        }
        Event::Search { query } => Ok((false, issue_search(state, query))),
        Event::Fetch { url } => Ok((false, issue_request(state, url))),
        Event::Fetched(page) => {
            tracing::debug!(
                total = page.total,
                streams = page.streams.len(),
                "result page received"
            );
            let mut actions = vec![];
            match state.fulfill(page.clone()) {
                Some(request) => {
                    tracing::debug!(
                        request = %request.ticket(),
                        elapsed_ms = request.elapsed_ms(),
                        "request fulfilled"
                    );
                    actions.push(Action::RemoveScript { id: request.id });
                }
                None => tracing::debug!("result page arrived with no request pending"),
            }
            actions.push(Action::SetLoaderVisibility { visible: false });
            Ok((true, actions))
        }
        Event::TimedOut { ticket } => {
            if !state.expire(ticket) {
                tracing::debug!(request = %ticket, "stale timeout ignored");
                return Ok((false, vec![]));
            }
            tracing::warn!(request = %ticket, "request timed out");
            Ok((
                true,
                vec![
                    Action::RemoveScript { id: ticket.id.clone() },
                    Action::SetLoaderVisibility { visible: false },
                ],
            ))
        }
        Event::NextPage => {
            let Some(link) = state.next_link().map(str::to_owned) else {
                tracing::debug!("no next page");
                return Ok((false, vec![]));
            };
            state.current_page = Some(state.results_page.unwrap_or(1).saturating_add(1));
            Ok((false, issue_request(state, &link)))
        }
        Event::PrevPage => {
            let Some(link) = state.prev_link().map(str::to_owned) else {
                tracing::debug!("no previous page");
                return Ok((false, vec![]));
            };
            state.current_page = Some(state.results_page.unwrap_or(1).saturating_sub(1).max(1));
            Ok((false, issue_request(state, &link)))
        }
    }
}

fn issue_search(state: &mut AppState, query: &str) -> Vec<Action> {
    let url = url_for(
        "search",
        &[
            ("q", query),
            ("client_id", state.config.client_id.as_str()),
            ("callback", state.config.callback_name.as_str()),
        ],
    );
    issue_request(state, &url)
}

fn issue_request(state: &mut AppState, url: &str) -> Vec<Action> {
    let url = ensure_param(url, "client_id", &state.config.client_id);
    let url = ensure_param(&url, "callback", &state.config.callback_name);

    let mut actions = vec![Action::SetLoaderVisibility { visible: true }];
    if let Some(previous) = &state.current_request {
        actions.push(Action::RemoveScript { id: previous.id.clone() });
    }

    let request = state.begin_request(url);
    tracing::debug!(request = %request.ticket(), url = %request.url, "issuing request");

    let ticket = request.ticket();
    actions.push(Action::InjectScript {
        id: request.id,
        src: request.url,
    });
    actions.push(Action::ArmTimeout {
        ticket,
        delay: Duration::from_millis(u64::from(state.config.timeout_ms)),
    });
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SearchFailure;
    use crate::domain::{Links, RequestId};

    const CALLBACK_URL: &str = "https://api.twitch.tv/kraken/search/streams?q=starcraft&client_id=5lch5g05xtkp5zhfva8g3u1xlxzwvb&callback=window.jitters._fetched";

    fn paged(total: u64, prev: Option<&str>, next: Option<&str>) -> ResultPage {
        ResultPage {
            total,
            links: Links {
                prev: prev.map(String::from),
                current: Some("https://api.twitch.tv/kraken/search/streams?offset=10".to_string()),
                next: next.map(String::from),
            },
            streams: vec![],
        }
    }

    #[test]
    fn test_search_issues_full_request() {
        let mut state = AppState::new(crate::Config::default());
        let (render, actions) =
            handle_event(&mut state, &Event::Search { query: "starcraft".into() }).unwrap();

        let ticket = RequestTicket { seq: 0, id: RequestId::for_url(CALLBACK_URL) };
        assert!(!render);
        assert_eq!(
            actions,
            vec![
                Action::SetLoaderVisibility { visible: true },
                Action::InjectScript { id: ticket.id.clone(), src: CALLBACK_URL.to_string() },
                Action::ArmTimeout { ticket: ticket.clone(), delay: Duration::from_millis(5000) },
            ]
        );
        assert!(state.is_pending(&ticket));
        assert_eq!(ticket.id.as_str(), "2497367224");
    }

    #[test]
    fn test_submit_ignores_blank_and_resets_page() {
        let mut state = AppState::new(crate::Config::default());
        state.current_page = Some(4);

        let (_, actions) = handle_event(&mut state, &Event::Submit { query: "   ".into() }).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.current_page, Some(4));

        let (_, actions) = handle_event(&mut state, &Event::Submit { query: "dota".into() }).unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(state.current_page, None);
    }

    #[test]
    fn test_superseding_request_removes_previous_script() {
        let mut state = AppState::new(crate::Config::default());
        handle_event(&mut state, &Event::Search { query: "starcraft".into() }).unwrap();
        let first = state.current_request.as_ref().unwrap().ticket();

        let (_, actions) = handle_event(&mut state, &Event::Search { query: "dota".into() }).unwrap();
        assert_eq!(actions[1], Action::RemoveScript { id: first.id.clone() });
        let second = state.current_request.as_ref().unwrap().ticket();
        assert_eq!(first.id, second.id);

        let (render, actions) = handle_event(&mut state, &Event::TimedOut { ticket: first }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.error.is_none());
        assert!(state.is_pending(&second));
    }

    #[test]
    fn test_timeout_records_error() {
        let mut state = AppState::new(crate::Config::default());
        handle_event(&mut state, &Event::Fetch { url: CALLBACK_URL.into() }).unwrap();
        let ticket = state.current_request.as_ref().unwrap().ticket();
        let id = ticket.id.clone();

        let (render, actions) = handle_event(&mut state, &Event::TimedOut { ticket }).unwrap();

        assert!(render);
        assert_eq!(state.error, Some(SearchFailure::Timeout));
        assert!(state.current_request.is_none());
        assert_eq!(
            actions,
            vec![Action::RemoveScript { id }, Action::SetLoaderVisibility { visible: false }]
        );
    }

    #[test]
    fn test_timeout_after_fulfillment_is_stale() {
        let mut state = AppState::new(crate::Config::default());
        handle_event(&mut state, &Event::Fetch { url: CALLBACK_URL.into() }).unwrap();
        let ticket = state.current_request.as_ref().unwrap().ticket();
        handle_event(&mut state, &Event::Fetched(paged(12, None, None))).unwrap();

        let (render, _) = handle_event(&mut state, &Event::TimedOut { ticket }).unwrap();
        assert!(!render);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fetch_appends_missing_parameters() {
        let mut state = AppState::new(crate::Config::default());
        handle_event(
            &mut state,
            &Event::Fetch { url: "https://api.twitch.tv/kraken/search/streams?q=x&offset=10".into() },
        )
        .unwrap();

        let url = &state.current_request.as_ref().unwrap().url;
        assert_eq!(
            url,
            "https://api.twitch.tv/kraken/search/streams?q=x&offset=10&client_id=5lch5g05xtkp5zhfva8g3u1xlxzwvb&callback=window.jitters._fetched"
        );
    }

    #[test]
    fn test_next_page_without_link_is_noop() {
        let mut state = AppState::new(crate::Config::default());
        handle_event(&mut state, &Event::Fetched(paged(8, None, None))).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.current_page, Some(1));
        assert!(state.current_request.is_none());
    }

    #[test]
    fn test_next_and_prev_move_page_counter() {
        let mut state = AppState::new(crate::Config::default());
        let next = "https://api.twitch.tv/kraken/search/streams?offset=10&q=x";
        handle_event(&mut state, &Event::Fetched(paged(138, None, Some(next)))).unwrap();

        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.current_page, Some(2));
        assert!(state.current_request.as_ref().unwrap().url.starts_with(next));

        let prev = "https://api.twitch.tv/kraken/search/streams?offset=0&q=x";
        handle_event(&mut state, &Event::Fetched(paged(138, Some(prev), Some(next)))).unwrap();
        handle_event(&mut state, &Event::PrevPage).unwrap();
        assert_eq!(state.current_page, Some(1));
        assert!(state.current_request.as_ref().unwrap().url.starts_with(prev));
    }

    #[test]
    fn test_repeated_next_before_answer_targets_same_page() {
        let mut state = AppState::new(crate::Config::default());
        let next = "https://api.twitch.tv/kraken/search/streams?offset=10&q=x";
        handle_event(&mut state, &Event::Fetched(paged(138, None, Some(next)))).unwrap();

        handle_event(&mut state, &Event::NextPage).unwrap();
        let first = state.current_request.as_ref().unwrap().ticket();
        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        let second = state.current_request.as_ref().unwrap().ticket();

        assert_eq!(state.current_page, Some(2));
        assert_eq!(actions[1], Action::RemoveScript { id: first.id.clone() });
        assert_ne!(first, second);

        let (render, actions) = handle_event(&mut state, &Event::TimedOut { ticket: first }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.is_pending(&second));

        handle_event(&mut state, &Event::Fetched(paged(138, Some(next), Some(next)))).unwrap();
        assert_eq!(state.results_page, Some(2));
    }

    #[test]
    fn test_next_page_ignores_exhausted_link() {
        let mut state = AppState::new(crate::Config::default());
        let next = "https://api.twitch.tv/kraken/search/streams?offset=140&q=x";
        handle_event(&mut state, &Event::Fetched(paged(138, None, Some(next)))).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.current_page, Some(1));
    }

    #[test]
    fn test_zero_total_fulfillment_renders_error() {
        let mut state = AppState::new(crate::Config::default());
        handle_event(&mut state, &Event::Search { query: "zzzz".into() }).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Fetched(paged(0, None, None))).unwrap();
        assert!(render);
        assert_eq!(state.error, Some(SearchFailure::NoResults));
        assert_eq!(actions.last(), Some(&Action::SetLoaderVisibility { visible: false }));
    }
}

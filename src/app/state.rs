//! Search state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for a search
//! session: the latest result page, the page counter, the request in flight and
//! the last user-visible failure. The event handler mutates it; the renderer
//! reads it through [`AppState::compute_viewmodel`].
//!
//! # Invariants
//!
//! - At most one request is tracked. Beginning a request replaces the previous one.
//! - A set `error` wins over `results` when rendering.
//! - `current_page` stays `None` until a page has been received.
//! - Every issued request gets a fresh sequence number.
//!
//! # Example
//!
//! ```rust
//! use jitters::app::AppState;
//! use jitters::Config;
//!
//! let mut state = AppState::new(Config::default());
//! let request = state.begin_request("https://api.twitch.tv/kraken/search/streams?q=x".to_string());
//! assert!(state.is_pending(&request.ticket()));
//! ```

use super::pagination::page_count;
use super::request::{PendingRequest, RequestPhase, RequestTicket, SearchFailure};
use crate::api::is_exhausted;
use crate::domain::{ResultPage, StreamRecord};
use crate::ui::helpers::image_url;
use crate::ui::viewmodel::{ErrorPanel, PagerInfo, ResultCard, ResultsPanel, ResultsView};
use crate::Config;

/// Central search session state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Last successfully fetched result page.
    pub results: Option<ResultPage>,

    /// 1-based page number being shown or requested.
    ///
    /// Cleared by a fresh search, set to 1 on the first page received, and
    /// set one away from `results_page` when a paging request is issued.
    pub current_page: Option<u32>,

    /// 1-based page number of `results`, taken from `current_page` when a
    /// page arrives.
    pub results_page: Option<u32>,

    /// The request in flight, if any.
    pub current_request: Option<PendingRequest>,

    /// Last user-visible failure. Cleared when a request starts or succeeds.
    pub error: Option<SearchFailure>,

    /// Number of requests issued so far. Also the sequence number of the next one.
    pub issued: u64,

    /// Session settings (timeout, callback name, thumbnail size, ...).
    pub config: Config,
}

impl AppState {
    /// Creates an idle session with no results.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            results: None,
            current_page: None,
            results_page: None,
            current_request: None,
            error: None,
            issued: 0,
            config,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> RequestPhase {
        if self.current_request.is_some() {
            RequestPhase::Pending
        } else {
            RequestPhase::Idle
        }
    }

    /// Returns `true` if `ticket` is the request currently tracked.
    #[must_use]
    pub fn is_pending(&self, ticket: &RequestTicket) -> bool {
        self.current_request
            .as_ref()
            .is_some_and(|r| r.seq == ticket.seq && r.id == ticket.id)
    }

    /// Starts tracking a new request and clears any previous failure.
    ///
    /// Returns the newly tracked request. A request that was already in flight
    /// stops being tracked; its timeout turns into a no-op.
    pub fn begin_request(&mut self, url: String) -> PendingRequest {
        let request = PendingRequest::new(self.issued, url);
        self.issued += 1;
        if let Some(previous) = self.current_request.replace(request.clone()) {
            tracing::debug!(
                previous = %previous.ticket(),
                request = %request.ticket(),
                "superseding in-flight request"
            );
        }
        self.error = None;
        request
    }

    /// Stores a received page and ends the pending request.
    ///
    /// Returns the request that was pending, if any. An empty page records
    /// [`SearchFailure::NoResults`].
    pub fn fulfill(&mut self, page: ResultPage) -> Option<PendingRequest> {
        let finished = self.current_request.take();
        self.error = page.is_empty().then_some(SearchFailure::NoResults);
        self.results = Some(page);
        let page = *self.current_page.get_or_insert(1);
        self.results_page = Some(page);
        finished
    }

    /// Records a timeout for `ticket` if it is still the pending request.
    ///
    /// Returns `false` for stale timeouts, leaving state untouched.
    pub fn expire(&mut self, ticket: &RequestTicket) -> bool {
        if !self.is_pending(ticket) {
            return false;
        }
        self.current_request = None;
        self.error = Some(SearchFailure::Timeout);
        true
    }

    /// Forward link of the last page, unless absent or past the end.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        let results = self.results.as_ref()?;
        results
            .links
            .next
            .as_deref()
            .filter(|link| !is_exhausted(link, results.total))
    }

    /// Backward link of the last page.
    #[must_use]
    pub fn prev_link(&self) -> Option<&str> {
        self.results.as_ref()?.links.prev.as_deref()
    }

    /// Computes what the results area should show.
    ///
    /// # Returns
    ///
    /// - [`ResultsView::Error`] when a failure is recorded
    /// - [`ResultsView::Results`] when a page is available
    /// - [`ResultsView::Blank`] before anything has been received
    #[must_use]
    pub fn compute_viewmodel(&self) -> ResultsView {
        if let Some(error) = self.error {
            return ResultsView::Error(ErrorPanel {
                message: error.message().to_string(),
            });
        }

        let Some(results) = &self.results else {
            return ResultsView::Blank;
        };

        let total = (results.total > 0).then_some(results.total);
        let pager = total.map(|total| self.compute_pager(results, total));
        let cards = results
            .streams
            .iter()
            .map(|stream| self.compute_card(stream))
            .collect();

        ResultsView::Results(ResultsPanel { total, pager, cards })
    }

    fn compute_pager(&self, results: &ResultPage, total: u64) -> PagerInfo {
        let current_page = self.results_page.unwrap_or(1);
        let page_label = results.links.current.as_ref().map(|_| {
            format!("{current_page}/{}", page_count(total, self.config.per_page))
        });

        PagerInfo {
            has_prev: results.links.prev.is_some(),
            page_label,
            has_next: self.next_link().is_some(),
        }
    }

    fn compute_card(&self, stream: &StreamRecord) -> ResultCard {
        ResultCard {
            image_url: image_url(stream, self.config.thumbnail_size),
            display_name: stream.channel.display_name.clone(),
            game: stream.game.clone().unwrap_or_default(),
            viewers: stream.viewers,
            status: stream.channel.status.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Channel, Links, Preview};

    fn page(total: u64, links: Links, streams: usize) -> ResultPage {
        ResultPage {
            total,
            links,
            streams: (0..streams)
                .map(|i| StreamRecord {
                    game: Some("Rocket League".to_string()),
                    viewers: 10 * i as u64,
                    preview: Preview::default(),
                    channel: Channel {
                        display_name: format!("streamer{i}"),
                        status: None,
                    },
                })
                .collect(),
        }
    }

    fn links(prev: bool, current: bool, next_offset: Option<u64>) -> Links {
        Links {
            prev: prev.then(|| "https://api.twitch.tv/kraken/search/streams?offset=0".to_string()),
            current: current.then(|| "https://api.twitch.tv/kraken/search/streams?offset=10".to_string()),
            next: next_offset.map(|o| format!("https://api.twitch.tv/kraken/search/streams?offset={o}")),
        }
    }

    #[test]
    fn test_default_state_is_blank() {
        let state = AppState::new(Config::default());
        assert!(state.results.is_none());
        assert!(state.current_page.is_none());
        assert!(state.current_request.is_none());
        assert!(state.error.is_none());
        assert_eq!(state.phase(), RequestPhase::Idle);
        assert_eq!(state.compute_viewmodel(), ResultsView::Blank);
    }

    #[test]
    fn test_begin_request_replaces_previous_and_clears_error() {
        let mut state = AppState::new(Config::default());
        state.error = Some(SearchFailure::Timeout);

        let first = state.begin_request("https://www.google.com".to_string());
        let second = state.begin_request("https://www.stanford.edu".to_string());

        assert!(state.error.is_none());
        assert!(!state.is_pending(&first.ticket()));
        assert!(state.is_pending(&second.ticket()));
        assert_eq!(state.phase(), RequestPhase::Pending);
    }

    #[test]
    fn test_expire_only_matches_pending_request() {
        let mut state = AppState::new(Config::default());
        let first = state.begin_request("https://www.google.com".to_string());
        let second = state.begin_request("https://www.stanford.edu".to_string());

        assert!(!state.expire(&first.ticket()));
        assert!(state.error.is_none());

        assert!(state.expire(&second.ticket()));
        assert_eq!(state.error, Some(SearchFailure::Timeout));
        assert_eq!(state.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_same_url_reissued_gets_new_ticket() {
        let mut state = AppState::new(Config::default());
        let url = "https://api.twitch.tv/kraken/search/streams?q=a&callback=window.jitters._fetched";
        let first = state.begin_request(url.to_string());
        let second = state.begin_request(url.to_string());

        assert_eq!(first.id, second.id);
        assert_eq!((first.seq, second.seq), (0, 1));
        assert_eq!(state.issued, 2);

        assert!(!state.expire(&first.ticket()));
        assert!(state.error.is_none());
        assert!(state.is_pending(&second.ticket()));
    }

    #[test]
    fn test_fulfill_sets_first_page() {
        let mut state = AppState::new(Config::default());
        let request = state.begin_request("https://www.google.com".to_string());

        let finished = state.fulfill(page(138, links(false, true, Some(10)), 10));

        assert_eq!(finished.map(|r| r.ticket()), Some(request.ticket()));
        assert_eq!(state.current_page, Some(1));
        assert_eq!(state.results_page, Some(1));
        assert!(state.error.is_none());
        assert_eq!(state.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_fulfill_keeps_existing_page_counter() {
        let mut state = AppState::new(Config::default());
        state.current_page = Some(3);
        state.fulfill(page(138, links(true, true, Some(40)), 10));
        assert_eq!(state.current_page, Some(3));
        assert_eq!(state.results_page, Some(3));
    }

    #[test]
    fn test_empty_page_records_no_results() {
        let mut state = AppState::new(Config::default());
        state.fulfill(page(0, Links::default(), 0));

        assert_eq!(state.error, Some(SearchFailure::NoResults));
        assert_eq!(
            state.compute_viewmodel(),
            ResultsView::Error(ErrorPanel {
                message: "Your search had no results.".to_string()
            })
        );
    }

    #[test]
    fn test_next_link_hidden_when_exhausted() {
        let mut state = AppState::new(Config::default());
        state.fulfill(page(138, links(true, true, Some(140)), 8));
        assert!(state.next_link().is_none());
        assert!(state.prev_link().is_some());

        state.fulfill(page(138, links(true, true, Some(130)), 10));
        assert!(state.next_link().is_some());
    }

    #[test]
    fn test_viewmodel_pager_and_cards() {
        let mut state = AppState::new(Config::default());
        state.fulfill(page(138, links(false, true, Some(10)), 2));

        let ResultsView::Results(panel) = state.compute_viewmodel() else {
            panic!("expected results view");
        };
        assert_eq!(panel.total, Some(138));
        assert_eq!(
            panel.pager,
            Some(PagerInfo {
                has_prev: false,
                page_label: Some("1/14".to_string()),
                has_next: true,
            })
        );
        assert_eq!(panel.cards.len(), 2);
        assert_eq!(panel.cards[1].display_name, "streamer1");
        assert_eq!(panel.cards[1].viewers, 10);
        assert_eq!(panel.cards[0].image_url, crate::ui::helpers::PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_error_wins_over_results() {
        let mut state = AppState::new(Config::default());
        state.fulfill(page(138, links(false, true, Some(10)), 2));
        let request = state.begin_request("https://www.google.com".to_string());
        state.expire(&request.ticket());

        assert!(matches!(state.compute_viewmodel(), ResultsView::Error(_)));
    }
}

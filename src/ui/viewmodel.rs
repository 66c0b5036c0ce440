//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use jitters::ui::viewmodel::{PagerInfo, ResultCard, ResultsPanel, ResultsView};
//!
//! let vm = ResultsView::Results(ResultsPanel {
//!     total: Some(138),
//!     pager: Some(PagerInfo { has_prev: false, page_label: Some("1/14".into()), has_next: true }),
//!     cards: vec![ResultCard {
//!         image_url: "http://via.placeholder.com/125x125".into(),
//!         display_name: "Rotterdam08".into(),
//!         game: "StarCraft II".into(),
//!         viewers: 2381,
//!         status: "GSL Season 2".into(),
//!     }],
//! });
//! ```

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing received yet; leave the page as it is.
    Blank,

    /// A failure replaces the results.
    Error(ErrorPanel),

    /// A page of results with its count and paging controls.
    Results(ResultsPanel),
}

/// Error panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub message: String,
}

/// A rendered result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPanel {
    /// Total result count, `None` when the API reported zero.
    pub total: Option<u64>,

    /// Paging controls, present whenever there is a total to page through.
    pub pager: Option<PagerInfo>,

    pub cards: Vec<ResultCard>,
}

/// Which paging controls to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    pub has_prev: bool,

    /// `current/total` page label, shown when the page carries a `self` link.
    pub page_label: Option<String>,

    /// `false` when the next link is missing or exhausted.
    pub has_next: bool,
}

/// Display fields for one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// Thumbnail URL, already templated.
    pub image_url: String,
    pub display_name: String,
    pub game: String,
    pub viewers: u64,
    pub status: String,
}

//! Composable HTML component renderers.
//!
//! Each component turns one view model piece into an HTML partial. Components
//! are pure; the [`renderer`](crate::ui::renderer) decides where the partials go.
//!
//! # Components
//!
//! - [`error_panel`]: Failure message shown in place of results
//! - [`pager`]: Total count label and prev/current/next controls
//! - [`results`]: Stream cards

mod error_panel;
mod pager;
mod results;

pub use error_panel::render_error_panel;
pub use pager::{render_pager, render_total};
pub use results::{render_card, render_cards};

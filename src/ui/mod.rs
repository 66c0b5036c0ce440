//! User interface rendering layer with component-based architecture.
//!
//! This module turns session state into HTML written into the host page. It
//! never owns the document: all writes go through the [`Dom`] collaborator.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → ResultsView → components → Dom
//! ```
//!
//! # Modules
//!
//! - [`dom`]: Host document collaborator trait
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: HTML partials (error panel, pager, result cards)
//! - [`helpers`]: Thumbnail templating and escaping

pub mod components;
pub mod dom;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use dom::Dom;
pub use renderer::{render, CONTROLS_ID, LOADER_CLASS, PAGING_CLASS, RESULTS_ID};
pub use viewmodel::{ErrorPanel, PagerInfo, ResultCard, ResultsPanel, ResultsView};

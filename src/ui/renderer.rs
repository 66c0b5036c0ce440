//! Top-level rendering coordinator.
//!
//! Computes the view model from session state and writes component partials
//! into the page through a [`Dom`].
//!
//! # Page Layout
//!
//! ```text
//! #results-controls   Total label + span.paging-controls
//! #results            result cards, or the error panel
//! .loader             toggled by the session, not by the renderer
//! ```

use crate::app::AppState;
use crate::domain::Result;
use crate::ui::components;
use crate::ui::dom::Dom;
use crate::ui::viewmodel::ResultsView;

/// Id of the element receiving result cards or the error panel.
pub const RESULTS_ID: &str = "results";

/// Id of the element receiving the total label and paging controls.
pub const CONTROLS_ID: &str = "results-controls";

/// Class of the paging controls span appended under [`CONTROLS_ID`].
pub const PAGING_CLASS: &str = "paging-controls";

/// Class of the loading indicator elements.
pub const LOADER_CLASS: &str = "loader";

/// Renders the results area for the current state.
///
/// # Errors
///
/// Propagates [`Dom`] failures.
pub fn render<D: Dom + ?Sized>(state: &AppState, dom: &mut D) -> Result<()> {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.config.handle, dom)
}

fn render_viewmodel<D: Dom + ?Sized>(vm: &ResultsView, handle: &str, dom: &mut D) -> Result<()> {
    match vm {
        ResultsView::Blank => {
            tracing::trace!("nothing to render");
        }
        ResultsView::Error(panel) => {
            tracing::debug!(message = %panel.message, "rendering error panel");
            dom.set_inner_html(CONTROLS_ID, "")?;
            write_or_log(dom, RESULTS_ID, &components::render_error_panel(panel))?;
        }
        ResultsView::Results(panel) => {
            tracing::debug!(total = ?panel.total, cards = panel.cards.len(), "rendering results");
            let total = panel.total.map(components::render_total).unwrap_or_default();
            write_or_log(dom, CONTROLS_ID, &total)?;

            if let Some(pager) = &panel.pager {
                let html = components::render_pager(pager, handle);
                if !dom.append_child(CONTROLS_ID, "span", PAGING_CLASS, &html)? {
                    tracing::debug!(id = CONTROLS_ID, "paging controls target missing");
                }
            }

            write_or_log(dom, RESULTS_ID, &components::render_cards(&panel.cards))?;
        }
    }
    Ok(())
}

fn write_or_log<D: Dom + ?Sized>(dom: &mut D, id: &str, html: &str) -> Result<()> {
    if !dom.set_inner_html(id, html)? {
        tracing::debug!(id = id, "render target missing");
    }
    Ok(())
}

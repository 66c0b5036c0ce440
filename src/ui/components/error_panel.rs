//! Error panel component.

use crate::ui::helpers::text;
use crate::ui::viewmodel::ErrorPanel;

/// Renders the panel shown in place of results when a search fails.
///
/// # Example
///
/// ```rust
/// use jitters::ui::components::render_error_panel;
/// use jitters::ui::viewmodel::ErrorPanel;
///
/// let html = render_error_panel(&ErrorPanel { message: "Could not connect to api".into() });
/// assert!(html.contains("<p>Could not connect to api</p>"));
/// ```
#[must_use]
pub fn render_error_panel(panel: &ErrorPanel) -> String {
    format!(
        "<div class='error'>\n  <h1>Something went wrong...</h1>\n  <p>{}</p>\n  <p>Please try again.</p>\n</div>\n",
        text(&panel.message)
    )
}

//! Total count label and paging controls.
//!
//! Paging links call back into the page-global session handle
//! (`window.jitters` by default) through inline `onclick` handlers.

use crate::ui::helpers::attribute;
use crate::ui::viewmodel::PagerInfo;

/// Renders the `Total: n` label.
#[must_use]
pub fn render_total(total: u64) -> String {
    format!("<span class='total-results'>Total: {total}</span>")
}

/// Renders the inner HTML of the paging controls span.
///
/// Controls are joined by a single space, in `prev`, `current/total`, `next` order.
///
/// # Example
///
/// ```rust
/// use jitters::ui::components::render_pager;
/// use jitters::ui::viewmodel::PagerInfo;
///
/// let pager = PagerInfo { has_prev: false, page_label: Some("1/14".into()), has_next: false };
/// assert_eq!(render_pager(&pager, "window.jitters"), "1/14");
/// ```
#[must_use]
pub fn render_pager(pager: &PagerInfo, handle: &str) -> String {
    let mut parts = Vec::with_capacity(3);
    if pager.has_prev {
        parts.push(page_link(handle, Direction::Prev));
    }
    if let Some(label) = &pager.page_label {
        parts.push(label.clone());
    }
    if pager.has_next {
        parts.push(page_link(handle, Direction::Next));
    }
    parts.join(" ")
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Prev,
    Next,
}

fn page_link(handle: &str, direction: Direction) -> String {
    let (method, arrow) = match direction {
        Direction::Prev => ("fetch_prev", "&#8678;"),
        Direction::Next => ("fetch_next", "&#8680;"),
    };
    format!(
        "<a href='#' onclick=\"{}\">{arrow}</a>",
        attribute(&format!("{handle}.{method}()"))
    )
}

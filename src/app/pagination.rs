//! Page arithmetic.

/// Results per page when no other size is configured.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Number of pages needed to show `total` results, `per_page` at a time.
///
/// A `per_page` of zero is treated as one.
///
/// # Example
///
/// ```rust
/// use jitters::app::page_count;
///
/// assert_eq!(page_count(138, 10), 14);
/// assert_eq!(page_count(100, 10), 10);
/// ```
#[must_use]
pub const fn page_count(total: u64, per_page: u64) -> u64 {
    let per_page = if per_page == 0 { 1 } else { per_page };
    let full = total / per_page;
    if total % per_page == 0 {
        full
    } else {
        full + 1
    }
}

//! Request addressing for the search API.
//!
//! Everything here is pure string work: resolving query types to paths,
//! building percent-encoded URLs, topping up ready-made paging links with
//! missing parameters, and reading offsets back out of those links.
//!
//! # Modules
//!
//! - [`routes`]: Query type to path mapping
//! - [`url_builder`]: URL construction and parameter injection
//! - [`links`]: Offset parsing for paging links

pub mod links;
pub mod routes;
pub mod url_builder;

pub use links::{is_exhausted, parse_offset};
pub use routes::Route;
pub use url_builder::{ensure_param, has_param, params_to_string, url_for, UrlBuilder};

/// Client identifier sent with every request.
pub const CLIENT_ID: &str = "5lch5g05xtkp5zhfva8g3u1xlxzwvb";

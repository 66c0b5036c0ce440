//! Browser binding compiled for `wasm32`.
//!
//! Exposes [`App`] to JavaScript and implements the session collaborators
//! over `web-sys`.
//!
//! # Modules
//!
//! - [`app`]: `window.App` with form wiring and the JSONP callback
//! - [`dom`]: [`Dom`](crate::ui::Dom) over the live document
//! - [`timer`]: [`Timer`](crate::app::Timer) over `setTimeout`

pub mod app;
pub mod dom;
pub mod timer;

pub use app::App;
pub use dom::WebDom;
pub use timer::BrowserTimer;

use wasm_bindgen::prelude::*;

/// Session type driven by the browser binding.
pub type BrowserSession = crate::Session<WebDom, BrowserTimer>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

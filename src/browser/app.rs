//! `window.App`: the JavaScript-facing widget object.

use super::{BrowserSession, BrowserTimer, WebDom};
use crate::domain::{JittersError, Result, ResultPage};
use crate::observability::init_tracing;
use crate::{Config, Session};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, KeyboardEvent};

/// Id of the search text input.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// Id of the submit button.
pub const SUBMIT_ID: &str = "submit";

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Search widget bound to the current page.
///
/// Expected to be stored under the configured handle so the JSONP callback
/// and paging links can reach it:
///
/// ```js
/// window.jitters = new App({});
/// ```
#[wasm_bindgen]
pub struct App {
    session: Rc<RefCell<BrowserSession>>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl App {
    /// Builds the widget and wires the search form.
    ///
    /// `options` is an optional plain object whose values are read as strings.
    /// See [`Config::from_map`] for the recognized keys.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> std::result::Result<App, JsError> {
        let config = Config::from_map(&options_to_map(&options)?)?;
        init_tracing(&config);

        let window = web_sys::window().ok_or_else(|| JittersError::Dom("no window".to_string()))?;
        let dom = WebDom::from_window()?;
        let document = dom.document().clone();

        let session = Rc::new_cyclic(|weak| {
            RefCell::new(Session::new(
                &config,
                dom,
                BrowserTimer::new(window, weak.clone()),
            ))
        });

        let listeners = wire_form(&document, &session)?;
        tracing::info!(handle = %config.handle, "widget ready");

        Ok(Self {
            session,
            _listeners: listeners,
        })
    }

    /// Searches for `query`.
    pub fn search(&self, query: &str) -> std::result::Result<(), JsError> {
        Ok(self.with_session(|session| session.search(query))?)
    }

    /// JSONP callback receiving the API payload.
    ///
    /// A payload that does not decode is logged and dropped. The request stays
    /// pending and its timeout reports the failure.
    #[wasm_bindgen(js_name = _fetched)]
    pub fn fetched(&self, data: JsValue) -> std::result::Result<(), JsError> {
        let page = match decode_payload(&data) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed payload");
                return Ok(());
            }
        };
        Ok(self.with_session(|session| session.fetched(page))?)
    }

    /// Follows the `next` link of the current page.
    pub fn fetch_next(&self) -> std::result::Result<(), JsError> {
        Ok(self.with_session(Session::fetch_next)?)
    }

    /// Follows the `prev` link of the current page.
    pub fn fetch_prev(&self) -> std::result::Result<(), JsError> {
        Ok(self.with_session(Session::fetch_prev)?)
    }
}

impl App {
    fn with_session<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut BrowserSession) -> Result<()>,
    {
        let mut session = self
            .session
            .try_borrow_mut()
            .map_err(|_| JittersError::Dom("session is busy".to_string()))?;
        f(&mut session)
    }
}

fn decode_payload(data: &JsValue) -> Result<ResultPage> {
    let json = js_sys::JSON::stringify(data)
        .map_err(|e| JittersError::Dom(format!("JSON.stringify: {e:?}")))?
        .as_string()
        .ok_or_else(|| JittersError::Dom("payload is not serializable".to_string()))?;
    ResultPage::from_json(&json)
}

/// Reads the options object into a string map.
///
/// `undefined` and `null` mean no options. Numbers and booleans are
/// stringified; nested values are skipped.
fn options_to_map(options: &JsValue) -> Result<BTreeMap<String, String>> {
    if options.is_undefined() || options.is_null() {
        return Ok(BTreeMap::new());
    }
    let raw: BTreeMap<String, serde_json::Value> = serde_wasm_bindgen::from_value(options.clone())
        .map_err(|e| JittersError::Config(format!("options: {e}")))?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(f) if n.is_f64() && f.fract() == 0.0 => format!("{f:.0}"),
                    _ => n.to_string(),
                },
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key, value))
        })
        .collect())
}

fn wire_form(document: &Document, session: &Rc<RefCell<BrowserSession>>) -> Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(2);

    if let Some(button) = document.get_element_by_id(SUBMIT_ID) {
        let document = document.clone();
        let session = Rc::clone(session);
        let listener = Listener::new(move |_event: web_sys::Event| {
            submit_input(&document, &session);
        });
        button
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| JittersError::Dom(format!("click listener: {e:?}")))?;
        listeners.push(listener);
    } else {
        tracing::debug!(id = SUBMIT_ID, "submit button not found");
    }

    if let Some(input) = document.get_element_by_id(SEARCH_INPUT_ID) {
        let document = document.clone();
        let session = Rc::clone(session);
        let listener = Listener::new(move |event: web_sys::Event| {
            event.prevent_default();
            let is_enter = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Enter");
            if is_enter {
                submit_input(&document, &session);
            }
        });
        input
            .add_event_listener_with_callback("keyup", listener.as_ref().unchecked_ref())
            .map_err(|e| JittersError::Dom(format!("keyup listener: {e:?}")))?;
        listeners.push(listener);
    } else {
        tracing::debug!(id = SEARCH_INPUT_ID, "search input not found");
    }

    Ok(listeners)
}

fn submit_input(document: &Document, session: &Rc<RefCell<BrowserSession>>) {
    let Some(input) = document
        .get_element_by_id(SEARCH_INPUT_ID)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let Ok(mut session) = session.try_borrow_mut() else {
        tracing::warn!("session busy, submit dropped");
        return;
    };
    if let Err(e) = session.submit(&input.value()) {
        tracing::warn!(error = %e, "submit failed");
    }
}

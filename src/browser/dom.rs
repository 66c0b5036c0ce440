//! [`Dom`] implementation over the live browser document.

use crate::domain::{JittersError, Result};
use crate::ui::Dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlScriptElement};

/// Browser document handle used by the session.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// Wraps the document of the current window.
    ///
    /// # Errors
    ///
    /// Returns [`JittersError::Dom`] outside a window context.
    pub fn from_window() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| JittersError::Dom("no window document".to_string()))
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    fn body(&self) -> Result<HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| JittersError::Dom("document has no body".to_string()))
    }
}

fn dom_error(context: &str, value: &JsValue) -> JittersError {
    JittersError::Dom(format!("{context}: {value:?}"))
}

impl Dom for WebDom {
    fn append_script(&mut self, id: &str, src: &str) -> Result<()> {
        let script: HtmlScriptElement = self
            .document
            .create_element("script")
            .map_err(|e| dom_error("create script", &e))?
            .dyn_into()
            .map_err(|_| JittersError::Dom("created element is not a script".to_string()))?;
        script.set_id(id);
        script.set_src(src);
        self.body()?
            .append_child(&script)
            .map_err(|e| dom_error("append script", &e))?;
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> Result<bool> {
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        element.remove();
        Ok(true)
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<bool> {
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        element.set_inner_html(html);
        Ok(true)
    }

    fn append_child(&mut self, parent_id: &str, tag: &str, class_name: &str, html: &str) -> Result<bool> {
        let Some(parent) = self.document.get_element_by_id(parent_id) else {
            return Ok(false);
        };
        let child = self
            .document
            .create_element(tag)
            .map_err(|e| dom_error("create element", &e))?;
        child.set_class_name(class_name);
        child.set_inner_html(html);
        parent
            .append_child(&child)
            .map_err(|e| dom_error("append element", &e))?;
        Ok(true)
    }

    fn set_class_visibility(&mut self, class_name: &str, visible: bool) -> Result<usize> {
        let value = if visible { "visible" } else { "hidden" };
        let elements = self.document.get_elements_by_class_name(class_name);
        let mut updated = 0;
        for index in 0..elements.length() {
            let Some(element) = elements
                .item(index)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            element
                .style()
                .set_property("visibility", value)
                .map_err(|e| dom_error("set visibility", &e))?;
            updated += 1;
        }
        Ok(updated)
    }
}

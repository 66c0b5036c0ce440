//! Host document collaborator.
//!
//! The widget never reaches for a global document. Every DOM operation goes
//! through [`Dom`], addressed by element id or class name, so the session and
//! renderer run unchanged against the browser ([`WebDom`](crate::browser)) or an
//! in-memory fake in tests.

use crate::domain::Result;

/// Document operations needed by the widget.
///
/// Lookups that find nothing are not errors: methods report whether they
/// touched anything. Errors are reserved for the host refusing an operation.
pub trait Dom {
    /// Creates a `<script>` element with the given id and source and appends
    /// it to the document body.
    ///
    /// # Errors
    ///
    /// Returns [`JittersError::Dom`](crate::JittersError::Dom) if the element
    /// cannot be created or appended.
    fn append_script(&mut self, id: &str, src: &str) -> Result<()>;

    /// Removes the element with `id`. Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to remove the element.
    fn remove_element(&mut self, id: &str) -> Result<bool>;

    /// Replaces the inner HTML of the element with `id`. Returns `false` if
    /// there was no such element.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to update the element.
    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<bool>;

    /// Creates a `tag` element with `class_name` and inner `html`, and appends
    /// it to the element with `parent_id`. Returns `false` if the parent is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created or appended.
    fn append_child(&mut self, parent_id: &str, tag: &str, class_name: &str, html: &str) -> Result<bool>;

    /// Shows or hides every element carrying `class_name`. Returns how many
    /// elements were updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to update an element's style.
    fn set_class_visibility(&mut self, class_name: &str, visible: bool) -> Result<usize>;
}

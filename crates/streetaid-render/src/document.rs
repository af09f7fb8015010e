//! The page document: named template sources and output elements.
//!
//! Stands in for the browser DOM from the renderer's point of view —
//! templates are looked up by element id and rendered markup replaces
//! the inner content of a named output element. Elements must be
//! registered before they can be addressed, mirroring a lookup by id
//! that can fail.

use std::collections::HashMap;

use crate::error::RenderError;

#[derive(Debug, Default)]
pub struct Document {
    templates: HashMap<String, String>,
    elements: HashMap<String, String>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template body under an element id.
    pub fn insert_template(&mut self, id: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(id.into(), source.into());
    }

    /// Register an (initially empty) output element.
    pub fn insert_element(&mut self, id: impl Into<String>) {
        self.elements.insert(id.into(), String::new());
    }

    /// Look up a template body by element id.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateMissing`] when no template is
    /// registered under `id`.
    pub fn template_source(&self, id: &str) -> Result<&str, RenderError> {
        self.templates
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| RenderError::TemplateMissing(id.to_owned()))
    }

    /// Replace the inner content of an output element.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::OutputMissing`] when no element is
    /// registered under `id`.
    pub fn set_content(&mut self, id: &str, markup: String) -> Result<(), RenderError> {
        match self.elements.get_mut(id) {
            Some(content) => {
                *content = markup;
                Ok(())
            }
            None => Err(RenderError::OutputMissing(id.to_owned())),
        }
    }

    /// Read the current content of an output element.
    #[must_use]
    pub fn content(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_source_missing_is_error() {
        let doc = Document::new();
        let err = doc.template_source("nope").unwrap_err();
        assert!(matches!(err, RenderError::TemplateMissing(ref id) if id == "nope"));
    }

    #[test]
    fn set_content_requires_registered_element() {
        let mut doc = Document::new();
        let err = doc.set_content("out", "<p>hi</p>".to_owned()).unwrap_err();
        assert!(matches!(err, RenderError::OutputMissing(ref id) if id == "out"));

        doc.insert_element("out");
        doc.set_content("out", "<p>hi</p>".to_owned()).unwrap();
        assert_eq!(doc.content("out"), Some("<p>hi</p>"));
    }
}

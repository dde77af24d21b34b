// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Surface`] over the browser DOM.
//!
//! Markers are CSS classes, toggled through `Element.classList`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use vitrine_core::surface::Surface;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element};

/// A [`Surface`] backed by a live [`Document`].
///
/// Cloning is cheap; every clone refers to the same document.
#[derive(Clone)]
pub struct DomSurface {
    document: Document,
}

impl core::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSurface")
            .field("document", &"Document")
            .finish()
    }
}

impl DomSurface {
    /// Creates a surface over `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Creates a surface over the global window's document.
    ///
    /// # Errors
    ///
    /// Fails when called outside a browser window context.
    pub fn from_window() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self::new(document))
    }

    /// Returns the wrapped document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the document's root element (`<html>`).
    ///
    /// # Errors
    ///
    /// Fails if the document has no root element.
    pub fn root(&self) -> Result<Element, JsValue> {
        self.document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))
    }
}

impl Surface for DomSurface {
    type Element = Element;

    fn find_all(&self, scope: &Element, class: &str) -> Vec<Element> {
        // An unparsable class name matches nothing.
        let Ok(list) = scope.query_selector_all(&format!(".{class}")) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_marker(&self, element: &Element, marker: &str) -> bool {
        element.class_list().contains(marker)
    }

    fn add_marker(&mut self, element: &Element, marker: &str) {
        // Only an empty or whitespace-bearing token can fail.
        let _ = element.class_list().add_1(marker);
    }

    fn remove_marker(&mut self, element: &Element, marker: &str) {
        // Same as `add_marker`: only an invalid token can fail.
        let _ = element.class_list().remove_1(marker);
    }
}

// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `click` listener registration.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

type ClickClosure = Closure<dyn FnMut(Event)>;

/// A `click` listener attached to one element.
///
/// The handler runs once per click, synchronously, in the order the browser
/// delivers them. Dropping the binding removes the listener and frees the JS
/// closure.
pub struct ClickBinding {
    target: Element,
    closure: ClickClosure,
}

impl ClickBinding {
    /// Registers `handler` for clicks on `target`.
    ///
    /// # Errors
    ///
    /// Propagates the error from `addEventListener`.
    pub fn new(target: &Element, handler: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let mut handler = handler;
        let closure = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            closure,
        })
    }

    /// Returns the element the listener is attached to.
    #[must_use]
    pub fn target(&self) -> &Element {
        &self.target
    }
}

impl Drop for ClickBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for ClickBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClickBinding")
            .field("target", &"Element")
            .finish_non_exhaustive()
    }
}

// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup collaborator contract.
//!
//! A *surface* is whatever holds the page markup: the browser DOM, or an
//! in-memory tree. The widgets only ever need to:
//!
//! - Find elements by class under a scope element, in document order.
//! - Read a string attribute (the tab pairing key).
//! - Query, add, and remove named *markers* (presentation classes).
//!
//! Click delivery is deliberately not part of this contract. Hosts translate
//! their input events into widget commands
//! ([`Carousel::handle`](crate::carousel::Carousel::handle),
//! [`TabSet::activate`](crate::tabs::TabSet::activate)) themselves.
//!
//! Surface calls are synchronous and infallible apart from "not found", which
//! the widgets turn into a [`ConfigError`](crate::error::ConfigError) at
//! construction time.

mod memory;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

pub use memory::{MemorySurface, NodeId};

/// Element lookup and marker mutation over some markup tree.
///
/// Both the DOM-based and the in-memory surface implement this trait, which
/// lets the widget state machines run in the browser and in tests alike.
pub trait Surface {
    /// Handle to one element of the markup tree.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Returns every descendant of `scope` carrying `class`, in document
    /// order. `scope` itself is never included.
    fn find_all(&self, scope: &Self::Element, class: &str) -> Vec<Self::Element>;

    /// Returns the first descendant of `scope` carrying `class` whose
    /// `attribute` equals `key`.
    fn find_one(
        &self,
        scope: &Self::Element,
        class: &str,
        attribute: &str,
        key: &str,
    ) -> Option<Self::Element> {
        self.find_all(scope, class)
            .into_iter()
            .find(|el| self.attribute(el, attribute).as_deref() == Some(key))
    }

    /// Returns the value of `name` on `element`, if present.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Returns whether `element` carries `marker`.
    fn has_marker(&self, element: &Self::Element, marker: &str) -> bool;

    /// Adds `marker` to `element`. Adding a present marker is a no-op.
    fn add_marker(&mut self, element: &Self::Element, marker: &str);

    /// Removes `marker` from `element`. Removing an absent marker is a no-op.
    fn remove_marker(&mut self, element: &Self::Element, marker: &str);

    /// Adds or removes `marker` so that its presence matches `on`.
    fn set_marker(&mut self, element: &Self::Element, marker: &str, on: bool) {
        if on {
            self.add_marker(element, marker);
        } else {
            self.remove_marker(element, marker);
        }
    }
}

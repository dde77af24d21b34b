// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory markup tree.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};

use super::Surface;

/// A handle to an element in a [`MemorySurface`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Debug, Default)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: HashSet<String>,
    attributes: HashMap<String, String>,
}

/// A [`Surface`] backed by a plain element tree.
///
/// Elements are created under a parent with an initial class list and are
/// never removed. Markers are stored as classes, the same way the DOM
/// surface stores them, so a marker and a class of the same name are
/// indistinguishable.
///
/// Handles from another `MemorySurface` are rejected with a panic.
#[derive(Debug)]
pub struct MemorySurface {
    nodes: Vec<Node>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Creates a surface holding only the root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Returns the root element (the document).
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of elements, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root element exists from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a new element as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this surface.
    pub fn create(&mut self, parent: NodeId, classes: &[&str]) -> NodeId {
        self.validate(parent);
        let id = NodeId(
            u32::try_from(self.nodes.len()).expect("MemorySurface element count exceeds u32"),
        );
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            attributes: HashMap::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    /// Sets attribute `name` on `element`, replacing any previous value.
    ///
    /// # Panics
    ///
    /// Panics if `element` does not belong to this surface.
    pub fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        self.validate(element);
        self.nodes[element.0 as usize]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Returns the parent of `element`, or `None` for the root.
    #[must_use]
    pub fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.validate(element);
        self.nodes[element.0 as usize].parent
    }

    /// Returns the classes of `element`, sorted.
    #[must_use]
    pub fn classes_of(&self, element: NodeId) -> Vec<String> {
        self.validate(element);
        let mut classes: Vec<String> = self.nodes[element.0 as usize]
            .classes
            .iter()
            .cloned()
            .collect();
        classes.sort_unstable();
        classes
    }

    /// Returns the descendants of `scope` carrying `marker`, in document
    /// order.
    #[must_use]
    pub fn marked(&self, scope: NodeId, marker: &str) -> Vec<NodeId> {
        self.find_all(&scope, marker)
    }

    /// Panics if the handle is not from this surface.
    fn validate(&self, id: NodeId) {
        assert!(
            (id.0 as usize) < self.nodes.len(),
            "unknown NodeId: {id:?} (len {})",
            self.nodes.len()
        );
    }

    /// Pre-order walk of the subtree under `scope`, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0 as usize]
            .children
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0 as usize].children.iter().rev().copied());
        }
        out
    }
}

impl Surface for MemorySurface {
    type Element = NodeId;

    fn find_all(&self, scope: &NodeId, class: &str) -> Vec<NodeId> {
        self.validate(*scope);
        self.descendants(*scope)
            .into_iter()
            .filter(|id| self.nodes[id.0 as usize].classes.contains(class))
            .collect()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.validate(*element);
        self.nodes[element.0 as usize].attributes.get(name).cloned()
    }

    fn has_marker(&self, element: &NodeId, marker: &str) -> bool {
        self.validate(*element);
        self.nodes[element.0 as usize].classes.contains(marker)
    }

    fn add_marker(&mut self, element: &NodeId, marker: &str) {
        self.validate(*element);
        let classes = &mut self.nodes[element.0 as usize].classes;
        if !classes.contains(marker) {
            classes.insert(marker.to_string());
        }
    }

    fn remove_marker(&mut self, element: &NodeId, marker: &str) {
        self.validate(*element);
        self.nodes[element.0 as usize].classes.remove(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_all_is_document_order() {
        let mut s = MemorySurface::new();
        let root = s.root();
        let a = s.create(root, &["x"]);
        let b = s.create(root, &["x"]);
        // Created after `b`, but precedes it in document order.
        let a1 = s.create(a, &["x"]);

        assert_eq!(s.find_all(&root, "x"), vec![a, a1, b]);
    }

    #[test]
    fn find_all_excludes_scope_and_outsiders() {
        let mut s = MemorySurface::new();
        let root = s.root();
        let scope = s.create(root, &["x"]);
        let inside = s.create(scope, &["x"]);
        let _outside = s.create(root, &["x"]);

        assert_eq!(s.find_all(&scope, "x"), vec![inside]);
    }

    #[test]
    fn find_one_matches_attribute() {
        let mut s = MemorySurface::new();
        let root = s.root();
        let p1 = s.create(root, &["panel"]);
        let p2 = s.create(root, &["panel"]);
        s.set_attribute(p1, "data-tab", "1");
        s.set_attribute(p2, "data-tab", "2");

        assert_eq!(s.find_one(&root, "panel", "data-tab", "2"), Some(p2));
        assert_eq!(s.find_one(&root, "panel", "data-tab", "3"), None);
    }

    #[test]
    fn markers_are_idempotent() {
        let mut s = MemorySurface::new();
        let root = s.root();
        let el = s.create(root, &["item"]);

        s.add_marker(&el, "on");
        s.add_marker(&el, "on");
        assert!(s.has_marker(&el, "on"), "marker should be present");
        assert_eq!(s.classes_of(el), vec!["item", "on"]);

        s.remove_marker(&el, "on");
        s.remove_marker(&el, "on");
        assert!(!s.has_marker(&el, "on"), "marker should be absent");
        assert_eq!(s.classes_of(el), vec!["item"]);
    }

    #[test]
    fn set_marker_follows_flag() {
        let mut s = MemorySurface::new();
        let root = s.root();
        let el = s.create(root, &[]);

        s.set_marker(&el, "on", true);
        assert!(s.has_marker(&el, "on"), "set_marker(true) adds");
        s.set_marker(&el, "on", false);
        assert!(!s.has_marker(&el, "on"), "set_marker(false) removes");
    }

    #[test]
    fn parent_links() {
        let mut s = MemorySurface::new();
        let root = s.root();
        let el = s.create(root, &[]);
        assert_eq!(s.parent(el), Some(root));
        assert_eq!(s.parent(root), None);
        assert_eq!(s.len(), 2);
    }

    #[test]
    #[should_panic(expected = "unknown NodeId")]
    fn foreign_handle_panics() {
        let mut big = MemorySurface::new();
        let root = big.root();
        let _ = big.create(root, &[]);
        let foreign = big.create(root, &[]);

        let small = MemorySurface::new();
        let _ = small.has_marker(&foreign, "x");
    }
}

// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab links paired with content panels.
//!
//! A [`TabSet`] is built once from a list of link elements. Each link carries
//! a pairing key in [`key_attribute`](TabsConfig::key_attribute); the panel
//! carrying the same key becomes its partner. The pairs are fixed after
//! construction and addressed by [`TabId`] handles.
//!
//! Selection is mutually exclusive: [`activate`](TabSet::activate) clears the
//! selected marker on every link and every panel, then marks exactly one
//! pair. Activating the already selected pair leaves the markup unchanged.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::TabsConfig;
use crate::error::ConfigError;
use crate::surface::Surface;

/// A handle to one (link, panel) pair in a [`TabSet`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(pub(crate) u32);

impl TabId {
    /// Returns the pair's position in link order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TabId({})", self.0)
    }
}

/// A link and the panel sharing its pairing key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabPair<E> {
    /// The shared pairing key.
    pub key: String,
    /// The clickable link element.
    pub link: E,
    /// The content panel element.
    pub panel: E,
}

/// Outcome of one [`TabSet::activate`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelection {
    /// The pair selected before the call, if any.
    pub previous: Option<TabId>,
    /// The pair selected now.
    pub selected: TabId,
}

impl TabSelection {
    /// Returns `true` if the call re-selected the already selected pair.
    #[must_use]
    pub fn is_reselect(&self) -> bool {
        self.previous == Some(self.selected)
    }
}

/// Mutually exclusive selection over (link, panel) pairs.
#[derive(Clone, Debug)]
pub struct TabSet<E> {
    pairs: Vec<TabPair<E>>,
    selected: Option<TabId>,
    config: TabsConfig,
}

impl<E: Clone + PartialEq> TabSet<E> {
    /// Pairs every link under `root` with its panel.
    ///
    /// If the markup already marks a link selected, the first such pair is
    /// activated so that panel markers agree with it. Otherwise nothing is
    /// selected until the first [`activate`](Self::activate), and any panel
    /// marked selected in the markup is cleared. A root with no links yields
    /// an empty, inert set.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingKey`] if a link has no pairing key.
    /// - [`ConfigError::OrphanLink`] if no panel under `root` shares a
    ///   link's key.
    /// - [`ConfigError::DuplicateKey`] if two links, or two panels, share a
    ///   key.
    pub fn new<S>(surface: &mut S, root: &E, config: &TabsConfig) -> Result<Self, ConfigError>
    where
        S: Surface<Element = E> + ?Sized,
    {
        let links = surface.find_all(root, config.link_class);
        let mut pairs: Vec<TabPair<E>> = Vec::with_capacity(links.len());
        let mut preselected = None;

        let panels = surface.find_all(root, config.panel_class);

        for (ordinal, link) in links.into_iter().enumerate() {
            let key = surface
                .attribute(&link, config.key_attribute)
                .ok_or(ConfigError::MissingKey { link: ordinal })?;
            if pairs.iter().any(|pair| pair.key == key) {
                return Err(ConfigError::DuplicateKey { key });
            }
            let panel = surface
                .find_one(root, config.panel_class, config.key_attribute, &key)
                .ok_or_else(|| ConfigError::OrphanLink { key: key.clone() })?;
            let sharing = panels
                .iter()
                .filter(|p| surface.attribute(p, config.key_attribute).as_deref() == Some(&*key))
                .count();
            if sharing > 1 {
                return Err(ConfigError::DuplicateKey { key });
            }

            if preselected.is_none() && surface.has_marker(&link, config.link_selected_marker) {
                preselected = Some(ordinal);
            }
            pairs.push(TabPair { key, link, panel });
        }

        let mut set = Self {
            pairs,
            selected: None,
            config: *config,
        };
        if let Some(ordinal) = preselected {
            let id = set.id_at(ordinal);
            set.activate(surface, id);
        } else {
            // A panel is selected only together with its link.
            for pair in &set.pairs {
                surface.remove_marker(&pair.panel, config.panel_selected_marker);
            }
        }
        Ok(set)
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the set has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the selected pair, if any.
    #[must_use]
    pub fn selected(&self) -> Option<TabId> {
        self.selected
    }

    /// Returns the pair for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this set.
    #[must_use]
    pub fn pair(&self, id: TabId) -> &TabPair<E> {
        self.validate(id);
        &self.pairs[id.index()]
    }

    /// Returns all pairs in link order.
    #[must_use]
    pub fn pairs(&self) -> &[TabPair<E>] {
        &self.pairs
    }

    /// Returns an iterator over all pair handles in link order.
    pub fn ids(&self) -> impl Iterator<Item = TabId> + '_ {
        (0..self.pairs.len()).map(|ordinal| self.id_at(ordinal))
    }

    /// Returns the pair whose key is `key`.
    #[must_use]
    pub fn id_for_key(&self, key: &str) -> Option<TabId> {
        self.pairs
            .iter()
            .position(|pair| pair.key == key)
            .map(|ordinal| self.id_at(ordinal))
    }

    /// Returns the pair owning the link `element`, for routing clicks.
    #[must_use]
    pub fn pair_for_link(&self, element: &E) -> Option<TabId> {
        self.pairs
            .iter()
            .position(|pair| pair.link == *element)
            .map(|ordinal| self.id_at(ordinal))
    }

    /// Returns the config this set was built with.
    #[must_use]
    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    /// Handler for a click on the link of `id`.
    pub fn on_link_activated<S>(&mut self, surface: &mut S, id: TabId) -> TabSelection
    where
        S: Surface<Element = E> + ?Sized,
    {
        self.activate(surface, id)
    }

    /// Selects the pair `id` and deselects every other pair.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this set.
    pub fn activate<S>(&mut self, surface: &mut S, id: TabId) -> TabSelection
    where
        S: Surface<Element = E> + ?Sized,
    {
        self.validate(id);
        let TabsConfig {
            link_selected_marker,
            panel_selected_marker,
            ..
        } = self.config;

        for pair in &self.pairs {
            surface.remove_marker(&pair.link, link_selected_marker);
        }
        let chosen = &self.pairs[id.index()];
        surface.add_marker(&chosen.link, link_selected_marker);

        for pair in &self.pairs {
            surface.remove_marker(&pair.panel, panel_selected_marker);
        }
        surface.add_marker(&chosen.panel, panel_selected_marker);

        let previous = self.selected.replace(id);
        TabSelection {
            previous,
            selected: id,
        }
    }

    /// Activates the pair whose key is `key`, if there is one.
    pub fn activate_key<S>(&mut self, surface: &mut S, key: &str) -> Option<TabSelection>
    where
        S: Surface<Element = E> + ?Sized,
    {
        let id = self.id_for_key(key)?;
        Some(self.activate(surface, id))
    }

    fn id_at(&self, ordinal: usize) -> TabId {
        TabId(u32::try_from(ordinal).expect("tab count exceeds u32"))
    }

    /// Panics if the handle is out of range.
    fn validate(&self, id: TabId) {
        assert!(
            id.index() < self.pairs.len(),
            "unknown TabId: {id:?} (len {})",
            self.pairs.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::surface::{MemorySurface, NodeId};

    struct Fixture {
        surface: MemorySurface,
        root: NodeId,
        links: Vec<NodeId>,
        panels: Vec<NodeId>,
    }

    /// Builds stock tabs markup with one link and panel per key. Panels are
    /// laid out in reverse order to show pairing does not rely on position.
    fn fixture(keys: &[&str]) -> Fixture {
        let config = TabsConfig::standard();
        let mut surface = MemorySurface::new();
        let root = surface.root();
        let nav = surface.create(root, &["tabs-links"]);
        let body = surface.create(root, &["tabs-items"]);

        let links = keys
            .iter()
            .map(|key| {
                let link = surface.create(nav, &[config.link_class]);
                surface.set_attribute(link, config.key_attribute, key);
                link
            })
            .collect();
        let mut panels: Vec<NodeId> = keys
            .iter()
            .rev()
            .map(|key| {
                let panel = surface.create(body, &[config.panel_class]);
                surface.set_attribute(panel, config.key_attribute, key);
                panel
            })
            .collect();
        panels.reverse();

        Fixture {
            surface,
            root,
            links,
            panels,
        }
    }

    fn build(f: &mut Fixture) -> TabSet<NodeId> {
        TabSet::new(&mut f.surface, &f.root, &TabsConfig::standard())
            .expect("fixture markup is valid")
    }

    /// Checks that exactly the pair `id` carries selected markers.
    fn assert_only_selected(f: &Fixture, id: TabId) {
        let config = TabsConfig::standard();
        assert_eq!(
            f.surface.marked(f.root, config.link_selected_marker),
            vec![f.links[id.index()]],
            "exactly one selected link"
        );
        assert_eq!(
            f.surface.marked(f.root, config.panel_selected_marker),
            vec![f.panels[id.index()]],
            "exactly one selected panel"
        );
    }

    #[test]
    fn pairs_links_with_panels_by_key() {
        let mut f = fixture(&["1", "2", "3"]);
        let set = build(&mut f);
        assert_eq!(set.len(), 3);
        for (i, pair) in set.pairs().iter().enumerate() {
            assert_eq!(pair.link, f.links[i]);
            assert_eq!(pair.panel, f.panels[i], "panel for key {}", pair.key);
        }
        assert_eq!(set.selected(), None, "nothing selected in plain markup");
    }

    #[test]
    fn two_tab_scenario() {
        let mut f = fixture(&["1", "2"]);
        let mut set = build(&mut f);
        let l2 = set.id_for_key("2").expect("key 2");

        let sel = set.activate(&mut f.surface, l2);
        assert_eq!(sel.previous, None);
        assert_eq!(sel.selected, l2);
        assert_only_selected(&f, l2);

        let config = TabsConfig::standard();
        assert!(
            !f.surface.has_marker(&f.links[0], config.link_selected_marker),
            "L1 deselected"
        );
        assert!(
            !f.surface.has_marker(&f.panels[0], config.panel_selected_marker),
            "P1 deselected"
        );
    }

    #[test]
    fn repeated_activation_is_idempotent() {
        let mut f = fixture(&["a", "b", "c"]);
        let mut set = build(&mut f);
        let b = set.id_for_key("b").expect("key b");

        set.activate(&mut f.surface, b);
        let sel = set.activate(&mut f.surface, b);
        assert!(sel.is_reselect(), "second activation re-selects");
        assert_only_selected(&f, b);
    }

    #[test]
    fn every_pair_switch_is_exclusive() {
        let keys = ["1", "2", "3", "4"];
        let mut f = fixture(&keys);
        let mut set = build(&mut f);
        let ids: Vec<TabId> = set.ids().collect();

        for &first in &ids {
            for &second in &ids {
                set.activate(&mut f.surface, first);
                let sel = set.activate(&mut f.surface, second);
                assert_eq!(sel.previous, Some(first));
                assert_only_selected(&f, second);
                assert_eq!(set.selected(), Some(second));
            }
        }
    }

    #[test]
    fn preselected_link_is_normalized() {
        let config = TabsConfig::standard();
        let mut f = fixture(&["1", "2", "3"]);
        f.surface.add_marker(&f.links[2], config.link_selected_marker);
        f.surface.add_marker(&f.panels[0], config.panel_selected_marker);

        let set = build(&mut f);
        let third = set.id_for_key("3").expect("key 3");
        assert_eq!(set.selected(), Some(third));
        assert_only_selected(&f, third);
    }

    #[test]
    fn selected_panel_without_selected_link_is_cleared() {
        let config = TabsConfig::standard();
        let mut f = fixture(&["1", "2"]);
        f.surface.add_marker(&f.panels[1], config.panel_selected_marker);

        let set = build(&mut f);
        assert_eq!(set.selected(), None, "no link was marked");
        assert!(
            f.surface.marked(f.root, config.link_selected_marker).is_empty(),
            "no link selected"
        );
        assert!(
            f.surface.marked(f.root, config.panel_selected_marker).is_empty(),
            "panel marker cleared along with its unselected link"
        );
    }

    #[test]
    fn duplicate_link_key_is_rejected() {
        let config = TabsConfig::standard();
        let mut f = fixture(&["1", "2"]);
        let extra = f.surface.create(f.root, &[config.link_class]);
        f.surface.set_attribute(extra, config.key_attribute, "1");

        let err = TabSet::new(&mut f.surface, &f.root, &config).expect_err("key 1 twice");
        assert_eq!(err, ConfigError::DuplicateKey { key: "1".into() });
    }

    #[test]
    fn duplicate_panel_key_is_rejected() {
        let config = TabsConfig::standard();
        let mut f = fixture(&["1", "2"]);
        let extra = f.surface.create(f.root, &[config.panel_class]);
        f.surface.set_attribute(extra, config.key_attribute, "2");

        let err = TabSet::new(&mut f.surface, &f.root, &config).expect_err("panel 2 twice");
        assert_eq!(err, ConfigError::DuplicateKey { key: "2".into() });
    }

    #[test]
    fn click_routing_and_key_activation() {
        let mut f = fixture(&["x", "y"]);
        let mut set = build(&mut f);

        let id = set.pair_for_link(&f.links[1]).expect("link y is bound");
        assert_eq!(set.pair(id).key, "y");
        assert_eq!(set.pair_for_link(&f.panels[1]), None, "panels are not links");

        set.on_link_activated(&mut f.surface, id);
        assert_only_selected(&f, id);

        let sel = set.activate_key(&mut f.surface, "x").expect("key x");
        assert_only_selected(&f, sel.selected);
        assert!(set.activate_key(&mut f.surface, "z").is_none(), "unknown key");
    }

    #[test]
    fn orphan_link_is_rejected() {
        let config = TabsConfig::standard();
        let mut f = fixture(&["1"]);
        let extra = f.surface.create(f.root, &[config.link_class]);
        f.surface.set_attribute(extra, config.key_attribute, "9");

        let err = TabSet::new(&mut f.surface, &f.root, &config).expect_err("no panel for 9");
        assert_eq!(err, ConfigError::OrphanLink { key: "9".into() });
    }

    #[test]
    fn keyless_link_is_rejected() {
        let config = TabsConfig::standard();
        let mut f = fixture(&["1", "2"]);
        let _ = f.surface.create(f.root, &[config.link_class]);

        let err = TabSet::new(&mut f.surface, &f.root, &config).expect_err("missing key");
        assert_eq!(err, ConfigError::MissingKey { link: 2 });
    }

    #[test]
    fn empty_root_is_inert() {
        let mut f = fixture(&[]);
        let set = build(&mut f);
        assert!(set.is_empty(), "no links, no pairs");
        assert_eq!(set.ids().count(), 0);
    }

    #[test]
    #[should_panic(expected = "unknown TabId")]
    fn foreign_id_panics() {
        let mut big = fixture(&["1", "2", "3"]);
        let big_set = build(&mut big);
        let last = big_set.id_for_key("3").expect("key 3");

        let mut small = fixture(&["1"]);
        let mut small_set = build(&mut small);
        small_set.activate(&mut small.surface, last);
    }
}

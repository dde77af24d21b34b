// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class and attribute names the widgets bind to.
//!
//! Both configs are plain `Copy` structs of `&'static str` with a `const`
//! [`standard`](CarouselConfig::standard) preset matching the stock markup.
//! Pages with different class names build their own value.

/// Markup names used by a [`Carousel`](crate::carousel::Carousel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Class of the carousel container element.
    pub container_class: &'static str,
    /// Class carried by every item slot.
    pub item_class: &'static str,
    /// Marker on the item currently shown.
    pub active_marker: &'static str,
    /// Marker on the item the next advance will show.
    pub upcoming_marker: &'static str,
    /// Class carried by both control buttons.
    pub button_class: &'static str,
    /// Extra class identifying the advance button.
    pub advance_class: &'static str,
    /// Extra class identifying the retreat button.
    pub retreat_class: &'static str,
}

impl CarouselConfig {
    /// The stock carousel markup.
    ///
    /// The stock markup wires the `left` button to move forward and the
    /// `right` button to move back.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            container_class: "carousel",
            item_class: "carousel-item",
            active_marker: "carousel-item-active",
            upcoming_marker: "carousel-item-next",
            button_class: "carousel-button",
            advance_class: "left",
            retreat_class: "right",
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Markup names used by a [`TabSet`](crate::tabs::TabSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsConfig {
    /// Class carried by every clickable tab link.
    pub link_class: &'static str,
    /// Class carried by every content panel.
    pub panel_class: &'static str,
    /// Attribute holding the pairing key on both links and panels.
    pub key_attribute: &'static str,
    /// Marker on the selected link.
    pub link_selected_marker: &'static str,
    /// Marker on the selected panel.
    pub panel_selected_marker: &'static str,
}

impl TabsConfig {
    /// The stock tabs markup.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            link_class: "tabs-link",
            panel_class: "tabs-item",
            key_attribute: "data-tab",
            link_selected_marker: "tabs-link-selected",
            panel_selected_marker: "tabs-item-selected",
        }
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard() {
        assert_eq!(CarouselConfig::default(), CarouselConfig::standard());
        assert_eq!(TabsConfig::default(), TabsConfig::standard());
    }

    #[test]
    fn markers_are_distinct() {
        let c = CarouselConfig::standard();
        assert_ne!(c.active_marker, c.upcoming_marker, "carousel markers");
        assert_ne!(c.advance_class, c.retreat_class, "control classes");

        let t = TabsConfig::standard();
        assert_ne!(
            t.link_selected_marker, t.panel_selected_marker,
            "tab markers"
        );
    }
}

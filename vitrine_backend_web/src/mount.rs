// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget construction plus click routing.
//!
//! Each mount function builds a widget over a [`DomSurface`], moves it into
//! an `Rc<RefCell<_>>` shared with one [`ClickBinding`] per control or link,
//! and returns a handle that keeps those listeners alive. Dropping the handle
//! unregisters every listener.
//!
//! Click handlers run to completion one at a time on the browser's event
//! loop, so the `RefCell` borrows inside them never overlap.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use vitrine_core::carousel::{Carousel, Direction};
use vitrine_core::config::{CarouselConfig, TabsConfig};
use vitrine_core::tabs::TabSet;
use vitrine_core::trace::{
    CarouselStepEvent, TabSelectEvent, TraceSink, Tracer, WidgetKind, WidgetReadyEvent,
};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::click::ClickBinding;
use crate::config_error_to_js;
use crate::surface::DomSurface;

/// A trace sink shared between several click handlers.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Runs `f` against a tracer for `sink`, if there is one.
fn emit(sink: Option<&SharedSink>, f: impl FnOnce(&mut Tracer<'_>)) {
    if let Some(sink) = sink {
        let mut sink = sink.borrow_mut();
        let mut tracer = Tracer::new(&mut *sink);
        f(&mut tracer);
    }
}

/// A [`Carousel`] wired to its two control buttons.
pub struct MountedCarousel {
    carousel: Rc<RefCell<Carousel<Element>>>,
    clicks: [ClickBinding; 2],
}

impl MountedCarousel {
    /// Returns a shared handle to the carousel state.
    #[must_use]
    pub fn carousel(&self) -> Rc<RefCell<Carousel<Element>>> {
        Rc::clone(&self.carousel)
    }

    /// Returns the advance and retreat listeners.
    #[must_use]
    pub fn bindings(&self) -> &[ClickBinding] {
        &self.clicks
    }
}

impl core::fmt::Debug for MountedCarousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let carousel = self.carousel.borrow();
        f.debug_struct("MountedCarousel")
            .field("len", &carousel.len())
            .field("current", &carousel.current())
            .field("next", &carousel.next())
            .field("clicks", &self.clicks.len())
            .finish()
    }
}

/// Builds a carousel from the markup under `container` and routes clicks on
/// its controls to [`Carousel::handle`].
///
/// # Errors
///
/// Returns the [`ConfigError`](vitrine_core::error::ConfigError) message if
/// the markup is malformed, or the DOM error if a listener cannot be added.
pub fn mount_carousel(
    surface: &DomSurface,
    container: &Element,
    config: &CarouselConfig,
    sink: Option<SharedSink>,
) -> Result<MountedCarousel, JsValue> {
    let mut setup_surface = surface.clone();
    let carousel = Carousel::new(&mut setup_surface, container, config)
        .map_err(|err| config_error_to_js(&err))?;

    emit(sink.as_ref(), |t| {
        t.widget_ready(&WidgetReadyEvent {
            kind: WidgetKind::Carousel,
            slots: carousel.len(),
            selected: Some(carousel.current()),
        });
    });

    let controls = carousel.controls().clone();
    let carousel = Rc::new(RefCell::new(carousel));

    let bind = |target: &Element, direction: Direction| {
        let carousel = Rc::clone(&carousel);
        let mut surface = surface.clone();
        let sink = sink.clone();
        ClickBinding::new(target, move || {
            let step = carousel.borrow_mut().handle(&mut surface, direction);
            emit(sink.as_ref(), |t| {
                t.carousel_step(&CarouselStepEvent::from(&step));
            });
        })
    };
    let clicks = [
        bind(&controls.advance, Direction::Advance)?,
        bind(&controls.retreat, Direction::Retreat)?,
    ];

    Ok(MountedCarousel { carousel, clicks })
}

/// A [`TabSet`] wired to its links.
pub struct MountedTabs {
    tabs: Rc<RefCell<TabSet<Element>>>,
    clicks: Vec<ClickBinding>,
}

impl MountedTabs {
    /// Returns a shared handle to the tab set.
    #[must_use]
    pub fn tabs(&self) -> Rc<RefCell<TabSet<Element>>> {
        Rc::clone(&self.tabs)
    }

    /// Returns one listener per link, in link order.
    #[must_use]
    pub fn bindings(&self) -> &[ClickBinding] {
        &self.clicks
    }
}

impl core::fmt::Debug for MountedTabs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tabs = self.tabs.borrow();
        f.debug_struct("MountedTabs")
            .field("len", &tabs.len())
            .field("selected", &tabs.selected())
            .field("clicks", &self.clicks.len())
            .finish()
    }
}

/// Pairs the tab links under `root` with their panels and routes clicks on
/// each link to [`TabSet::on_link_activated`].
///
/// # Errors
///
/// Returns the [`ConfigError`](vitrine_core::error::ConfigError) message if
/// the markup is malformed, or the DOM error if a listener cannot be added.
pub fn mount_tabs(
    surface: &DomSurface,
    root: &Element,
    config: &TabsConfig,
    sink: Option<SharedSink>,
) -> Result<MountedTabs, JsValue> {
    let mut setup_surface = surface.clone();
    let tabs =
        TabSet::new(&mut setup_surface, root, config).map_err(|err| config_error_to_js(&err))?;

    emit(sink.as_ref(), |t| {
        t.widget_ready(&WidgetReadyEvent {
            kind: WidgetKind::Tabs,
            slots: tabs.len(),
            selected: tabs.selected().map(|id| id.index()),
        });
    });

    let links: Vec<_> = tabs
        .ids()
        .map(|id| (id, tabs.pair(id).link.clone()))
        .collect();
    let tabs = Rc::new(RefCell::new(tabs));

    let mut clicks = Vec::with_capacity(links.len());
    for (id, link) in links {
        let tabs = Rc::clone(&tabs);
        let mut surface = surface.clone();
        let sink = sink.clone();
        clicks.push(ClickBinding::new(&link, move || {
            let selection = tabs.borrow_mut().on_link_activated(&mut surface, id);
            emit(sink.as_ref(), |t| {
                t.tab_select(&TabSelectEvent::from(&selection));
            });
        })?);
    }

    Ok(MountedTabs { tabs, clicks })
}

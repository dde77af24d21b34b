// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless widget session that exercises the tracing and diagnostics pipeline.
//!
//! Builds stock carousel and tabs markup on a
//! [`MemorySurface`](vitrine_core::surface::MemorySurface), replays a scripted
//! sequence of clicks, records events to both a
//! [`PrettyPrintSink`](vitrine_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](vitrine_debug::recorder::RecorderSink), then exports a
//! JSON trace file.

use std::fs::File;
use std::io::BufWriter;

use vitrine_core::carousel::{Carousel, Direction};
use vitrine_core::config::{CarouselConfig, TabsConfig};
use vitrine_core::surface::{MemorySurface, NodeId};
use vitrine_core::tabs::TabSet;
use vitrine_core::trace::{
    CarouselStepEvent, TabSelectEvent, TraceSink, Tracer, WidgetKind, WidgetReadyEvent,
};

use vitrine_debug::pretty::PrettyPrintSink;
use vitrine_debug::recorder::RecorderSink;

const CAROUSEL_ITEMS: usize = 4;
const TAB_KEYS: [&str; 3] = ["1", "2", "3"];

/// Scripted carousel clicks.
const CAROUSEL_SCRIPT: [Direction; 7] = [
    Direction::Advance,
    Direction::Advance,
    Direction::Advance,
    Direction::Advance,
    Direction::Retreat,
    Direction::Retreat,
    Direction::Advance,
];

/// Scripted tab clicks, by key.
const TAB_SCRIPT: [&str; 4] = ["2", "3", "3", "1"];

fn build_carousel_markup(surface: &mut MemorySurface, config: &CarouselConfig) -> NodeId {
    let root = surface.root();
    let container = surface.create(root, &[config.container_class]);
    for i in 0..CAROUSEL_ITEMS {
        if i == 0 {
            surface.create(container, &[config.item_class, config.active_marker]);
        } else {
            surface.create(container, &[config.item_class]);
        }
    }
    surface.create(container, &[config.button_class, config.advance_class]);
    surface.create(container, &[config.button_class, config.retreat_class]);
    container
}

fn build_tabs_markup(surface: &mut MemorySurface, config: &TabsConfig) -> NodeId {
    let root = surface.root();
    let tabs = surface.create(root, &["tabs"]);
    let links = surface.create(tabs, &["tabs-links"]);
    for key in TAB_KEYS {
        let link = surface.create(links, &[config.link_class]);
        surface.set_attribute(link, config.key_attribute, key);
    }
    let items = surface.create(tabs, &["tabs-items"]);
    for key in TAB_KEYS {
        let panel = surface.create(items, &[config.panel_class]);
        surface.set_attribute(panel, config.key_attribute, key);
    }
    tabs
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- markup ------------------------------------------------------------
    let carousel_config = CarouselConfig::standard();
    let tabs_config = TabsConfig::standard();
    let mut surface = MemorySurface::new();
    let container = build_carousel_markup(&mut surface, &carousel_config);
    let tabs_root = build_tabs_markup(&mut surface, &tabs_config);

    // -- widgets -----------------------------------------------------------
    let mut carousel = Carousel::new(&mut surface, &container, &carousel_config)
        .expect("carousel markup is valid");
    let mut tabs =
        TabSet::new(&mut surface, &tabs_root, &tabs_config).expect("tabs markup is valid");

    for ready in [
        WidgetReadyEvent {
            kind: WidgetKind::Carousel,
            slots: carousel.len(),
            selected: Some(carousel.current()),
        },
        WidgetReadyEvent {
            kind: WidgetKind::Tabs,
            slots: tabs.len(),
            selected: tabs.selected().map(|id| id.index()),
        },
    ] {
        pretty.on_widget_ready(&ready);
        recorder.on_widget_ready(&ready);
    }

    // -- scripted clicks ---------------------------------------------------
    for direction in CAROUSEL_SCRIPT {
        let control = match direction {
            Direction::Advance => carousel.controls().advance,
            Direction::Retreat => carousel.controls().retreat,
        };
        // Route through the control lookup, as a click handler would.
        let routed = carousel
            .control_direction(&control)
            .expect("control belongs to carousel");
        let step = carousel.handle(&mut surface, routed);
        let e = CarouselStepEvent::from(&step);
        pretty.on_carousel_step(&e);
        recorder.on_carousel_step(&e);
    }

    for key in TAB_SCRIPT {
        let id = tabs.id_for_key(key).expect("scripted key exists");
        let link = tabs.pair(id).link;
        let routed = tabs.pair_for_link(&link).expect("link belongs to tab set");
        let selection = tabs.on_link_activated(&mut surface, routed);
        let e = TabSelectEvent::from(&selection);
        pretty.on_tab_select(&e);

        // Also exercise the Tracer wrapper.
        let mut tracer = Tracer::new(&mut recorder);
        tracer.tab_select(&e);
    }

    // -- export JSON trace -------------------------------------------------
    let path = "vitrine-trace.json";
    let file = File::create(path).expect("failed to create vitrine-trace.json");
    let mut writer = BufWriter::new(file);
    vitrine_debug::json::export(recorder.records(), &mut writer)
        .expect("failed to write JSON trace");

    println!("Wrote {path} ({} events)", recorder.len());
}

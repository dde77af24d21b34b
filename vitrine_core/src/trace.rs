// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for widget commands.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! hosts call after building a widget and after every command. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::carousel::{CarouselStep, Direction};
use crate::tabs::{TabId, TabSelection};

/// Which widget an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A [`Carousel`](crate::carousel::Carousel).
    Carousel,
    /// A [`TabSet`](crate::tabs::TabSet).
    Tabs,
}

impl WidgetKind {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carousel => "carousel",
            Self::Tabs => "tabs",
        }
    }
}

/// Emitted once a widget has been bound to its markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetReadyEvent {
    /// Which widget.
    pub kind: WidgetKind,
    /// Item slots (carousel) or pairs (tabs).
    pub slots: usize,
    /// Initially current slot (carousel) or preselected pair (tabs).
    pub selected: Option<usize>,
}

/// Emitted after every carousel command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselStepEvent {
    /// Which command ran.
    pub direction: Direction,
    /// Slot current before the command.
    pub from: usize,
    /// Slot current after the command.
    pub current: usize,
    /// Slot upcoming after the command.
    pub next: usize,
    /// Number of slots.
    pub len: usize,
}

impl From<&CarouselStep> for CarouselStepEvent {
    fn from(step: &CarouselStep) -> Self {
        Self {
            direction: step.direction,
            from: step.from,
            current: step.current,
            next: step.next,
            len: step.len,
        }
    }
}

/// Emitted after every tab activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelectEvent {
    /// Pair selected before the activation, if any.
    pub previous: Option<TabId>,
    /// Pair selected now.
    pub selected: TabId,
}

impl From<&TabSelection> for TabSelectEvent {
    fn from(sel: &TabSelection) -> Self {
        Self {
            previous: sel.previous,
            selected: sel.selected,
        }
    }
}

/// Receives widget events.
///
/// Every method has a default no-op body.
pub trait TraceSink {
    /// Called when a widget has been bound to its markup.
    fn on_widget_ready(&mut self, e: &WidgetReadyEvent) {
        _ = e;
    }

    /// Called after a carousel command.
    fn on_carousel_step(&mut self, e: &CarouselStepEvent) {
        _ = e;
    }

    /// Called after a tab activation.
    fn on_tab_select(&mut self, e: &TabSelectEvent) {
        _ = e;
    }
}

/// Zero-overhead dispatch wrapper around an optional [`TraceSink`].
///
/// With the `trace` feature disabled, every method is an empty inline
/// function.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`WidgetReadyEvent`].
    #[inline]
    pub fn widget_ready(&mut self, e: &WidgetReadyEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_widget_ready(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CarouselStepEvent`].
    #[inline]
    pub fn carousel_step(&mut self, e: &CarouselStepEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_carousel_step(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TabSelectEvent`].
    #[inline]
    pub fn tab_select(&mut self, e: &TabSelectEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tab_select(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        ready: u32,
        steps: u32,
        selects: u32,
    }

    impl TraceSink for CountingSink {
        fn on_widget_ready(&mut self, _e: &WidgetReadyEvent) {
            self.ready += 1;
        }

        fn on_carousel_step(&mut self, _e: &CarouselStepEvent) {
            self.steps += 1;
        }

        fn on_tab_select(&mut self, _e: &TabSelectEvent) {
            self.selects += 1;
        }
    }

    fn sample_step() -> CarouselStepEvent {
        CarouselStepEvent {
            direction: Direction::Retreat,
            from: 0,
            current: 2,
            next: 0,
            len: 3,
        }
    }

    fn sample_select() -> TabSelectEvent {
        TabSelectEvent {
            previous: None,
            selected: TabId(1),
        }
    }

    fn sample_ready() -> WidgetReadyEvent {
        WidgetReadyEvent {
            kind: WidgetKind::Tabs,
            slots: 2,
            selected: None,
        }
    }

    #[test]
    fn carousel_step_event_from_step() {
        let step = CarouselStep {
            direction: Direction::Advance,
            from: 4,
            current: 0,
            next: 1,
            len: 5,
        };
        let evt = CarouselStepEvent::from(&step);
        assert_eq!(evt.direction, Direction::Advance);
        assert_eq!(evt.from, 4);
        assert_eq!(evt.current, 0);
        assert_eq!(evt.next, 1);
        assert_eq!(evt.len, 5);
    }

    #[test]
    fn tab_select_event_from_selection() {
        let sel = TabSelection {
            previous: Some(TabId(0)),
            selected: TabId(3),
        };
        let evt = TabSelectEvent::from(&sel);
        assert_eq!(evt.previous, Some(TabId(0)));
        assert_eq!(evt.selected, TabId(3));
    }

    #[test]
    fn default_sink_methods_are_noops() {
        struct Empty;
        impl TraceSink for Empty {}

        let mut sink = Empty;
        sink.on_widget_ready(&sample_ready());
        sink.on_carousel_step(&sample_step());
        sink.on_tab_select(&sample_select());
    }

    #[test]
    fn tracer_none_discards() {
        let mut tracer = Tracer::none();
        tracer.widget_ready(&sample_ready());
        tracer.carousel_step(&sample_step());
        tracer.tab_select(&sample_select());
    }

    #[test]
    fn tracer_dispatches_when_enabled() {
        let mut sink = CountingSink::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.widget_ready(&sample_ready());
            tracer.carousel_step(&sample_step());
            tracer.carousel_step(&sample_step());
            tracer.tab_select(&sample_select());
        }
        if cfg!(feature = "trace") {
            assert_eq!(sink.ready, 1);
            assert_eq!(sink.steps, 2);
            assert_eq!(sink.selects, 1);
        } else {
            assert_eq!(
                sink.ready + sink.steps + sink.selects,
                0,
                "tracer is inert without the trace feature"
            );
        }
    }

    #[test]
    fn widget_kind_labels() {
        assert_eq!(WidgetKind::Carousel.as_str(), "carousel");
        assert_eq!(WidgetKind::Tabs.as_str(), "tabs");
    }
}

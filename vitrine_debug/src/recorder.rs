// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event, tagged
//! with a sequence number, to a `Vec`. The log can be inspected directly or
//! handed to [`json::export`](crate::json::export).

use vitrine_core::trace::{CarouselStepEvent, TabSelectEvent, TraceSink, WidgetReadyEvent};

/// One recorded event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A widget was bound to its markup.
    WidgetReady(WidgetReadyEvent),
    /// A carousel command ran.
    CarouselStep(CarouselStepEvent),
    /// A tab pair was activated.
    TabSelect(TabSelectEvent),
}

/// A [`RecordedEvent`] with its position in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    /// Zero-based sequence number.
    pub seq: u64,
    /// The event.
    pub event: RecordedEvent,
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    records: Vec<Record>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the recorder and returns the log.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    fn push(&mut self, event: RecordedEvent) {
        let seq = self.records.len() as u64;
        self.records.push(Record { seq, event });
    }
}

impl TraceSink for RecorderSink {
    fn on_widget_ready(&mut self, e: &WidgetReadyEvent) {
        self.push(RecordedEvent::WidgetReady(*e));
    }

    fn on_carousel_step(&mut self, e: &CarouselStepEvent) {
        self.push(RecordedEvent::CarouselStep(*e));
    }

    fn on_tab_select(&mut self, e: &TabSelectEvent) {
        self.push(RecordedEvent::TabSelect(*e));
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::carousel::Carousel;
    use vitrine_core::config::CarouselConfig;
    use vitrine_core::surface::MemorySurface;
    use vitrine_core::trace::Tracer;

    use super::*;

    #[test]
    fn records_in_order_with_sequence_numbers() {
        let config = CarouselConfig::standard();
        let mut surface = MemorySurface::new();
        let root = surface.root();
        let container = surface.create(root, &[config.container_class]);
        for _ in 0..3 {
            surface.create(container, &[config.item_class]);
        }
        surface.create(container, &[config.button_class, config.advance_class]);
        surface.create(container, &[config.button_class, config.retreat_class]);
        let mut carousel =
            Carousel::new(&mut surface, &container, &config).expect("valid markup");

        let mut recorder = RecorderSink::new();
        {
            let mut tracer = Tracer::new(&mut recorder);
            let step = carousel.advance(&mut surface);
            tracer.carousel_step(&CarouselStepEvent::from(&step));
            let step = carousel.retreat(&mut surface);
            tracer.carousel_step(&CarouselStepEvent::from(&step));
        }

        assert_eq!(recorder.len(), 2);
        let seqs: Vec<u64> = recorder.records().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
        match recorder.records()[1].event {
            RecordedEvent::CarouselStep(e) => {
                assert_eq!((e.from, e.current, e.next), (1, 0, 1));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn starts_empty() {
        let recorder = RecorderSink::new();
        assert!(recorder.is_empty(), "new recorder holds nothing");
        assert!(recorder.into_records().is_empty(), "no records");
    }
}

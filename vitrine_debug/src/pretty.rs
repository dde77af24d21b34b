// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use vitrine_core::trace::{CarouselStepEvent, TabSelectEvent, TraceSink, WidgetReadyEvent};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn opt(v: Option<usize>) -> String {
    v.map_or_else(|| "-".to_owned(), |i| i.to_string())
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_widget_ready(&mut self, e: &WidgetReadyEvent) {
        let _ = writeln!(
            self.writer,
            "[ready] widget={} slots={} selected={}",
            e.kind.as_str(),
            e.slots,
            opt(e.selected),
        );
    }

    fn on_carousel_step(&mut self, e: &CarouselStepEvent) {
        let _ = writeln!(
            self.writer,
            "[carousel] {} {}->{} next={} len={}",
            e.direction.as_str(),
            e.from,
            e.current,
            e.next,
            e.len,
        );
    }

    fn on_tab_select(&mut self, e: &TabSelectEvent) {
        let _ = writeln!(
            self.writer,
            "[tabs] select={} previous={}",
            e.selected.index(),
            opt(e.previous.map(|id| id.index())),
        );
    }
}

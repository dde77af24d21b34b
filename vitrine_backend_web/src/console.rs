// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;
use alloc::string::String;

use vitrine_core::trace::{CarouselStepEvent, TabSelectEvent, TraceSink, WidgetReadyEvent};
use wasm_bindgen::JsValue;

/// Writes one `console.log` line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn log(line: &str) {
    web_sys::console::log_1(&JsValue::from_str(line));
}

/// Formats an optional index as the index or `-`.
fn opt_index(v: Option<usize>) -> String {
    v.map_or_else(|| String::from("-"), |i| format!("{i}"))
}

impl TraceSink for ConsoleSink {
    fn on_widget_ready(&mut self, e: &WidgetReadyEvent) {
        log(&format!(
            "[{}] ready slots={} selected={}",
            e.kind.as_str(),
            e.slots,
            opt_index(e.selected),
        ));
    }

    fn on_carousel_step(&mut self, e: &CarouselStepEvent) {
        log(&format!(
            "[carousel] {} {} -> {} next={} len={}",
            e.direction.as_str(),
            e.from,
            e.current,
            e.next,
            e.len,
        ));
    }

    fn on_tab_select(&mut self, e: &TabSelectEvent) {
        log(&format!(
            "[tabs] select {} (was {})",
            e.selected.index(),
            opt_index(e.previous.map(|id| id.index())),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opt_index_formats_both_cases() {
        assert_eq!(opt_index(Some(3)), "3");
        assert_eq!(opt_index(None), "-");
    }
}

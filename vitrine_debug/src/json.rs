// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the records of a [`RecorderSink`](crate::recorder::RecorderSink)
//! as a JSON array, one object per event, for loading into notebooks or
//! diffing between runs.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{Record, RecordedEvent};

/// Converts one record into its JSON object.
#[must_use]
pub fn to_value(record: &Record) -> Value {
    match record.event {
        RecordedEvent::WidgetReady(e) => json!({
            "seq": record.seq,
            "event": "WidgetReady",
            "widget": e.kind.as_str(),
            "slots": e.slots,
            "selected": e.selected,
        }),
        RecordedEvent::CarouselStep(e) => json!({
            "seq": record.seq,
            "event": "CarouselStep",
            "direction": e.direction.as_str(),
            "from": e.from,
            "current": e.current,
            "next": e.next,
            "len": e.len,
        }),
        RecordedEvent::TabSelect(e) => json!({
            "seq": record.seq,
            "event": "TabSelect",
            "selected": e.selected.index(),
            "previous": e.previous.map(|id| id.index()),
        }),
    }
}

/// Writes `records` to `writer` as a pretty-printed JSON array.
pub fn export(records: &[Record], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = records.iter().map(to_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &Value::Array(events))?;
    writeln!(writer)
}

// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for vitrine widget traces.
//!
//! This crate provides [`TraceSink`](vitrine_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory event log with sequence numbers.
//! - [`json::export`] — writes recorded events as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;

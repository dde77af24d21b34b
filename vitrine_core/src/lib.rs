// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machines for markup-bound carousel and tab widgets.
//!
//! `vitrine_core` holds the selection logic of two small page widgets and
//! nothing else. It is `no_std` compatible (with `alloc`). Everything that
//! touches a real document goes through the [`Surface`](surface::Surface)
//! trait, so the same state machines run against the browser DOM (see
//! `vitrine_backend_web`) and against the in-memory
//! [`MemorySurface`](surface::MemorySurface) used by tests and headless tools.
//!
//! # Architecture
//!
//! Both widgets are built once from existing markup and then driven by
//! explicit commands from the host's input layer:
//!
//! ```text
//!   click on control ──► Carousel::handle(Direction) ──► CarouselStep
//!                               │
//!                               ▼
//!                        Surface::add_marker / remove_marker
//!
//!   click on link ─────► TabSet::activate(TabId) ──────► TabSelection
//!                               │
//!                               ▼
//!                        Surface::add_marker / remove_marker
//! ```
//!
//! **[`carousel`]** — Circular `current`/`next` tracking with `advance` and
//! `retreat`. Exactly one item is active and, with two or more items,
//! exactly one is upcoming.
//!
//! **[`tabs`]** — Link/panel pairs joined once by a pairing key, with
//! mutually exclusive selection.
//!
//! **[`surface`]** — The markup collaborator contract and an in-memory
//! implementation.
//!
//! **[`config`]** — Class and attribute names the widgets look for.
//!
//! **[`error`]** — Construction-time configuration errors.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! widget instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod carousel;
pub mod config;
pub mod error;
pub mod surface;
pub mod tabs;
pub mod trace;

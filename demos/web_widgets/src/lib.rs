// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: carousel and tabs bound to page markup.
//!
//! Finds the stock `.carousel` container and the tab links in `index.html`,
//! mounts both widgets with [`mount_carousel`] and [`mount_tabs`], and logs
//! every command to the browser console through [`ConsoleSink`].
//!
//! Build with: `wasm-pack build --target web demos/web_widgets`
//!
//! Then serve `demos/web_widgets/` and open `index.html` in a browser.
//!
//! [`mount_carousel`]: vitrine_backend_web::mount_carousel
//! [`mount_tabs`]: vitrine_backend_web::mount_tabs
//! [`ConsoleSink`]: vitrine_backend_web::ConsoleSink

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;

use vitrine_backend_web::{
    ConsoleSink, DomSurface, SharedSink, Surface as _, mount_carousel, mount_tabs,
};
use vitrine_core::config::{CarouselConfig, TabsConfig};

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let surface = DomSurface::from_window()?;
    let root = surface.root()?;
    let sink: SharedSink = Rc::new(RefCell::new(ConsoleSink::new()));

    let carousel_config = CarouselConfig::standard();
    let container = surface
        .find_all(&root, carousel_config.container_class)
        .into_iter()
        .next()
        .ok_or_else(|| JsValue::from_str("page has no carousel container"))?;
    let carousel = mount_carousel(
        &surface,
        &container,
        &carousel_config,
        Some(Rc::clone(&sink)),
    )?;

    let tabs = mount_tabs(&surface, &root, &TabsConfig::standard(), Some(sink))?;

    // Keep the listeners alive — the widgets live as long as the page.
    core::mem::forget(carousel);
    core::mem::forget(tabs);

    Ok(())
}

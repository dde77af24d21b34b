// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for vitrine.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomSurface`]: [`Surface`] over the live DOM (`querySelectorAll`,
//!   `classList`, `getAttribute`)
//! - [`ClickBinding`]: a `click` listener that unregisters itself on drop
//! - [`mount_carousel`] / [`mount_tabs`]: build a widget and route clicks on
//!   its controls or links into its command handlers
//! - [`ConsoleSink`]: [`TraceSink`](vitrine_core::trace::TraceSink) writing
//!   to `console.log`

#![no_std]

extern crate alloc;

mod click;
mod console;
mod mount;
mod surface;

pub use click::ClickBinding;
pub use console::ConsoleSink;
pub use mount::{MountedCarousel, MountedTabs, SharedSink, mount_carousel, mount_tabs};
pub use surface::DomSurface;
pub use vitrine_core::surface::Surface;

use alloc::string::ToString;

use vitrine_core::error::ConfigError;
use wasm_bindgen::JsValue;

/// Converts a [`ConfigError`] into a JavaScript string value.
#[must_use]
pub fn config_error_to_js(err: &ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

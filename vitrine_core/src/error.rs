// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration errors.
//!
//! Every error here means the markup does not match the widget's
//! [config](crate::config). They are only produced while a widget is being
//! built; once constructed, no widget operation can fail.

use alloc::string::String;
use core::fmt;

use crate::carousel::Direction;

/// Malformed markup detected while building a widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The carousel container holds no items.
    NoItems,
    /// A carousel control button is absent.
    MissingControl(Direction),
    /// One element carries both control classes, so it would drive both
    /// directions at once.
    SharedControl,
    /// A tab link carries no pairing key. Holds the link's position.
    MissingKey {
        /// Zero-based position of the link in document order.
        link: usize,
    },
    /// No panel shares a tab link's pairing key.
    OrphanLink {
        /// The unmatched pairing key.
        key: String,
    },
    /// Two links, or two panels, carry the same pairing key.
    DuplicateKey {
        /// The repeated pairing key.
        key: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoItems => write!(f, "carousel has no items"),
            Self::MissingControl(direction) => {
                write!(f, "carousel {} control is missing", direction.as_str())
            }
            Self::SharedControl => {
                write!(f, "carousel advance and retreat controls are one element")
            }
            Self::MissingKey { link } => write!(f, "tab link {link} has no pairing key"),
            Self::OrphanLink { key } => write!(f, "no tab panel matches key {key:?}"),
            Self::DuplicateKey { key } => write!(f, "tab key {key:?} is used more than once"),
        }
    }
}

impl core::error::Error for ConfigError {}

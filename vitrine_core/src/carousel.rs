// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotating item carousel.
//!
//! A [`Carousel`] owns a fixed, ordered list of item slots and two control
//! buttons. It tracks two slot indices:
//!
//! - `current` — the slot shown now, marked with
//!   [`active_marker`](CarouselConfig::active_marker).
//! - `next` — always `(current + 1) % len`, marked with
//!   [`upcoming_marker`](CarouselConfig::upcoming_marker).
//!
//! [`advance`](Carousel::advance) moves one slot forward and
//! [`retreat`](Carousel::retreat) one slot back, both wrapping at the ends.
//! A retreat leaves `next` pointing at the slot that was current before it,
//! so a following advance returns there.
//!
//! A single-item carousel is valid. Its item stays active, both operations
//! are no-ops, and nothing is ever marked upcoming.

use alloc::vec::Vec;

use crate::config::CarouselConfig;
use crate::error::ConfigError;
use crate::surface::Surface;

/// Direction of a carousel step, one per control button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move to the next slot.
    Advance,
    /// Move to the previous slot.
    Retreat,
}

impl Direction {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Retreat => "retreat",
        }
    }
}

/// Presentation state of one item slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemState {
    /// Neither shown nor next in line.
    Inactive,
    /// The slot shown now.
    Active,
    /// The slot the next advance will show.
    Upcoming,
}

/// The two control buttons of a carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselControls<E> {
    /// Button that triggers [`Direction::Advance`].
    pub advance: E,
    /// Button that triggers [`Direction::Retreat`].
    pub retreat: E,
}

/// Outcome of one carousel command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselStep {
    /// Which command ran.
    pub direction: Direction,
    /// Slot that was current before the command.
    pub from: usize,
    /// Slot that is current after the command.
    pub current: usize,
    /// Slot that is upcoming after the command.
    pub next: usize,
    /// Number of slots.
    pub len: usize,
}

impl CarouselStep {
    /// Returns `true` if the command left `current` unchanged.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.from == self.current
    }
}

/// Circular item selection over a [`Surface`].
///
/// Build with [`new`](Self::new), then call [`handle`](Self::handle) (or
/// [`on_advance`](Self::on_advance) / [`on_retreat`](Self::on_retreat)) for
/// every control click. The carousel does not hold the surface; each command
/// borrows it so several widgets can share one document.
#[derive(Clone, Debug)]
pub struct Carousel<E> {
    items: Vec<E>,
    controls: CarouselControls<E>,
    current: usize,
    next: usize,
    config: CarouselConfig,
}

impl<E: Clone + PartialEq> Carousel<E> {
    /// Binds a carousel to the markup under `container`.
    ///
    /// The initial slot is the first item already carrying the active marker,
    /// or slot 0 if none does. Stray active and upcoming markers on other
    /// items are cleared, and the upcoming marker is placed right away so the
    /// markup is consistent before the first command.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoItems`] if `container` holds no items.
    /// - [`ConfigError::MissingControl`] if either button is absent.
    /// - [`ConfigError::SharedControl`] if one button carries both the
    ///   advance and the retreat class.
    pub fn new<S>(
        surface: &mut S,
        container: &E,
        config: &CarouselConfig,
    ) -> Result<Self, ConfigError>
    where
        S: Surface<Element = E> + ?Sized,
    {
        let items = surface.find_all(container, config.item_class);
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }

        let buttons = surface.find_all(container, config.button_class);
        let find_button = |class: &str, direction| {
            buttons
                .iter()
                .find(|b| surface.has_marker(b, class))
                .cloned()
                .ok_or(ConfigError::MissingControl(direction))
        };
        let controls = CarouselControls {
            advance: find_button(config.advance_class, Direction::Advance)?,
            retreat: find_button(config.retreat_class, Direction::Retreat)?,
        };
        if controls.advance == controls.retreat {
            return Err(ConfigError::SharedControl);
        }

        let current = items
            .iter()
            .position(|item| surface.has_marker(item, config.active_marker))
            .unwrap_or(0);
        let next = (current + 1) % items.len();

        let carousel = Self {
            items,
            controls,
            current,
            next,
            config: *config,
        };
        carousel.sync_markers(surface);
        Ok(carousel)
    }

    /// Returns the number of item slots (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty carousels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current slot index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the upcoming slot index, `(current + 1) % len`.
    #[must_use]
    pub fn next(&self) -> usize {
        self.next
    }

    /// Returns the element at slot `idx`, if in range.
    #[must_use]
    pub fn item(&self, idx: usize) -> Option<&E> {
        self.items.get(idx)
    }

    /// Returns all item elements in slot order.
    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Returns the control buttons.
    #[must_use]
    pub fn controls(&self) -> &CarouselControls<E> {
        &self.controls
    }

    /// Returns the config this carousel was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns the presentation state of slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[must_use]
    pub fn state_of(&self, idx: usize) -> ItemState {
        assert!(
            idx < self.items.len(),
            "slot index {idx} out of range (len {})",
            self.items.len()
        );
        if idx == self.current {
            ItemState::Active
        } else if idx == self.next {
            ItemState::Upcoming
        } else {
            ItemState::Inactive
        }
    }

    /// Returns which command a click on `element` should trigger, or `None`
    /// if it is not one of this carousel's controls.
    #[must_use]
    pub fn control_direction(&self, element: &E) -> Option<Direction> {
        if *element == self.controls.advance {
            Some(Direction::Advance)
        } else if *element == self.controls.retreat {
            Some(Direction::Retreat)
        } else {
            None
        }
    }

    /// Runs the command for `direction`.
    pub fn handle<S>(&mut self, surface: &mut S, direction: Direction) -> CarouselStep
    where
        S: Surface<Element = E> + ?Sized,
    {
        match direction {
            Direction::Advance => self.advance(surface),
            Direction::Retreat => self.retreat(surface),
        }
    }

    /// Handler for the advance control.
    pub fn on_advance<S>(&mut self, surface: &mut S) -> CarouselStep
    where
        S: Surface<Element = E> + ?Sized,
    {
        self.advance(surface)
    }

    /// Handler for the retreat control.
    pub fn on_retreat<S>(&mut self, surface: &mut S) -> CarouselStep
    where
        S: Surface<Element = E> + ?Sized,
    {
        self.retreat(surface)
    }

    /// Moves one slot forward, wrapping from the last slot to slot 0.
    pub fn advance<S>(&mut self, surface: &mut S) -> CarouselStep
    where
        S: Surface<Element = E> + ?Sized,
    {
        let from = self.current;
        if self.items.len() > 1 {
            let CarouselConfig {
                active_marker,
                upcoming_marker,
                ..
            } = self.config;

            surface.remove_marker(&self.items[self.current], active_marker);
            surface.remove_marker(&self.items[self.next], upcoming_marker);
            surface.add_marker(&self.items[self.next], active_marker);
            self.current = self.next;
            self.next = self.successor(self.current);
            surface.add_marker(&self.items[self.next], upcoming_marker);
        }
        self.step(Direction::Advance, from)
    }

    /// Moves one slot back, wrapping from slot 0 to the last slot.
    ///
    /// The slot being left becomes the upcoming one.
    pub fn retreat<S>(&mut self, surface: &mut S) -> CarouselStep
    where
        S: Surface<Element = E> + ?Sized,
    {
        let from = self.current;
        if self.items.len() > 1 {
            let CarouselConfig {
                active_marker,
                upcoming_marker,
                ..
            } = self.config;

            surface.remove_marker(&self.items[self.current], active_marker);
            surface.remove_marker(&self.items[self.next], upcoming_marker);
            surface.add_marker(&self.items[self.current], upcoming_marker);
            self.current = if self.current == 0 {
                self.items.len() - 1
            } else {
                self.current - 1
            };
            surface.add_marker(&self.items[self.current], active_marker);
            self.next = self.successor(self.current);
        }
        self.step(Direction::Retreat, from)
    }

    fn successor(&self, idx: usize) -> usize {
        (idx + 1) % self.items.len()
    }

    fn step(&self, direction: Direction, from: usize) -> CarouselStep {
        CarouselStep {
            direction,
            from,
            current: self.current,
            next: self.next,
            len: self.items.len(),
        }
    }

    /// Makes every item's markers agree with `current` and `next`.
    fn sync_markers<S>(&self, surface: &mut S)
    where
        S: Surface<Element = E> + ?Sized,
    {
        let single = self.items.len() == 1;
        for (idx, item) in self.items.iter().enumerate() {
            surface.set_marker(item, self.config.active_marker, idx == self.current);
            surface.set_marker(
                item,
                self.config.upcoming_marker,
                !single && idx == self.next,
            );
        }
    }
}

//! Page navigation driven by the two board buttons.
//!
//! A (next) and B (previous) move through the catalog one page at a time.
//! Pressing A on the last page or B on the first page does not move; it
//! reports a boundary hit so the caller can beep. Arriving at either end
//! is silent - only pressing again at the end beeps.
//!
//! Both buttons share one debounce clock. Any accepted press restarts it,
//! including boundary hits, so holding a button at the end beeps once per
//! debounce window instead of on every poll.

use crate::config::DEBOUNCE_MS;

/// Which end of the catalog was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    First,
    Last,
}

/// Button press for one poll tick, after priority resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Next,
    Previous,
    None,
}

impl ButtonEvent {
    /// A wins when both buttons are down in the same tick.
    pub fn from_levels(a_pressed: bool, b_pressed: bool) -> Self {
        if a_pressed {
            ButtonEvent::Next
        } else if b_pressed {
            ButtonEvent::Previous
        } else {
            ButtonEvent::None
        }
    }
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavAction {
    /// The current page is now the given index.
    PageChanged(usize),
    /// A press at an end of the catalog; the index did not move.
    BoundaryHit(Edge),
    /// Nothing pressed, or still inside the debounce window.
    Idle,
}

/// Current page plus the debounce clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationState {
    pub current_index: usize,
    pub last_transition_ms: u64,
}

/// Navigation state machine over a catalog of `page_count` pages.
#[derive(Clone, Debug)]
pub struct Navigator {
    state: NavigationState,
    page_count: usize,
    debounce_ms: u64,
}

impl Navigator {
    /// Start on page 0 with the debounce clock armed at `now_ms`.
    ///
    /// `page_count` is clamped to at least 1.
    pub fn new(page_count: usize, now_ms: u64) -> Self {
        Self::with_debounce(page_count, now_ms, DEBOUNCE_MS)
    }

    /// Same as [`Navigator::new`] with a custom debounce window (ms).
    pub fn with_debounce(page_count: usize, now_ms: u64, debounce_ms: u64) -> Self {
        Self {
            state: NavigationState {
                current_index: 0,
                last_transition_ms: now_ms,
            },
            page_count: page_count.max(1),
            debounce_ms,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Restart the debounce window at `now_ms` without moving.
    pub fn rearm(&mut self, now_ms: u64) {
        self.state.last_transition_ms = self.state.last_transition_ms.max(now_ms);
    }

    /// Apply one poll tick of raw button levels (`true` = pressed).
    pub fn handle_tick(&mut self, a_pressed: bool, b_pressed: bool, now_ms: u64) -> NavAction {
        self.handle_event(ButtonEvent::from_levels(a_pressed, b_pressed), now_ms)
    }

    /// Apply an already-resolved button event.
    pub fn handle_event(&mut self, event: ButtonEvent, now_ms: u64) -> NavAction {
        if event == ButtonEvent::None || !self.debounce_elapsed(now_ms) {
            return NavAction::Idle;
        }

        let last = self.page_count - 1;
        let action = match event {
            ButtonEvent::Next if self.state.current_index < last => {
                self.state.current_index += 1;
                NavAction::PageChanged(self.state.current_index)
            }
            ButtonEvent::Next => NavAction::BoundaryHit(Edge::Last),
            ButtonEvent::Previous if self.state.current_index > 0 => {
                self.state.current_index -= 1;
                NavAction::PageChanged(self.state.current_index)
            }
            ButtonEvent::Previous => NavAction::BoundaryHit(Edge::First),
            ButtonEvent::None => return NavAction::Idle,
        };

        self.state.last_transition_ms = now_ms;
        action
    }

    fn debounce_elapsed(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.state.last_transition_ms) > self.debounce_ms
    }
}

//! Host-testable core of oled-pager.
//!
//! Everything that decides *what* the board does lives here: the page
//! catalog, button navigation with debounce, text layout, page rendering
//! and buzzer tone maths. Hardware is reached only through the
//! [`render::PageSurface`] and [`tone::ToneChannel`] traits plus the
//! `embedded-hal` pin and delay traits, so all of it runs under
//! `cargo test` on the host.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and only adds the RP2040 adapters on top of this crate.

#![cfg_attr(not(test), no_std)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod pager;
pub mod render;
pub mod tone;

pub use catalog::PageCatalog;
pub use error::Error;
pub use navigation::{ButtonEvent, Edge, NavAction, NavigationState, Navigator};
pub use pager::{Clock, Pager, TickReport};
pub use render::{PageRenderer, PageSurface};
pub use tone::{PwmSetting, ToneChannel, ToneGenerator, ToneRequest};

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::navigation::{NavAction, Navigator};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn index_stays_in_range(
            page_count in 1usize..8,
            ticks in proptest::collection::vec((any::<bool>(), any::<bool>(), 0u64..400), 0..200),
        ) {
            let mut nav = Navigator::new(page_count, 0);
            let mut now = 0u64;
            for (a, b, step) in ticks {
                now += step;
                let before = nav.state();
                let action = nav.handle_tick(a, b, now);
                let after = nav.state();

                prop_assert!(after.current_index < page_count);
                prop_assert!(after.last_transition_ms >= before.last_transition_ms);
                match action {
                    NavAction::PageChanged(i) => {
                        prop_assert_eq!(i, after.current_index);
                        prop_assert_eq!(i.abs_diff(before.current_index), 1);
                        prop_assert_eq!(after.last_transition_ms, now);
                    }
                    NavAction::BoundaryHit(_) => {
                        prop_assert_eq!(after.current_index, before.current_index);
                        prop_assert_eq!(after.last_transition_ms, now);
                    }
                    NavAction::Idle => {
                        prop_assert_eq!(after, before);
                    }
                }
            }
        }

        #[test]
        fn both_buttons_match_next_alone(
            page_count in 1usize..8,
            start in 0usize..8,
            now in 181u64..10_000,
        ) {
            let start = start % page_count;
            let mut both = Navigator::new(page_count, 0);
            let mut next = Navigator::new(page_count, 0);
            let mut t = 0;
            for _ in 0..start {
                t += 181;
                both.handle_tick(true, false, t);
                next.handle_tick(true, false, t);
            }
            let now = t + now;
            prop_assert_eq!(both.handle_tick(true, true, now), next.handle_tick(true, false, now));
            prop_assert_eq!(both.state(), next.state());
        }
    }
}

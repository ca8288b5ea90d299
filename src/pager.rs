//! The poll loop body: buttons in, page or beep out.
//!
//! One `tick` samples the buttons, lets the navigator decide, then runs at
//! most one side effect. A page change renders; a boundary hit beeps. The
//! two never happen in the same tick since a boundary hit leaves the index
//! where it was.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::STARTUP_TONE;
use crate::error::Error;
use crate::input::Buttons;
use crate::navigation::{NavAction, Navigator};
use crate::render::{PageRenderer, PageSurface};
use crate::tone::{ToneChannel, ToneGenerator};

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub action: NavAction,
    /// First error hit while sampling or acting, if any.
    pub error: Option<Error>,
}

/// Owns every collaborator and the navigation state.
pub struct Pager<S, T, D, P, C> {
    renderer: PageRenderer<S>,
    tone: ToneGenerator<T, D>,
    buttons: Buttons<P>,
    clock: C,
    navigator: Navigator,
}

impl<S, T, D, P, C> Pager<S, T, D, P, C>
where
    S: PageSurface,
    T: ToneChannel,
    D: DelayNs,
    P: InputPin,
    C: Clock,
{
    pub fn new(
        renderer: PageRenderer<S>,
        tone: ToneGenerator<T, D>,
        buttons: Buttons<P>,
        clock: C,
    ) -> Self {
        let navigator = Navigator::new(renderer.catalog().len(), clock.now_ms());
        Self {
            renderer,
            tone,
            buttons,
            clock,
            navigator,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Show page 0 and play the startup beep once.
    ///
    /// The debounce window starts once the beep is over. Both steps are
    /// attempted even if the first fails; the first error is returned.
    pub fn start(&mut self) -> Result<(), Error> {
        let shown = self.renderer.render(self.navigator.current_index());
        let beeped = self.tone.play(&STARTUP_TONE);
        self.navigator.rearm(self.clock.now_ms());
        shown.and(beeped)
    }

    /// Run one poll tick.
    pub fn tick(&mut self) -> TickReport {
        let (levels, sampled) = self.buttons.sample();
        let action = self
            .navigator
            .handle_tick(levels.a, levels.b, self.clock.now_ms());

        let acted = match action {
            NavAction::PageChanged(index) => self.renderer.render(index),
            NavAction::BoundaryHit(edge) => self.tone.play_edge(edge),
            NavAction::Idle => Ok(()),
        };

        TickReport {
            action,
            error: sampled.and(acted).err(),
        }
    }
}

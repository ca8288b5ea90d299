//! Raw sampling of the two board buttons.
//!
//! Both buttons are active-low with pull-ups: pressed ⇔ pin reads low.
//! There is no hardware debounce; the navigator's time window does that.

use embedded_hal::digital::InputPin;

use crate::error::Error;

/// Levels of both buttons for one tick (`true` = pressed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub a: bool,
    pub b: bool,
}

/// Button A (next) and button B (previous).
pub struct Buttons<P> {
    a: P,
    b: P,
}

impl<P: InputPin> Buttons<P> {
    pub fn new(a: P, b: P) -> Self {
        Self { a, b }
    }

    /// Read both pins.
    ///
    /// A pin that fails to read counts as released; the error is still
    /// returned so the caller can report it.
    pub fn sample(&mut self) -> (ButtonLevels, Result<(), Error>) {
        let a = read_pressed(&mut self.a);
        let b = read_pressed(&mut self.b);
        let status = a.and(b).map(|_| ());
        (
            ButtonLevels {
                a: a.unwrap_or(false),
                b: b.unwrap_or(false),
            },
            status,
        )
    }
}

fn read_pressed<P: InputPin>(pin: &mut P) -> Result<bool, Error> {
    pin.is_low().map_err(|_| Error::Input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// `Some(level_is_high)`, or `None` for a read failure.
    struct Pin(Option<bool>);

    impl ErrorType for Pin {
        type Error = ErrorKind;
    }

    impl InputPin for Pin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.0.ok_or(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn low_level_means_pressed() {
        let mut buttons = Buttons::new(Pin(Some(false)), Pin(Some(true)));
        let (levels, status) = buttons.sample();
        assert_eq!(levels, ButtonLevels { a: true, b: false });
        assert_eq!(status, Ok(()));
    }

    #[test]
    fn released_buttons_read_high() {
        let mut buttons = Buttons::new(Pin(Some(true)), Pin(Some(true)));
        assert_eq!(buttons.sample().0, ButtonLevels::default());
    }

    #[test]
    fn read_failure_counts_as_released() {
        let mut buttons = Buttons::new(Pin(None), Pin(Some(false)));
        let (levels, status) = buttons.sample();
        assert_eq!(levels, ButtonLevels { a: false, b: true });
        assert_eq!(status, Err(Error::Input));
    }
}

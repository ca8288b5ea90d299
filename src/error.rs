//! Unified error type for oled-pager.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! Reaching the first/last page, overlong text lines and unreachable tone
//! frequencies are normal behaviour and never show up here.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    /// The footer did not fit its fixed-size buffer.
    BufferOverflow,

    // Input
    /// A button pin could not be read.
    Input,

    // Audio
    /// The buzzer PWM channel rejected its configuration.
    Tone,
}

//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

use crate::tone::ToneRequest;

// GPIO pin assignments (BitDogLab RP2040 board defaults)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs` (`p.PIN_5`, `p.PIN_6`, `p.PIN_10` with
// `PWM_SLICE5`, `p.PIN_14`/`p.PIN_15` on `I2C1`).  Change both together
// when adjusting for a custom board.
//
//   Button A (next)      → GPIO5
//   Button B (previous)  → GPIO6
//   Buzzer (PWM5 A)      → GPIO10
//   I²C1 SDA             → GPIO14
//   I²C1 SCL             → GPIO15

pub const BUTTON_A_PIN: u8 = 5;
pub const BUTTON_B_PIN: u8 = 6;
pub const BUZZER_PIN: u8 = 10;
pub const I2C_SDA_PIN: u8 = 14;
pub const I2C_SCL_PIN: u8 = 15;

/// OLED I²C bus frequency (Hz).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

// Input timing

/// Minimum time between two accepted button presses (ms).
///
/// A press is accepted only once strictly more than this has elapsed
/// since the previous accepted press.
pub const DEBOUNCE_MS: u64 = 180;

/// Idle sleep between two poll ticks (ms).
pub const POLL_INTERVAL_MS: u64 = 10;

// Layout (128×64 panel, 8 px text rows)

/// Vertical distance between two body lines (px).
pub const LINE_HEIGHT: i32 = 8;

/// Left margin of the page body (px).
pub const BODY_MARGIN_X: i32 = 5;

/// Top of the first body line (px).
pub const BODY_ORIGIN_Y: i32 = 0;

/// Left edge of the footer (px).
pub const FOOTER_X: i32 = 0;

/// Top of the footer row - the last usable text row on a 64 px panel.
pub const FOOTER_Y: i32 = 56;

/// Longest body line drawn; excess characters are dropped.
pub const MAX_LINE_CHARS: usize = 127;

/// Capacity of the footer string buffer.
pub const FOOTER_CAPACITY: usize = 32;

// Buzzer PWM

/// RP2040 system clock feeding the PWM slices (Hz).
pub const SYS_CLOCK_HZ: u32 = 125_000_000;

/// Clock dividers tried in order, finest first.
pub const PWM_DIVIDERS: [u8; 2] = [4, 16];

/// Low, short beep - pressing B on the first page, and the startup check.
pub const FIRST_PAGE_TONE: ToneRequest = ToneRequest {
    frequency_hz: 500,
    duration_ms: 90,
    intensity: 0.35,
};

/// High, short beep - pressing A on the last page.
pub const LAST_PAGE_TONE: ToneRequest = ToneRequest {
    frequency_hz: 1200,
    duration_ms: 90,
    intensity: 0.35,
};

/// Played once at power-on so the user knows the buzzer works.
pub const STARTUP_TONE: ToneRequest = FIRST_PAGE_TONE;

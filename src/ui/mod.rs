//! User interface hardware - OLED display.
//!
//! The page logic itself lives in the library; this module only adapts
//! the SSD1306 to the library's [`oled_pager::PageSurface`].
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C1 (SDA GPIO14, SCL GPIO15)

pub mod display;

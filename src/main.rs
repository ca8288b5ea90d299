//! oled-pager - two-button page viewer firmware for RP2040 boards.
//!
//! Shows the built-in pages on an SSD1306 OLED. Button A moves to the next
//! page, button B to the previous one. Pressing A on the last page or B on
//! the first page beeps the buzzer instead.
//!
//! Everything runs in one cooperative loop: sample buttons, act, sleep.
//! Beeps block the loop, so a press during a beep is dropped.

#![no_std]
#![no_main]

mod buzzer;
mod ui;

use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Delay, Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use oled_pager::config::{
    BUTTON_A_PIN, BUTTON_B_PIN, BUZZER_PIN, I2C_FREQUENCY_HZ, I2C_SCL_PIN, I2C_SDA_PIN,
    POLL_INTERVAL_MS,
};
use oled_pager::input::Buttons;
use oled_pager::{Clock, NavAction, PageCatalog, PageRenderer, Pager, ToneGenerator};

use crate::buzzer::Buzzer;
use crate::ui::display::Oled;

/// Milliseconds since boot from the embassy time driver.
struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("oled-pager starting...");

    let p = embassy_rp::init(Default::default());

    // Pin choices below mirror the `*_PIN` constants in `config.rs`.

    // --- I²C1 + OLED ---
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = unwrap!(Oled::init(i2c));
    info!("OLED ready (SDA GPIO{}, SCL GPIO{})", I2C_SDA_PIN, I2C_SCL_PIN);

    // --- Buttons A (next) and B (previous), active-low ---
    let buttons = Buttons::new(Input::new(p.PIN_5, Pull::Up), Input::new(p.PIN_6, Pull::Up));
    info!("Buttons: A=GPIO{} B=GPIO{}", BUTTON_A_PIN, BUTTON_B_PIN);

    // --- Buzzer ---
    let pwm = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, PwmConfig::default());
    let tone = ToneGenerator::new(Buzzer::new(pwm), Delay);
    info!("Buzzer on GPIO{}", BUZZER_PIN);

    let catalog = PageCatalog::builtin();
    info!("{} pages", catalog.len());

    let mut pager = Pager::new(
        PageRenderer::new(oled, catalog),
        tone,
        buttons,
        UptimeClock,
    );

    if let Err(e) = pager.start() {
        warn!("Startup: {}", e);
    }

    loop {
        let report = pager.tick();

        match report.action {
            NavAction::PageChanged(index) => info!("Page {}/{}", index + 1, catalog.len()),
            NavAction::BoundaryHit(edge) => debug!("Boundary: {}", edge),
            NavAction::Idle => {}
        }
        if let Some(e) = report.error {
            warn!("Tick: {}", e);
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

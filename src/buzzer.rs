//! Passive buzzer on an RP2040 PWM slice.
//!
//! The slice counter runs from 0 to `top` at `clk_sys / divider`; output A
//! is high while the counter is below `compare_a`. Silence is
//! `compare_a = 0` with the slice left enabled.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use oled_pager::{Error, PwmSetting, ToneChannel};

/// Buzzer on channel A of one PWM slice.
pub struct Buzzer {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl Buzzer {
    /// Take a slice already bound to the buzzer pin and silence it.
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.compare_a = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl ToneChannel for Buzzer {
    fn apply(&mut self, setting: PwmSetting) -> Result<(), Error> {
        self.config.divider = setting.divider.into();
        self.config.top = setting.top;
        self.config.compare_a = setting.level;
        self.pwm.set_config(&self.config);
        Ok(())
    }

    fn silence(&mut self) -> Result<(), Error> {
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
        Ok(())
    }
}

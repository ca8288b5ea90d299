//! Buzzer tones on one PWM channel.
//!
//! A tone is a square wave held for a fixed time, then silenced. Playback
//! blocks the caller for the whole duration; buttons are not sampled while
//! a beep is sounding.
//!
//! PWM frequency: `f = SYS_CLOCK_HZ / (divider * (top + 1))`.

use embedded_hal::delay::DelayNs;

use crate::config::{FIRST_PAGE_TONE, LAST_PAGE_TONE, PWM_DIVIDERS, SYS_CLOCK_HZ};
use crate::error::Error;
use crate::navigation::Edge;

/// One beep. A frequency of 0 is a rest: silence for `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneRequest {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    /// Duty cycle, `0.0..=1.0`. Values outside are clamped.
    pub intensity: f32,
}

/// Register-level settings for one PWM slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmSetting {
    /// Integer clock divider.
    pub divider: u8,
    /// Counter wrap value; the period is `top + 1` ticks.
    pub top: u16,
    /// Compare level; output is high while the counter is below it.
    pub level: u16,
}

/// Audio output primitive the tone generator drives.
pub trait ToneChannel {
    /// Start emitting with the given settings.
    fn apply(&mut self, setting: PwmSetting) -> Result<(), Error>;

    /// Force the output to zero.
    fn silence(&mut self) -> Result<(), Error>;
}

/// Pick a divider and wrap value for `frequency_hz`.
///
/// Dividers are tried finest first. If even the coarsest one cannot
/// reach the frequency, `top` saturates at `u16::MAX` and the tone comes
/// out higher than requested. Above `clock_hz / 4` even the finest divider
/// gives `top = 0`, a silent output. Returns `None` for a rest (0 Hz).
pub fn pwm_timing(frequency_hz: u32, clock_hz: u32) -> Option<(u8, u16)> {
    if frequency_hz == 0 {
        return None;
    }

    let top_for = |divider: u8| {
        (clock_hz as u64 / (divider as u64 * frequency_hz as u64)).saturating_sub(1)
    };

    for &divider in PWM_DIVIDERS.iter() {
        let top = top_for(divider);
        if top <= u16::MAX as u64 {
            return Some((divider, top as u16));
        }
    }

    let coarsest = PWM_DIVIDERS[PWM_DIVIDERS.len() - 1];
    Some((coarsest, u16::MAX))
}

/// Compare level giving `intensity` of full scale for a given `top`.
pub fn duty_level(top: u16, intensity: f32) -> u16 {
    let duty = intensity.clamp(0.0, 1.0);
    (top as f32 * duty) as u16
}

/// Full PWM settings for a request, or `None` for a rest.
pub fn pwm_setting(request: &ToneRequest) -> Option<PwmSetting> {
    let (divider, top) = pwm_timing(request.frequency_hz, SYS_CLOCK_HZ)?;
    Some(PwmSetting {
        divider,
        top,
        level: duty_level(top, request.intensity),
    })
}

/// Blocking tone player.
pub struct ToneGenerator<T, D> {
    channel: T,
    delay: D,
}

impl<T, D> ToneGenerator<T, D>
where
    T: ToneChannel,
    D: DelayNs,
{
    pub fn new(channel: T, delay: D) -> Self {
        Self { channel, delay }
    }

    /// Play `request`, blocking for `duration_ms`.
    pub fn play(&mut self, request: &ToneRequest) -> Result<(), Error> {
        let Some(setting) = pwm_setting(request) else {
            self.delay.delay_ms(request.duration_ms);
            return Ok(());
        };

        self.channel.apply(setting)?;
        self.delay.delay_ms(request.duration_ms);
        self.channel.silence()
    }

    pub fn play_first_page(&mut self) -> Result<(), Error> {
        self.play(&FIRST_PAGE_TONE)
    }

    pub fn play_last_page(&mut self) -> Result<(), Error> {
        self.play(&LAST_PAGE_TONE)
    }

    /// Boundary feedback for the given end of the catalog.
    pub fn play_edge(&mut self, edge: Edge) -> Result<(), Error> {
        match edge {
            Edge::First => self.play_first_page(),
            Edge::Last => self.play_last_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Apply(PwmSetting),
        Silence,
        Wait(u32),
    }

    type Log = std::rc::Rc<std::cell::RefCell<Vec<Op>>>;

    struct Channel(Log);
    struct Delay(Log);

    impl ToneChannel for Channel {
        fn apply(&mut self, setting: PwmSetting) -> Result<(), Error> {
            self.0.borrow_mut().push(Op::Apply(setting));
            Ok(())
        }

        fn silence(&mut self) -> Result<(), Error> {
            self.0.borrow_mut().push(Op::Silence);
            Ok(())
        }
    }

    impl DelayNs for Delay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Op::Wait(ns / 1_000_000));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Op::Wait(ms));
        }
    }

    fn generator(log: &Log) -> ToneGenerator<Channel, Delay> {
        ToneGenerator::new(Channel(log.clone()), Delay(log.clone()))
    }

    #[test]
    fn presets_differ_in_pitch_only() {
        assert_ne!(FIRST_PAGE_TONE.frequency_hz, LAST_PAGE_TONE.frequency_hz);
        assert!(FIRST_PAGE_TONE.frequency_hz < LAST_PAGE_TONE.frequency_hz);
        assert_eq!(FIRST_PAGE_TONE.duration_ms, LAST_PAGE_TONE.duration_ms);
    }

    #[test]
    fn audible_tones_use_finest_divider() {
        assert_eq!(pwm_timing(500, SYS_CLOCK_HZ), Some((4, 62_499)));
        assert_eq!(pwm_timing(1200, SYS_CLOCK_HZ), Some((4, 26_040)));
    }

    #[test]
    fn low_tones_fall_back_to_coarser_divider() {
        // 125 MHz / (4 * 400) = 78125 does not fit 16 bits.
        assert_eq!(pwm_timing(400, SYS_CLOCK_HZ), Some((16, 19_530)));
    }

    #[test]
    fn unreachable_frequency_saturates() {
        assert_eq!(pwm_timing(50, SYS_CLOCK_HZ), Some((16, u16::MAX)));
        assert_eq!(pwm_timing(1, SYS_CLOCK_HZ), Some((16, u16::MAX)));
    }

    #[test]
    fn frequency_beyond_finest_divider_is_silent() {
        // 40 MHz needs less than one tick per period at divider 4.
        let request = ToneRequest {
            frequency_hz: 40_000_000,
            duration_ms: 10,
            intensity: 0.35,
        };
        assert_eq!(pwm_timing(SYS_CLOCK_HZ / 4 + 1, SYS_CLOCK_HZ), Some((4, 0)));
        assert_eq!(
            pwm_setting(&request),
            Some(PwmSetting {
                divider: 4,
                top: 0,
                level: 0,
            })
        );
    }

    #[test]
    fn rest_has_no_timing() {
        assert_eq!(pwm_timing(0, SYS_CLOCK_HZ), None);
    }

    #[test]
    fn duty_is_clamped() {
        assert_eq!(duty_level(1000, 0.25), 250);
        assert_eq!(duty_level(1000, 0.5), 500);
        assert_eq!(duty_level(1000, 1.5), 1000);
        assert_eq!(duty_level(1000, -0.2), 0);
        assert_eq!(duty_level(1000, f32::NAN), 0);
    }

    #[test]
    fn play_emits_then_silences() {
        let log = Log::default();
        let mut tone = generator(&log);
        tone.play_last_page().unwrap();

        let ops = log.borrow();
        assert_eq!(
            *ops,
            [
                Op::Apply(PwmSetting {
                    divider: 4,
                    top: 26_040,
                    level: duty_level(26_040, 0.35),
                }),
                Op::Wait(90),
                Op::Silence,
            ]
        );
    }

    struct Unplugged;

    impl ToneChannel for Unplugged {
        fn apply(&mut self, _: PwmSetting) -> Result<(), Error> {
            Err(Error::Tone)
        }

        fn silence(&mut self) -> Result<(), Error> {
            Err(Error::Tone)
        }
    }

    #[test]
    fn channel_failure_skips_the_wait() {
        let log = Log::default();
        let mut tone = ToneGenerator::new(Unplugged, Delay(log.clone()));
        assert_eq!(tone.play_first_page(), Err(Error::Tone));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn rest_only_waits() {
        let log = Log::default();
        let mut tone = generator(&log);
        tone.play(&ToneRequest {
            frequency_hz: 0,
            duration_ms: 40,
            intensity: 0.5,
        })
        .unwrap();
        assert_eq!(*log.borrow(), [Op::Wait(40)]);
    }

    #[test]
    fn edge_selects_preset() {
        let log = Log::default();
        let mut tone = generator(&log);
        tone.play_edge(Edge::First).unwrap();
        let first = match log.borrow()[0] {
            Op::Apply(s) => s,
            _ => panic!("expected apply"),
        };
        assert_eq!(Some(first), pwm_setting(&FIRST_PAGE_TONE));
    }
}

//! Blinking eye pair
//!
//! An [`EyeBlink`] drives two pixels of a shared strip through an endless
//! cycle of waiting, fading in, blinking and fading out. Every decision
//! compares the sampled clock with a stored deadline, so any number of eyes
//! can be advanced at any cadence without blocking each other.
//!
//! ```text
//!                      (remaining blinks)
//!                        +-----+
//!                        v     |
//! Waiting -> FadeIn ->  On -> Off
//!    ^                   |
//!    |                   v
//!    +-------------- FadeOut
//! ```

mod config;
mod state;

use embassy_time::{Duration, Instant};
use log::{Level, LevelFilter};

pub use config::{BlinkTimings, DEFAULT_SEPARATION, EyeConfig};
pub use state::EyeState;

use crate::PixelSink;
use crate::color::{BLACK, Ramp, Rgb};
use crate::random::{Jitter, RandomRange};

/// Emit a log record when the eye's verbosity allows it
macro_rules! eye_log {
    ($eye:expr, $level:expr, $($arg:tt)+) => {
        if $level <= $eye.log_level {
            log::log!($level, $($arg)+);
        }
    };
}

/// A pair of pixels that fade in, blink and fade out on their own schedule
///
/// The eye borrows the strip it draws on and never owns it. Dropping the
/// eye paints both pixels black.
pub struct EyeBlink<'a, S: PixelSink + ?Sized> {
    strip: &'a S,
    log_level: LevelFilter,

    // Layout
    position: u16,
    separation: u8,

    // Appearance
    color: Rgb,
    current: Rgb,
    fade_in: Duration,
    fade_out: Duration,
    blink_min: u8,
    blink_max: u8,
    timings: BlinkTimings,

    // State machine
    state: u8,
    remaining_blinks: u8,
    phase_start: Instant,
    phase_deadline: Instant,
}

impl<'a, S: PixelSink + ?Sized> EyeBlink<'a, S> {
    /// Create an eye with randomized fade and blink timings
    ///
    /// The first fade-in starts up to 15 seconds after `now`.
    pub fn new<R: RandomRange + ?Sized>(
        strip: &'a S,
        position: u16,
        separation: u8,
        color: Rgb,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let config = EyeConfig::randomized(position, separation, color, rng);
        Self::with_config(strip, &config, now, rng)
    }

    /// Create an eye from an explicit configuration
    pub fn with_config<R: RandomRange + ?Sized>(
        strip: &'a S,
        config: &EyeConfig,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let mut eye = Self {
            strip,
            log_level: config.log_level,
            position: config.position,
            separation: config.separation,
            color: config.color,
            current: BLACK,
            fade_in: config.fade_in,
            fade_out: config.fade_out,
            blink_min: config.blink_min,
            blink_max: config.blink_min.max(config.blink_max),
            timings: config.timings,
            state: EyeState::Waiting.as_raw(),
            remaining_blinks: 0,
            phase_start: now,
            phase_deadline: now,
        };
        eye.remaining_blinks = eye.sample_blinks(rng);
        let wait = eye.timings.initial_wait.sample(rng);
        eye.enter(EyeState::Waiting, now, millis(wait));

        eye_log!(
            eye,
            Level::Info,
            "[EyeBlink@{}] init, first fade-in in {}ms",
            eye.position,
            wait
        );
        eye
    }

    /// Advance the state machine to `now`
    ///
    /// Never blocks. A phase only ends once `now` is strictly past its
    /// deadline; otherwise ramps recompute the displayed color.
    pub fn advance<R: RandomRange + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        let Some(state) = EyeState::from_raw(self.state) else {
            eye_log!(
                self,
                Level::Error,
                "[EyeBlink@{}] unknown state {}, resetting",
                self.position,
                self.state
            );
            self.restart(now);
            return;
        };
        let expired = now > self.phase_deadline;

        match state {
            EyeState::Waiting => {
                if expired {
                    self.enter(EyeState::FadeIn, now, self.fade_in);
                    self.log_transition(Level::Info, state);
                }
            }
            EyeState::FadeIn => {
                if expired {
                    self.current = self.color;
                    let hold = self.timings.first_on.sample(rng);
                    self.enter(EyeState::On, now, millis(hold));
                    self.log_transition(Level::Info, state);
                } else {
                    self.ramp(Ramp::Up, now);
                }
            }
            EyeState::On => {
                if !expired {
                    return;
                }
                if self.remaining_blinks > 0 {
                    self.current = BLACK;
                    let hold = self.timings.off.sample(rng);
                    self.enter(EyeState::Off, now, millis(hold));
                } else {
                    self.enter(EyeState::FadeOut, now, self.fade_out);
                }
                self.log_transition(Level::Info, state);
            }
            EyeState::Off => {
                if expired {
                    self.current = self.color;
                    self.remaining_blinks = self.remaining_blinks.saturating_sub(1);
                    let hold = self.timings.repeat_on.sample(rng);
                    self.enter(EyeState::On, now, millis(hold));
                    self.log_transition(Level::Trace, state);
                }
            }
            EyeState::FadeOut => {
                if expired {
                    self.current = BLACK;
                    self.remaining_blinks = self.sample_blinks(rng);
                    let rest = self.timings.sample_rest(rng);
                    self.enter(EyeState::Waiting, now, rest);
                    self.log_transition(Level::Info, state);
                } else {
                    self.ramp(Ramp::Down, now);
                }
            }
        }
    }

    /// Write the current color to both pixels of the pair
    ///
    /// Indices are not validated; out-of-range handling is up to the strip.
    pub fn render(&self) {
        let first = usize::from(self.position);
        self.strip.set_pixel(first, self.current);
        self.strip
            .set_pixel(first + usize::from(self.separation), self.current);

        eye_log!(
            self,
            Level::Trace,
            "[EyeBlink@{}] render sep {} color {:?}",
            self.position,
            self.separation,
            self.current
        );
    }

    /// Go dark and wait one fade-in duration before fading in again
    ///
    /// Used to re-arm the eye after external reconfiguration. Renders black
    /// immediately; the base color stays the fade-in target.
    pub fn reset(&mut self, now: Instant) {
        self.restart(now);
        self.render();
    }

    fn restart(&mut self, now: Instant) {
        self.current = BLACK;
        self.enter(EyeState::Waiting, now, self.fade_in);
        eye_log!(
            self,
            Level::Info,
            "[EyeBlink@{}] reset, waiting {}ms",
            self.position,
            self.fade_in.as_millis()
        );
    }

    fn ramp(&mut self, ramp: Ramp, now: Instant) {
        self.current = ramp.apply(self.color, now, self.phase_start, self.phase_deadline);
        eye_log!(
            self,
            Level::Trace,
            "[EyeBlink@{}] {:?} at {}ms of {}..{}ms: {:?} -> {:?}",
            self.position,
            ramp,
            now.as_millis(),
            self.phase_start.as_millis(),
            self.phase_deadline.as_millis(),
            self.color,
            self.current
        );
    }

    fn enter(&mut self, state: EyeState, now: Instant, hold: Duration) {
        self.state = state.as_raw();
        self.phase_start = now;
        self.phase_deadline = now.checked_add(hold).unwrap_or(Instant::MAX);
    }

    /// Blink count for the next appearance, inclusive of both bounds
    fn sample_blinks<R: RandomRange + ?Sized>(&self, rng: &mut R) -> u8 {
        let count = Jitter::new(self.blink_min.into(), u32::from(self.blink_max) + 1).sample(rng);
        u8::try_from(count).unwrap_or(self.blink_max)
    }

    fn log_transition(&self, level: Level, from: EyeState) {
        eye_log!(
            self,
            level,
            "[EyeBlink@{}] {} complete, {} for {}ms",
            self.position,
            from.as_str(),
            EyeState::from_raw(self.state).map_or("unknown", EyeState::as_str),
            self.phase_deadline.duration_since(self.phase_start).as_millis()
        );
    }

    /// Current phase, `None` if the raw state is not a known phase
    pub const fn state(&self) -> Option<EyeState> {
        EyeState::from_raw(self.state)
    }

    pub const fn raw_state(&self) -> u8 {
        self.state
    }

    /// Overwrite the raw state value
    ///
    /// Unknown values are repaired by the next [`advance`](Self::advance).
    pub fn set_raw_state(&mut self, state: u8) {
        self.state = state;
    }

    pub fn strip(&self) -> &'a S {
        self.strip
    }

    pub const fn position(&self) -> u16 {
        self.position
    }

    pub fn set_position(&mut self, position: u16) {
        self.position = position;
    }

    pub const fn separation(&self) -> u8 {
        self.separation
    }

    pub fn set_separation(&mut self, separation: u8) {
        self.separation = separation;
    }

    /// Fully lit color
    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Color shown by the next render
    pub const fn current_color(&self) -> Rgb {
        self.current
    }

    /// Override the displayed color until the state machine next recomputes it
    pub fn set_current_color(&mut self, color: Rgb) {
        self.current = color;
    }

    pub const fn fade_in(&self) -> Duration {
        self.fade_in
    }

    pub fn set_fade_in(&mut self, duration: Duration) {
        self.fade_in = duration;
    }

    pub const fn fade_out(&self) -> Duration {
        self.fade_out
    }

    pub fn set_fade_out(&mut self, duration: Duration) {
        self.fade_out = duration;
    }

    pub const fn blink_min(&self) -> u8 {
        self.blink_min
    }

    pub const fn blink_max(&self) -> u8 {
        self.blink_max
    }

    /// Set the blink count bounds
    ///
    /// A `max` below `min` is raised to `min`. Takes effect on the next
    /// appearance.
    pub fn set_blink_bounds(&mut self, min: u8, max: u8) {
        self.blink_min = min;
        self.blink_max = min.max(max);
    }

    /// Blinks left before the current appearance fades out
    pub const fn remaining_blinks(&self) -> u8 {
        self.remaining_blinks
    }

    pub fn set_remaining_blinks(&mut self, count: u8) {
        self.remaining_blinks = count;
    }

    pub const fn phase_start(&self) -> Instant {
        self.phase_start
    }

    pub const fn phase_deadline(&self) -> Instant {
        self.phase_deadline
    }

    /// Move the current phase window
    ///
    /// A deadline before `start` is clamped to `start`.
    pub fn set_phase(&mut self, start: Instant, deadline: Instant) {
        self.phase_start = start;
        self.phase_deadline = deadline.max(start);
    }

    pub const fn timings(&self) -> &BlinkTimings {
        &self.timings
    }

    pub fn set_timings(&mut self, timings: BlinkTimings) {
        self.timings = timings;
    }

    pub const fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn set_log_level(&mut self, level: LevelFilter) {
        self.log_level = level;
    }
}

impl<S: PixelSink + ?Sized> Drop for EyeBlink<'_, S> {
    fn drop(&mut self) {
        self.color = BLACK;
        self.current = BLACK;
        self.render();
    }
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

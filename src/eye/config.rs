use embassy_time::Duration;
use log::LevelFilter;

use crate::color::{Rgb, WHITE};
use crate::random::{Jitter, RandomRange};

/// Default distance between the two pixels of a pair
pub const DEFAULT_SEPARATION: u8 = 2;

/// Random hold times of every phase, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTimings {
    /// Delay before the very first fade-in
    pub initial_wait: Jitter,
    /// Hold after the fade-in completes
    pub first_on: Jitter,
    /// Dark part of a blink
    pub off: Jitter,
    /// Lit part between two blinks
    pub repeat_on: Jitter,
    /// Fixed part of the rest after a fade-out
    pub rest_base: u32,
    /// Added to the rest
    pub rest_extra: Jitter,
    /// Subtracted from the rest, one draw each
    pub rest_cuts: [Jitter; 3],
}

impl BlinkTimings {
    pub const DEFAULT: Self = Self {
        initial_wait: Jitter::below(15_000),
        first_on: Jitter::new(1_000, 4_000),
        off: Jitter::new(50, 150),
        repeat_on: Jitter::new(100, 1_500),
        rest_base: 10_000,
        rest_extra: Jitter::below(50_000),
        rest_cuts: [Jitter::below(4_000), Jitter::below(500), Jitter::below(500)],
    };

    /// Draw the rest period that follows a fade-out
    ///
    /// Cuts larger than the base plus extra saturate at zero.
    pub fn sample_rest<R: RandomRange + ?Sized>(&self, rng: &mut R) -> Duration {
        let mut rest = self.rest_base.saturating_add(self.rest_extra.sample(rng));
        for cut in self.rest_cuts {
            rest = rest.saturating_sub(cut.sample(rng));
        }
        Duration::from_millis(u64::from(rest))
    }
}

impl Default for BlinkTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration of a single eye pair
#[derive(Debug, Clone, Copy)]
pub struct EyeConfig {
    /// Index of the first pixel
    pub position: u16,
    /// Offset of the second pixel
    pub separation: u8,
    /// Fully lit color
    pub color: Rgb,
    pub fade_in: Duration,
    pub fade_out: Duration,
    /// Fewest blinks per appearance
    pub blink_min: u8,
    /// Most blinks per appearance
    pub blink_max: u8,
    pub timings: BlinkTimings,
    /// Diagnostic verbosity of this eye
    pub log_level: LevelFilter,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            position: 0,
            separation: DEFAULT_SEPARATION,
            color: WHITE,
            fade_in: Duration::from_millis(1_000),
            fade_out: Duration::from_millis(1_000),
            blink_min: 0,
            blink_max: 5,
            timings: BlinkTimings::DEFAULT,
            log_level: LevelFilter::Off,
        }
    }
}

impl EyeConfig {
    /// Configuration with randomized fade durations
    ///
    /// Fade-in lasts 1-5 seconds, fade-out 0.5-4 seconds, and each
    /// appearance blinks 2 to 6 times.
    pub fn randomized<R: RandomRange + ?Sized>(
        position: u16,
        separation: u8,
        color: Rgb,
        rng: &mut R,
    ) -> Self {
        let fade_in = Jitter::below(4_000).sample(rng) + 1_000;
        let fade_out = Jitter::new(500, 4_000).sample(rng);
        Self {
            position,
            separation,
            color,
            fade_in: Duration::from_millis(u64::from(fade_in)),
            fade_out: Duration::from_millis(u64::from(fade_out)),
            blink_min: 2,
            blink_max: 6,
            ..Self::default()
        }
    }

    /// Set the diagnostic verbosity
    #[must_use]
    pub const fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Set the phase timings
    #[must_use]
    pub const fn with_timings(mut self, timings: BlinkTimings) -> Self {
        self.timings = timings;
        self
    }
}

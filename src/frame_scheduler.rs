//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::bounds::RenderingBounds;
use crate::color::Rgb;
use crate::eye::{EyeBlink, EyeConfig};
use crate::random::RandomRange;
use crate::strip::Strip;
use crate::OutputDriver;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable host loop for a strip full of eyes.
///
/// This scheduler:
/// - Advances and renders every eye once per frame
/// - Flushes the shared strip to the output driver
/// - Tracks frame timing with drift correction
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// static STRIP: Strip<60> = Strip::new();
///
/// let mut scheduler = FrameScheduler::<_, _, 60, 8>::new(&STRIP, driver, rng, bounds);
/// scheduler.spawn_random(Rgb::new(255, 0, 0), 2, Instant::now());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, R: RandomRange, const N: usize, const MAX_EYES: usize>
{
    output: O,
    rng: R,
    strip: &'a Strip<N>,
    bounds: RenderingBounds,
    eyes: Vec<EyeBlink<'a, Strip<N>>, MAX_EYES>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, R: RandomRange, const N: usize, const MAX_EYES: usize>
    FrameScheduler<'a, O, R, N, MAX_EYES>
{
    /// Create a new frame scheduler without eyes.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(strip: &'a Strip<N>, driver: O, rng: R, bounds: RenderingBounds) -> Self {
        Self::with_frame_duration(strip, driver, rng, bounds, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        strip: &'a Strip<N>,
        driver: O,
        rng: R,
        bounds: RenderingBounds,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            rng,
            strip,
            bounds,
            eyes: Vec::new(),
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Add an eye built from `config`.
    ///
    /// Returns the config back if the scheduler is full.
    pub fn spawn(&mut self, config: EyeConfig, now: Instant) -> Result<(), EyeConfig> {
        if self.eyes.is_full() {
            return Err(config);
        }
        let eye = EyeBlink::with_config(self.strip, &config, now, &mut self.rng);
        self.eyes.push(eye).map_err(|_| config)
    }

    /// Add an eye with randomized timings at a random spot inside the bounds.
    ///
    /// Both pixels of the pair land inside the bounds; a pair wider than the
    /// bounds is placed at the start. Eyes may overlap.
    pub fn spawn_random(
        &mut self,
        color: Rgb,
        separation: u8,
        now: Instant,
    ) -> Result<(), EyeConfig> {
        let slots = u32::from(self.bounds.pair_slots(separation));
        let offset = u16::try_from(self.rng.random_below(slots)).unwrap_or(0);
        let position = self.bounds.start.saturating_add(offset);
        let config = EyeConfig::randomized(position, separation, color, &mut self.rng);
        self.spawn(config, now)
    }

    /// Remove an eye, painting its pixels black.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.eyes.len() {
            return false;
        }
        drop(self.eyes.swap_remove(index));
        true
    }

    /// Remove every eye and blank the strip.
    pub fn clear(&mut self) {
        self.eyes.clear();
        self.strip.clear();
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances and renders every eye
    /// 3. Writes the strip to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Falling more than two frames behind skips the backlog
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        for eye in &mut self.eyes {
            eye.advance(now, &mut self.rng);
            eye.render();
        }
        self.strip.flush(&mut self.output);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get the eyes.
    pub fn eyes(&self) -> &[EyeBlink<'a, Strip<N>>] {
        &self.eyes
    }

    /// Get the eyes for runtime tuning.
    pub fn eyes_mut(&mut self) -> &mut [EyeBlink<'a, Strip<N>>] {
        &mut self.eyes
    }

    pub const fn bounds(&self) -> RenderingBounds {
        self.bounds
    }

    /// Change where `spawn_random` places new eyes.
    pub fn set_bounds(&mut self, bounds: RenderingBounds) {
        self.bounds = bounds;
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

#![no_std]

pub mod bounds;
pub mod color;
pub mod eye;
pub mod frame_scheduler;
pub mod math8;
pub mod random;
pub mod strip;

pub use bounds::RenderingBounds;
pub use eye::{BlinkTimings, EyeBlink, EyeConfig, EyeState};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use random::{Jitter, RandomRange};
pub use strip::Strip;

pub use color::{BLACK, Ramp, Rgb, WHITE, rgb_from_u32, rgb_to_u32, scale_color};
pub use embassy_time::{Duration, Instant};
pub use log::LevelFilter;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Pixel-addressable frame buffer
///
/// Takes `&self` so several eyes can share one borrowed buffer. Handling
/// of out-of-range indices is up to the implementation.
pub trait PixelSink {
    /// Set the color of a single pixel, shown on the next refresh
    fn set_pixel(&self, index: usize, color: Rgb);
}

//! Time-driven brightness scaling
//!
//! Maps a timestamp inside a ramp window onto a 0-255 factor and
//! scales a color by it.

use embassy_time::Instant;

use crate::color::Rgb;
use crate::math8::{map8, scale8_trunc};

/// Scale `color` by the position of `t` between `t0` and `t1`
///
/// The factor is `t` linearly mapped from `t0..t1` onto `0..255` and clamped
/// to that range, so `t == t0` yields black and `t == t1` yields `color`.
/// Passing `t0` later than `t1` reverses the ramp.
pub fn scale_color(color: Rgb, t: Instant, t0: Instant, t1: Instant) -> Rgb {
    let factor = map8(t.as_millis(), t0.as_millis(), t1.as_millis());

    Rgb {
        r: scale8_trunc(color.r, factor),
        g: scale8_trunc(color.g, factor),
        b: scale8_trunc(color.b, factor),
    }
}

/// Direction of a brightness ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    /// Black at the start of the window, full color at its end
    Up,
    /// Full color at the start of the window, black at its end
    Down,
}

impl Ramp {
    /// Scale `color` for the moment `now` of a ramp running from `start` to `end`
    pub fn apply(self, color: Rgb, now: Instant, start: Instant, end: Instant) -> Rgb {
        match self {
            Self::Up => scale_color(color, now, start, end),
            Self::Down => scale_color(color, now, end, start),
        }
    }
}

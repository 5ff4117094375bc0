mod scale;
mod utils;

pub use scale::{Ramp, scale_color};
use smart_leds::RGB8;
pub use utils::{rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full intensity
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

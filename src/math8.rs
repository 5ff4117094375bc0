/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Truncating division, so `factor == 255` keeps the value and the result
/// never exceeds it.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale8_trunc(value: u8, factor: u8) -> u8 {
    ((value as u16 * factor as u16) / 255) as u8
}

/// Linearly map `value` from `from..to` onto `0..255`, clamped
///
/// `from` may be greater than `to`, which inverts the mapping. An empty
/// window maps everything to 255.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub const fn map8(value: u64, from: u64, to: u64) -> u8 {
    if from == to {
        return 255;
    }
    let value = value as i128;
    let from = from as i128;
    let to = to as i128;

    let mapped = (value - from) * 255 / (to - from);
    if mapped < 0 {
        0
    } else if mapped > 255 {
        255
    } else {
        mapped as u8
    }
}

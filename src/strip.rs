//! Shared frame buffer for `no_std` environments.
//!
//! Eyes write into the strip through a shared reference; the host flushes
//! it to the LED driver once per frame. Interrupt safe via critical sections.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::color::{BLACK, Rgb};
use crate::{OutputDriver, PixelSink};

/// A fixed-size pixel buffer that many eyes can draw into.
///
/// Writes outside `0..N` are ignored. Writes are last-writer-wins per pixel.
pub struct Strip<const N: usize> {
    pixels: Mutex<RefCell<[Rgb; N]>>,
}

impl<const N: usize> Strip<N> {
    /// Create a new dark strip.
    pub const fn new() -> Self {
        Self {
            pixels: Mutex::new(RefCell::new([BLACK; N])),
        }
    }

    /// Number of pixels.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Read a single pixel, `None` if out of range.
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        critical_section::with(|cs| self.pixels.borrow(cs).borrow().get(index).copied())
    }

    /// Copy of the whole buffer.
    pub fn snapshot(&self) -> [Rgb; N] {
        critical_section::with(|cs| *self.pixels.borrow(cs).borrow())
    }

    /// Paint every pixel black.
    pub fn clear(&self) {
        critical_section::with(|cs| {
            self.pixels.borrow(cs).borrow_mut().fill(BLACK);
        });
    }

    /// Write the current buffer to the LED driver.
    ///
    /// The buffer is copied first so the driver runs outside the critical section.
    pub fn flush<O: OutputDriver + ?Sized>(&self, output: &mut O) {
        let frame = self.snapshot();
        output.write(&frame);
    }
}

impl<const N: usize> Default for Strip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelSink for Strip<N> {
    fn set_pixel(&self, index: usize, color: Rgb) {
        critical_section::with(|cs| {
            if let Some(pixel) = self.pixels.borrow(cs).borrow_mut().get_mut(index) {
                *pixel = color;
            }
        });
    }
}

impl<const N: usize> PixelSink for RefCell<[Rgb; N]> {
    fn set_pixel(&self, index: usize, color: Rgb) {
        if let Some(pixel) = self.borrow_mut().get_mut(index) {
            *pixel = color;
        }
    }
}

/// Bounds of the area eyes may be placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingBounds {
    pub start: u16,
    pub end: u16,
}

impl RenderingBounds {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Get the number of LEDs in the rendering area
    pub const fn count(self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Check if the pixel index lies inside the area
    pub const fn contains(self, index: u16) -> bool {
        index >= self.start && index < self.end
    }

    /// Number of valid first-pixel positions for a pair `separation` apart
    ///
    /// Zero when the pair does not fit.
    #[allow(clippy::cast_lossless)]
    pub const fn pair_slots(self, separation: u8) -> u16 {
        self.count().saturating_sub(separation as u16)
    }
}

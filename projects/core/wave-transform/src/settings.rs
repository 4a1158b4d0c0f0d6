/// Settings for the wave transform.
///
/// A block holds `2 * half_width + 1` elements and the block's maximum is placed
/// at offset `half_width`. A `half_width` of 0 is rejected by every transform
/// function with [`crate::WaveValidationError::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaveTransformSettings {
    /// Number of elements on each side of the peak.
    pub half_width: usize,
}

impl WaveTransformSettings {
    /// Creates settings for the given block half width.
    pub const fn new(half_width: usize) -> Self {
        Self { half_width }
    }

    /// Number of elements in a single block, or [`None`] if the half width is 0
    /// or `2 * half_width + 1` does not fit in a [`usize`].
    pub const fn block_size(&self) -> Option<usize> {
        if self.half_width == 0 {
            return None;
        }

        match self.half_width.checked_mul(2) {
            Some(twice) => twice.checked_add(1),
            None => None,
        }
    }

    /// Offset of the peak inside each block.
    #[inline(always)]
    pub const fn peak_offset(&self) -> usize {
        self.half_width
    }
}

impl Default for WaveTransformSettings {
    fn default() -> Self {
        Self::new(1)
    }
}

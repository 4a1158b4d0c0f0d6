//! Builder pattern implementation for wave transform configuration.

use crate::WaveError;
use alloc::vec::Vec;
use wave_transform::{
    WaveTransformSettings, check_wave, transform_wave_allocating, transform_wave_in_place,
    transform_wave_with_settings,
};

/// Wave transform configuration builder.
///
/// Holds the block half width (and, with the `multithreaded` feature, whether
/// to process blocks in parallel) so the same configuration can be applied to
/// many sequences.
#[derive(Debug, Clone, Copy)]
pub struct WaveTransformBuilder {
    half_width: Option<usize>,
    #[cfg(feature = "multithreaded")]
    multithreaded: bool,
}

impl WaveTransformBuilder {
    /// Create a new builder. The half width defaults to 1 (blocks of 3).
    pub fn new() -> Self {
        Self {
            half_width: None,
            #[cfg(feature = "multithreaded")]
            multithreaded: false,
        }
    }

    /// Set the block half width `x`.
    ///
    /// Blocks hold `2 * x + 1` elements and the peak sits at offset `x`.
    /// A value of 0 is accepted here and rejected when transforming.
    pub fn half_width(mut self, x: usize) -> Self {
        self.half_width = Some(x);
        self
    }

    /// Set whether blocks are processed on the rayon thread pool.
    ///
    /// The output is identical either way. Only [`transform`](Self::transform)
    /// and [`transform_allocating`](Self::transform_allocating) are parallelized.
    #[cfg(feature = "multithreaded")]
    pub fn multithreaded(mut self, enabled: bool) -> Self {
        self.multithreaded = enabled;
        self
    }

    /// The settings passed to the transform.
    pub fn settings(&self) -> WaveTransformSettings {
        WaveTransformSettings::new(self.half_width.unwrap_or(1))
    }

    /// Transform `input` into wave blocks, writing the result to `output`.
    ///
    /// # Errors
    /// Returns [`WaveError`] if the half width or input length is invalid, or
    /// `output` is shorter than `input`. Nothing is written on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wave_transform_api::WaveTransformBuilder;
    ///
    /// let input = [3, 6, 5, 8, 1, 9];
    /// let mut output = [0; 6];
    ///
    /// WaveTransformBuilder::new()
    ///     .half_width(1)
    ///     .transform(&input, &mut output)
    ///     .unwrap();
    /// assert_eq!(output, [3, 6, 5, 1, 9, 8]);
    /// ```
    pub fn transform(&self, input: &[i64], output: &mut [i64]) -> Result<(), WaveError> {
        #[cfg(feature = "multithreaded")]
        if self.multithreaded {
            return wave_transform::transform_wave_parallel(input, output, self.settings())
                .map_err(WaveError::from);
        }

        transform_wave_with_settings(input, output, self.settings()).map_err(WaveError::from)
    }

    /// Transform `input` into a newly allocated sequence of wave blocks.
    ///
    /// # Errors
    /// Returns [`WaveError`] if the half width or input length is invalid.
    pub fn transform_allocating(&self, input: &[i64]) -> Result<Vec<i64>, WaveError> {
        #[cfg(feature = "multithreaded")]
        if self.multithreaded {
            let mut output = alloc::vec![0; input.len()];
            self.transform(input, &mut output)?;
            return Ok(output);
        }

        transform_wave_allocating(input, self.settings()).map_err(WaveError::from)
    }

    /// Transform `data` into wave blocks in place.
    ///
    /// # Errors
    /// Returns [`WaveError`] if the half width or length is invalid. `data` is
    /// left untouched on error.
    pub fn transform_in_place(&self, data: &mut [i64]) -> Result<(), WaveError> {
        transform_wave_in_place(data, self.settings()).map_err(WaveError::from)
    }

    /// Check that every block of `data` already has the wave shape.
    ///
    /// # Errors
    /// Returns [`WaveError::NotAWave`] for the first block that is not a wave,
    /// or a validation error if `data` cannot be split into blocks.
    pub fn verify(&self, data: &[i64]) -> Result<(), WaveError> {
        check_wave(data, self.settings()).map_err(WaveError::from)
    }
}

impl Default for WaveTransformBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Wave transform operations on slices.
//!
//! Every function here validates its input with [`validate_wave_input`] before
//! touching the output, so a rejected call never leaves partially written data
//! behind.
//!
//! Note: For production use with a stable API, prefer the `wave-transform-api` crate.

pub(crate) mod block;

#[cfg(feature = "multithreaded")]
mod parallel;

#[cfg(feature = "multithreaded")]
pub use parallel::transform_wave_parallel;

use crate::{WaveTransformSettings, WaveValidationError};
use alloc::vec::Vec;
use block::{transform_block, transform_block_in_place};

/// Checks that a sequence of `len` elements can be split into wave blocks.
///
/// # Returns
///
/// The block size, `2 * half_width + 1`.
///
/// # Errors
///
/// - [`WaveValidationError::InvalidParameter`] if `half_width` is 0 or the block size overflows
/// - [`WaveValidationError::NonConformantLength`] if `len` is not a multiple of the block size
pub fn validate_wave_input(
    len: usize,
    settings: WaveTransformSettings,
) -> Result<usize, WaveValidationError> {
    let block_size = settings
        .block_size()
        .ok_or(WaveValidationError::InvalidParameter(settings.half_width))?;

    if !len.is_multiple_of(block_size) {
        return Err(WaveValidationError::NonConformantLength { len, block_size });
    }

    Ok(block_size)
}

/// Rearrange `input` into wave blocks, writing the result to `output`.
///
/// Each block of `2 * half_width + 1` elements is sorted; its maximum is written
/// at offset `half_width`, the elements at even sorted indices form the
/// ascending left wing and the elements at odd sorted indices form the
/// descending right wing. Blocks are processed independently.
///
/// Only the first `input.len()` elements of `output` are written.
///
/// # Parameters
///
/// - `input`: The sequence to transform
/// - `output`: The output buffer to write the waves to
/// - `settings`: The transform settings to use
///
/// # Errors
///
/// - [`WaveValidationError::InvalidParameter`] if `half_width` is 0
/// - [`WaveValidationError::NonConformantLength`] if the input length is not a multiple of the block size
/// - [`WaveValidationError::OutputBufferTooSmall`] if output buffer is smaller than input
///
/// # Examples
///
/// ```
/// use wave_transform::{transform_wave_with_settings, WaveTransformSettings};
/// # use wave_transform::WaveValidationError;
///
/// # fn main() -> Result<(), WaveValidationError> {
/// let input = [3, 6, 5, 8, 1, 9];
/// let mut output = [0; 6];
///
/// transform_wave_with_settings(&input, &mut output, WaveTransformSettings::new(1))?;
/// assert_eq!(output, [3, 6, 5, 1, 9, 8]);
/// # Ok(())
/// # }
/// ```
pub fn transform_wave_with_settings<T: Ord + Copy>(
    input: &[T],
    output: &mut [T],
    settings: WaveTransformSettings,
) -> Result<(), WaveValidationError> {
    let block_size = validate_wave_input(input.len(), settings)?;

    // Validate output buffer size
    if output.len() < input.len() {
        return Err(WaveValidationError::OutputBufferTooSmall {
            needed: input.len(),
            actual: output.len(),
        });
    }

    let mut scratch = Vec::with_capacity(block_size);
    for (src, dst) in input
        .chunks_exact(block_size)
        .zip(output[..input.len()].chunks_exact_mut(block_size))
    {
        transform_block(src, dst, &mut scratch);
    }

    Ok(())
}

/// Rearrange `data` into wave blocks in place.
///
/// Produces the same result as [`transform_wave_with_settings`].
///
/// # Errors
///
/// - [`WaveValidationError::InvalidParameter`] if `half_width` is 0
/// - [`WaveValidationError::NonConformantLength`] if the length is not a multiple of the block size
///
/// # Examples
///
/// ```
/// use wave_transform::{transform_wave_in_place, WaveTransformSettings};
/// # use wave_transform::WaveValidationError;
///
/// # fn main() -> Result<(), WaveValidationError> {
/// let mut data = [5, 4, 3, 2, 1];
/// transform_wave_in_place(&mut data, WaveTransformSettings::new(2))?;
/// assert_eq!(data, [1, 3, 5, 4, 2]);
/// # Ok(())
/// # }
/// ```
pub fn transform_wave_in_place<T: Ord + Copy>(
    data: &mut [T],
    settings: WaveTransformSettings,
) -> Result<(), WaveValidationError> {
    let block_size = validate_wave_input(data.len(), settings)?;

    let mut scratch = Vec::with_capacity(block_size);
    for block in data.chunks_exact_mut(block_size) {
        transform_block_in_place(block, &mut scratch);
    }

    Ok(())
}

/// Rearrange `input` into wave blocks, returning a newly allocated sequence.
///
/// # Errors
///
/// - [`WaveValidationError::InvalidParameter`] if `half_width` is 0
/// - [`WaveValidationError::NonConformantLength`] if the input length is not a multiple of the block size
pub fn transform_wave_allocating<T: Ord + Copy>(
    input: &[T],
    settings: WaveTransformSettings,
) -> Result<Vec<T>, WaveValidationError> {
    validate_wave_input(input.len(), settings)?;

    let mut output = input.to_vec();
    transform_wave_in_place(&mut output, settings)?;
    Ok(output)
}

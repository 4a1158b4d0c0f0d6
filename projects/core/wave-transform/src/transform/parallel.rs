use super::{block::transform_block, validate_wave_input};
use crate::{WaveTransformSettings, WaveValidationError};
use alloc::vec::Vec;
use rayon::prelude::*;

/// Rearrange `input` into wave blocks using the rayon thread pool.
///
/// Produces exactly the same output as [`super::transform_wave_with_settings`].
/// Each worker owns a disjoint range of whole blocks in `output` and keeps its
/// own sort buffer, so no synchronization is needed beyond the pool itself.
///
/// # Errors
///
/// - [`WaveValidationError::InvalidParameter`] if `half_width` is 0
/// - [`WaveValidationError::NonConformantLength`] if the input length is not a multiple of the block size
/// - [`WaveValidationError::OutputBufferTooSmall`] if output buffer is smaller than input
pub fn transform_wave_parallel<T>(
    input: &[T],
    output: &mut [T],
    settings: WaveTransformSettings,
) -> Result<(), WaveValidationError>
where
    T: Ord + Copy + Send + Sync,
{
    let block_size = validate_wave_input(input.len(), settings)?;

    if output.len() < input.len() {
        return Err(WaveValidationError::OutputBufferTooSmall {
            needed: input.len(),
            actual: output.len(),
        });
    }

    output[..input.len()]
        .par_chunks_exact_mut(block_size)
        .zip(input.par_chunks_exact(block_size))
        .for_each_init(
            || Vec::with_capacity(block_size),
            |scratch, (dst, src)| transform_block(src, dst, scratch),
        );

    Ok(())
}

use crate::transform::validate_wave_input;
use crate::{WaveCheckError, WaveShapeError, WaveShapeViolation, WaveTransformSettings};

/// Checks whether a single block has the wave shape.
///
/// A block of `2 * half_width + 1` elements is a wave when the element at
/// offset `half_width` is the block maximum, the elements before it are
/// non-decreasing and the elements after it are non-increasing.
///
/// # Parameters
///
/// - `block`: The block to check, exactly `2 * half_width + 1` elements long
/// - `half_width`: The peak offset
///
/// # Errors
///
/// The first [`WaveShapeViolation`] found, checked in the order peak, left wing, right wing.
///
/// # Panics
///
/// If `half_width` is out of bounds for `block`.
pub fn check_wave_block<T: Ord>(block: &[T], half_width: usize) -> Result<(), WaveShapeViolation> {
    debug_assert_eq!(block.len(), half_width * 2 + 1);

    let peak = &block[half_width];
    if block.iter().any(|value| value > peak) {
        return Err(WaveShapeViolation::PeakNotMaximum);
    }

    if !block[..half_width].windows(2).all(|pair| pair[0] <= pair[1]) {
        return Err(WaveShapeViolation::LeftNotAscending);
    }

    if !block[half_width + 1..]
        .windows(2)
        .all(|pair| pair[0] >= pair[1])
    {
        return Err(WaveShapeViolation::RightNotDescending);
    }

    Ok(())
}

/// Returns `true` if `block` has the wave shape. See [`check_wave_block`].
#[inline]
pub fn is_wave_block<T: Ord>(block: &[T], half_width: usize) -> bool {
    check_wave_block(block, half_width).is_ok()
}

/// Checks that every block of `data` has the wave shape.
///
/// Any output of the wave transform with the same settings passes this check.
///
/// # Errors
///
/// - [`WaveCheckError::Validation`] if `data` cannot be split into blocks with `settings`
/// - [`WaveCheckError::Shape`] naming the first block that is not a wave
///
/// # Examples
///
/// ```
/// use wave_transform::{check_wave, WaveTransformSettings};
///
/// let settings = WaveTransformSettings::new(1);
/// assert!(check_wave(&[3, 6, 5, 1, 9, 8], settings).is_ok());
/// assert!(check_wave(&[3, 6, 5, 8, 1, 9], settings).is_err());
/// ```
pub fn check_wave<T: Ord>(data: &[T], settings: WaveTransformSettings) -> Result<(), WaveCheckError> {
    let block_size = validate_wave_input(data.len(), settings)?;

    for (block, chunk) in data.chunks_exact(block_size).enumerate() {
        check_wave_block(chunk, settings.half_width)
            .map_err(|reason| WaveShapeError { block, reason })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use crate::WaveValidationError;

    #[rstest]
    #[case(&[1, 3, 2], 1)]
    #[case(&[1, 3, 5, 4, 2], 2)]
    #[case(&[2, 2, 2], 1)]
    #[case(&[0, 0, 1, 1, 0], 2)]
    fn accepts_waves(#[case] block: &[i64], #[case] half_width: usize) {
        assert_eq!(check_wave_block(block, half_width), Ok(()));
        assert!(is_wave_block(block, half_width));
    }

    #[rstest]
    #[case(&[3, 1, 2], 1, WaveShapeViolation::PeakNotMaximum)]
    #[case(&[3, 1, 5, 0, 0], 2, WaveShapeViolation::LeftNotAscending)]
    #[case(&[1, 2, 5, 3, 4], 2, WaveShapeViolation::RightNotDescending)]
    #[case(&[2, 1, 5, 4, 9], 2, WaveShapeViolation::PeakNotMaximum)]
    fn rejects_non_waves(
        #[case] block: &[i64],
        #[case] half_width: usize,
        #[case] expected: WaveShapeViolation,
    ) {
        assert_eq!(check_wave_block(block, half_width), Err(expected));
        assert!(!is_wave_block(block, half_width));
    }

    #[test]
    fn reports_first_bad_block() {
        let data = [1, 3, 2, 1, 9, 8, 9, 1, 8];
        let result = check_wave(&data, WaveTransformSettings::new(1));

        assert_eq!(
            result,
            Err(WaveCheckError::Shape(WaveShapeError {
                block: 2,
                reason: WaveShapeViolation::PeakNotMaximum
            }))
        );
    }

    #[test]
    fn reports_unsplittable_data() {
        let result = check_wave(&[1, 2], WaveTransformSettings::new(1));
        assert_eq!(
            result,
            Err(WaveCheckError::Validation(
                WaveValidationError::NonConformantLength {
                    len: 2,
                    block_size: 3
                }
            ))
        );
    }
}

//! One-call wave transform functions.
//!
//! These take the block half width `x` directly. For repeated use with the same
//! settings, in-place operation or multithreading, see [`crate::WaveTransformBuilder`].

use crate::WaveError;
use alloc::vec::Vec;
use wave_transform::{
    WaveTransformSettings, transform_wave_allocating, transform_wave_with_settings,
};

/// Rearrange `values` into wave blocks of `2 * x + 1` elements.
///
/// Returns a newly allocated sequence with the same length and values as the
/// input. In every block the maximum sits at offset `x`, the `x` values before
/// it are non-decreasing and the `x` values after it are non-increasing.
///
/// # Errors
///
/// - [`WaveError::InvalidParameter`] if `x` is 0
/// - [`WaveError::NonConformantLength`] if `values.len()` is not a multiple of `2 * x + 1`
///
/// # Examples
///
/// ```
/// use wave_transform_api::{transform, WaveError};
///
/// assert_eq!(transform(&[5, 4, 3, 2, 1], 2).unwrap(), [1, 3, 5, 4, 2]);
///
/// let error = transform(&[3, 6, 5, 8, 1, 9, 2], 1).unwrap_err();
/// assert!(matches!(error, WaveError::NonConformantLength { len: 7, block_size: 3 }));
/// ```
pub fn transform(values: &[i64], x: usize) -> Result<Vec<i64>, WaveError> {
    transform_wave_allocating(values, WaveTransformSettings::new(x)).map_err(WaveError::from)
}

/// Rearrange `input` into wave blocks of `2 * x + 1` elements, writing to `output`.
///
/// # Errors
///
/// - [`WaveError::InvalidParameter`] if `x` is 0
/// - [`WaveError::NonConformantLength`] if `input.len()` is not a multiple of `2 * x + 1`
/// - [`WaveError::OutputBufferTooSmall`] if `output` is shorter than `input`
pub fn transform_slice(input: &[i64], output: &mut [i64], x: usize) -> Result<(), WaveError> {
    transform_wave_with_settings(input, output, WaveTransformSettings::new(x))
        .map_err(WaveError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rstest::rstest;

    #[rstest]
    #[case(&[3, 6, 5, 8, 1, 9], 1, &[3, 6, 5, 1, 9, 8])]
    #[case(&[5, 4, 3, 2, 1], 2, &[1, 3, 5, 4, 2])]
    #[case(&[], 4, &[])]
    fn transforms_known_sequences(
        #[case] values: &[i64],
        #[case] x: usize,
        #[case] expected: &[i64],
    ) {
        assert_eq!(transform(values, x).unwrap(), expected);
    }

    #[rstest]
    #[case(&[3, 6, 5, 8, 1, 9, 2], 1, WaveError::NonConformantLength { len: 7, block_size: 3 })]
    #[case(&[1, 2, 3], 0, WaveError::InvalidParameter(0))]
    #[case(&[1, 2, 3], 2, WaveError::NonConformantLength { len: 3, block_size: 5 })]
    fn rejects_contract_violations(
        #[case] values: &[i64],
        #[case] x: usize,
        #[case] expected: WaveError,
    ) {
        let error = transform(values, x).unwrap_err();
        assert!(error.is_invalid_argument());
        assert_eq!(error, expected);
    }

    #[test]
    fn slice_variant_reports_small_output() {
        let mut output = vec![0; 2];
        let result = transform_slice(&[1, 2, 3], &mut output, 1);

        assert_eq!(
            result,
            Err(WaveError::OutputBufferTooSmall {
                needed: 3,
                actual: 2
            })
        );
        assert_eq!(output, [0, 0]);
    }
}

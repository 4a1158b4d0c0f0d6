//! # Single Block Kernel
//!
//! Rearranges one block of `2x + 1` elements into a wave.
//!
//! ```ignore
//! sorted index | 0    1    2    3   ...  2x-2   2x-1   2x
//! destination  | 0    2x   1    2x-1     x-1    x+1    x (peak)
//! ```
//!
//! Even sorted indices fill the left wing from the front, odd sorted indices fill
//! the right wing from the back, so both wings stay monotonic without a second sort.

use alloc::vec::Vec;

/// Sorts `input` into `scratch`, then writes the wave arrangement to `output`.
///
/// `input` and `output` must both be exactly one block long.
/// `scratch` is cleared and reused, so passing the same vector for every block
/// avoids an allocation per block.
#[inline]
pub(crate) fn transform_block<T: Ord + Copy>(input: &[T], output: &mut [T], scratch: &mut Vec<T>) {
    debug_assert_eq!(input.len(), output.len());

    scratch.clear();
    scratch.extend_from_slice(input);
    scratch.sort_unstable();
    scatter_sorted(scratch, output);
}

/// Rearranges a single block in place.
#[inline]
pub(crate) fn transform_block_in_place<T: Ord + Copy>(block: &mut [T], scratch: &mut Vec<T>) {
    scratch.clear();
    scratch.extend_from_slice(block);
    scratch.sort_unstable();
    scatter_sorted(scratch, block);
}

/// Deals an already sorted block into `output` as a wave.
#[inline(always)]
fn scatter_sorted<T: Copy>(sorted: &[T], output: &mut [T]) {
    let last = sorted.len() - 1;
    let half_width = last / 2;

    output[half_width] = sorted[last];
    for (index, &value) in sorted[..last].iter().enumerate() {
        if index % 2 == 0 {
            output[index / 2] = value;
        } else {
            // Right group is reversed on the way out.
            output[last - index / 2] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(&[3, 6, 5], &[3, 6, 5])]
    #[case(&[8, 1, 9], &[1, 9, 8])]
    #[case(&[5, 4, 3, 2, 1], &[1, 3, 5, 4, 2])]
    #[case(&[1, 2, 3, 4, 5, 6, 7], &[1, 3, 5, 7, 6, 4, 2])]
    #[case(&[-4, 0, -9], &[-9, 0, -4])]
    #[case(&[2, 2, 2], &[2, 2, 2])]
    fn transforms_single_block(#[case] input: &[i64], #[case] expected: &[i64]) {
        let mut output = vec![0; input.len()];
        let mut scratch = Vec::new();

        transform_block(input, &mut output, &mut scratch);
        assert_eq!(output, expected);
    }

    #[test]
    fn in_place_matches_out_of_place() {
        let input = generate_wave_test_data(1, 9);
        let mut expected = vec![0; input.len()];
        let mut scratch = Vec::new();
        transform_block(&input, &mut expected, &mut scratch);

        let mut block = input.clone();
        transform_block_in_place(&mut block, &mut scratch);
        assert_eq!(block, expected);
    }

    #[test]
    fn duplicate_heavy_block_is_dealt_by_parity() {
        let input = [1, 2, 2, 1, 3, 2, 1];
        let mut output = [0; 7];
        let mut scratch = Vec::new();

        transform_block(&input, &mut output, &mut scratch);
        assert_eq!(output, [1, 1, 2, 3, 2, 2, 1]);
        assert!(crate::is_wave_block(&output, 3));
    }
}

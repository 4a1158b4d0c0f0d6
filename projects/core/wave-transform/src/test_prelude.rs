//! Common test imports and utilities for wave transform tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// `no_std` crate, so bring the allocating helpers in explicitly.
pub use alloc::{vec, vec::Vec};

use crate::WaveTransformSettings;

/// Helper to generate test data of specified size (in blocks).
///
/// Values come from a fixed linear congruential generator and are folded into a
/// small signed range, so blocks contain negatives and plenty of duplicates.
pub(crate) fn generate_wave_test_data(num_blocks: usize, block_size: usize) -> Vec<i64> {
    let mut state = 0x2545_F491_4F6C_DD1D_u64;
    (0..num_blocks * block_size)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 41) as i64 - 20
        })
        .collect()
}

/// Asserts both slices hold the same multiset of values.
pub(crate) fn assert_is_permutation(expected: &[i64], actual: &[i64]) {
    let mut expected = expected.to_vec();
    let mut actual = actual.to_vec();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(expected, actual, "Output is not a permutation of the input");
}

/// Asserts every output block has the maximum of the matching input block at its peak.
pub(crate) fn assert_block_peaks_are_input_maxima(
    input: &[i64],
    output: &[i64],
    settings: WaveTransformSettings,
) {
    let block_size = settings.block_size().unwrap();
    for (index, (src, dst)) in input
        .chunks_exact(block_size)
        .zip(output.chunks_exact(block_size))
        .enumerate()
    {
        let max = src.iter().copied().max().unwrap();
        assert_eq!(
            dst[settings.peak_offset()],
            max,
            "Block {index} peak does not match the input maximum"
        );
    }
}

#[test]
fn validate_wave_test_data_generator() {
    let data = generate_wave_test_data(4, 5);
    assert_eq!(data.len(), 20);
    assert!(data.iter().all(|value| (-20..=20).contains(value)));
    assert_eq!(data, generate_wave_test_data(4, 5), "Generator must be deterministic");
}

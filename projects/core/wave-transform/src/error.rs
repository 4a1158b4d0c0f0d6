use thiserror::Error;

/// Validation errors for wave transform operations.
///
/// These are raised before any output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaveValidationError {
    /// The block half width is 0, or `2 * half_width + 1` overflows.
    #[error("Invalid half width: {0} (must be at least 1)")]
    InvalidParameter(usize),

    /// Input length is not divisible by the block size.
    #[error("Invalid input length: {len} (must be a multiple of the block size {block_size})")]
    NonConformantLength {
        /// The length of the input.
        len: usize,
        /// The block size, `2 * half_width + 1`.
        block_size: usize,
    },

    /// Output buffer is too small to hold the transformed data.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },
}

/// The way in which a block fails to be a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WaveShapeViolation {
    /// An element of the block is larger than the element at the peak offset.
    #[error("peak is not the block maximum")]
    PeakNotMaximum,

    /// The elements before the peak are not non-decreasing.
    #[error("left wing is not ascending")]
    LeftNotAscending,

    /// The elements after the peak are not non-increasing.
    #[error("right wing is not descending")]
    RightNotDescending,
}

/// A block that does not have the wave shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Block {block} is not a wave: {reason}")]
pub struct WaveShapeError {
    /// Index of the first offending block.
    pub block: usize,
    /// What is wrong with it.
    pub reason: WaveShapeViolation,
}

/// Errors returned by [`crate::check_wave`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaveCheckError {
    /// The data cannot be split into blocks with the given settings.
    #[error(transparent)]
    Validation(#[from] WaveValidationError),

    /// The data can be split into blocks, but one of them is not a wave.
    #[error(transparent)]
    Shape(#[from] WaveShapeError),
}

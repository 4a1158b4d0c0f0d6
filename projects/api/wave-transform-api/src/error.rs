//! Error types for wave transform operations.

use thiserror::Error;
use wave_transform::{WaveCheckError, WaveShapeError, WaveShapeViolation, WaveValidationError};

/// Errors that can occur during wave transform operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaveError {
    /// The block half width is less than 1 (or too large to form a block).
    #[error("Invalid argument: half width {0} must be at least 1.")]
    InvalidParameter(usize),

    /// The sequence cannot be split into whole blocks.
    #[error(
        "Invalid argument: sequence length {len} is not a multiple of the block size (2*x+1) = {block_size}."
    )]
    NonConformantLength {
        /// The length of the sequence
        len: usize,
        /// The block size, `2 * x + 1`
        block_size: usize,
    },

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: need {needed} elements, but only {actual} available.")]
    OutputBufferTooSmall {
        /// The required size in elements
        needed: usize,
        /// The actual size in elements
        actual: usize,
    },

    /// Verified data does not have the wave shape.
    #[error("Block {block} is not a wave: {reason}.")]
    NotAWave {
        /// Index of the first offending block
        block: usize,
        /// What is wrong with it
        reason: WaveShapeViolation,
    },
}

impl WaveError {
    /// Returns `true` if the error is a violation of the caller contract, i.e.
    /// the half width or the sequence length were invalid.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::NonConformantLength { .. }
        )
    }
}

impl From<WaveValidationError> for WaveError {
    fn from(error: WaveValidationError) -> Self {
        match error {
            WaveValidationError::InvalidParameter(half_width) => Self::InvalidParameter(half_width),
            WaveValidationError::NonConformantLength { len, block_size } => {
                Self::NonConformantLength { len, block_size }
            }
            WaveValidationError::OutputBufferTooSmall { needed, actual } => {
                Self::OutputBufferTooSmall { needed, actual }
            }
        }
    }
}

impl From<WaveShapeError> for WaveError {
    fn from(error: WaveShapeError) -> Self {
        Self::NotAWave {
            block: error.block,
            reason: error.reason,
        }
    }
}

impl From<WaveCheckError> for WaveError {
    fn from(error: WaveCheckError) -> Self {
        match error {
            WaveCheckError::Validation(error) => error.into(),
            WaveCheckError::Shape(error) => error.into(),
        }
    }
}

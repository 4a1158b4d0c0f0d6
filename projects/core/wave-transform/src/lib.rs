#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error types returned by the transform and the wave shape checks.
pub mod error;

/// Transform parameters.
pub mod settings;

/// Wave transform operations on slices.
pub mod transform;

pub mod util;

#[cfg(test)]
pub mod test_prelude;

pub use error::{WaveCheckError, WaveShapeError, WaveShapeViolation, WaveValidationError};
pub use settings::WaveTransformSettings;
pub use transform::{
    transform_wave_allocating, transform_wave_in_place, transform_wave_with_settings,
    validate_wave_input,
};
#[cfg(feature = "multithreaded")]
pub use transform::transform_wave_parallel;
pub use util::{check_wave, check_wave_block, is_wave_block};

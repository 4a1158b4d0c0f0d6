#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
pub mod builder;
pub mod error;
pub mod transform;

// Re-export main functionality at crate root
pub use builder::WaveTransformBuilder;
pub use error::WaveError;
pub use transform::{transform, transform_slice};
pub use wave_transform::{WaveShapeViolation, WaveTransformSettings};

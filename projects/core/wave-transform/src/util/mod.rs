//! Utilities for inspecting wave-shaped data.

mod wave_check;

pub use wave_check::*;

pub mod interactive;
pub mod transform;
pub mod verify;

use wave_transform_api::WaveTransformBuilder;

/// Builds the transform configuration shared by all commands.
pub(crate) fn wave_builder(x: usize, multithreaded: bool) -> WaveTransformBuilder {
    let builder = WaveTransformBuilder::new().half_width(x);
    #[cfg(feature = "multithreaded")]
    let builder = builder.multithreaded(multithreaded);
    #[cfg(not(feature = "multithreaded"))]
    let _ = multithreaded;
    builder
}

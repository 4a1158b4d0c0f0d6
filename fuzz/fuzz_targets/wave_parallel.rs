#![no_main]

// Checks the rayon implementation against the sequential one.

use libfuzzer_sys::{arbitrary, fuzz_target};
use wave_transform::{transform_wave_parallel, transform_wave_with_settings, WaveTransformSettings};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct WaveInput {
    pub half_width: u8,
    pub values: Vec<i32>,
}

fuzz_target!(|input: WaveInput| {
    let settings = WaveTransformSettings::new(input.half_width as usize);

    let mut sequential = vec![0; input.values.len()];
    let mut parallel = vec![0; input.values.len()];
    let sequential_result = transform_wave_with_settings(&input.values, &mut sequential, settings);
    let parallel_result = transform_wave_parallel(&input.values, &mut parallel, settings);

    assert_eq!(sequential_result, parallel_result);
    assert_eq!(sequential, parallel, "Parallel output differs for {input:?}");
});

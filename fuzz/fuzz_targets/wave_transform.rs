#![no_main]

// Checks the wave properties on arbitrary sequences: the output is a permutation of the
// input, every block peaks at its maximum and both wings are monotonic.

use libfuzzer_sys::{arbitrary, fuzz_target};
use wave_transform::{
    check_wave, transform_wave_allocating, transform_wave_in_place, WaveTransformSettings,
    WaveValidationError,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct WaveInput {
    pub half_width: u8,
    pub values: Vec<i64>,
}

fuzz_target!(|input: WaveInput| {
    let settings = WaveTransformSettings::new(input.half_width as usize);
    let result = transform_wave_allocating(&input.values, settings);

    // Invalid input must be rejected, never truncated.
    let block_size = input.half_width as usize * 2 + 1;
    if input.half_width == 0 {
        assert_eq!(result, Err(WaveValidationError::InvalidParameter(0)));
        return;
    }
    if input.values.len() % block_size != 0 {
        assert_eq!(
            result,
            Err(WaveValidationError::NonConformantLength {
                len: input.values.len(),
                block_size,
            })
        );
        return;
    }

    let output = result.expect("Conformant input should transform");
    assert_eq!(output.len(), input.values.len());

    let mut sorted_input = input.values.clone();
    let mut sorted_output = output.clone();
    sorted_input.sort_unstable();
    sorted_output.sort_unstable();
    assert_eq!(sorted_input, sorted_output, "Output is not a permutation of the input");

    for (src, dst) in input
        .values
        .chunks_exact(block_size)
        .zip(output.chunks_exact(block_size))
    {
        assert_eq!(Some(&dst[settings.peak_offset()]), src.iter().max());
    }

    check_wave(&output, settings).expect("Output should be a wave");

    // Transforming a wave again must still give a wave.
    let mut again = output.clone();
    transform_wave_in_place(&mut again, settings).expect("Wave should transform");
    check_wave(&again, settings).expect("Re-transformed output should be a wave");
});

use std::f32::consts::PI;

use resonator::signal_processing::{IirFilter, rms};

/// Generate a sine wave of `duration_secs` seconds at `frequency` Hz
pub fn generate_sine(
    frequency: f32,
    amplitude: f32,
    duration_secs: f32,
    sample_rate: f32,
) -> Vec<f32> {
    let num_samples = (duration_secs * sample_rate) as usize;
    (0..num_samples)
        .map(|i| {
            // Keep the phase argument small to avoid f32 precision loss
            let cycles = (frequency as f64 * i as f64 / sample_rate as f64).fract();
            amplitude * (2.0 * PI * cycles as f32).sin()
        })
        .collect()
}

/// Drive `filter` with a one-second sine at `frequency` Hz and return the
/// output/input RMS ratio after discarding the first `settle_secs` seconds
#[allow(dead_code)]
pub fn steady_state_gain(filter: &mut IirFilter, frequency: f32, settle_secs: f32) -> f32 {
    let sample_rate = filter.sample_rate();
    let input = generate_sine(frequency, 0.5, 1.0, sample_rate);

    let mut output = input.clone();
    filter.process_buffer(&mut output);

    let skip = (settle_secs * sample_rate) as usize;
    rms(&output[skip..]) / rms(&input[skip..])
}

use crate::constants::MIN_POWER_THRESHOLD;

/// Root-mean-square level of a buffer (0.0 for an empty buffer)
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let power: f32 = samples.iter().map(|x| x * x).sum::<f32>() / samples.len() as f32;
    power.sqrt()
}

/// Convert an amplitude ratio to decibels
///
/// Ratios too small to measure are clamped to the power floor instead of
/// returning negative infinity.
pub fn amplitude_to_db(ratio: f32) -> f32 {
    20.0 * ratio.max(MIN_POWER_THRESHOLD.sqrt()).log10()
}

/// Peak absolute amplitude of a buffer
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, x| acc.max(x.abs()))
}

use super::coefficients::Coefficients;
use crate::constants::POLE_RADIUS_BANDWIDTH_SCALE;

/// Pole placement shared by the resonant band-pass and notch responses
///
/// The pole pair sits at angle `2π * frequency / sample_rate` with radius
/// `R = 1 - 3 * bw`. Narrower bandwidth moves the poles toward the unit
/// circle and sharpens the resonance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PoleTerms {
    /// Pole radius
    pub r: f32,
    /// `2 cos(2π * frac_freq)`
    pub t: f32,
    /// Normalization constant giving unity gain at the center frequency
    pub k: f32,
}

impl PoleTerms {
    pub fn new(frequency: f32, normalized_bandwidth: f32, sample_rate: f32) -> Self {
        let r = 1.0 - POLE_RADIUS_BANDWIDTH_SCALE * normalized_bandwidth;
        let frac_freq = frequency / sample_rate;
        let t = 2.0 * (2.0 * std::f64::consts::PI * frac_freq as f64).cos() as f32;
        let k = (1.0 - r * t + r * r) / (2.0 - t);
        Self { r, t, k }
    }

    /// Feedback taps common to both responses: `[R T, -R²]`
    pub fn feedback(&self) -> [f32; 2] {
        [self.r * self.t, -self.r * self.r]
    }
}

/// Derive resonant band-pass coefficients
///
/// Passes a band of width `normalized_bandwidth * sample_rate` Hz centered
/// on `frequency` with unity gain at the center.
///
/// # Arguments
/// * `frequency` - Center frequency in Hz
/// * `normalized_bandwidth` - Bandwidth as a fraction of the sample rate
/// * `sample_rate` - Audio sample rate in Hz
pub fn band_pass_coefficients(
    frequency: f32,
    normalized_bandwidth: f32,
    sample_rate: f32,
) -> Coefficients {
    let poles = PoleTerms::new(frequency, normalized_bandwidth, sample_rate);
    let PoleTerms { r, t, k } = poles;

    Coefficients {
        feedforward: [1.0 - k, (k - r) * t, r * r - k],
        feedback: poles.feedback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_scenario_terms() {
        // 1 kHz center, 100 Hz wide, at 44.1 kHz
        let bw = 100.0 / 44100.0;
        let terms = PoleTerms::new(1000.0, bw, 44100.0);

        assert_abs_diff_eq!(bw, 0.002268, epsilon = 1e-6);
        assert_abs_diff_eq!(terms.r, 0.99320, epsilon = 1e-5);
        assert_abs_diff_eq!(terms.t, 1.979735, epsilon = 1e-5);
        assert_abs_diff_eq!(terms.k, 0.995481, epsilon = 1e-4);
    }

    #[test]
    fn test_band_pass_coefficients_follow_formula() {
        let bw = 100.0 / 44100.0;
        let coeffs = band_pass_coefficients(1000.0, bw, 44100.0);
        let PoleTerms { r, t, k } = PoleTerms::new(1000.0, bw, 44100.0);

        assert!(coeffs.is_finite());
        assert_eq!(coeffs.feedforward, [1.0 - k, (k - r) * t, r * r - k]);
        assert_eq!(coeffs.feedback, [r * t, -r * r]);
    }

    #[test]
    fn test_band_pass_deterministic() {
        let bw = 50.0 / 48000.0;
        let first = band_pass_coefficients(500.0, bw, 48000.0);
        let second = band_pass_coefficients(500.0, bw, 48000.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_band_pass_unity_gain_at_center() {
        let sample_rate = 48000.0;
        let coeffs = band_pass_coefficients(2000.0, 80.0 / sample_rate, sample_rate);
        assert_relative_eq!(coeffs.gain(2000.0 / 48000.0), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_band_pass_rejects_dc() {
        // Feedforward taps sum to zero, so the response has a zero at DC
        let coeffs = band_pass_coefficients(1000.0, 100.0 / 44100.0, 44100.0);
        let sum: f32 = coeffs.feedforward.iter().sum();
        assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-5);
        assert!(coeffs.gain(0.0) < 1e-3);
    }

    #[test]
    fn test_zero_frequency_zero_bandwidth_degenerate() {
        // R = 1 and T = 2 drive the K denominator to zero
        let coeffs = band_pass_coefficients(0.0, 0.0, 44100.0);
        assert!(!coeffs.is_finite());
    }
}

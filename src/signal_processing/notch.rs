use super::band_pass::PoleTerms;
use super::coefficients::Coefficients;

/// Derive notch (band-reject) coefficients
///
/// Uses the same pole pair as the band-pass response and places a zero pair
/// on the unit circle at `frequency`, so the center is nulled while DC and
/// distant frequencies pass at close to unity gain.
pub fn notch_coefficients(frequency: f32, normalized_bandwidth: f32, sample_rate: f32) -> Coefficients {
    let poles = PoleTerms::new(frequency, normalized_bandwidth, sample_rate);
    let PoleTerms { t, k, .. } = poles;

    Coefficients {
        feedforward: [k, -k * t, k],
        feedback: poles.feedback(),
    }
}

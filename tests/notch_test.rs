mod test_signals;

use resonator::{FilterKind, IirFilter};
use test_signals::steady_state_gain;

#[test]
fn test_notch_removes_center_tone() {
    let mut filter = IirFilter::notch(1000.0, 100.0, 44100.0).unwrap();
    let gain = steady_state_gain(&mut filter, 1000.0, 0.2);
    assert!(gain < 0.01, "center tone not removed: {}", gain);
}

#[test]
fn test_notch_passes_distant_tones() {
    for frequency in [100.0, 4000.0] {
        let mut filter = IirFilter::notch(1000.0, 100.0, 44100.0).unwrap();
        let gain = steady_state_gain(&mut filter, frequency, 0.2);
        assert!(
            (gain - 1.0).abs() < 0.05,
            "{} Hz gain {} should be near unity",
            frequency,
            gain
        );
    }
}

#[test]
fn test_notch_follows_frequency_change() {
    let mut filter = IirFilter::new(FilterKind::Notch, 60.0, 10.0, 48000.0).unwrap();
    filter.set_frequency(50.0).unwrap();

    let gain = steady_state_gain(&mut filter, 50.0, 0.5);
    assert!(gain < 0.05, "50 Hz hum not removed: {}", gain);
}

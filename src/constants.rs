//! Numeric constants for coefficient derivation and response measurement

/// Scale from normalized bandwidth to pole-radius reduction: `R = 1 - 3 * bw`.
pub const POLE_RADIUS_BANDWIDTH_SCALE: f32 = 3.0;

/// Minimum signal power threshold for gain measurements.
/// Signals with power below this are treated as silent.
pub const MIN_POWER_THRESHOLD: f32 = 1e-10;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid sample rate: {0} Hz (must be positive and finite)")]
    InvalidSampleRate(f32),

    #[error("Invalid frequency: {0} Hz (must be positive and finite)")]
    InvalidFrequency(f32),

    #[error("Invalid bandwidth: {0} Hz (must be positive and finite)")]
    InvalidBandwidth(f32),

    #[error("Degenerate coefficients at {frequency} Hz with {bandwidth} Hz bandwidth")]
    DegenerateCoefficients { frequency: f32, bandwidth: f32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audio file error: {0}")]
    AudioFile(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;

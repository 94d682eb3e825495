//! Configuration for resonator filters.
//!
//! A filter is described by its response kind, center frequency, bandwidth
//! and the sample rate of the audio it will process. Configurations can be
//! built in code, parsed from TOML, or assembled from command-line flags:
//!
//! ```toml
//! kind = "band-pass"
//! frequency_hz = 1000.0
//! bandwidth_hz = 100.0
//! sample_rate = 44100.0
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{FilterError, Result};
use crate::signal_processing::IirFilter;

/// Frequency specification in Hz
///
/// # Parsing formats
/// - `1000` - frequency in Hz (no suffix)
/// - `1000hz` or `1000Hz` - frequency in Hz (explicit)
/// - `1.5khz` or `1.5kHz` or `1.5k` - frequency in kHz
///
/// # Example
/// ```
/// use resonator::config::Frequency;
///
/// let freq: Frequency = "1.5khz".parse().unwrap();
/// assert!((freq.as_hz() - 1500.0).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency(f32);

impl Frequency {
    /// Create from frequency in Hz
    pub fn from_hz(hz: f32) -> Self {
        Self(hz)
    }

    /// Get frequency in Hz
    pub fn as_hz(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}hz", self.0)
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        let (num, scale) = if let Some(num) = lower.strip_suffix("khz") {
            (num, 1000.0)
        } else if let Some(num) = lower.strip_suffix('k') {
            (num, 1000.0)
        } else {
            (lower.strip_suffix("hz").unwrap_or(&lower), 1.0)
        };

        let value: f32 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid frequency: {}", trimmed))?;
        let hz = value * scale;
        if !hz.is_finite() || hz <= 0.0 {
            return Err("frequency must be positive".to_string());
        }
        Ok(Self::from_hz(hz))
    }
}

/// Filter response selecting the coefficient derivation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Resonant band-pass with unity gain at the center frequency
    #[default]
    BandPass,
    /// Band-reject with a null at the center frequency
    Notch,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::BandPass => write!(f, "band-pass"),
            FilterKind::Notch => write!(f, "notch"),
        }
    }
}

/// Filter configuration
///
/// Use `FilterConfig::default()` for a 1 kHz band-pass, 100 Hz wide, at
/// 44.1 kHz.
///
/// # Example
/// ```
/// use resonator::config::FilterConfig;
///
/// let mut config = FilterConfig::default();
/// config.frequency_hz = 440.0;
/// let filter = config.build().unwrap();
/// assert_eq!(filter.frequency(), 440.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Response kind
    pub kind: FilterKind,
    /// Center frequency in Hz
    pub frequency_hz: f32,
    /// Bandwidth in Hz
    pub bandwidth_hz: f32,
    /// Audio sample rate in Hz
    pub sample_rate: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::BandPass,
            frequency_hz: 1000.0,
            bandwidth_hz: 100.0,
            sample_rate: 44100.0,
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from TOML text
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Check every parameter is positive and finite
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.sample_rate) {
            return Err(FilterError::InvalidSampleRate(self.sample_rate));
        }
        if !is_positive(self.frequency_hz) {
            return Err(FilterError::InvalidFrequency(self.frequency_hz));
        }
        if !is_positive(self.bandwidth_hz) {
            return Err(FilterError::InvalidBandwidth(self.bandwidth_hz));
        }
        Ok(())
    }

    /// Construct a filter with this configuration
    pub fn build(&self) -> Result<IirFilter> {
        IirFilter::new(
            self.kind,
            self.frequency_hz,
            self.bandwidth_hz,
            self.sample_rate,
        )
    }
}

pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

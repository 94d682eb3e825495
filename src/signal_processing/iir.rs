use num_complex::Complex64;

use super::band_pass::band_pass_coefficients;
use super::coefficients::Coefficients;
use super::filter::Filter;
use super::notch::notch_coefficients;
use crate::config::{FilterKind, is_positive};
use crate::error::{FilterError, Result};

impl FilterKind {
    /// Derive coefficients for this response from the current parameters
    ///
    /// Pure and deterministic: identical inputs always yield identical
    /// coefficients.
    pub fn derive(
        &self,
        frequency: f32,
        normalized_bandwidth: f32,
        sample_rate: f32,
    ) -> Coefficients {
        match self {
            FilterKind::BandPass => {
                band_pass_coefficients(frequency, normalized_bandwidth, sample_rate)
            }
            FilterKind::Notch => notch_coefficients(frequency, normalized_bandwidth, sample_rate),
        }
    }
}

/// Two past inputs and two past outputs, newest first
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct History {
    input: [f32; 2],
    output: [f32; 2],
}

/// Recalculating second-order IIR filter
///
/// Holds the center frequency, bandwidth and sample rate of a resonant
/// filter together with the coefficients derived from them. Every setter
/// re-derives both coefficient vectors before returning, so `process` always
/// runs with coefficients consistent with the current parameters.
///
/// The sample history survives parameter changes. Sweeping the frequency
/// mid-stream therefore behaves like a continuously varying filter (with a
/// transient when the coefficients jump) rather than restarting from
/// silence.
///
/// Frequencies at or above Nyquist are accepted and alias; they are logged
/// as warnings. Parameter changes that would produce non-finite coefficients
/// are rejected and leave the filter untouched.
#[derive(Debug, Clone)]
pub struct IirFilter {
    kind: FilterKind,
    frequency: f32,
    sample_rate: f32,
    normalized_bandwidth: f32,
    coefficients: Coefficients,
    history: History,
}

impl IirFilter {
    /// Create a new filter of the given kind
    ///
    /// # Arguments
    /// * `kind` - Response selecting the coefficient formula
    /// * `frequency` - Center frequency in Hz
    /// * `bandwidth` - Bandwidth in Hz
    /// * `sample_rate` - Audio sample rate in Hz, fixed for the filter's lifetime
    ///
    /// # Errors
    /// Returns `FilterError::InvalidSampleRate` for a non-positive sample
    /// rate, `InvalidFrequency`/`InvalidBandwidth` for non-positive
    /// parameters, and `DegenerateCoefficients` if the formula breaks down.
    pub fn new(kind: FilterKind, frequency: f32, bandwidth: f32, sample_rate: f32) -> Result<Self> {
        if !is_positive(sample_rate) {
            return Err(FilterError::InvalidSampleRate(sample_rate));
        }
        if !is_positive(frequency) {
            return Err(FilterError::InvalidFrequency(frequency));
        }

        let mut filter = Self {
            kind,
            frequency,
            sample_rate,
            normalized_bandwidth: 0.0,
            coefficients: Coefficients::ZERO,
            history: History::default(),
        };
        filter.set_bandwidth(bandwidth)?;
        Ok(filter)
    }

    /// Create a band-pass filter
    ///
    /// Passes a band `bandwidth` Hz wide centered on `frequency` with unity
    /// gain at the center.
    pub fn band_pass(frequency: f32, bandwidth: f32, sample_rate: f32) -> Result<Self> {
        Self::new(FilterKind::BandPass, frequency, bandwidth, sample_rate)
    }

    /// Create a notch filter
    ///
    /// Rejects a band `bandwidth` Hz wide centered on `frequency`.
    pub fn notch(frequency: f32, bandwidth: f32, sample_rate: f32) -> Result<Self> {
        Self::new(FilterKind::Notch, frequency, bandwidth, sample_rate)
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Center frequency in Hz
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Bandwidth in Hz
    pub fn bandwidth(&self) -> f32 {
        self.normalized_bandwidth * self.sample_rate
    }

    /// Bandwidth as a fraction of the sample rate
    pub fn normalized_bandwidth(&self) -> f32 {
        self.normalized_bandwidth
    }

    /// Coefficients currently used by `process`
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Change the center frequency and recompute the coefficients
    ///
    /// The normalized bandwidth is left as stored.
    pub fn set_frequency(&mut self, frequency: f32) -> Result<()> {
        if !is_positive(frequency) {
            return Err(FilterError::InvalidFrequency(frequency));
        }
        self.recalculate(frequency, self.normalized_bandwidth)
    }

    /// Change the bandwidth and recompute the coefficients
    pub fn set_bandwidth(&mut self, bandwidth: f32) -> Result<()> {
        if !is_positive(bandwidth) {
            return Err(FilterError::InvalidBandwidth(bandwidth));
        }
        self.recalculate(self.frequency, bandwidth / self.sample_rate)
    }

    fn recalculate(&mut self, frequency: f32, normalized_bandwidth: f32) -> Result<()> {
        let coefficients = self
            .kind
            .derive(frequency, normalized_bandwidth, self.sample_rate);

        if !coefficients.is_finite() {
            return Err(FilterError::DegenerateCoefficients {
                frequency,
                bandwidth: normalized_bandwidth * self.sample_rate,
            });
        }

        if frequency >= self.sample_rate / 2.0 {
            log::warn!(
                "{} frequency {:.1} Hz is at or above Nyquist ({:.1} Hz)",
                self.kind,
                frequency,
                self.sample_rate / 2.0
            );
        }
        log::debug!(
            "{} coefficients at {:.1} Hz, bw {:.6}: a={:?} b={:?}",
            self.kind,
            frequency,
            normalized_bandwidth,
            coefficients.feedforward,
            coefficients.feedback
        );

        self.frequency = frequency;
        self.normalized_bandwidth = normalized_bandwidth;
        self.coefficients = coefficients;
        Ok(())
    }

    /// Process a single sample through the filter
    ///
    /// Returns the filtered sample value.
    pub fn process(&mut self, sample: f32) -> f32 {
        let [a0, a1, a2] = self.coefficients.feedforward;
        let [b1, b2] = self.coefficients.feedback;
        let History { input, output } = self.history;

        let y = a0 * sample + a1 * input[0] + a2 * input[1] + b1 * output[0] + b2 * output[1];

        self.history = History {
            input: [sample, input[0]],
            output: [y, output[0]],
        };
        y
    }

    /// Process an entire buffer of audio samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear the sample history, keeping parameters and coefficients
    pub fn reset(&mut self) {
        self.history = History::default();
    }

    /// Complex response of the current coefficients at `frequency` Hz
    pub fn response_at(&self, frequency: f32) -> Complex64 {
        self.coefficients
            .response(frequency as f64 / self.sample_rate as f64)
    }

    /// Gain of the current coefficients at `frequency` Hz
    pub fn gain_at(&self, frequency: f32) -> f64 {
        self.response_at(frequency).norm()
    }
}

impl Filter for IirFilter {
    fn process(&mut self, sample: f32) -> f32 {
        IirFilter::process(self, sample)
    }

    fn process_buffer(&mut self, buffer: &mut [f32]) {
        IirFilter::process_buffer(self, buffer)
    }
}

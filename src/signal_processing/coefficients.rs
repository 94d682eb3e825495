use num_complex::Complex64;
use std::f64::consts::PI;

/// Second-order IIR coefficient set
///
/// Feedforward taps apply to `x[n]`, `x[n-1]`, `x[n-2]`; feedback taps apply
/// to `y[n-1]`, `y[n-2]` and are added (not subtracted) in the recurrence:
///
/// `y[n] = a0 x[n] + a1 x[n-1] + a2 x[n-2] + b1 y[n-1] + b2 y[n-2]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub feedforward: [f32; 3],
    pub feedback: [f32; 2],
}

impl Coefficients {
    /// Coefficients that pass nothing through
    pub const ZERO: Self = Self {
        feedforward: [0.0; 3],
        feedback: [0.0; 2],
    };

    /// True when every coefficient is a finite number
    pub fn is_finite(&self) -> bool {
        self.feedforward
            .iter()
            .chain(self.feedback.iter())
            .all(|c| c.is_finite())
    }

    /// Evaluate the transfer function on the unit circle
    ///
    /// # Arguments
    /// * `frac_freq` - Frequency as a fraction of the sample rate (0.5 = Nyquist)
    pub fn response(&self, frac_freq: f64) -> Complex64 {
        let z1 = Complex64::from_polar(1.0, -2.0 * PI * frac_freq);
        let z2 = z1 * z1;

        let [a0, a1, a2] = self.feedforward.map(f64::from);
        let [b1, b2] = self.feedback.map(f64::from);

        let numerator = z1 * a1 + z2 * a2 + a0;
        let denominator = Complex64::new(1.0, 0.0) - z1 * b1 - z2 * b2;
        numerator / denominator
    }

    /// Magnitude of the response at `frac_freq`
    pub fn gain(&self, frac_freq: f64) -> f64 {
        self.response(frac_freq).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_coefficients_silence() {
        assert_eq!(Coefficients::ZERO.gain(0.1), 0.0);
        assert!(Coefficients::ZERO.is_finite());
    }

    #[test]
    fn test_identity_response() {
        let identity = Coefficients {
            feedforward: [1.0, 0.0, 0.0],
            feedback: [0.0, 0.0],
        };
        for frac in [0.0, 0.1, 0.25, 0.5] {
            assert_relative_eq!(identity.gain(frac), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_one_pole_dc_gain() {
        // y[n] = 0.5 x[n] + 0.5 y[n-1] has unity gain at DC
        let one_pole = Coefficients {
            feedforward: [0.5, 0.0, 0.0],
            feedback: [0.5, 0.0],
        };
        assert_relative_eq!(one_pole.gain(0.0), 1.0, epsilon = 1e-12);
        assert!(one_pole.gain(0.5) < 0.5);
    }

    #[test]
    fn test_non_finite_detected() {
        let bad = Coefficients {
            feedforward: [f32::NAN, 0.0, 0.0],
            feedback: [0.0, 0.0],
        };
        assert!(!bad.is_finite());

        let bad = Coefficients {
            feedforward: [0.0, 0.0, 0.0],
            feedback: [f32::INFINITY, 0.0],
        };
        assert!(!bad.is_finite());
    }
}

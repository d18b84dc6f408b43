//! Supporting types for filter design and the recursive engine.
//!
//! This module contains the configuration structs consumed by the
//! coefficient designers and the fixed-size coefficient storage used by
//! [`RecursiveFilter`](crate::filters::engine::RecursiveFilter).

use crate::error::{DesignError, DesignResult};

/// Default damping ratio ζ = √2⁄2, the maximally-flat Butterworth value.
pub const DEFAULT_ZETA: f32 = core::f32::consts::FRAC_1_SQRT_2;

/// Practical ceiling for the band-stop notch depth.
///
/// At ζ-design time the expression `(1 - sqrt(B²/ωc² + 1)) / (4·depth² - 2)`
/// is only positive while `4·depth² - 2 < 0`, i.e. `depth < √2⁄2`. Depths
/// above this ceiling make the damping square root NaN.
pub const MAX_NOTCH_DEPTH: f32 = 0.7;

/// Design parameters for the low-pass and high-pass filter variants.
///
/// Consumed by the coefficient designers at construction or
/// reconfiguration time; not retained by the filter afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Cutoff frequency in Hz.
    pub cutoff_hz: f32,
    /// Sampling frequency of the control loop in Hz.
    pub sample_rate_hz: f32,
    /// Damping ratio ζ. Ignored by the first-order design.
    pub zeta: f32,
}

impl FilterConfig {
    /// Creates a configuration with the default Butterworth damping
    /// ratio [`DEFAULT_ZETA`].
    pub const fn new(cutoff_hz: f32, sample_rate_hz: f32) -> Self {
        Self {
            cutoff_hz,
            sample_rate_hz,
            zeta: DEFAULT_ZETA,
        }
    }

    /// Overrides the damping ratio.
    #[must_use]
    pub const fn with_zeta(mut self, zeta: f32) -> Self {
        self.zeta = zeta;
        self
    }

    /// Validates the physical parameters.
    ///
    /// Requires a positive, finite sampling frequency and a cutoff
    /// strictly between 0 and the Nyquist frequency.
    pub fn validate(&self) -> DesignResult<()> {
        validate_band(self.cutoff_hz, self.sample_rate_hz)
    }
}

/// Design parameters for the band-stop (notch) filter variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchConfig {
    /// Center frequency of the stop band in Hz.
    pub stop_hz: f32,
    /// Sampling frequency of the control loop in Hz.
    pub sample_rate_hz: f32,
    /// Residual gain at the stop frequency, in (0, [`MAX_NOTCH_DEPTH`]].
    /// Smaller values notch harder; the attenuation at the center is
    /// `1 - depth`.
    pub depth: f32,
    /// Bandwidth of the stop band in Hz.
    pub width_hz: f32,
}

impl NotchConfig {
    /// Creates a notch configuration.
    pub const fn new(stop_hz: f32, sample_rate_hz: f32, depth: f32, width_hz: f32) -> Self {
        Self {
            stop_hz,
            sample_rate_hz,
            depth,
            width_hz,
        }
    }

    /// Validates the physical parameters.
    ///
    /// In addition to the frequency checks of [`FilterConfig::validate`],
    /// the depth must lie in (0, [`MAX_NOTCH_DEPTH`]] and the width must
    /// be positive.
    pub fn validate(&self) -> DesignResult<()> {
        validate_band(self.stop_hz, self.sample_rate_hz)?;
        if !self.depth.is_finite() || self.depth <= 0.0 || self.depth > MAX_NOTCH_DEPTH {
            return Err(DesignError::InvalidDepth(format!(
                "notch depth must be in (0, {MAX_NOTCH_DEPTH}], got {}",
                self.depth
            )));
        }
        if !self.width_hz.is_finite() || self.width_hz <= 0.0 {
            return Err(DesignError::InvalidFrequency(format!(
                "notch width must be positive, got {} Hz",
                self.width_hz
            )));
        }
        Ok(())
    }
}

fn validate_band(center_hz: f32, sample_rate_hz: f32) -> DesignResult<()> {
    if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
        return Err(DesignError::InvalidFrequency(format!(
            "sampling frequency must be positive, got {sample_rate_hz} Hz"
        )));
    }
    let nyquist = sample_rate_hz / 2.0;
    if !center_hz.is_finite() || center_hz <= 0.0 || center_hz >= nyquist {
        return Err(DesignError::InvalidFrequency(format!(
            "cutoff frequency must be between 0 and Nyquist ({nyquist} Hz), got {center_hz} Hz"
        )));
    }
    Ok(())
}

/// Normalized coefficients of an `ORDER`-th order discrete transfer
/// function.
///
/// The representation keeps the normalization invariant `a[0] == 1`
/// structurally: only `b[0]` and the trailing coefficients
/// `b[1..=ORDER]` / `a[1..=ORDER]` are stored. Storage is fixed-size and
/// `Copy`, so no allocation occurs at design or reconfiguration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<const ORDER: usize> {
    /// Leading feed-forward coefficient `b[0]`.
    pub b0: f32,
    /// Feed-forward coefficients `b[1..=ORDER]`.
    pub b: [f32; ORDER],
    /// Feed-back coefficients `a[1..=ORDER]` (`a[0] == 1` is implicit).
    pub a: [f32; ORDER],
}

impl<const ORDER: usize> Coefficients<ORDER> {
    /// Coefficients of the identity transfer function `H(z) = 1`.
    pub const fn identity() -> Self {
        Self {
            b0: 1.0,
            b: [0.0; ORDER],
            a: [0.0; ORDER],
        }
    }

    /// Returns true if every coefficient is finite.
    ///
    /// Out-of-range design parameters show up here as NaN or infinity;
    /// a filter driven by such a set produces NaN forever.
    pub fn is_finite(&self) -> bool {
        self.b0.is_finite()
            && self.b.iter().all(|c| c.is_finite())
            && self.a.iter().all(|c| c.is_finite())
    }

    /// Steady-state output-to-input ratio for a constant input,
    /// `Σb / Σa` with `a[0] == 1`.
    pub fn dc_gain(&self) -> f32 {
        let num: f32 = self.b0 + self.b.iter().sum::<f32>();
        let den: f32 = 1.0 + self.a.iter().sum::<f32>();
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_default_zeta_is_butterworth() {
        assert_approx_eq!(DEFAULT_ZETA as f64, (2.0f64).sqrt() / 2.0, 1e-7);
    }

    #[test]
    fn test_filter_config_validation() {
        assert!(FilterConfig::new(10.0, 500.0).validate().is_ok());
        assert!(FilterConfig::new(0.0, 500.0).validate().is_err());
        assert!(FilterConfig::new(-10.0, 500.0).validate().is_err());
        assert!(FilterConfig::new(250.0, 500.0).validate().is_err());
        assert!(FilterConfig::new(10.0, 0.0).validate().is_err());
        assert!(FilterConfig::new(10.0, -500.0).validate().is_err());
        assert!(FilterConfig::new(f32::NAN, 500.0).validate().is_err());
    }

    #[test]
    fn test_notch_config_validation() {
        assert!(NotchConfig::new(50.0, 1000.0, 0.3, 5.0).validate().is_ok());
        assert!(NotchConfig::new(50.0, 1000.0, 0.7, 5.0).validate().is_ok());

        let too_deep = NotchConfig::new(50.0, 1000.0, 0.8, 5.0).validate();
        assert!(matches!(too_deep, Err(DesignError::InvalidDepth(_))));

        let zero_depth = NotchConfig::new(50.0, 1000.0, 0.0, 5.0).validate();
        assert!(matches!(zero_depth, Err(DesignError::InvalidDepth(_))));

        let bad_width = NotchConfig::new(50.0, 1000.0, 0.3, 0.0).validate();
        assert!(matches!(bad_width, Err(DesignError::InvalidFrequency(_))));
    }

    #[test]
    fn test_identity_coefficients() {
        let coeffs = Coefficients::<2>::identity();
        assert!(coeffs.is_finite());
        assert_approx_eq!(coeffs.dc_gain() as f64, 1.0, 1e-7);
    }

    #[test]
    fn test_is_finite_detects_nan() {
        let mut coeffs = Coefficients::<2>::identity();
        coeffs.a[1] = f32::NAN;
        assert!(!coeffs.is_finite());
    }
}

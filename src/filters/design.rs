//! Analog-to-digital coefficient design via the bilinear transform.
//!
//! Each function maps physical design parameters (cutoff/stop frequency,
//! sampling frequency, damping) to the normalized coefficients of a
//! discrete transfer function, using the frequency-prewarped bilinear
//! substitution `wd = tan(π·fc/fs)`.
//!
//! The functions are pure and deterministic and perform **no** input
//! validation: callers must ensure `fs > 0` and `0 < fc < fs/2` (and the
//! notch depth range) or the returned set contains NaN. The validated
//! path lives on the filter variants' `try_new` constructors.

use std::f32::consts::PI;

use crate::filters::types::Coefficients;

/// Designs a first-order low-pass stage.
///
/// `b0 = b1 = wd/(wd+1)`, `a1 = (wd-1)/(wd+1)` with `wd = tan(π·fc/fs)`.
pub fn first_order_low_pass(cutoff_hz: f32, sample_rate_hz: f32) -> Coefficients<1> {
    let wd = (PI * cutoff_hz / sample_rate_hz).tan();
    let b0 = wd / (wd + 1.0);

    Coefficients {
        b0,
        b: [b0],
        a: [(wd - 1.0) / (wd + 1.0)],
    }
}

/// Designs a second-order Butterworth low-pass biquad.
///
/// With `wd2 = wd²` and `cross = 2ζ·wd`:
/// `b0 = b2 = wd2/(wd2+cross+1)`, `b1 = 2·b0`,
/// `a1 = 2(wd2-1)/(wd2+cross+1)`, `a2 = (wd2-cross+1)/(wd2+cross+1)`.
pub fn second_order_low_pass(cutoff_hz: f32, sample_rate_hz: f32, zeta: f32) -> Coefficients<2> {
    let wd = (PI * cutoff_hz / sample_rate_hz).tan();
    let wd2 = wd * wd;
    let cross = 2.0 * zeta * wd;
    let norm = wd2 + cross + 1.0;

    let b0 = wd2 / norm;

    Coefficients {
        b0,
        b: [2.0 * b0, b0],
        a: [2.0 * (wd2 - 1.0) / norm, (wd2 - cross + 1.0) / norm],
    }
}

/// Designs a second-order Butterworth high-pass biquad.
///
/// Same denominator as the low-pass design; the numerator is
/// `b0 = b2 = 1/(wd2+cross+1)`, `b1 = -2·b0`.
pub fn second_order_high_pass(cutoff_hz: f32, sample_rate_hz: f32, zeta: f32) -> Coefficients<2> {
    let wd = (PI * cutoff_hz / sample_rate_hz).tan();
    let wd2 = wd * wd;
    let cross = 2.0 * zeta * wd;
    let norm = wd2 + cross + 1.0;

    let b0 = 1.0 / norm;

    Coefficients {
        b0,
        b: [-2.0 * b0, b0],
        a: [2.0 * (wd2 - 1.0) / norm, (wd2 - cross + 1.0) / norm],
    }
}

/// Designs a third-order low-pass filter as the cascade of one
/// first-order and one second-order Butterworth stage.
///
/// The coefficients are the exact polynomial product (convolution) of
/// [`first_order_low_pass`] and [`second_order_low_pass`]. This is not a
/// canonical third-order Butterworth design; the cascade composition is
/// the defining semantics of this filter.
pub fn third_order_low_pass(cutoff_hz: f32, sample_rate_hz: f32, zeta: f32) -> Coefficients<3> {
    let first = first_order_low_pass(cutoff_hz, sample_rate_hz);
    let second = second_order_low_pass(cutoff_hz, sample_rate_hz, zeta);

    // (b0 + b1·z⁻¹)(c0 + c1·z⁻¹ + c2·z⁻²), denominators likewise with
    // the implicit leading 1.
    Coefficients {
        b0: first.b0 * second.b0,
        b: [
            first.b[0] * second.b0 + first.b0 * second.b[0],
            first.b[0] * second.b[0] + first.b0 * second.b[1],
            first.b[0] * second.b[1],
        ],
        a: [
            first.a[0] + second.a[0],
            first.a[0] * second.a[0] + second.a[1],
            first.a[0] * second.a[1],
        ],
    }
}

/// Designs a second-order band-stop (notch) biquad.
///
/// Two damping factors are derived from the stop frequency `f0`, the
/// depth and the bandwidth:
/// `ζ1 = sqrt((1 - sqrt(B²/ωc² + 1)) / (4·depth² - 2))` with
/// `ωc = 2π·f0`, `B = 2π·width`, and `ζ2 = depth·ζ1`. The numerator is
/// damped by ζ2 and the denominator by ζ1, so the residual gain at the
/// stop frequency is exactly `ζ2/ζ1 = depth`.
///
/// For `depth ≥ √2⁄2` the expression under the outer square root is
/// negative and the whole set degenerates to NaN; there is no domain
/// check here (see [`NotchConfig::validate`] for the opt-in check).
///
/// [`NotchConfig::validate`]: crate::filters::types::NotchConfig::validate
pub fn second_order_band_stop(
    stop_hz: f32,
    sample_rate_hz: f32,
    depth: f32,
    width_hz: f32,
) -> Coefficients<2> {
    let wd = (PI * stop_hz / sample_rate_hz).tan();
    let wd2 = wd * wd;
    let wc = 2.0 * PI * stop_hz;
    let bandwidth = 2.0 * PI * width_hz;

    let zeta1 =
        ((1.0 - ((bandwidth * bandwidth) / (wc * wc) + 1.0).sqrt()) / (4.0 * depth * depth - 2.0))
            .sqrt();
    let zeta2 = depth * zeta1;

    let norm = wd2 + 2.0 * zeta1 * wd + 1.0;
    let a1 = (2.0 * wd2 - 2.0) / norm;

    Coefficients {
        b0: (1.0 + 2.0 * zeta2 * wd + wd2) / norm,
        b: [a1, (1.0 - 2.0 * zeta2 * wd + wd2) / norm],
        a: [a1, (1.0 - 2.0 * zeta1 * wd + wd2) / norm],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    // Golden regression: cutoff 10 Hz, fs 500 Hz, ζ = √2/2 must
    // reproduce the straight-line bilinear-transform arithmetic.
    #[test]
    fn test_second_order_low_pass_golden_values() {
        let coeffs = second_order_low_pass(10.0, 500.0, std::f32::consts::FRAC_1_SQRT_2);

        let wd = (PI * 10.0 / 500.0).tan();
        let wd2 = wd * wd;
        let cross = 2.0 * std::f32::consts::FRAC_1_SQRT_2 * wd;
        let norm = wd2 + cross + 1.0;

        assert_approx_eq!(coeffs.b0 as f64, (wd2 / norm) as f64, 1e-8);
        assert_approx_eq!(coeffs.b[0] as f64, (2.0 * wd2 / norm) as f64, 1e-8);
        assert_approx_eq!(coeffs.b[1] as f64, (wd2 / norm) as f64, 1e-8);
        assert_approx_eq!(coeffs.a[0] as f64, (2.0 * (wd2 - 1.0) / norm) as f64, 1e-8);
        assert_approx_eq!(coeffs.a[1] as f64, ((wd2 - cross + 1.0) / norm) as f64, 1e-8);

        // Independently computed reference values for the same design.
        assert_approx_eq!(coeffs.b0 as f64, 3.62168e-3, 1e-4);
        assert_approx_eq!(coeffs.a[0] as f64, -1.822_694_9, 1e-4);
        assert_approx_eq!(coeffs.a[1] as f64, 0.837_181_7, 1e-4);
    }

    #[test]
    fn test_low_pass_designs_have_unity_dc_gain() {
        assert_approx_eq!(first_order_low_pass(10.0, 500.0).dc_gain() as f64, 1.0, 1e-5);
        assert_approx_eq!(
            second_order_low_pass(10.0, 500.0, 0.7071).dc_gain() as f64,
            1.0,
            1e-5
        );
        assert_approx_eq!(
            third_order_low_pass(10.0, 500.0, 0.7071).dc_gain() as f64,
            1.0,
            1e-4
        );
    }

    #[test]
    fn test_high_pass_design_has_zero_dc_gain() {
        let coeffs = second_order_high_pass(10.0, 500.0, 0.7071);
        assert!(coeffs.dc_gain().abs() < 1e-5);
    }

    #[test]
    fn test_band_stop_design_has_unity_dc_gain() {
        let coeffs = second_order_band_stop(50.0, 1000.0, 0.3, 5.0);
        assert!(coeffs.is_finite());
        assert_approx_eq!(coeffs.dc_gain() as f64, 1.0, 1e-4);
        // Shared a1 = b1 structure of the notch biquad.
        assert_eq!(coeffs.b[0], coeffs.a[0]);
    }

    // The third-order design must equal the polynomial product of the
    // independently designed first- and second-order stages.
    #[test]
    fn test_third_order_is_cascade_of_first_and_second() {
        let (fc, fs, zeta) = (20.0, 1000.0, 0.6);
        let third = third_order_low_pass(fc, fs, zeta);
        let first = first_order_low_pass(fc, fs);
        let second = second_order_low_pass(fc, fs, zeta);

        // Numerator convolution: [b0, b1] * [c0, c1, c2].
        let b = [
            first.b0 * second.b0,
            first.b0 * second.b[0] + first.b[0] * second.b0,
            first.b0 * second.b[1] + first.b[0] * second.b[0],
            first.b[0] * second.b[1],
        ];
        // Denominator convolution: [1, a1] * [1, d1, d2].
        let a = [
            first.a[0] + second.a[0],
            first.a[0] * second.a[0] + second.a[1],
            first.a[0] * second.a[1],
        ];

        assert_approx_eq!(third.b0 as f64, b[0] as f64, 1e-9);
        for i in 0..3 {
            assert_approx_eq!(third.b[i] as f64, b[i + 1] as f64, 1e-9);
            assert_approx_eq!(third.a[i] as f64, a[i] as f64, 1e-9);
        }
    }

    // Out-of-range depth silently degenerates to NaN; this is the
    // documented permissive behavior, not a bug.
    #[test]
    fn test_band_stop_excess_depth_degenerates_to_nan() {
        let coeffs = second_order_band_stop(50.0, 1000.0, 0.9, 5.0);
        assert!(!coeffs.is_finite());
    }

    #[test]
    fn test_zero_sample_rate_degenerates_to_nan() {
        let coeffs = second_order_low_pass(10.0, 0.0, 0.7071);
        assert!(!coeffs.is_finite());
    }
}

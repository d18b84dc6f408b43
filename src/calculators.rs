//! Filtered derivative and integral calculators.
//!
//! Both calculators compose a raw per-tick computation with an injected
//! filter implementing [`SampleFilter`]. The filter is built by the
//! caller and moved in, so any variant — or an external sliding-window
//! statistic filter, or [`PassThrough`] — plugs in with zero dispatch
//! cost.
//!
//! [`PassThrough`]: crate::filters::traits::PassThrough

use crate::filters::traits::SampleFilter;

/// Filtered finite-difference derivative of a sampled signal.
///
/// Each [`calc`](Self::calc) computes the raw difference quotient
/// against the previous input and feeds it through the wrapped filter.
///
/// # Examples
///
/// ```
/// use signal_conditioning::{DerivativeCalculator, PassThrough};
///
/// let mut derivative = DerivativeCalculator::new(PassThrough);
/// derivative.calc(1.0, 0.01);
/// let slope = derivative.calc(2.0, 0.01);
/// assert!((slope - 100.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct DerivativeCalculator<F> {
    filter: F,
    previous_input: f32,
    last_output: f32,
}

impl<F: SampleFilter> DerivativeCalculator<F> {
    /// Wraps an already-built filter.
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            previous_input: 0.0,
            last_output: 0.0,
        }
    }

    /// Computes the filtered derivative for this tick.
    ///
    /// `raw = (input - previous_input) / dt`, filtered, stored and
    /// returned. The very first call differences against an implicit
    /// previous input of zero.
    pub fn calc(&mut self, input: f32, dt: f32) -> f32 {
        let raw = (input - self.previous_input) / dt;
        self.previous_input = input;
        self.last_output = self.filter.apply(raw);
        self.last_output
    }

    /// The most recently returned derivative.
    pub const fn last_output(&self) -> f32 {
        self.last_output
    }

    /// Zeroes the previous input and the stored output.
    ///
    /// The inner filter's history is deliberately **not** reset; use
    /// [`filter_mut`](Self::filter_mut) to cascade the reset when a full
    /// restart is wanted.
    pub fn clear(&mut self) {
        self.previous_input = 0.0;
        self.last_output = 0.0;
    }

    /// The wrapped filter.
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// Mutable access to the wrapped filter.
    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Consumes the calculator and returns the wrapped filter.
    pub fn into_filter(self) -> F {
        self.filter
    }
}

/// Filtered per-tick integral contribution of a sampled signal.
///
/// Each [`calc`](Self::calc) scales the current sample by the tick
/// interval and filters it. This is **not** a running integral: no
/// accumulator is kept across calls, and the caller is expected to sum
/// the returned contributions externally if a cumulative value is
/// needed.
///
/// # Examples
///
/// ```
/// use signal_conditioning::{IntegralCalculator, PassThrough};
///
/// let mut integral = IntegralCalculator::new(PassThrough);
/// let contribution = integral.calc(3.0, 0.01);
/// assert!((contribution - 0.03).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct IntegralCalculator<F> {
    filter: F,
    last_scaled: f32,
    last_output: f32,
}

impl<F: SampleFilter> IntegralCalculator<F> {
    /// Wraps an already-built filter.
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            last_scaled: 0.0,
            last_output: 0.0,
        }
    }

    /// Computes the filtered integral contribution `input · dt` for this
    /// tick.
    pub fn calc(&mut self, input: f32, dt: f32) -> f32 {
        self.last_scaled = input * dt;
        self.last_output = self.filter.apply(self.last_scaled);
        self.last_output
    }

    /// The most recently returned contribution.
    pub const fn last_output(&self) -> f32 {
        self.last_output
    }

    /// The most recent raw contribution `input · dt`, before filtering.
    pub const fn last_raw(&self) -> f32 {
        self.last_scaled
    }

    /// Zeroes the stored scaled value and output.
    ///
    /// The inner filter's history is deliberately **not** reset; use
    /// [`filter_mut`](Self::filter_mut) to cascade the reset when a full
    /// restart is wanted.
    pub fn clear(&mut self) {
        self.last_scaled = 0.0;
        self.last_output = 0.0;
    }

    /// The wrapped filter.
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// Mutable access to the wrapped filter.
    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Consumes the calculator and returns the wrapped filter.
    pub fn into_filter(self) -> F {
        self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::traits::PassThrough;
    use crate::filters::types::FilterConfig;
    use crate::filters::variants::SecondOrderLowPass;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_derivative_exact_with_pass_through() {
        let mut derivative = DerivativeCalculator::new(PassThrough);
        derivative.calc(1.0, 0.002);
        let slope = derivative.calc(2.0, 0.002);
        assert_approx_eq!(slope as f64, 500.0, 1e-2);
        assert_eq!(derivative.last_output(), slope);
    }

    #[test]
    fn test_derivative_of_constant_signal_is_zero() {
        let mut derivative =
            DerivativeCalculator::new(SecondOrderLowPass::new(FilterConfig::new(10.0, 500.0)));
        derivative.calc(4.0, 0.002);
        let mut output = 0.0f32;
        for _ in 0..1000 {
            output = derivative.calc(4.0, 0.002);
        }
        assert!(output.abs() < 1e-3);
    }

    #[test]
    fn test_derivative_of_ramp_converges_to_slope() {
        let dt = 0.002f32;
        let mut derivative =
            DerivativeCalculator::new(SecondOrderLowPass::new(FilterConfig::new(10.0, 500.0)));
        let mut output = 0.0;
        for n in 0..2000 {
            output = derivative.calc(3.0 * n as f32 * dt, dt);
        }
        assert_approx_eq!(output as f64, 3.0, 1e-3);
    }

    #[test]
    fn test_derivative_clear_does_not_reset_inner_filter() {
        let mut derivative =
            DerivativeCalculator::new(SecondOrderLowPass::new(FilterConfig::new(10.0, 500.0)));
        for n in 0..50 {
            derivative.calc(n as f32, 0.002);
        }

        derivative.clear();
        assert_eq!(derivative.last_output(), 0.0);

        // The inner filter still rings from its retained history.
        assert!(derivative.filter_mut().apply(0.0) != 0.0);
    }

    #[test]
    fn test_derivative_clear_zeroes_previous_input() {
        let mut derivative = DerivativeCalculator::new(PassThrough);
        derivative.calc(10.0, 1.0);
        derivative.clear();
        // Differencing restarts against zero.
        assert_approx_eq!(derivative.calc(10.0, 1.0) as f64, 10.0, 1e-6);
    }

    #[test]
    fn test_integral_scales_by_tick_interval() {
        let mut integral = IntegralCalculator::new(PassThrough);
        assert_approx_eq!(integral.calc(3.0, 0.01) as f64, 0.03, 1e-7);
    }

    // No accumulator: repeated identical calls return the same
    // contribution rather than a growing sum.
    #[test]
    fn test_integral_does_not_accumulate() {
        let mut integral = IntegralCalculator::new(PassThrough);
        let first = integral.calc(3.0, 0.01);
        let second = integral.calc(3.0, 0.01);
        assert_eq!(first, second);
    }

    #[test]
    fn test_integral_clear_does_not_reset_inner_filter() {
        let mut integral =
            IntegralCalculator::new(SecondOrderLowPass::new(FilterConfig::new(10.0, 500.0)));
        for _ in 0..50 {
            integral.calc(5.0, 0.002);
        }

        integral.clear();
        assert_eq!(integral.last_output(), 0.0);
        assert_eq!(integral.last_raw(), 0.0);
        assert!(integral.filter_mut().apply(0.0) != 0.0);
    }

    #[test]
    fn test_calculators_accept_any_sample_filter() {
        // Compile-level check that both wrappers are generic over the
        // trait, not over a concrete variant.
        let _ = DerivativeCalculator::new(SecondOrderLowPass::new(FilterConfig::new(5.0, 100.0)));
        let _ = IntegralCalculator::new(PassThrough);
    }
}

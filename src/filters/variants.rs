//! Concrete filter variants binding the recursive engine to one
//! coefficient design.
//!
//! Every variant follows the same shape: `new` is permissive and never
//! fails (out-of-range parameters silently yield NaN coefficients, with
//! a `tracing` warning), `try_new` validates first, and `reconfigure`
//! recomputes the coefficients from new parameters while deliberately
//! keeping the history — a parameter change mid-run produces a one-tick
//! transient, not a restart from the zero state.

use crate::error::DesignResult;
use crate::filters::design;
use crate::filters::engine::RecursiveFilter;
use crate::filters::traits::SampleFilter;
use crate::filters::types::{Coefficients, FilterConfig, NotchConfig};

macro_rules! delegate_sample_filter {
    ($variant:ty) => {
        impl SampleFilter for $variant {
            fn apply(&mut self, input: f32) -> f32 {
                self.engine.apply(input)
            }

            fn reset(&mut self) {
                self.engine.reset();
            }
        }
    };
}

fn warn_if_degenerate<const ORDER: usize>(name: &str, coefficients: &Coefficients<ORDER>) {
    if !coefficients.is_finite() {
        tracing::warn!(
            filter = name,
            "design produced non-finite coefficients; output will be NaN until reconfigured and reset"
        );
    }
}

/// First-order exponential smoother weighted by a trust factor.
///
/// `output = trust·input + (1 - trust)·previous_output`, with `trust`
/// in (0, 1]: a trust of 1 passes the input through unchanged, smaller
/// values smooth harder. Unlike the designed variants below it has no
/// frequency parameters; the trust factor is the whole configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSmoother {
    trust: f32,
    last_output: f32,
}

impl ExponentialSmoother {
    /// Creates the smoother. The trust factor is not validated; values
    /// outside (0, 1] smooth nonsensically or diverge but do not fail.
    pub const fn new(trust: f32) -> Self {
        Self {
            trust,
            last_output: 0.0,
        }
    }

    /// The active trust factor.
    pub const fn trust(&self) -> f32 {
        self.trust
    }

    /// Changes the trust factor, keeping the smoothed state.
    pub fn set_trust(&mut self, trust: f32) {
        self.trust = trust;
    }
}

impl SampleFilter for ExponentialSmoother {
    fn apply(&mut self, input: f32) -> f32 {
        self.last_output = self.trust * input + (1.0 - self.trust) * self.last_output;
        self.last_output
    }

    fn reset(&mut self) {
        self.last_output = 0.0;
    }
}

/// First-order low-pass filter.
///
/// The damping ratio of the [`FilterConfig`] is not used by the
/// first-order design.
#[derive(Debug, Clone, Copy)]
pub struct FirstOrderLowPass {
    engine: RecursiveFilter<1>,
}

impl FirstOrderLowPass {
    /// Creates the filter. Never fails; invalid parameters degenerate to
    /// NaN coefficients.
    pub fn new(config: FilterConfig) -> Self {
        let coefficients = design::first_order_low_pass(config.cutoff_hz, config.sample_rate_hz);
        warn_if_degenerate("FirstOrderLowPass", &coefficients);
        Self {
            engine: RecursiveFilter::new(coefficients),
        }
    }

    /// Validated construction.
    pub fn try_new(config: FilterConfig) -> DesignResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Recomputes the coefficients from new parameters, keeping history.
    pub fn reconfigure(&mut self, config: FilterConfig) {
        let coefficients = design::first_order_low_pass(config.cutoff_hz, config.sample_rate_hz);
        warn_if_degenerate("FirstOrderLowPass", &coefficients);
        self.engine.set_coefficients(coefficients);
    }

    /// The active coefficient set.
    pub const fn coefficients(&self) -> &Coefficients<1> {
        self.engine.coefficients()
    }
}

delegate_sample_filter!(FirstOrderLowPass);

/// Second-order Butterworth low-pass filter.
///
/// # Examples
///
/// ```
/// use signal_conditioning::{FilterConfig, SampleFilter, SecondOrderLowPass};
///
/// let mut lpf = SecondOrderLowPass::new(FilterConfig::new(10.0, 500.0));
/// let conditioned = lpf.apply(1.0);
/// assert!(conditioned.is_finite());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SecondOrderLowPass {
    engine: RecursiveFilter<2>,
}

impl SecondOrderLowPass {
    /// Creates the filter. Never fails; invalid parameters degenerate to
    /// NaN coefficients.
    pub fn new(config: FilterConfig) -> Self {
        let coefficients =
            design::second_order_low_pass(config.cutoff_hz, config.sample_rate_hz, config.zeta);
        warn_if_degenerate("SecondOrderLowPass", &coefficients);
        Self {
            engine: RecursiveFilter::new(coefficients),
        }
    }

    /// Validated construction.
    pub fn try_new(config: FilterConfig) -> DesignResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Recomputes the coefficients from new parameters, keeping history.
    pub fn reconfigure(&mut self, config: FilterConfig) {
        let coefficients =
            design::second_order_low_pass(config.cutoff_hz, config.sample_rate_hz, config.zeta);
        warn_if_degenerate("SecondOrderLowPass", &coefficients);
        self.engine.set_coefficients(coefficients);
    }

    /// The active coefficient set.
    pub const fn coefficients(&self) -> &Coefficients<2> {
        self.engine.coefficients()
    }
}

delegate_sample_filter!(SecondOrderLowPass);

/// Second-order Butterworth high-pass filter.
#[derive(Debug, Clone, Copy)]
pub struct SecondOrderHighPass {
    engine: RecursiveFilter<2>,
}

impl SecondOrderHighPass {
    /// Creates the filter. Never fails; invalid parameters degenerate to
    /// NaN coefficients.
    pub fn new(config: FilterConfig) -> Self {
        let coefficients =
            design::second_order_high_pass(config.cutoff_hz, config.sample_rate_hz, config.zeta);
        warn_if_degenerate("SecondOrderHighPass", &coefficients);
        Self {
            engine: RecursiveFilter::new(coefficients),
        }
    }

    /// Validated construction.
    pub fn try_new(config: FilterConfig) -> DesignResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Recomputes the coefficients from new parameters, keeping history.
    pub fn reconfigure(&mut self, config: FilterConfig) {
        let coefficients =
            design::second_order_high_pass(config.cutoff_hz, config.sample_rate_hz, config.zeta);
        warn_if_degenerate("SecondOrderHighPass", &coefficients);
        self.engine.set_coefficients(coefficients);
    }

    /// The active coefficient set.
    pub const fn coefficients(&self) -> &Coefficients<2> {
        self.engine.coefficients()
    }
}

delegate_sample_filter!(SecondOrderHighPass);

/// Second-order band-stop (notch) filter.
///
/// Attenuates a narrow band around the stop frequency; the residual gain
/// at the center is the configured depth.
#[derive(Debug, Clone, Copy)]
pub struct SecondOrderBandStop {
    engine: RecursiveFilter<2>,
}

impl SecondOrderBandStop {
    /// Creates the filter. Never fails; invalid parameters (including a
    /// depth above [`MAX_NOTCH_DEPTH`]) degenerate to NaN coefficients.
    ///
    /// [`MAX_NOTCH_DEPTH`]: crate::filters::types::MAX_NOTCH_DEPTH
    pub fn new(config: NotchConfig) -> Self {
        let coefficients = design::second_order_band_stop(
            config.stop_hz,
            config.sample_rate_hz,
            config.depth,
            config.width_hz,
        );
        warn_if_degenerate("SecondOrderBandStop", &coefficients);
        Self {
            engine: RecursiveFilter::new(coefficients),
        }
    }

    /// Validated construction.
    pub fn try_new(config: NotchConfig) -> DesignResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Recomputes the coefficients from new parameters, keeping history.
    pub fn reconfigure(&mut self, config: NotchConfig) {
        let coefficients = design::second_order_band_stop(
            config.stop_hz,
            config.sample_rate_hz,
            config.depth,
            config.width_hz,
        );
        warn_if_degenerate("SecondOrderBandStop", &coefficients);
        self.engine.set_coefficients(coefficients);
    }

    /// The active coefficient set.
    pub const fn coefficients(&self) -> &Coefficients<2> {
        self.engine.coefficients()
    }
}

delegate_sample_filter!(SecondOrderBandStop);

/// Third-order low-pass filter, the cascade of one first-order and one
/// second-order Butterworth stage (see
/// [`design::third_order_low_pass`]).
#[derive(Debug, Clone, Copy)]
pub struct ThirdOrderLowPass {
    engine: RecursiveFilter<3>,
}

impl ThirdOrderLowPass {
    /// Creates the filter. Never fails; invalid parameters degenerate to
    /// NaN coefficients.
    pub fn new(config: FilterConfig) -> Self {
        let coefficients =
            design::third_order_low_pass(config.cutoff_hz, config.sample_rate_hz, config.zeta);
        warn_if_degenerate("ThirdOrderLowPass", &coefficients);
        Self {
            engine: RecursiveFilter::new(coefficients),
        }
    }

    /// Validated construction.
    pub fn try_new(config: FilterConfig) -> DesignResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Recomputes the coefficients from new parameters, keeping history.
    pub fn reconfigure(&mut self, config: FilterConfig) {
        let coefficients =
            design::third_order_low_pass(config.cutoff_hz, config.sample_rate_hz, config.zeta);
        warn_if_degenerate("ThirdOrderLowPass", &coefficients);
        self.engine.set_coefficients(coefficients);
    }

    /// The active coefficient set.
    pub const fn coefficients(&self) -> &Coefficients<3> {
        self.engine.coefficients()
    }
}

delegate_sample_filter!(ThirdOrderLowPass);

//! Generic fixed-order recursive (IIR) filter engine.

use crate::filters::traits::SampleFilter;
use crate::filters::types::Coefficients;

/// Direct-form-I recursive filter of compile-time order `ORDER`.
///
/// Holds one [`Coefficients`] set plus input and output history arrays
/// (`x[0]`/`y[0]` are the most recent past samples). All storage is
/// fixed-size and owned by the instance, so [`apply`] runs in O(`ORDER`)
/// with no allocation and no branching beyond the update loop — the
/// bounded-time property required for a per-tick control-loop primitive.
///
/// The order is fixed at construction; use a new engine for a different
/// order. Orders outside [1, 100] are rejected at build time.
///
/// # Examples
///
/// ```
/// use signal_conditioning::{Coefficients, RecursiveFilter, SampleFilter};
///
/// let mut filter = RecursiveFilter::new(Coefficients::<2>::identity());
/// assert_eq!(filter.apply(0.5), 0.5);
/// ```
///
/// [`apply`]: SampleFilter::apply
#[derive(Debug, Clone, Copy)]
pub struct RecursiveFilter<const ORDER: usize> {
    coefficients: Coefficients<ORDER>,
    x: [f32; ORDER],
    y: [f32; ORDER],
}

impl<const ORDER: usize> RecursiveFilter<ORDER> {
    /// Creates an engine with zeroed history.
    ///
    /// Fails to compile for orders outside [1, 100].
    pub fn new(coefficients: Coefficients<ORDER>) -> Self {
        const {
            assert!(
                ORDER >= 1 && ORDER <= 100,
                "filter order must be in [1, 100]"
            )
        };

        Self {
            coefficients,
            x: [0.0; ORDER],
            y: [0.0; ORDER],
        }
    }

    /// The filter order.
    pub const fn order(&self) -> usize {
        ORDER
    }

    /// The active coefficient set.
    pub const fn coefficients(&self) -> &Coefficients<ORDER> {
        &self.coefficients
    }

    /// Swaps in a new coefficient set without clearing history.
    ///
    /// The retained history produces a one-tick transient discontinuity
    /// on the next sample; this is the documented reconfiguration
    /// behavior, not an error.
    pub fn set_coefficients(&mut self, coefficients: Coefficients<ORDER>) {
        self.coefficients = coefficients;
    }
}

impl<const ORDER: usize> SampleFilter for RecursiveFilter<ORDER> {
    /// Applies the difference equation
    /// `y[0] = b[0]·x0 + Σ b[i]·x[i] - Σ a[i]·y[i]` for `i = 1..=ORDER`,
    /// then shifts both histories by one sample.
    fn apply(&mut self, input: f32) -> f32 {
        let mut output = self.coefficients.b0 * input;
        for i in 0..ORDER {
            output += self.coefficients.b[i] * self.x[i];
            output -= self.coefficients.a[i] * self.y[i];
        }

        for i in (1..ORDER).rev() {
            self.x[i] = self.x[i - 1];
            self.y[i] = self.y[i - 1];
        }
        self.x[0] = input;
        self.y[0] = output;

        output
    }

    fn reset(&mut self) {
        self.x = [0.0; ORDER];
        self.y = [0.0; ORDER];
    }
}

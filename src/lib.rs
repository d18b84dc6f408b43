// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms
// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains
// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`
// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # signal_conditioning
//!
//! Signal conditioning primitives for periodic control loops (robotics
//! actuator/sensor pipelines and similar): recursive (IIR) filters with
//! Butterworth-style bilinear-transform designs, plus generic derivative
//! and integral calculators that compose an arbitrary filter with a raw
//! per-tick computation.
//!
//! ## Overview
//!
//! Everything here is a pure in-process computational primitive meant to
//! be invoked once per fixed-period control-loop tick:
//!
//! - [`RecursiveFilter`] — generic direct-form-I engine of compile-time
//!   order (valid in [1, 100], checked at build time).
//! - Coefficient designers in [`filters::design`] — pure functions
//!   mapping physical parameters to normalized coefficients.
//! - Variants — [`FirstOrderLowPass`], [`SecondOrderLowPass`],
//!   [`SecondOrderHighPass`], [`SecondOrderBandStop`],
//!   [`ThirdOrderLowPass`] — bind an engine to one design.
//! - [`DerivativeCalculator`] / [`IntegralCalculator`] — wrap any
//!   [`SampleFilter`] around a finite difference or a scaled sample.
//!
//! Every per-tick operation is single-threaded, allocation-free and
//! O(filter order); instances are exclusively owned values with no
//! shared state.
//!
//! ## Quick Start
//!
//! ```rust
//! use signal_conditioning::{
//!     DerivativeCalculator, FilterConfig, SampleFilter, SecondOrderLowPass,
//! };
//!
//! // 10 Hz cutoff at a 500 Hz loop rate, Butterworth damping.
//! let mut lpf = SecondOrderLowPass::new(FilterConfig::new(10.0, 500.0));
//! let conditioned = lpf.apply(0.8);
//!
//! // Filtered velocity estimate from position samples.
//! let mut velocity = DerivativeCalculator::new(SecondOrderLowPass::new(
//!     FilterConfig::new(20.0, 500.0),
//! ));
//! let v = velocity.calc(0.8, 0.002);
//! # let _ = (conditioned, v);
//! ```
//!
//! ## Error Handling
//!
//! The plain constructors are permissive: zero or negative frequencies,
//! cutoffs at or above Nyquist, or an excessive notch depth are not
//! rejected — they propagate NaN into the coefficient set and from there
//! into the filter state, silently corrupting all future outputs until
//! an explicit reset and reconfiguration. Callers that want validation
//! opt in through the `try_new` constructors, which return a
//! [`DesignError`] instead:
//!
//! ```rust
//! use signal_conditioning::{DesignError, FilterConfig, SecondOrderLowPass};
//!
//! let result = SecondOrderLowPass::try_new(FilterConfig::new(400.0, 500.0));
//! assert!(matches!(result, Err(DesignError::InvalidFrequency(_))));
//! ```
//!
//! ## Clear semantics
//!
//! The calculators' `clear()` zeroes their own scalar state but not the
//! wrapped filter's history; reach through `filter_mut()` when a full
//! restart is wanted. Likewise, variant reconfiguration swaps
//! coefficients without clearing history, trading a one-tick transient
//! for continuity of the conditioned signal.

mod calculators;
mod error;
pub mod filters;

pub use crate::calculators::{DerivativeCalculator, IntegralCalculator};
pub use crate::error::{DesignError, DesignResult};
pub use crate::filters::{
    Coefficients, DEFAULT_ZETA, ExponentialSmoother, FilterConfig, FirstOrderLowPass,
    MAX_NOTCH_DEPTH, NotchConfig, PassThrough, RecursiveFilter, SampleFilter, SecondOrderBandStop,
    SecondOrderHighPass, SecondOrderLowPass, ThirdOrderLowPass,
};

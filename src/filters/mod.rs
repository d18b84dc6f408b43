//! Recursive filter engine, coefficient designers and concrete variants.
//!
//! ## Module Organization
//!
//! - [`traits`] - The [`SampleFilter`](traits::SampleFilter) capability
//! - [`types`] - Configuration structs and coefficient storage
//! - [`design`] - Bilinear-transform coefficient designers
//! - [`engine`] - The generic direct-form-I recursive engine
//! - [`variants`] - Low-pass, high-pass and band-stop variants

pub mod design;
pub mod engine;
pub mod traits;
pub mod types;
pub mod variants;

pub use engine::RecursiveFilter;
pub use traits::{PassThrough, SampleFilter};
pub use types::{Coefficients, DEFAULT_ZETA, FilterConfig, MAX_NOTCH_DEPTH, NotchConfig};
pub use variants::{
    ExponentialSmoother, FirstOrderLowPass, SecondOrderBandStop, SecondOrderHighPass,
    SecondOrderLowPass, ThirdOrderLowPass,
};

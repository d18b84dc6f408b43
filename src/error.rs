//! Error types and result utilities for filter design operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`DesignError`].
pub type DesignResult<T> = Result<T, DesignError>;

/// Error types that can occur when validating filter design parameters.
///
/// These are only produced by the validated (`try_new`) entry points.
/// The plain constructors never fail: out-of-range parameters silently
/// propagate NaN into the coefficient set instead (see the crate docs on
/// error handling).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// A frequency parameter is out of range.
    ///
    /// Sampling frequencies must be positive and finite, and cutoff/stop
    /// frequencies must lie strictly between 0 and the Nyquist frequency.
    #[error("Invalid frequency error: {0}")]
    InvalidFrequency(String),

    /// A notch depth parameter is out of range.
    ///
    /// The band-stop damping formula is only real-valued for depths in
    /// (0, ~0.7]; deeper notches make the expression under the inner
    /// square root negative.
    #[error("Invalid notch depth error: {0}")]
    InvalidDepth(String),
}

//! Core trait definition for single-value filtering.

/// The single-value filtering capability shared by every filter in this
/// crate.
///
/// A `SampleFilter` consumes one measurement per control-loop tick and
/// produces one conditioned value, mutating only its own state. The
/// derivative and integral calculators are generic over this trait, so
/// any conforming type plugs in: the recursive variants here, an
/// external sliding-window median or mean filter, or [`PassThrough`]
/// for an unfiltered signal path.
///
/// Implementations are expected to be allocation-free and O(state size)
/// per call; generic callers are monomorphized, so there is no dynamic
/// dispatch on the per-tick path.
pub trait SampleFilter {
    /// Feeds one sample through the filter and returns the filtered
    /// value.
    fn apply(&mut self, input: f32) -> f32;

    /// Zeroes the filter's history. Configuration and coefficients are
    /// preserved.
    fn reset(&mut self);
}

/// Identity filter: returns its input unchanged.
///
/// Useful as the injected filter when a calculator should pass the raw
/// finite difference or scaled sample straight through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassThrough;

impl SampleFilter for PassThrough {
    fn apply(&mut self, input: f32) -> f32 {
        input
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_is_identity() {
        let mut filter = PassThrough;
        assert_eq!(filter.apply(0.25), 0.25);
        assert_eq!(filter.apply(-3.0), -3.0);
        filter.reset();
        assert_eq!(filter.apply(1.5), 1.5);
    }
}

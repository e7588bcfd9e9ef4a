//! Quantile position arithmetic

/// Positions bracketing a quantile inside a window of `count` sorted values.
///
/// With `val = quantile * (count - 1)`:
///
/// ```text
/// lower_bound = floor(val)
/// upper_bound = ceil(val)
/// nearest     = round(val), ties to even
/// fraction    = val - lower_bound
/// ```
///
/// `0 <= lower_bound <= upper_bound < count` and `fraction` is in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileIndex {
    /// Position at or below the quantile
    pub lower_bound: usize,
    /// Position at or above the quantile
    pub upper_bound: usize,
    /// Position closest to the quantile
    pub nearest: usize,
    /// Weight of `upper_bound` for linear interpolation
    pub fraction: f64,
}

impl QuantileIndex {
    /// Compute the positions for `count` values.
    ///
    /// `quantile` is clamped to [0.0, 1.0]; callers reject NaN before getting
    /// here. A window of one value has nothing to bracket: callers return
    /// that value directly instead of computing an index.
    pub fn new(count: usize, quantile: f64) -> Self {
        debug_assert!(count > 0, "quantile index over an empty window");
        let last = count.saturating_sub(1);
        let val = quantile.clamp(0.0, 1.0) * last as f64;

        let lower_bound = (val.floor() as usize).min(last);
        let upper_bound = (val.ceil() as usize).min(last);
        let nearest = (val.round_ties_even() as usize).min(last);
        let fraction = (val - lower_bound as f64).clamp(0.0, 1.0);

        Self {
            lower_bound,
            upper_bound,
            nearest,
            fraction,
        }
    }

    /// Returns true if the quantile falls exactly on one position
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.lower_bound == self.upper_bound
    }
}

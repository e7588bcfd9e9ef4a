//! Interpolation methods for quantile computation

use crate::error::{Error, Result};
use std::str::FromStr;

/// Interpolation methods for quantile computation.
///
/// These methods determine the result when the quantile falls between two
/// sorted values `a` (at the lower position) and `b` (at the upper position).
///
/// # Example
///
/// For data `[1, 2, 3, 4]` and q=0.25 (position 0.75):
/// - Linear: `1 + 0.75 * (2 - 1) = 1.75`
/// - Midpoint: `(1 + 2) / 2 = 1.5`
/// - Lower: `1` (floor position = 0)
/// - Higher: `2` (ceil position = 1)
/// - Nearest: `2` (0.75 rounds to 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// `a + fraction * (b - a)`, computed in f64
    #[default]
    Linear,
    /// `(a + b) / 2`
    Midpoint,
    /// `a`
    Lower,
    /// `b`
    Higher,
    /// The value at the rounded position
    Nearest,
}

impl Interpolation {
    /// All methods
    pub const ALL: [Interpolation; 5] = [
        Interpolation::Linear,
        Interpolation::Midpoint,
        Interpolation::Lower,
        Interpolation::Higher,
        Interpolation::Nearest,
    ];

    /// Parse an interpolation method from a string (case-insensitive).
    ///
    /// Valid names are "linear", "midpoint", "lower", "higher" and "nearest".
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedOperation` for any other name.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Interpolation::Linear),
            "midpoint" => Ok(Interpolation::Midpoint),
            "lower" => Ok(Interpolation::Lower),
            "higher" => Ok(Interpolation::Higher),
            "nearest" => Ok(Interpolation::Nearest),
            _ => Err(Error::UnsupportedOperation {
                op: "interpolation",
                reason: format!(
                    "unknown method '{}', expected linear, midpoint, lower, higher or nearest",
                    s
                ),
            }),
        }
    }

    /// Name accepted by [`Interpolation::parse`]
    pub fn name(&self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::Midpoint => "midpoint",
            Interpolation::Lower => "lower",
            Interpolation::Higher => "higher",
            Interpolation::Nearest => "nearest",
        }
    }

    /// Combine the two values bracketing the quantile.
    ///
    /// Returns `None` for `Nearest`, which selects a position rather than
    /// combining values.
    #[inline]
    pub fn interpolate(&self, lower: f64, upper: f64, fraction: f64) -> Option<f64> {
        match self {
            Interpolation::Linear => {
                // also keeps equal infinite neighbors from turning into NaN
                if fraction == 0.0 || lower == upper {
                    Some(lower)
                } else {
                    Some(lower + fraction * (upper - lower))
                }
            }
            Interpolation::Midpoint => Some((lower + upper) / 2.0),
            Interpolation::Lower => Some(lower),
            Interpolation::Higher => Some(upper),
            Interpolation::Nearest => None,
        }
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Per-column results

/// A nullable f64 result.
///
/// Invalid results carry `0.0` as their value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    /// The result value
    pub value: f64,
    /// False when the source column had no valid rows
    pub is_valid: bool,
}

impl Scalar {
    /// A valid result
    #[inline]
    pub fn valid(value: f64) -> Self {
        Self {
            value,
            is_valid: true,
        }
    }

    /// The invalid, zero-valued result
    #[inline]
    pub fn null() -> Self {
        Self {
            value: 0.0,
            is_valid: false,
        }
    }

    /// The value if valid
    #[inline]
    pub fn to_option(&self) -> Option<f64> {
        self.is_valid.then_some(self.value)
    }
}

impl From<Option<f64>> for Scalar {
    fn from(value: Option<f64>) -> Self {
        value.map_or_else(Scalar::null, Scalar::valid)
    }
}

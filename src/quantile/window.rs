//! Valid window of a sorted column

use crate::column::NullOrder;

/// Contiguous run of non-null positions in a sorted column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidWindow {
    /// Position of the first valid value
    pub offset: usize,
    /// Number of valid values
    pub count: usize,
}

impl ValidWindow {
    /// Sorted position of the `index`-th valid value
    #[inline]
    pub fn position(&self, index: usize) -> usize {
        self.offset + index
    }
}

/// Locate the valid values of a sorted column of `size` rows.
///
/// Nulls form a prefix when placed before and a suffix when placed after.
pub fn valid_window(size: usize, null_count: usize, null_order: NullOrder) -> ValidWindow {
    let offset = match null_order {
        NullOrder::Before => null_count,
        NullOrder::After => 0,
    };
    ValidWindow {
        offset,
        count: size.saturating_sub(null_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_window() {
        assert_eq!(
            valid_window(10, 3, NullOrder::Before),
            ValidWindow { offset: 3, count: 7 }
        );
        assert_eq!(
            valid_window(10, 3, NullOrder::After),
            ValidWindow { offset: 0, count: 7 }
        );
        assert_eq!(valid_window(4, 0, NullOrder::Before).position(2), 2);
        assert_eq!(valid_window(4, 4, NullOrder::After).count, 0);
    }
}

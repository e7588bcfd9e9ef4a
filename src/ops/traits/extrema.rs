//! Extrema reduction trait.

use crate::column::{Column, NullOrder, Order};
use crate::error::Result;
use crate::runtime::Runtime;

/// Which end of an ordering to select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    /// First valid element under the ordering
    Min,
    /// Last valid element under the ordering
    Max,
}

impl std::fmt::Display for Extremum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extremum::Min => write!(f, "min"),
            Extremum::Max => write!(f, "max"),
        }
    }
}

/// Extrema reduction trait
pub trait ExtremaOps<R: Runtime> {
    /// Row position of the minimum or maximum of `column`.
    ///
    /// A linear reduction over every row using the same comparator as
    /// [`SortingOps::sorted_order`](super::SortingOps::sorted_order), so
    /// `order` decides what "minimum" means: under `Descending` the minimum
    /// is the largest value. Null rows never win regardless of `null_order`,
    /// and ties resolve the way a stable sort would: the minimum is the
    /// earliest tied row, the maximum the latest.
    ///
    /// The returned row holds the value found at the first (MIN) or last
    /// (MAX) position of the valid window of the sorted column.
    ///
    /// # Errors
    ///
    /// - `UnsupportedDType` if the column is not numeric
    /// - `InvalidArgument` if the column has no valid rows
    fn extremum_index(
        &self,
        column: &Column<R>,
        extremum: Extremum,
        order: Order,
        null_order: NullOrder,
    ) -> Result<usize>;
}

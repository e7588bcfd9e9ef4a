//! Sorting and gather operations trait.

use crate::column::{NullOrder, Order, Storage, Table};
use crate::error::Result;
use crate::runtime::Runtime;

/// Sorting and gather operations trait
///
/// The sort never moves data: it produces a row permutation, and `gather`
/// materializes the reordered rows when a caller needs them.
pub trait SortingOps<R: Runtime> {
    /// Return the row permutation that stably sorts `table`.
    ///
    /// Columns are compared lexicographically, first column most significant.
    /// Each column is ordered by its entry in `orders`, with its nulls placed
    /// by its entry in `null_orders`. Rows that compare equal keep their
    /// original relative order.
    ///
    /// # Returns
    ///
    /// I64 buffer with `table.num_rows()` original row positions, allocated
    /// through the client's allocator.
    ///
    /// # Example
    ///
    /// ```
    /// # use quantr::prelude::*;
    /// # use quantr::ops::SortingOps;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let column = Column::<CpuRuntime>::from_slice(&[3i32, 1, 4, 1, 5], &device)?;
    /// let table = Table::from_column(column);
    /// let order = client.sorted_order(&table, &[Order::Ascending], &[NullOrder::After])?;
    /// assert_eq!(order.to_vec::<i64>()?, vec![1, 3, 0, 2, 4]);
    /// # Ok::<(), quantr::error::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if `orders` or `null_orders` do not have one entry per column
    /// - `UnsupportedDType` if a key column is not numeric
    fn sorted_order(
        &self,
        table: &Table<R>,
        orders: &[Order],
        null_orders: &[NullOrder],
    ) -> Result<Storage<R>>;

    /// Reorder the rows of every column of `table` by `permutation`.
    ///
    /// Row `i` of the result is row `permutation[i]` of the input. Validity
    /// travels with the rows.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `permutation` is not an I64 buffer
    /// - `IndexOutOfBounds` if a position is negative or past the last row
    /// - `UnsupportedDType` for Utf8 columns
    fn gather(&self, table: &Table<R>, permutation: &Storage<R>) -> Result<Table<R>>;
}

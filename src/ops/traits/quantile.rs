//! Quantile operations trait.

use crate::column::{Column, NullOrder, Order, Table};
use crate::error::{Error, Result};
use crate::quantile::{Interpolation, Scalar};
use crate::runtime::Runtime;

/// Quantile selection over table columns
pub trait QuantileOps<R: Runtime> {
    /// Compute one quantile per column of `table`.
    ///
    /// `quantile` is clamped to [0.0, 1.0]. Every column is processed
    /// independently with its own entry of `orders` and `null_orders`, and
    /// the results come back in column order as f64 scalars.
    ///
    /// # Arguments
    ///
    /// * `table` - Columns to summarize
    /// * `quantile` - Fractional position, 0.0 is the minimum and 1.0 the maximum
    /// * `interpolation` - How to combine the two values bracketing the position
    /// * `is_sorted` - Caller asserts every column is already sorted by its
    ///   order and null placement; no sort is performed
    /// * `orders` - Per-column sort direction
    /// * `null_orders` - Per-column null placement
    ///
    /// # Algorithm
    ///
    /// ```text
    /// all rows null            -> (0.0, invalid)
    /// one row                  -> that row
    /// unsorted, quantile <= 0  -> minimum by extrema reduction
    /// unsorted, quantile >= 1  -> maximum by extrema reduction
    /// otherwise                -> sort permutation (unless is_sorted), then
    ///                             val = quantile * (valid - 1) over the valid window
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// # use quantr::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let column = Column::<CpuRuntime>::from_slice(&[3i32, 1, 4, 1, 5], &device)?;
    /// let table = Table::from_column(column);
    /// let result = client.quantiles(
    ///     &table,
    ///     0.6,
    ///     Interpolation::Linear,
    ///     false,
    ///     &[Order::Ascending],
    ///     &[NullOrder::After],
    /// )?;
    /// assert!((result[0].value - 3.4).abs() < 1e-12);
    /// # Ok::<(), quantr::error::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if `orders` or `null_orders` do not have one entry per column
    /// - `InvalidArgument` if `quantile` is NaN
    /// - `UnsupportedDType` if a column that is not entirely null is not numeric
    fn quantiles(
        &self,
        table: &Table<R>,
        quantile: f64,
        interpolation: Interpolation,
        is_sorted: bool,
        orders: &[Order],
        null_orders: &[NullOrder],
    ) -> Result<Vec<Scalar>>;

    /// Quantile of a single column.
    ///
    /// Same semantics as [`quantiles`](Self::quantiles) over a one-column table.
    fn quantile_column(
        &self,
        column: &Column<R>,
        quantile: f64,
        interpolation: Interpolation,
        is_sorted: bool,
        order: Order,
        null_order: NullOrder,
    ) -> Result<Scalar> {
        let table = Table::from_column(column.clone());
        self.quantiles(
            &table,
            quantile,
            interpolation,
            is_sorted,
            &[order],
            &[null_order],
        )?
        .pop()
        .ok_or_else(|| Error::Internal("quantiles returned no result".to_string()))
    }

    /// Compute the p-th percentile of every column.
    ///
    /// Convenience wrapper for `quantiles(table, p / 100, Linear, ...)`;
    /// `percentile` is clamped to [0.0, 100.0].
    fn percentiles(
        &self,
        table: &Table<R>,
        percentile: f64,
        is_sorted: bool,
        orders: &[Order],
        null_orders: &[NullOrder],
    ) -> Result<Vec<Scalar>> {
        self.quantiles(
            table,
            percentile.clamp(0.0, 100.0) / 100.0,
            Interpolation::Linear,
            is_sorted,
            orders,
            null_orders,
        )
    }

    /// Median of every column (quantile 0.5, linear interpolation).
    fn medians(
        &self,
        table: &Table<R>,
        is_sorted: bool,
        orders: &[Order],
        null_orders: &[NullOrder],
    ) -> Result<Vec<Scalar>> {
        self.quantiles(
            table,
            0.5,
            Interpolation::Linear,
            is_sorted,
            orders,
            null_orders,
        )
    }
}

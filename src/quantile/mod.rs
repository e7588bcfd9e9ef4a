//! Quantile selection engine
//!
//! Maps a fractional quantile to positions in the valid window of a sorted
//! column and combines the values found there. The sort and the extrema
//! reduction come from the runtime client through [`SortingOps`] and
//! [`ExtremaOps`]; everything here is written once against those traits.
//!
//! ```text
//! quantiles_impl            per table: length checks, clamping, type dispatch
//!   └── column_quantile<T>  per column: ColumnPlan
//!         ├── extremum_index          boundary quantile, unsorted column
//!         ├── sorted_order            interior quantile, unsorted column
//!         └── select                  valid window -> QuantileIndex -> Interpolation
//! ```

mod driver;
mod index;
mod interpolation;
mod scalar;
mod window;

pub use driver::ColumnPlan;
pub use index::QuantileIndex;
pub use interpolation::Interpolation;
pub use scalar::Scalar;
pub use window::{ValidWindow, valid_window};

use crate::column::{NullOrder, Order, Table};
use crate::dtype::dispatch_numeric;
use crate::error::{Error, Result};
use crate::ops::{ExtremaOps, SortingOps};
use crate::runtime::{Runtime, RuntimeClient};
use driver::column_quantile;

/// Clamp a requested quantile to [0.0, 1.0].
///
/// # Errors
///
/// Returns `InvalidArgument` for NaN, which has no place in the range.
pub fn clamp_quantile(quantile: f64) -> Result<f64> {
    if quantile.is_nan() {
        return Err(Error::InvalidArgument {
            arg: "quantile",
            reason: "quantile is NaN".to_string(),
        });
    }
    Ok(quantile.clamp(0.0, 1.0))
}

/// One quantile per column of `table`, in column order.
///
/// Generic implementation behind [`QuantileOps::quantiles`]; see there for
/// the full contract.
///
/// [`QuantileOps::quantiles`]: crate::ops::QuantileOps::quantiles
pub fn quantiles_impl<R, C>(
    client: &C,
    table: &Table<R>,
    quantile: f64,
    interpolation: Interpolation,
    is_sorted: bool,
    orders: &[Order],
    null_orders: &[NullOrder],
) -> Result<Vec<Scalar>>
where
    R: Runtime<Client = C>,
    C: RuntimeClient<R> + SortingOps<R> + ExtremaOps<R>,
{
    if orders.len() != table.num_columns() {
        return Err(Error::length_mismatch(
            "orders",
            table.num_columns(),
            orders.len(),
        ));
    }
    if null_orders.len() != table.num_columns() {
        return Err(Error::length_mismatch(
            "null_orders",
            table.num_columns(),
            null_orders.len(),
        ));
    }
    let quantile = clamp_quantile(quantile)?;

    table
        .columns()
        .iter()
        .zip(orders.iter().zip(null_orders))
        .enumerate()
        .map(|(index, (column, (&order, &null_order)))| {
            if column.is_all_null() {
                log::debug!(
                    "column {}: all {} rows null, skipping quantile",
                    index,
                    column.len()
                );
                return Ok(Scalar::null());
            }

            dispatch_numeric!(column.dtype(), T => {
                column_quantile::<R, C, T>(
                    client,
                    column,
                    quantile,
                    interpolation,
                    is_sorted,
                    order,
                    null_order,
                )
            }, "quantile")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantile() {
        assert_eq!(clamp_quantile(-0.5).unwrap(), 0.0);
        assert_eq!(clamp_quantile(0.3).unwrap(), 0.3);
        assert_eq!(clamp_quantile(f64::INFINITY).unwrap(), 1.0);
        assert!(matches!(
            clamp_quantile(f64::NAN),
            Err(Error::InvalidArgument { arg: "quantile", .. })
        ));
    }
}

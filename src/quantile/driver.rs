//! Per-column quantile driver

use super::{Interpolation, QuantileIndex, Scalar, ValidWindow, valid_window};
use crate::column::{Column, NullOrder, Order, Table};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::{ExtremaOps, Extremum, SortingOps};
use crate::runtime::{ElementAccess, HostTransfer, Permuted, Runtime, RuntimeClient};

/// How one column's quantile is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPlan {
    /// No valid rows: the result is invalid
    AllNull,
    /// One row: the result is that row, whatever the quantile
    SingleElement,
    /// Unsorted column at quantile 0 or 1: extrema reduction, no sort
    Boundary(Extremum),
    /// Interior quantile of an unsorted column: sort, then select
    NeedsSort,
    /// Caller asserted the column is sorted: select directly
    AlreadySorted,
}

impl ColumnPlan {
    /// Choose the plan for a column of `size` rows.
    ///
    /// `quantile` must already be clamped. On an unsorted column, 0 selects
    /// the minimum and 1 the maximum; every quantile strictly between needs
    /// a sorted view.
    pub fn select(size: usize, null_count: usize, quantile: f64, is_sorted: bool) -> Self {
        if size <= null_count {
            ColumnPlan::AllNull
        } else if size == 1 {
            ColumnPlan::SingleElement
        } else if is_sorted {
            ColumnPlan::AlreadySorted
        } else if quantile <= 0.0 {
            ColumnPlan::Boundary(Extremum::Min)
        } else if quantile >= 1.0 {
            ColumnPlan::Boundary(Extremum::Max)
        } else {
            ColumnPlan::NeedsSort
        }
    }
}

/// Quantile of one numeric column whose elements are `T`.
pub(crate) fn column_quantile<R, C, T>(
    client: &C,
    column: &Column<R>,
    quantile: f64,
    interpolation: Interpolation,
    is_sorted: bool,
    order: Order,
    null_order: NullOrder,
) -> Result<Scalar>
where
    R: Runtime<Client = C>,
    C: RuntimeClient<R> + SortingOps<R> + ExtremaOps<R>,
    T: Element,
{
    let plan = ColumnPlan::select(column.len(), column.null_count(), quantile, is_sorted);
    log::trace!(
        "quantile {} of {} column ({} rows, {} null): {:?}",
        quantile,
        column.dtype(),
        column.len(),
        column.null_count(),
        plan
    );

    let values = HostTransfer::<R, T>::new(client, column.data())?;
    let window = valid_window(column.len(), column.null_count(), null_order);

    let value = match plan {
        ColumnPlan::AllNull => return Ok(Scalar::null()),
        ColumnPlan::SingleElement => values.element_f64(0)?,
        ColumnPlan::Boundary(extremum) => {
            let row = client.extremum_index(column, extremum, order, null_order)?;
            values.element_f64(row)?
        }
        ColumnPlan::AlreadySorted => select::<T, _>(&values, window, quantile, interpolation)?,
        ColumnPlan::NeedsSort => {
            let table = Table::from_column(column.clone());
            let permutation = client.sorted_order(&table, &[order], &[null_order])?;
            let rows = HostTransfer::<R, i64>::new(client, &permutation)?;
            select::<T, _>(&Permuted::new(values, rows), window, quantile, interpolation)?
        }
    };

    Ok(Scalar::valid(value))
}

/// Pick the quantile out of the valid window of a sorted view.
///
/// Only the elements the interpolation needs are read.
pub(crate) fn select<T, A>(
    sorted: &A,
    window: ValidWindow,
    quantile: f64,
    interpolation: Interpolation,
) -> Result<f64>
where
    T: Element,
    A: ElementAccess<T>,
{
    if window.count == 1 {
        return sorted.element_f64(window.offset);
    }

    let index = QuantileIndex::new(window.count, quantile);
    let read = |pos: usize| sorted.element_f64(window.position(pos));

    match interpolation {
        Interpolation::Nearest => read(index.nearest),
        Interpolation::Lower => read(index.lower_bound),
        Interpolation::Higher => read(index.upper_bound),
        Interpolation::Linear | Interpolation::Midpoint => {
            let lower = read(index.lower_bound)?;
            let upper = if index.is_exact() {
                lower
            } else {
                read(index.upper_bound)?
            };
            interpolation
                .interpolate(lower, upper, index.fraction)
                .ok_or_else(|| Error::UnsupportedOperation {
                    op: "interpolate",
                    reason: format!("{} does not combine values", interpolation),
                })
        }
    }
}

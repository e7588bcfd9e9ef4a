//! Extrema operations for CPU runtime

use super::{CpuClient, CpuRuntime, kernels};
use crate::column::{Column, NullOrder, Order};
use crate::error::{Error, Result};
use crate::ops::Extremum;

/// Row position of the minimum or maximum of `column` under `order`
pub fn extremum_index_impl(
    client: &CpuClient,
    column: &Column<CpuRuntime>,
    extremum: Extremum,
    order: Order,
    null_order: NullOrder,
) -> Result<usize> {
    let key = kernels::column_key(column, order, null_order)?;
    kernels::extremum_row(client, key.as_ref(), column.len(), extremum).ok_or_else(|| {
        Error::InvalidArgument {
            arg: "column",
            reason: format!("{} of a column without valid rows", extremum),
        }
    })
}

//! CPU implementation of quantile operations.

use crate::column::{NullOrder, Order, Table};
use crate::error::Result;
use crate::ops::QuantileOps;
use crate::quantile::{Interpolation, Scalar, quantiles_impl};
use crate::runtime::cpu::{CpuClient, CpuRuntime};

/// QuantileOps implementation for CPU runtime.
///
/// Delegates to the generic implementation over `SortingOps` and
/// `ExtremaOps`.
impl QuantileOps<CpuRuntime> for CpuClient {
    fn quantiles(
        &self,
        table: &Table<CpuRuntime>,
        quantile: f64,
        interpolation: Interpolation,
        is_sorted: bool,
        orders: &[Order],
        null_orders: &[NullOrder],
    ) -> Result<Vec<Scalar>> {
        quantiles_impl(
            self,
            table,
            quantile,
            interpolation,
            is_sorted,
            orders,
            null_orders,
        )
    }
}

//! CPU implementation of extrema operations.

use crate::column::{Column, NullOrder, Order};
use crate::error::Result;
use crate::ops::{ExtremaOps, Extremum};
use crate::runtime::cpu::{CpuClient, CpuRuntime};

/// ExtremaOps implementation for CPU runtime.
impl ExtremaOps<CpuRuntime> for CpuClient {
    fn extremum_index(
        &self,
        column: &Column<CpuRuntime>,
        extremum: Extremum,
        order: Order,
        null_order: NullOrder,
    ) -> Result<usize> {
        crate::runtime::cpu::extrema::extremum_index_impl(self, column, extremum, order, null_order)
    }
}

//! CPU implementation of sorting operations.

use crate::column::{NullOrder, Order, Storage, Table};
use crate::error::Result;
use crate::ops::SortingOps;
use crate::runtime::cpu::{CpuClient, CpuRuntime};

/// SortingOps implementation for CPU runtime.
impl SortingOps<CpuRuntime> for CpuClient {
    fn sorted_order(
        &self,
        table: &Table<CpuRuntime>,
        orders: &[Order],
        null_orders: &[NullOrder],
    ) -> Result<Storage<CpuRuntime>> {
        crate::runtime::cpu::sort::sorted_order_impl(self, table, orders, null_orders)
    }

    fn gather(
        &self,
        table: &Table<CpuRuntime>,
        permutation: &Storage<CpuRuntime>,
    ) -> Result<Table<CpuRuntime>> {
        crate::runtime::cpu::sort::gather_impl(self, table, permutation)
    }
}

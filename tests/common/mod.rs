//! Common test utilities
#![allow(dead_code)]

use quantr::column::{Column, NullOrder, Order, Table};
use quantr::ops::QuantileOps;
use quantr::quantile::{Interpolation, Scalar};
use quantr::runtime::Runtime;
use quantr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, ParallelismConfig};

/// Create a CPU client and device for testing
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// CPU client whose bulk kernels go parallel from the first row
pub fn create_parallel_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuClient::with_parallelism(
        device.clone(),
        ParallelismConfig {
            num_threads: Some(4),
            min_len: 1,
        },
    )
    .unwrap();
    (client, device)
}

/// One-column table from nullable values
pub fn nullable_table(values: &[Option<f64>], device: &CpuDevice) -> Table<CpuRuntime> {
    Table::from_column(Column::from_options(values, device).unwrap())
}

/// Quantile of the only column of `table`
pub fn quantile_of(
    client: &CpuClient,
    table: &Table<CpuRuntime>,
    q: f64,
    interpolation: Interpolation,
    is_sorted: bool,
    order: Order,
    null_order: NullOrder,
) -> Scalar {
    let mut result = client
        .quantiles(table, q, interpolation, is_sorted, &[order], &[null_order])
        .unwrap();
    assert_eq!(result.len(), 1);
    result.remove(0)
}

/// Check `|a - b| <= tol`
pub fn approx_eq_f64(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Valid values of a nullable column sorted by `order`, the way the engine sees them
pub fn sorted_valid(values: &[Option<f64>], order: Order) -> Vec<f64> {
    let mut valid: Vec<f64> = values.iter().flatten().copied().collect();
    valid.sort_by(|a, b| a.total_cmp(b));
    if order == Order::Descending {
        valid.reverse();
    }
    valid
}

//! Sorting and gather operations for CPU runtime

use super::kernels::{self, storage_bytes, storage_slice};
use super::{CpuClient, CpuRuntime};
use crate::column::{Bitmap, Column, NullOrder, Order, Storage, Table};
use crate::dtype::{DType, dispatch_numeric};
use crate::error::{Error, Result};
use crate::runtime::RuntimeClient;

/// Stable sort permutation over every column of `table`
pub fn sorted_order_impl(
    client: &CpuClient,
    table: &Table<CpuRuntime>,
    orders: &[Order],
    null_orders: &[NullOrder],
) -> Result<Storage<CpuRuntime>> {
    let comparator = kernels::row_comparator(table, orders, null_orders)?;
    log::debug!(
        "cpu: sorting {} rows by {} key(s)",
        table.num_rows(),
        table.num_columns()
    );
    let permutation = kernels::stable_order(client, &comparator, table.num_rows());
    Storage::from_slice_in(&permutation, client.allocator(), client.device())
}

/// Reorder the rows of `table` by `permutation`
pub fn gather_impl(
    client: &CpuClient,
    table: &Table<CpuRuntime>,
    permutation: &Storage<CpuRuntime>,
) -> Result<Table<CpuRuntime>> {
    if permutation.dtype() != DType::I64 {
        return Err(Error::InvalidArgument {
            arg: "permutation",
            reason: format!("expected I64 row positions, got {}", permutation.dtype()),
        });
    }

    // SAFETY: dtype checked above; the permutation is not written while read.
    let positions = unsafe { storage_slice::<i64>(permutation) };
    let num_rows = table.num_rows();
    let rows = positions
        .iter()
        .map(|&row| match usize::try_from(row) {
            Ok(row) if row < num_rows => Ok(row),
            _ => Err(Error::IndexOutOfBounds {
                index: row.max(0) as usize,
                size: num_rows,
            }),
        })
        .collect::<Result<Vec<usize>>>()?;

    let columns = table
        .columns()
        .iter()
        .map(|column| gather_column(client, column, &rows))
        .collect::<Result<Vec<_>>>()?;
    Table::new(columns)
}

fn gather_column(
    client: &CpuClient,
    column: &Column<CpuRuntime>,
    rows: &[usize],
) -> Result<Column<CpuRuntime>> {
    let allocator = client.allocator();
    let device = client.device();

    // SAFETY: column buffers hold `len` elements of the column dtype.
    let data = match column.dtype() {
        DType::Bool => {
            let bytes = unsafe { storage_bytes(column.data()) };
            let gathered = kernels::gather_values(bytes, rows);
            Storage::from_bytes_in(&gathered, DType::Bool, allocator, device)?
        }
        dtype => dispatch_numeric!(dtype, T => {
            let values = unsafe { storage_slice::<T>(column.data()) };
            Storage::from_slice_in(&kernels::gather_values(values, rows), allocator, device)?
        }, "gather"),
    };

    let (validity, null_count) = match column.validity() {
        Some(bitmap) => {
            let bits = unsafe { storage_bytes(bitmap.storage()) };
            let (gathered, null_count) = kernels::gather_validity(bits, rows);
            let storage = Storage::from_bytes_in(&gathered, DType::U8, allocator, device)?;
            (Some(Bitmap::from_storage(storage, rows.len())), null_count)
        }
        None => (None, 0),
    };

    Ok(Column::from_parts(
        column.dtype(),
        rows.len(),
        data,
        validity,
        null_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuDevice;
    use crate::runtime::{Allocator, Runtime};

    #[test]
    fn test_sorted_order_and_gather() {
        let device = CpuDevice::new();
        let client = CpuRuntime::default_client(&device);
        let values = Column::<CpuRuntime>::from_options(
            &[Some(3i32), None, Some(1), Some(2)],
            &device,
        )
        .unwrap();
        let flags = Column::<CpuRuntime>::from_bools(&[true, false, false, true], &device).unwrap();
        let table = Table::new(vec![values.clone(), flags]).unwrap();

        let keys = Table::from_column(values);
        let permutation =
            sorted_order_impl(&client, &keys, &[Order::Ascending], &[NullOrder::Before]).unwrap();
        assert_eq!(permutation.to_vec::<i64>().unwrap(), vec![1, 2, 3, 0]);

        let sorted = gather_impl(&client, &table, &permutation).unwrap();
        let first = sorted.column(0).unwrap();
        assert_eq!(first.null_count(), 1);
        assert_eq!(
            first.to_options::<i32>().unwrap(),
            vec![None, Some(1), Some(2), Some(3)]
        );
        assert_eq!(
            sorted.column(1).unwrap().data().to_vec::<u8>().unwrap(),
            vec![0, 0, 1, 1]
        );
    }

    #[test]
    fn test_gather_rejects_bad_permutations() {
        let device = CpuDevice::new();
        let client = CpuRuntime::default_client(&device);
        let table = Table::from_column(Column::<CpuRuntime>::from_slice(&[1u8, 2], &device).unwrap());

        let out_of_range = Storage::<CpuRuntime>::from_slice(&[0i64, 2], &device).unwrap();
        assert!(matches!(
            gather_impl(&client, &table, &out_of_range),
            Err(Error::IndexOutOfBounds { index: 2, size: 2 })
        ));

        let wrong_type = Storage::<CpuRuntime>::from_slice(&[0i32, 1], &device).unwrap();
        assert!(matches!(
            gather_impl(&client, &table, &wrong_type),
            Err(Error::InvalidArgument { arg: "permutation", .. })
        ));
    }

    #[test]
    fn test_transient_buffers_return_to_allocator() {
        let device = CpuDevice::new();
        let client = CpuRuntime::default_client(&device);
        let table =
            Table::from_column(Column::<CpuRuntime>::from_slice(&[5.0f64, 4.0, 6.0], &device).unwrap());
        {
            let permutation =
                sorted_order_impl(&client, &table, &[Order::Descending], &[NullOrder::After])
                    .unwrap();
            let sorted = gather_impl(&client, &table, &permutation).unwrap();
            assert_eq!(sorted.column(0).unwrap().to_vec::<f64>().unwrap(), vec![6.0, 5.0, 4.0]);
            assert_eq!(client.allocator().allocated_bytes(), 48);
        }
        assert_eq!(client.allocator().allocated_bytes(), 0);
    }
}

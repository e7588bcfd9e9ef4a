//! Row comparators over in-place column views

use super::{storage_bytes, storage_slice};
use crate::column::{Column, NullOrder, Order, Table, bit_is_set};
use crate::dtype::{Element, dispatch_numeric};
use crate::error::{Error, Result};
use crate::runtime::InPlace;
use crate::runtime::cpu::CpuRuntime;
use std::cmp::Ordering;

/// Ordering of rows by one key column
pub trait RowOrdering: Sync {
    /// Compare two rows, nulls placed according to the key's null order
    fn compare(&self, lhs: usize, rhs: usize) -> Ordering;

    /// Returns true if the key is non-null at `row`
    fn is_valid(&self, row: usize) -> bool;
}

/// One typed key column read in place
struct ColumnKey<'a, T> {
    values: InPlace<'a, T>,
    validity: Option<&'a [u8]>,
    order: Order,
    null_order: NullOrder,
}

impl<T: Element> RowOrdering for ColumnKey<'_, T> {
    #[inline]
    fn compare(&self, lhs: usize, rhs: usize) -> Ordering {
        match (self.is_valid(lhs), self.is_valid(rhs)) {
            (true, true) => {
                let ordering = self.values.get(lhs).total_cmp(&self.values.get(rhs));
                match self.order {
                    Order::Ascending => ordering,
                    Order::Descending => ordering.reverse(),
                }
            }
            (false, false) => Ordering::Equal,
            (false, true) => match self.null_order {
                NullOrder::Before => Ordering::Less,
                NullOrder::After => Ordering::Greater,
            },
            (true, false) => match self.null_order {
                NullOrder::Before => Ordering::Greater,
                NullOrder::After => Ordering::Less,
            },
        }
    }

    #[inline]
    fn is_valid(&self, row: usize) -> bool {
        self.validity.is_none_or(|bits| bit_is_set(bits, row))
    }
}

/// Build the in-place key for one column.
///
/// Fails with `UnsupportedDType` for non-numeric columns.
pub fn column_key<'a>(
    column: &'a Column<CpuRuntime>,
    order: Order,
    null_order: NullOrder,
) -> Result<Box<dyn RowOrdering + 'a>> {
    // SAFETY: column buffers are immutable after construction and hold
    // `len` elements of the column dtype.
    let validity = column
        .validity()
        .map(|bitmap| unsafe { storage_bytes(bitmap.storage()) });

    let key: Box<dyn RowOrdering + 'a> = dispatch_numeric!(column.dtype(), T => {
        let values = unsafe { storage_slice::<T>(column.data()) };
        Box::new(ColumnKey {
            values: InPlace::new(values),
            validity,
            order,
            null_order,
        }) as Box<dyn RowOrdering + 'a>
    }, "compare");
    Ok(key)
}

/// Lexicographic comparator over several key columns
pub struct RowComparator<'a> {
    keys: Vec<Box<dyn RowOrdering + 'a>>,
}

impl<'a> RowComparator<'a> {
    /// Comparator from already built keys, most significant first
    pub fn new(keys: Vec<Box<dyn RowOrdering + 'a>>) -> Self {
        Self { keys }
    }

    /// Compare two rows key by key
    #[inline]
    pub fn compare(&self, lhs: usize, rhs: usize) -> Ordering {
        for key in &self.keys {
            match key.compare(lhs, rhs) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

/// Build a comparator over every column of `table`.
///
/// `orders` and `null_orders` must have one entry per column.
pub fn row_comparator<'a>(
    table: &'a Table<CpuRuntime>,
    orders: &[Order],
    null_orders: &[NullOrder],
) -> Result<RowComparator<'a>> {
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

    let keys = table
        .columns()
        .iter()
        .zip(orders.iter().zip(null_orders))
        .map(|(column, (&order, &null_order))| column_key(column, order, null_order))
        .collect::<Result<Vec<_>>>()?;
    Ok(RowComparator::new(keys))
}

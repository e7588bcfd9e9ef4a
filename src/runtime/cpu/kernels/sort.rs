//! Stable multi-key sort and gather kernels

use super::compare::RowComparator;
use crate::column::{bit_is_set, pack_validity};
use crate::runtime::cpu::CpuClient;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Stable sort permutation of `num_rows` rows under `comparator`.
///
/// Rows that compare equal keep their original relative order.
pub fn stable_order(client: &CpuClient, comparator: &RowComparator<'_>, num_rows: usize) -> Vec<i64> {
    let mut rows: Vec<usize> = (0..num_rows).collect();

    #[cfg(feature = "rayon")]
    {
        if num_rows >= client.rayon_min_len() {
            // par_sort_by is a stable merge sort
            client.install_parallelism(|| {
                rows.par_sort_by(|&lhs, &rhs| comparator.compare(lhs, rhs));
            });
            return rows.into_iter().map(|row| row as i64).collect();
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    rows.sort_by(|&lhs, &rhs| comparator.compare(lhs, rhs));
    rows.into_iter().map(|row| row as i64).collect()
}

/// Gather `src[rows[i]]` for every `i`.
///
/// Callers validate that every row is in range.
pub fn gather_values<T: Copy>(src: &[T], rows: &[usize]) -> Vec<T> {
    rows.iter().map(|&row| src[row]).collect()
}

/// Gather validity bits, returning the packed bytes and the new null count
pub fn gather_validity(bits: &[u8], rows: &[usize]) -> (Vec<u8>, usize) {
    let flags: Vec<bool> = rows.iter().map(|&row| bit_is_set(bits, row)).collect();
    pack_validity(&flags)
}

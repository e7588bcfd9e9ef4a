//! Extrema reduction kernel

use super::compare::RowOrdering;
use crate::ops::Extremum;
use crate::runtime::cpu::CpuClient;
use std::cmp::Ordering;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Pick the winner of two rows.
///
/// Null rows always lose; among equal keys MIN keeps the lower row and MAX
/// the higher one, which are the rows a stable sort would place at the two
/// ends of the valid window. This is a selection over a total order, so the
/// reduction is associative and commutative.
#[inline]
fn winner(key: &dyn RowOrdering, extremum: Extremum, lhs: usize, rhs: usize) -> usize {
    // Null placement is ignored here. Callers want the first or last element
    // of the valid window, so ranking nulls by placement would make MIN return
    // a null row under `NullOrder::Before` (and MAX under `After`).
    match (key.is_valid(lhs), key.is_valid(rhs)) {
        (true, false) => return lhs,
        (false, true) => return rhs,
        (false, false) => return lhs.min(rhs),
        (true, true) => {}
    }

    match (extremum, key.compare(lhs, rhs)) {
        (Extremum::Min, Ordering::Less) | (Extremum::Max, Ordering::Greater) => lhs,
        (Extremum::Min, Ordering::Greater) | (Extremum::Max, Ordering::Less) => rhs,
        (Extremum::Min, Ordering::Equal) => lhs.min(rhs),
        (Extremum::Max, Ordering::Equal) => lhs.max(rhs),
    }
}

/// Row position of the minimum or maximum over `[0, num_rows)`.
///
/// Returns `None` when the column has no valid row.
pub fn extremum_row(
    client: &CpuClient,
    key: &dyn RowOrdering,
    num_rows: usize,
    extremum: Extremum,
) -> Option<usize> {
    #[cfg(feature = "rayon")]
    let found = {
        let min_len = client.rayon_min_len();
        client.install_parallelism(|| {
            (0..num_rows)
                .into_par_iter()
                .with_min_len(min_len)
                .reduce_with(|lhs, rhs| winner(key, extremum, lhs, rhs))
        })
    };

    #[cfg(not(feature = "rayon"))]
    let found = {
        let _ = client;
        (0..num_rows).reduce(|lhs, rhs| winner(key, extremum, lhs, rhs))
    };

    found.filter(|&row| key.is_valid(row))
}

//! CPU kernel implementations
//!
//! This module provides the low-level kernels behind the CPU sorting, gather,
//! and extrema operations. Kernels read column memory in place.

pub mod compare;
pub mod extrema;
pub mod sort;

pub use compare::{column_key, row_comparator};
pub use extrema::extremum_row;
pub use sort::{gather_validity, gather_values, stable_order};

use crate::column::Storage;
use crate::dtype::Element;
use crate::runtime::cpu::CpuRuntime;

/// View a CPU storage as a typed slice.
///
/// # Safety
///
/// `storage` must hold `storage.len()` initialized elements of type `T`, and
/// the buffer must not be written while the slice is alive.
#[inline]
pub(crate) unsafe fn storage_slice<T: Element>(storage: &Storage<CpuRuntime>) -> &[T] {
    debug_assert_eq!(storage.dtype().size_in_bytes(), std::mem::size_of::<T>());
    if storage.is_empty() {
        return &[];
    }
    unsafe { std::slice::from_raw_parts(storage.ptr() as *const T, storage.len()) }
}

/// View a CPU storage as raw bytes.
///
/// # Safety
///
/// Same requirements as [`storage_slice`].
#[inline]
pub(crate) unsafe fn storage_bytes(storage: &Storage<CpuRuntime>) -> &[u8] {
    if storage.is_empty() {
        return &[];
    }
    unsafe { std::slice::from_raw_parts(storage.ptr() as *const u8, storage.size_in_bytes()) }
}

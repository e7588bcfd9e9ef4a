//! CPU runtime implementation
//!
//! The CPU runtime uses standard heap allocation and provides the reference
//! implementation of the bulk operations the quantile engine consumes:
//! stable multi-key sorting, gathering, and extrema reduction.
//!
//! # Parallelism
//!
//! With the `rayon` feature, sorting and extrema reduction run on rayon. The
//! client's [`ParallelismConfig`] selects a dedicated pool and the minimum
//! chunk length handed to each task.

mod client;
mod device;
pub(crate) mod extrema;
pub(crate) mod kernels;
mod runtime;
pub(crate) mod sort;

pub use client::{CpuAllocator, CpuClient, ParallelismConfig};
pub use device::CpuDevice;
pub use runtime::CpuRuntime;

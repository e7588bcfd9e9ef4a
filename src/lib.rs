//! # quantr
//!
//! **Quantile selection over columnar tables, written once against pluggable compute runtimes.**
//!
//! quantr computes one quantile per column of a table: medians, percentiles,
//! or any fraction in between, with five interpolation methods, per-column
//! sort direction and null placement, and an optional "already sorted" fast
//! path. Boundary quantiles (0 and 1) skip the sort entirely and use a
//! parallel extrema reduction.
//!
//! ## Features
//!
//! - **Columns and tables**: typed, nullable columns in runtime memory
//! - **Interpolation**: linear, midpoint, lower, higher, nearest
//! - **Null handling**: nulls sort first or last; all-null columns yield an invalid result
//! - **Multiple dtypes**: f64, f32, f16, bf16, signed and unsigned integers
//!
//! ## Quick Start
//!
//! ```rust
//! use quantr::prelude::*;
//!
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device);
//!
//! let column = Column::<CpuRuntime>::from_options(&[Some(3.0f64), None, Some(1.0), Some(4.0)], &device)?;
//! let table = Table::from_column(column);
//!
//! let medians = client.medians(&table, false, &[Order::Ascending], &[NullOrder::After])?;
//! assert_eq!(medians[0].to_option(), Some(3.0));
//! # Ok::<(), quantr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU backend exports in the prelude
//! - `rayon` (default): Multi-threaded sorting and extrema reduction
//! - `f16`: Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod column;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod quantile;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::column::{Column, NullOrder, Order, Table};
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::ops::{ExtremaOps, Extremum, QuantileOps, SortingOps};
    pub use crate::quantile::{Interpolation, Scalar};
    pub use crate::runtime::{Device, Runtime, RuntimeClient};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, ParallelismConfig};
}

/// Default runtime
pub type DefaultRuntime = runtime::cpu::CpuRuntime;

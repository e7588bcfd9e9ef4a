//! Column operations
//!
//! This module defines the operation traits the quantile engine is written
//! against, and their CPU implementations.
//!
//! # Design
//!
//! Operations are defined as traits that are implemented by the runtime
//! client. This gives operations access to the device and the allocator for
//! creating transient buffers.
//!
//! ```text
//! RuntimeClient<R>
//!   ├── implements SortingOps<R>   (sorted_order, gather)
//!   ├── implements ExtremaOps<R>   (extremum_index)
//!   └── implements QuantileOps<R>  (quantiles, percentiles, medians)
//! ```
//!
//! `SortingOps` and `ExtremaOps` are the bulk primitives a backend provides.
//! `QuantileOps` is a composite: backends delegate to the generic
//! implementation in [`crate::quantile`], so every backend shares one
//! selection algorithm.

pub(crate) mod cpu;
mod traits;

pub use traits::{ExtremaOps, Extremum, QuantileOps, SortingOps};

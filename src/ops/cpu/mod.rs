//! CPU implementation of column operations.
//!
//! Each operation type has its own module.

pub mod extrema;
pub mod quantile;
pub mod sorting;

//! Operation traits for column operations.
//!
//! Implementations are in the backend-specific modules.

mod extrema;
mod quantile;
mod sorting;

pub use extrema::{ExtremaOps, Extremum};
pub use quantile::QuantileOps;
pub use sorting::SortingOps;

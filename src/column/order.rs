//! Per-column ordering configuration

use std::fmt;

/// Sort direction of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

/// Placement of null rows relative to valid rows, independent of `Order`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullOrder {
    /// Nulls form a prefix before all valid rows
    Before,
    /// Nulls form a suffix after all valid rows
    #[default]
    After,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => f.write_str("ascending"),
            Order::Descending => f.write_str("descending"),
        }
    }
}

impl fmt::Display for NullOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NullOrder::Before => f.write_str("nulls-before"),
            NullOrder::After => f.write_str("nulls-after"),
        }
    }
}

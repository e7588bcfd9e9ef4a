//! Error types for quantr

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using quantr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quantr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Column dtype cannot take part in the requested operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Operation mode outside the supported set
    #[error("Unsupported operation '{op}': {reason}")]
    UnsupportedOperation {
        /// The operation name
        op: &'static str,
        /// Why it is not supported
        reason: String,
    },

    /// Per-column argument vector does not match the column count
    #[error("Length mismatch for '{arg}': expected {expected}, got {got}")]
    LengthMismatch {
        /// The argument name
        arg: &'static str,
        /// Expected length (number of columns)
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Columns of a table disagree on row count
    #[error("Shape mismatch: expected {expected} rows, got {got}")]
    ShapeMismatch {
        /// Expected row count
        expected: usize,
        /// Actual row count
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for buffer of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the buffer
        size: usize,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create a length mismatch error for a per-column argument
    pub fn length_mismatch(arg: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch { arg, expected, got }
    }
}

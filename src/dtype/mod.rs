//! Data type system for quantr columns
//!
//! This module provides the `DType` enum naming every element type a column
//! can carry, the `Element` trait connecting Rust types to it, and the
//! `dispatch_numeric!` macro that turns a runtime tag into a typed code path.

mod dispatch;
mod element;

pub(crate) use dispatch::dispatch_numeric;
pub use element::Element;

use std::fmt;

/// Element types a column can carry
///
/// Numeric types participate in quantile computation; `Bool` and `Utf8` are
/// representable so tables can hold them, but every numeric operation rejects
/// them with `Error::UnsupportedDType`.
///
/// # Discriminant Values (Serialization Stability)
///
/// - Floats: 0-9 (F64=0, F32=1, F16=2, BF16=3)
/// - Signed ints: 10-19 (I64=10, I32=11, I16=12, I8=13)
/// - Unsigned ints: 20-29 (U64=20, U32=21, U16=22, U8=23)
/// - Bool: 30
/// - Utf8: 50
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 16-bit floating point (IEEE 754)
    F16 = 2,
    /// 16-bit brain floating point
    BF16 = 3,

    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 16-bit signed integer
    I16 = 12,
    /// 8-bit signed integer
    I8 = 13,

    /// 64-bit unsigned integer
    U64 = 20,
    /// 32-bit unsigned integer
    U32 = 21,
    /// 16-bit unsigned integer
    U16 = 22,
    /// 8-bit unsigned integer
    U8 = 23,

    /// Boolean type, one byte per row
    Bool = 30,

    /// Variable-length UTF-8 strings, stored as i64 offsets plus a byte buffer
    Utf8 = 50,
}

impl DType {
    /// Size of one row of the primary data buffer in bytes
    ///
    /// For `Utf8` this is the width of one offset entry.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 | Self::U64 | Self::Utf8 => 8,
            Self::F32 | Self::I32 | Self::U32 => 4,
            Self::F16 | Self::BF16 | Self::I16 | Self::U16 => 2,
            Self::I8 | Self::U8 | Self::Bool => 1,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32 | Self::F16 | Self::BF16)
    }

    /// Returns true if this is a signed integer type
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32 | Self::I16 | Self::I8)
    }

    /// Returns true if this is an unsigned integer type
    #[inline]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U64 | Self::U32 | Self::U16 | Self::U8)
    }

    /// Returns true if this is any integer type (signed or unsigned)
    #[inline]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Returns true if quantiles can be computed over this type
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.is_float() || self.is_int()
    }

    /// Short name used in error messages and `Display`
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::U64 => "u64",
            Self::U32 => "u32",
            Self::U16 => "u16",
            Self::U8 => "u8",
            Self::Bool => "bool",
            Self::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_sizes() {
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::BF16.size_in_bytes(), 2);
        assert_eq!(DType::U8.size_in_bytes(), 1);
        assert_eq!(DType::Bool.size_in_bytes(), 1);
        assert_eq!(DType::Utf8.size_in_bytes(), 8);
    }

    #[test]
    fn test_dtype_categories() {
        assert!(DType::F16.is_numeric());
        assert!(DType::U16.is_numeric());
        assert!(DType::I8.is_signed_int());
        assert!(!DType::Bool.is_numeric());
        assert!(!DType::Utf8.is_numeric());
        assert_eq!(DType::I32.to_string(), "i32");
    }
}

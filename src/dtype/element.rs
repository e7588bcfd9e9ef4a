//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::Pod;
use std::cmp::Ordering;

/// Trait for types that can be stored in a numeric column
///
/// This trait connects Rust's type system to quantr's runtime dtype system.
/// It's implemented for every numeric type a `DType` can name.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod` - Buffers move between host and device as raw bytes (bytemuck)
/// - `PartialOrd` - Base ordering; `total_cmp` extends it over NaN
pub trait Element: Copy + Send + Sync + Pod + PartialOrd + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for interpolation and result assembly
    fn to_f64(self) -> f64;

    /// Total ordering used by every comparator in the crate.
    ///
    /// Unordered values (NaN) sort after every ordered value and compare
    /// equal to each other, which keeps sorting and reductions well defined.
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        match self.partial_cmp(other) {
            Some(ordering) => ordering,
            None => {
                #[allow(clippy::eq_op)]
                let lhs_unordered = self != self;
                #[allow(clippy::eq_op)]
                let rhs_unordered = other != other;
                lhs_unordered.cmp(&rhs_unordered)
            }
        }
    }
}

macro_rules! impl_element_primitive {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_element_primitive! {
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
}

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn to_f64(self) -> f64 {
        self.to_f64()
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn to_f64(self) -> f64 {
        self.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cmp_orders_nan_last() {
        assert_eq!(Element::total_cmp(&1.0f64, &2.0), Ordering::Less);
        assert_eq!(Element::total_cmp(&f64::NAN, &1.0e300), Ordering::Greater);
        assert_eq!(Element::total_cmp(&1.0f32, &f32::NAN), Ordering::Less);
        assert_eq!(Element::total_cmp(&f64::NAN, &-f64::NAN), Ordering::Equal);
        assert_eq!(Element::total_cmp(&3u8, &3u8), Ordering::Equal);
    }
}

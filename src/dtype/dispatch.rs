//! Runtime dtype to static type dispatch

/// Dispatch on a runtime dtype to a block specialized for the matching `Element`.
///
/// Usage: `dispatch_numeric!(dtype, T => { code using T }, "op_name")`
///
/// Every numeric dtype binds `T` and evaluates the block. F16 and BF16 bind
/// `half::f16`/`half::bf16` when the "f16" feature is enabled. Every other
/// dtype, including `Bool` and `Utf8`, returns `UnsupportedDType` from the
/// enclosing function.
macro_rules! dispatch_numeric {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            #[cfg(feature = "f16")]
            $crate::dtype::DType::F16 => {
                type $T = half::f16;
                $body
            }
            #[cfg(feature = "f16")]
            $crate::dtype::DType::BF16 => {
                type $T = half::bf16;
                $body
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::I16 => {
                type $T = i16;
                $body
            }
            $crate::dtype::DType::I8 => {
                type $T = i8;
                $body
            }
            $crate::dtype::DType::U64 => {
                type $T = u64;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
            $crate::dtype::DType::U16 => {
                type $T = u16;
                $body
            }
            $crate::dtype::DType::U8 => {
                type $T = u8;
                $body
            }
            other => {
                return Err($crate::error::Error::UnsupportedDType {
                    dtype: other,
                    op: $error_op,
                });
            }
        }
    };
}

pub(crate) use dispatch_numeric;

#[cfg(test)]
mod tests {
    use crate::dtype::{DType, Element};
    use crate::error::{Error, Result};

    fn width_of(dtype: DType) -> Result<usize> {
        let width = dispatch_numeric!(dtype, T => {
            assert_eq!(<T as Element>::DTYPE, dtype);
            std::mem::size_of::<T>()
        }, "width_of");
        Ok(width)
    }

    #[test]
    fn test_dispatch_binds_matching_element() {
        assert_eq!(width_of(DType::F64).unwrap(), 8);
        assert_eq!(width_of(DType::I16).unwrap(), 2);
        assert_eq!(width_of(DType::U8).unwrap(), 1);
    }

    #[test]
    fn test_dispatch_rejects_non_numeric() {
        for dtype in [DType::Bool, DType::Utf8] {
            match width_of(dtype) {
                Err(Error::UnsupportedDType { dtype: got, op }) => {
                    assert_eq!(got, dtype);
                    assert_eq!(op, "width_of");
                }
                other => panic!("expected UnsupportedDType, got {other:?}"),
            }
        }
    }
}

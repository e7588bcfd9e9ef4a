//! Columns and tables
//!
//! A [`Column`] is a typed, optionally nullable sequence of rows in runtime
//! memory. A [`Table`] is an ordered set of columns with equal row counts.
//! Both are cheap to clone: buffers are shared through [`Storage`].

mod bitmap;
mod order;
mod storage;
mod table;

pub use bitmap::Bitmap;
pub(crate) use bitmap::{bit_is_set, pack_validity};
pub use order::{NullOrder, Order};
pub use storage::Storage;
pub use table::Table;

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// A typed column of rows in runtime memory
pub struct Column<R: Runtime> {
    dtype: DType,
    len: usize,
    /// Row values; i64 offsets (`len + 1` entries) for Utf8
    data: Storage<R>,
    /// UTF-8 bytes for Utf8 columns
    chars: Option<Storage<R>>,
    validity: Option<Bitmap<R>>,
    null_count: usize,
}

impl<R: Runtime> Column<R> {
    /// Create a non-nullable column from a slice
    pub fn from_slice<T: Element>(data: &[T], device: &R::Device) -> Result<Self> {
        Ok(Self {
            dtype: T::DTYPE,
            len: data.len(),
            data: Storage::from_slice(data, device)?,
            chars: None,
            validity: None,
            null_count: 0,
        })
    }

    /// Create a nullable column; `None` entries become null rows
    pub fn from_options<T: Element>(data: &[Option<T>], device: &R::Device) -> Result<Self> {
        let values: Vec<T> = data
            .iter()
            .map(|v| v.unwrap_or_else(<T as bytemuck::Zeroable>::zeroed))
            .collect();
        let validity: Vec<bool> = data.iter().map(Option::is_some).collect();
        let (bitmap, null_count) = Bitmap::from_validity(&validity, device)?;
        Ok(Self {
            dtype: T::DTYPE,
            len: data.len(),
            data: Storage::from_slice(&values, device)?,
            chars: None,
            validity: Some(bitmap),
            null_count,
        })
    }

    /// Create a boolean column (one byte per row)
    pub fn from_bools(data: &[bool], device: &R::Device) -> Result<Self> {
        let bytes: Vec<u8> = data.iter().map(|&b| u8::from(b)).collect();
        Ok(Self {
            dtype: DType::Bool,
            len: data.len(),
            data: Storage::from_bytes(&bytes, DType::Bool, device)?,
            chars: None,
            validity: None,
            null_count: 0,
        })
    }

    /// Create a UTF-8 string column
    pub fn from_strs(data: &[&str], device: &R::Device) -> Result<Self> {
        let mut offsets = Vec::with_capacity(data.len() + 1);
        let mut chars = Vec::new();
        offsets.push(0i64);
        for s in data {
            chars.extend_from_slice(s.as_bytes());
            offsets.push(chars.len() as i64);
        }
        Ok(Self {
            dtype: DType::Utf8,
            len: data.len(),
            data: Storage::from_slice(&offsets, device)?,
            chars: Some(Storage::from_bytes(&chars, DType::U8, device)?),
            validity: None,
            null_count: 0,
        })
    }

    /// Assemble a column from buffers already in runtime memory
    pub(crate) fn from_parts(
        dtype: DType,
        len: usize,
        data: Storage<R>,
        validity: Option<Bitmap<R>>,
        null_count: usize,
    ) -> Self {
        Self {
            dtype,
            len,
            data,
            chars: None,
            validity,
            null_count,
        }
    }

    /// Element type of the column
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Number of rows, null rows included
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the column has no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of null rows
    #[inline]
    pub fn null_count(&self) -> usize {
        self.null_count
    }

    /// Number of non-null rows
    #[inline]
    pub fn valid_count(&self) -> usize {
        self.len - self.null_count
    }

    /// Returns true if any row is null
    #[inline]
    pub fn has_nulls(&self) -> bool {
        self.null_count > 0
    }

    /// Returns true if no row holds a value (vacuously true for empty columns)
    #[inline]
    pub fn is_all_null(&self) -> bool {
        self.valid_count() == 0
    }

    /// Row value buffer
    #[inline]
    pub fn data(&self) -> &Storage<R> {
        &self.data
    }

    /// Validity bitmap, if the column is nullable
    #[inline]
    pub fn validity(&self) -> Option<&Bitmap<R>> {
        self.validity.as_ref()
    }

    /// Copy the row values to the host, nulls included as stored
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if self.dtype != T::DTYPE {
            return Err(Error::unsupported_dtype(self.dtype, "to_vec"));
        }
        self.data.to_vec()
    }

    /// Copy the rows to the host with nulls as `None`
    pub fn to_options<T: Element>(&self) -> Result<Vec<Option<T>>> {
        let values = self.to_vec::<T>()?;
        let validity = match &self.validity {
            Some(bitmap) => bitmap.to_vec()?,
            None => vec![true; self.len],
        };
        Ok(values
            .into_iter()
            .zip(validity)
            .map(|(value, valid)| valid.then_some(value))
            .collect())
    }

    /// Copy a Utf8 column to the host
    pub fn to_strings(&self) -> Result<Vec<String>> {
        let chars = match (&self.chars, self.dtype) {
            (Some(chars), DType::Utf8) => chars.to_vec::<u8>()?,
            _ => return Err(Error::unsupported_dtype(self.dtype, "to_strings")),
        };
        let offsets = self.data.to_vec::<i64>()?;
        offsets
            .windows(2)
            .map(|w| {
                let (start, end) = (w[0] as usize, w[1] as usize);
                String::from_utf8(chars[start..end].to_vec())
                    .map_err(|e| Error::Internal(format!("invalid utf8 in column: {e}")))
            })
            .collect()
    }
}

impl<R: Runtime> Clone for Column<R> {
    /// Shares every buffer (zero-copy)
    fn clone(&self) -> Self {
        Self {
            dtype: self.dtype,
            len: self.len,
            data: self.data.clone(),
            chars: self.chars.clone(),
            validity: self.validity.clone(),
            null_count: self.null_count,
        }
    }
}

impl<R: Runtime> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("dtype", &self.dtype)
            .field("len", &self.len)
            .field("null_count", &self.null_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_from_options_counts_nulls() {
        let device = CpuDevice::new();
        let column =
            Column::<CpuRuntime>::from_options(&[Some(1.5f32), None, Some(-2.0), None], &device)
                .unwrap();
        assert_eq!(column.dtype(), DType::F32);
        assert_eq!(column.len(), 4);
        assert_eq!(column.null_count(), 2);
        assert_eq!(column.valid_count(), 2);
        assert!(column.has_nulls());
        assert!(!column.is_all_null());
        assert_eq!(
            column.to_options::<f32>().unwrap(),
            vec![Some(1.5), None, Some(-2.0), None]
        );
    }

    #[test]
    fn test_all_null_and_empty() {
        let device = CpuDevice::new();
        let nulls = Column::<CpuRuntime>::from_options::<i32>(&[None, None], &device).unwrap();
        assert!(nulls.is_all_null());

        let empty = Column::<CpuRuntime>::from_slice::<u16>(&[], &device).unwrap();
        assert!(empty.is_empty());
        assert!(empty.is_all_null());
    }

    #[test]
    fn test_non_numeric_columns() {
        let device = CpuDevice::new();
        let flags = Column::<CpuRuntime>::from_bools(&[true, false, true], &device).unwrap();
        assert_eq!(flags.dtype(), DType::Bool);
        assert_eq!(flags.len(), 3);

        let words = Column::<CpuRuntime>::from_strs(&["ab", "", "cde"], &device).unwrap();
        assert_eq!(words.dtype(), DType::Utf8);
        assert_eq!(words.len(), 3);
        assert_eq!(words.to_strings().unwrap(), vec!["ab", "", "cde"]);
        assert!(words.to_vec::<i64>().is_err());
    }
}

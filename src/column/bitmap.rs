//! Validity bitmaps
//!
//! One bit per row, least-significant bit first within each byte. A set bit
//! marks a valid row.

use super::Storage;
use crate::dtype::DType;
use crate::error::Result;
use crate::runtime::Runtime;

/// Packed validity bits living in device memory
pub struct Bitmap<R: Runtime> {
    bits: Storage<R>,
    len: usize,
}

impl<R: Runtime> Bitmap<R> {
    /// Pack per-row validity flags and upload them.
    ///
    /// Returns the bitmap together with the number of invalid rows.
    pub fn from_validity(validity: &[bool], device: &R::Device) -> Result<(Self, usize)> {
        let (bytes, null_count) = pack_validity(validity);
        let bits = Storage::from_bytes(&bytes, DType::U8, device)?;
        Ok((
            Self {
                bits,
                len: validity.len(),
            },
            null_count,
        ))
    }

    /// Wrap already packed bits
    pub(crate) fn from_storage(bits: Storage<R>, len: usize) -> Self {
        Self { bits, len }
    }

    /// Number of rows covered
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the bitmap covers no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes in device memory
    #[inline]
    pub fn storage(&self) -> &Storage<R> {
        &self.bits
    }

    /// Copy the bitmap to the host and unpack it
    pub fn to_vec(&self) -> Result<Vec<bool>> {
        let bytes = self.bits.to_vec::<u8>()?;
        Ok((0..self.len).map(|row| bit_is_set(&bytes, row)).collect())
    }
}

impl<R: Runtime> Clone for Bitmap<R> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            len: self.len,
        }
    }
}

impl<R: Runtime> std::fmt::Debug for Bitmap<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap").field("len", &self.len).finish()
    }
}

/// Number of bytes needed for `rows` validity bits
#[inline]
pub(crate) fn bitmap_bytes(rows: usize) -> usize {
    rows.div_ceil(8)
}

/// Test one validity bit
#[inline]
pub(crate) fn bit_is_set(bits: &[u8], row: usize) -> bool {
    bits[row / 8] & (1 << (row % 8)) != 0
}

/// Pack validity flags, returning the bytes and the count of cleared bits
pub(crate) fn pack_validity(validity: &[bool]) -> (Vec<u8>, usize) {
    let mut bytes = vec![0u8; bitmap_bytes(validity.len())];
    let mut null_count = 0;
    for (row, &valid) in validity.iter().enumerate() {
        if valid {
            bytes[row / 8] |= 1 << (row % 8);
        } else {
            null_count += 1;
        }
    }
    (bytes, null_count)
}

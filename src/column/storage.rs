//! Storage: device memory management with Arc-based sharing

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::{Allocator, Runtime};
use std::sync::Arc;

/// Storage for column buffers on a device
///
/// Storage wraps device memory with reference counting, so tables can share
/// column buffers without copying.
///
/// Memory is automatically deallocated when the last reference is dropped,
/// through the allocator it came from.
pub struct Storage<R: Runtime> {
    inner: Arc<StorageInner<R>>,
}

enum Owner<R: Runtime> {
    /// Allocated with `Runtime::allocate`
    Runtime,
    /// Allocated through a client's allocator (transient buffers)
    Allocator(R::Allocator),
}

struct StorageInner<R: Runtime> {
    /// Raw device pointer (accelerator address or CPU ptr cast to u64)
    ptr: u64,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
    /// Device where memory is allocated
    device: R::Device,
    owner: Owner<R>,
}

impl<R: Runtime> Storage<R> {
    /// Create storage from existing data with inferred dtype
    ///
    /// Copies `data` to the device. The dtype is inferred from the Element type.
    pub fn from_slice<T: Element>(data: &[T], device: &R::Device) -> Result<Self> {
        Self::from_bytes(bytemuck::cast_slice(data), T::DTYPE, device)
    }

    /// Create storage from raw bytes with explicit dtype
    ///
    /// Use this when you have raw bytes and know the dtype.
    pub fn from_bytes(data: &[u8], dtype: DType, device: &R::Device) -> Result<Self> {
        let len = checked_len(data.len(), dtype)?;
        let ptr = R::allocate(data.len(), device)?;
        let storage = Self::wrap(ptr, len, dtype, device, Owner::Runtime);
        R::copy_to_device(data, ptr, device)?;
        Ok(storage)
    }

    /// Copy `data` into a buffer allocated through `allocator`
    ///
    /// The buffer is returned to the same allocator when dropped.
    pub fn from_slice_in<T: Element>(
        data: &[T],
        allocator: &R::Allocator,
        device: &R::Device,
    ) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let ptr = allocator.allocate(bytes.len())?;
        let storage = Self::wrap(
            ptr,
            data.len(),
            T::DTYPE,
            device,
            Owner::Allocator(allocator.clone()),
        );
        R::copy_to_device(bytes, ptr, device)?;
        Ok(storage)
    }

    /// Byte-level variant of [`Storage::from_slice_in`]
    pub fn from_bytes_in(
        data: &[u8],
        dtype: DType,
        allocator: &R::Allocator,
        device: &R::Device,
    ) -> Result<Self> {
        let len = checked_len(data.len(), dtype)?;
        let ptr = allocator.allocate(data.len())?;
        let storage = Self::wrap(ptr, len, dtype, device, Owner::Allocator(allocator.clone()));
        R::copy_to_device(data, ptr, device)?;
        Ok(storage)
    }

    fn wrap(ptr: u64, len: usize, dtype: DType, device: &R::Device, owner: Owner<R>) -> Self {
        Self {
            inner: Arc::new(StorageInner {
                ptr,
                len,
                dtype,
                device: device.clone(),
                owner,
            }),
        }
    }

    /// Get the raw device pointer
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.inner.ptr
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Get the device
    #[inline]
    pub fn device(&self) -> &R::Device {
        &self.inner.device
    }

    /// Get size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    /// Check if this is the only reference
    #[inline]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }

    /// Copy the whole buffer from device to host
    pub fn to_vec<T: bytemuck::Pod>(&self) -> Result<Vec<T>> {
        if std::mem::size_of::<T>() != self.inner.dtype.size_in_bytes() {
            return Err(Error::Internal(format!(
                "cannot read {} buffer as {}-byte elements",
                self.inner.dtype,
                std::mem::size_of::<T>()
            )));
        }
        // Allocate with correct alignment for T, then cast to bytes for copy.
        let mut result = vec![<T as bytemuck::Zeroable>::zeroed(); self.inner.len];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut result);
        R::copy_from_device(self.inner.ptr, bytes, &self.inner.device)?;
        Ok(result)
    }
}

fn checked_len(bytes: usize, dtype: DType) -> Result<usize> {
    let width = dtype.size_in_bytes();
    if bytes % width != 0 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{} bytes is not a whole number of {} elements", bytes, dtype),
        });
    }
    Ok(bytes / width)
}

impl<R: Runtime> Clone for Storage<R> {
    /// Clone increments the reference count (zero-copy)
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Runtime> std::fmt::Debug for Storage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("ptr", &format_args!("{:#x}", self.inner.ptr))
            .field("len", &self.inner.len)
            .field("dtype", &self.inner.dtype)
            .finish()
    }
}

impl<R: Runtime> Drop for StorageInner<R> {
    fn drop(&mut self) {
        if self.ptr == 0 {
            return;
        }
        let size_bytes = self.len * self.dtype.size_in_bytes();
        match &self.owner {
            Owner::Runtime => R::deallocate(self.ptr, size_bytes, &self.device),
            Owner::Allocator(allocator) => allocator.deallocate(self.ptr, size_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeClient;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_from_slice_roundtrip() {
        let device = CpuDevice::new();
        let storage = Storage::<CpuRuntime>::from_slice(&[1i32, -2, 3], &device).unwrap();
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.dtype(), DType::I32);
        assert_eq!(storage.size_in_bytes(), 12);
        assert_eq!(storage.to_vec::<i32>().unwrap(), vec![1, -2, 3]);
    }

    #[test]
    fn test_from_bytes_rejects_partial_elements() {
        let device = CpuDevice::new();
        assert!(Storage::<CpuRuntime>::from_bytes(&[0u8; 5], DType::F32, &device).is_err());
    }

    #[test]
    fn test_allocator_storage_released_on_last_drop() {
        let device = CpuDevice::new();
        let client = CpuRuntime::default_client(&device);
        let storage =
            Storage::<CpuRuntime>::from_slice_in(&[1u64, 2, 3, 4], client.allocator(), &device)
                .unwrap();
        let shared = storage.clone();
        assert!(!storage.is_unique());
        assert_eq!(client.allocator().allocated_bytes(), 32);

        drop(storage);
        assert_eq!(client.allocator().allocated_bytes(), 32);
        drop(shared);
        assert_eq!(client.allocator().allocated_bytes(), 0);
    }
}

//! CPU runtime implementation

use super::client::{CpuClient, cpu_alloc, cpu_dealloc};
use super::device::CpuDevice;
use crate::error::Result;
use crate::runtime::Runtime;

/// CPU compute runtime
///
/// This is the default runtime that works on any platform.
/// Memory is allocated on the heap using the system allocator.
#[derive(Clone, Debug, Default)]
pub struct CpuRuntime;

impl Runtime for CpuRuntime {
    type Device = CpuDevice;
    type Client = CpuClient;
    type Allocator = super::CpuAllocator;

    fn name() -> &'static str {
        "cpu"
    }

    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64> {
        cpu_alloc(size_bytes, device)
    }

    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device) {
        cpu_dealloc(ptr, size_bytes, device)
    }

    fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, src.len());
        }
        Ok(())
    }

    fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        CpuClient::new(device.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_bytes() {
        let device = CpuRuntime::default_device();
        let src = [1u8, 2, 3, 4, 5];
        let ptr = CpuRuntime::allocate(src.len(), &device).unwrap();
        CpuRuntime::copy_to_device(&src, ptr, &device).unwrap();

        let mut dst = [0u8; 5];
        CpuRuntime::copy_from_device(ptr, &mut dst, &device).unwrap();
        assert_eq!(dst, src);

        CpuRuntime::deallocate(ptr, src.len(), &device);
    }

    #[test]
    fn test_zero_sized_allocation_is_null() {
        let device = CpuRuntime::default_device();
        assert_eq!(CpuRuntime::allocate(0, &device).unwrap(), 0);
        CpuRuntime::deallocate(0, 0, &device);
    }
}

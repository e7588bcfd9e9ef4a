//! Memory allocator traits and default implementation
//!
//! The allocator is the memory resource a client threads through every call.
//! Transient buffers (sort permutations, gathered columns) are allocated
//! through it and returned to it when dropped.

use crate::error::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memory allocator trait for runtime backends
pub trait Allocator: Clone + Send + Sync {
    /// Allocate memory of given size
    ///
    /// Returns a device pointer (u64) that can be used for operations.
    fn allocate(&self, size_bytes: usize) -> Result<u64>;

    /// Deallocate memory
    fn deallocate(&self, ptr: u64, size_bytes: usize);

    /// Get the total live bytes handed out by this allocator
    fn allocated_bytes(&self) -> usize {
        0 // Default: tracking not supported
    }
}

/// Default allocator that delegates to runtime allocation functions
///
/// Clones share one live-byte counter, so a client and every buffer it
/// allocated report the same total.
#[derive(Clone, Debug)]
pub struct DefaultAllocator<D> {
    device: D,
    allocate_fn: fn(usize, &D) -> Result<u64>,
    deallocate_fn: fn(u64, usize, &D),
    live_bytes: Arc<AtomicUsize>,
}

impl<D: Clone + Send + Sync> DefaultAllocator<D> {
    /// Create a new default allocator
    pub fn new(
        device: D,
        allocate_fn: fn(usize, &D) -> Result<u64>,
        deallocate_fn: fn(u64, usize, &D),
    ) -> Self {
        Self {
            device,
            allocate_fn,
            deallocate_fn,
            live_bytes: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<D: Clone + Send + Sync> Allocator for DefaultAllocator<D> {
    fn allocate(&self, size_bytes: usize) -> Result<u64> {
        let ptr = (self.allocate_fn)(size_bytes, &self.device)?;
        if ptr != 0 {
            self.live_bytes.fetch_add(size_bytes, Ordering::Relaxed);
        }
        Ok(ptr)
    }

    fn deallocate(&self, ptr: u64, size_bytes: usize) {
        if ptr == 0 {
            return;
        }
        (self.deallocate_fn)(ptr, size_bytes, &self.device);
        self.live_bytes.fetch_sub(size_bytes, Ordering::Relaxed);
    }

    fn allocated_bytes(&self) -> usize {
        self.live_bytes.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_alloc(size: usize, _device: &()) -> Result<u64> {
        Ok(if size == 0 { 0 } else { 0x1000 })
    }

    fn fake_dealloc(_ptr: u64, _size: usize, _device: &()) {}

    #[test]
    fn test_default_allocator_trait_bounds() {
        fn assert_allocator<A: Allocator>() {}
        assert_allocator::<DefaultAllocator<()>>();
    }

    #[test]
    fn test_live_bytes_shared_between_clones() {
        let allocator = DefaultAllocator::new((), fake_alloc, fake_dealloc);
        let clone = allocator.clone();

        let ptr = allocator.allocate(64).unwrap();
        assert_eq!(clone.allocated_bytes(), 64);

        clone.deallocate(ptr, 64);
        assert_eq!(allocator.allocated_bytes(), 0);

        let empty = allocator.allocate(0).unwrap();
        assert_eq!(empty, 0);
        assert_eq!(allocator.allocated_bytes(), 0);
    }
}

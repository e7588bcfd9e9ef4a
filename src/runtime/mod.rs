//! Runtime backends for column computation
//!
//! This module defines the `Runtime` trait and provides the CPU
//! implementation. Column buffers live in runtime memory; host code only
//! sees them through explicit copies.
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity)
//! ├── Device (identifies a specific accelerator/CPU)
//! ├── Client (dispatches operations, owns the ordered stream)
//! └── Allocator (memory resource for transient buffers)
//! ```

mod access;
mod allocator;

pub mod cpu;

pub use access::{ElementAccess, HostTransfer, InPlace, Permuted};
pub use allocator::{Allocator, DefaultAllocator};

use crate::error::Result;

/// Core trait for compute backends
///
/// `Runtime` abstracts over different compute devices. It uses static
/// dispatch via generics so the quantile engine is written once.
///
/// # Associated Types
///
/// - `Device`: Identifies a specific compute unit
/// - `Client`: Handles operation dispatch and synchronization
/// - `Allocator`: Memory resource used for transient buffers
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: Device;

    /// Client for dispatching operations
    type Client: RuntimeClient<Self>;

    /// Memory allocator type
    type Allocator: Allocator;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Allocate device memory
    ///
    /// Returns a device pointer (u64). Zero-sized requests return the null pointer.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64>;

    /// Deallocate device memory
    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device);

    /// Copy data from host to device
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()>;

    /// Copy data from device to host
    ///
    /// Blocks until the bytes are visible to the host.
    fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()>;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;
}

/// Trait for device identification
pub trait Device: Clone + Send + Sync + 'static {
    /// Unique identifier for this device
    fn id(&self) -> usize;

    /// Check if two devices are the same
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Human-readable name
    fn name(&self) -> String {
        format!("Device({})", self.id())
    }
}

/// Trait for runtime clients that handle operation dispatch
///
/// A client owns one ordered execution stream: operations it issues run in
/// program order relative to each other.
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Synchronize: wait for all pending operations to complete
    fn synchronize(&self);

    /// Get the allocator for this client
    fn allocator(&self) -> &R::Allocator;
}

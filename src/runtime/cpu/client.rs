//! CPU client and allocator implementation

use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::error::{Error, Result};
use crate::runtime::{DefaultAllocator, RuntimeClient};
use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc};
#[cfg(feature = "rayon")]
use std::sync::Arc;

const CPU_ALIGN: usize = 64; // AVX-512 alignment

/// Parallelism settings for CPU bulk kernels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Run kernels on a dedicated pool with this many threads.
    /// `None` uses the global rayon pool.
    pub num_threads: Option<usize>,
    /// Minimum number of rows handed to one parallel task
    pub min_len: usize,
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            min_len: 4096,
        }
    }
}

/// CPU client for operation dispatch
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    allocator: CpuAllocator,
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a new CPU client
    pub fn new(device: CpuDevice) -> Self {
        let allocator = create_cpu_allocator(device.clone());
        Self {
            device,
            allocator,
            parallelism: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Create a CPU client with explicit parallelism settings
    ///
    /// Fails if a dedicated thread pool was requested and cannot be built.
    pub fn with_parallelism(device: CpuDevice, config: ParallelismConfig) -> Result<Self> {
        if config.min_len == 0 {
            return Err(Error::InvalidArgument {
                arg: "min_len",
                reason: "minimum chunk length must be positive".to_string(),
            });
        }

        #[cfg(feature = "rayon")]
        let pool = match config.num_threads {
            Some(threads) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::Internal(format!("rayon pool: {e}")))?,
            )),
            None => None,
        };

        let mut client = Self::new(device);
        client.parallelism = config;
        #[cfg(feature = "rayon")]
        {
            client.pool = pool;
        }
        Ok(client)
    }

    /// Parallelism settings of this client
    pub fn parallelism(&self) -> &ParallelismConfig {
        &self.parallelism
    }

    /// Minimum rows per rayon task
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    #[inline]
    pub(crate) fn rayon_min_len(&self) -> usize {
        self.parallelism.min_len
    }

    /// Run `f` inside the client's dedicated pool, if one is configured
    #[cfg(feature = "rayon")]
    pub(crate) fn install_parallelism<F, T>(&self, f: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) {
        // CPU operations are synchronous, nothing to do
    }

    fn allocator(&self) -> &CpuAllocator {
        &self.allocator
    }
}

/// CPU-specific allocator type alias
pub type CpuAllocator = DefaultAllocator<CpuDevice>;

/// Create a CPU allocator for the given device
fn create_cpu_allocator(device: CpuDevice) -> CpuAllocator {
    DefaultAllocator::new(device, cpu_alloc, cpu_dealloc)
}

pub(super) fn cpu_alloc(size: usize, _device: &CpuDevice) -> Result<u64> {
    if size == 0 {
        return Ok(0);
    }
    let layout = AllocLayout::from_size_align(size, CPU_ALIGN)
        .map_err(|_| Error::OutOfMemory { size })?;
    let ptr = unsafe { alloc_zeroed(layout) };
    if ptr.is_null() {
        return Err(Error::OutOfMemory { size });
    }
    Ok(ptr as u64)
}

pub(super) fn cpu_dealloc(ptr: u64, size: usize, _device: &CpuDevice) {
    if ptr == 0 || size == 0 {
        return;
    }
    // Layout was valid when the block was allocated with the same size.
    if let Ok(layout) = AllocLayout::from_size_align(size, CPU_ALIGN) {
        unsafe {
            dealloc(ptr as *mut u8, layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Allocator;

    #[test]
    fn test_client_allocator_tracks_bytes() {
        let client = CpuClient::new(CpuDevice::new());
        let ptr = client.allocator().allocate(128).unwrap();
        assert_ne!(ptr, 0);
        assert_eq!(ptr % CPU_ALIGN as u64, 0);
        assert_eq!(client.allocator().allocated_bytes(), 128);
        client.allocator().deallocate(ptr, 128);
        assert_eq!(client.allocator().allocated_bytes(), 0);
    }

    #[test]
    fn test_with_parallelism_validates_min_len() {
        let config = ParallelismConfig {
            num_threads: None,
            min_len: 0,
        };
        assert!(CpuClient::with_parallelism(CpuDevice::new(), config).is_err());
    }

    #[test]
    fn test_with_parallelism_keeps_config() {
        let config = ParallelismConfig {
            num_threads: Some(2),
            min_len: 16,
        };
        let client = CpuClient::with_parallelism(CpuDevice::new(), config.clone()).unwrap();
        assert_eq!(client.parallelism(), &config);
        assert_eq!(client.rayon_min_len(), 16);
    }
}

//! Single-element access over runtime memory
//!
//! Index arithmetic runs in two places: inside bulk kernels, where column
//! memory is directly addressable, and in host-side orchestration, where every
//! read is an explicit one-element transfer. Both sides go through
//! [`ElementAccess`] so the selection logic is written once.
//!
//! ```text
//! InPlace       kernel context     direct dereference of a typed slice
//! HostTransfer  host context       synchronize, then copy exactly one element
//! Permuted      either             reads row positions from a permutation first
//! ```

use crate::column::Storage;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::runtime::{Runtime, RuntimeClient};
use std::marker::PhantomData;

/// Read one element at a logical position.
pub trait ElementAccess<T: Element> {
    /// Number of addressable positions
    fn len(&self) -> usize;

    /// Returns true if there are no addressable positions
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `pos`
    fn element(&self, pos: usize) -> Result<T>;

    /// Read the element at `pos` converted to the f64 result type
    #[inline]
    fn element_f64(&self, pos: usize) -> Result<f64> {
        self.element(pos).map(Element::to_f64)
    }
}

/// Direct access to a typed slice that is addressable from the current context.
#[derive(Debug, Clone, Copy)]
pub struct InPlace<'a, T> {
    data: &'a [T],
}

impl<'a, T: Element> InPlace<'a, T> {
    /// Wrap a typed slice
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Infallible read for kernels that already know `pos` is in range
    #[inline]
    pub fn get(&self, pos: usize) -> T {
        self.data[pos]
    }
}

impl<T: Element> ElementAccess<T> for InPlace<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn element(&self, pos: usize) -> Result<T> {
        self.data
            .get(pos)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index: pos,
                size: self.data.len(),
            })
    }
}

/// Host-side access to a buffer in runtime memory.
///
/// Every read synchronizes the client's stream and then transfers exactly one
/// element, so it doubles as a barrier for all work issued before it.
pub struct HostTransfer<'a, R: Runtime, T> {
    client: &'a R::Client,
    storage: &'a Storage<R>,
    _marker: PhantomData<T>,
}

impl<'a, R: Runtime, T: Element> HostTransfer<'a, R, T> {
    /// Create a host accessor, checking that the buffer holds `T` elements
    pub fn new(client: &'a R::Client, storage: &'a Storage<R>) -> Result<Self> {
        if storage.dtype() != T::DTYPE {
            return Err(Error::Internal(format!(
                "host transfer of {} elements from a {} buffer",
                T::DTYPE,
                storage.dtype()
            )));
        }
        Ok(Self {
            client,
            storage,
            _marker: PhantomData,
        })
    }
}

impl<R: Runtime, T: Element> ElementAccess<T> for HostTransfer<'_, R, T> {
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn element(&self, pos: usize) -> Result<T> {
        if pos >= self.storage.len() {
            return Err(Error::IndexOutOfBounds {
                index: pos,
                size: self.storage.len(),
            });
        }

        self.client.synchronize();

        let mut value = <T as bytemuck::Zeroable>::zeroed();
        let src = self.storage.ptr() + (pos * std::mem::size_of::<T>()) as u64;
        R::copy_from_device(
            src,
            bytemuck::bytes_of_mut(&mut value),
            self.storage.device(),
        )?;

        log::trace!("{}: transferred element {} to host", R::name(), pos);
        Ok(value)
    }
}

/// Access through a row permutation: position `i` reads row `permutation[i]`.
pub struct Permuted<V, P> {
    values: V,
    permutation: P,
}

impl<V, P> Permuted<V, P> {
    /// Compose a value accessor with a permutation accessor
    pub fn new(values: V, permutation: P) -> Self {
        Self {
            values,
            permutation,
        }
    }
}

impl<T, V, P> ElementAccess<T> for Permuted<V, P>
where
    T: Element,
    V: ElementAccess<T>,
    P: ElementAccess<i64>,
{
    fn len(&self) -> usize {
        self.permutation.len()
    }

    fn element(&self, pos: usize) -> Result<T> {
        let row = self.permutation.element(pos)?;
        let row = usize::try_from(row).map_err(|_| {
            Error::Internal(format!("negative row {} in permutation at {}", row, pos))
        })?;
        self.values.element(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_in_place_reads_and_bounds() {
        let data = [3i32, 1, 4];
        let acc = InPlace::new(&data);
        assert_eq!(acc.get(2), 4);
        assert_eq!(acc.element_f64(1).unwrap(), 1.0);
        assert!(matches!(
            acc.element(3),
            Err(Error::IndexOutOfBounds { index: 3, size: 3 })
        ));
    }

    #[test]
    fn test_host_transfer_matches_in_place() {
        let device = CpuDevice::new();
        let client = CpuRuntime::default_client(&device);
        let data = [2.5f64, -1.0, 7.25, 0.0];
        let storage = Storage::<CpuRuntime>::from_slice(&data, &device).unwrap();

        let host = HostTransfer::<CpuRuntime, f64>::new(&client, &storage).unwrap();
        let in_place = InPlace::new(&data);
        for pos in 0..data.len() {
            assert_eq!(host.element(pos).unwrap(), in_place.element(pos).unwrap());
        }
        assert!(host.element(4).is_err());
    }

    #[test]
    fn test_host_transfer_rejects_wrong_element_type() {
        let device = CpuDevice::new();
        let client = CpuRuntime::default_client(&device);
        let storage = Storage::<CpuRuntime>::from_slice(&[1u16, 2], &device).unwrap();
        assert!(HostTransfer::<CpuRuntime, f32>::new(&client, &storage).is_err());
    }

    #[test]
    fn test_permuted_reads_through_permutation() {
        let values = [10u8, 20, 30];
        let order = [2i64, 0, 1];
        let acc = Permuted::new(InPlace::new(&values), InPlace::new(&order));
        assert_eq!(ElementAccess::<u8>::len(&acc), 3);
        assert_eq!(ElementAccess::<u8>::element(&acc, 0).unwrap(), 30);
        assert_eq!(ElementAccess::<u8>::element(&acc, 2).unwrap(), 20);

        let bad = [-1i64];
        let acc = Permuted::new(InPlace::new(&values), InPlace::new(&bad));
        assert!(ElementAccess::<u8>::element(&acc, 0).is_err());
    }
}

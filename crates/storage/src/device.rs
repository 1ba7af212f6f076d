//! Execution-device memory, modelled as an allocate/transfer capability.
//!
//! The bitmap and column code only ever talks to [`Device`], so it runs
//! unchanged against host memory in tests.

use std::fmt;
use std::ops::{Deref, DerefMut};

use aligned_vec::{AVec, ConstAlign};
use devcol_common::DeviceConfig;
use devcol_common::error::{Error, Result};
use log::{debug, warn};

/// Alignment of every buffer handed out by [`HostDevice`], in bytes.
pub const BUFFER_ALIGN: usize = 64;

pub trait Device {
    fn name(&self) -> &str;

    /// Allocates `len` elements. The initial contents are unspecified.
    fn allocate<T: Copy + Default>(&self, len: usize) -> Result<DeviceBuffer<T>>;

    fn transfer_to_device<T: Copy>(&self, host: &[T]) -> Result<DeviceBuffer<T>>;

    fn copy_to_host<T: Copy>(&self, buffer: &DeviceBuffer<T>) -> Vec<T> {
        buffer.as_slice().to_vec()
    }
}

type HostVec<T> = AVec<T, ConstAlign<BUFFER_ALIGN>>;

/// Contiguous, aligned, fixed-length buffer owned by a device.
pub struct DeviceBuffer<T> {
    data: HostVec<T>,
}

impl<T: Copy> DeviceBuffer<T> {
    /// Fills storage whose capacity was already reserved, so no push reallocates.
    fn from_reserved(mut data: HostVec<T>, values: impl IntoIterator<Item = T>) -> Self {
        for value in values {
            data.push(value);
        }
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn size_in_bytes(&self) -> usize {
        std::mem::size_of_val(self.as_slice())
    }
}

impl<T: Copy> Deref for DeviceBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy> DerefMut for DeviceBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy> Clone for DeviceBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            data: AVec::from_iter(BUFFER_ALIGN, self.as_slice().iter().copied()),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for DeviceBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Copy + PartialEq> PartialEq for DeviceBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Device backed by aligned host memory.
#[derive(Debug, Clone, Default)]
pub struct HostDevice {
    memory_limit: Option<usize>,
}

impl HostDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memory_limit(bytes: usize) -> Self {
        Self {
            memory_limit: Some(bytes),
        }
    }

    pub fn from_config(config: &DeviceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            memory_limit: config.memory_limit_bytes,
        })
    }

    pub fn memory_limit(&self) -> Option<usize> {
        self.memory_limit
    }

    /// Reserves room for `len` elements, reporting both a refusal by the
    /// configured limit and a refusal by the allocator as exhaustion.
    fn reserve<T>(&self, len: usize) -> Result<HostVec<T>> {
        let limit = self.memory_limit.unwrap_or(isize::MAX as usize);
        let requested = len
            .checked_mul(std::mem::size_of::<T>())
            .unwrap_or(usize::MAX);
        if requested > limit {
            warn!(
                "host allocation of {} bytes refused (limit {} bytes)",
                requested, limit
            );
            return Err(Error::resource_exhausted(requested, limit));
        }

        let mut data = HostVec::<T>::new(BUFFER_ALIGN);
        data.try_reserve_exact(len).map_err(|_| {
            warn!("host allocator refused {} bytes", requested);
            Error::resource_exhausted(requested, limit)
        })?;
        debug!("reserved {} elements ({} bytes) on host", len, requested);
        Ok(data)
    }
}

impl Device for HostDevice {
    fn name(&self) -> &str {
        "host"
    }

    fn allocate<T: Copy + Default>(&self, len: usize) -> Result<DeviceBuffer<T>> {
        let data = self.reserve::<T>(len)?;
        Ok(DeviceBuffer::from_reserved(data, std::iter::repeat_n(T::default(), len)))
    }

    fn transfer_to_device<T: Copy>(&self, host: &[T]) -> Result<DeviceBuffer<T>> {
        let data = self.reserve::<T>(host.len())?;
        Ok(DeviceBuffer::from_reserved(data, host.iter().copied()))
    }
}

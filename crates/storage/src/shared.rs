//! Validity bitmap that many threads can write at once.
//!
//! Every storage unit is an atomic, so writers that land in the same unit
//! combine through `fetch_or`/`fetch_and` instead of racing on a plain
//! read-modify-write. No ordering is promised between writers: a read that
//! overlaps in-flight writes to the same unit may observe any prefix of them.
//! Taking the bitmap back with [`SharedValidity::into_bitmap`] needs ownership,
//! which in turn needs every writer to have finished.

use devcol_common::error::Result;

use crate::bitmap::ValidityBitmap;
use crate::chunk::chunk_count;
use crate::device::Device;
use crate::unit::{AtomicUnit, MaskUnit, StorageUnit};

pub struct SharedValidity<U: StorageUnit = MaskUnit> {
    units: Box<[U::Atomic]>,
    len: usize,
}

impl<U: StorageUnit> SharedValidity<U> {
    /// All-null bitmap over `len` elements.
    pub fn new_null(len: usize) -> Result<Self> {
        let unit_count = chunk_count(len, U::BITS)?;
        let units = (0..unit_count).map(|_| U::Atomic::new(U::ZERO)).collect();
        Ok(Self { units, len })
    }

    pub fn from_bitmap(bitmap: &ValidityBitmap<U>) -> Self {
        let units = bitmap
            .storage()
            .iter()
            .map(|unit| U::Atomic::new(*unit))
            .collect();
        Self {
            units,
            len: bitmap.len(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads bit `pos`. Panics if `pos` lies past the storage.
    #[inline]
    pub fn get_bit(&self, pos: usize) -> bool {
        let unit = self.units[pos / U::BITS].load();
        (unit >> (pos % U::BITS)) & U::ONE == U::ONE
    }

    #[inline]
    pub fn set_bit(&self, pos: usize) {
        self.units[pos / U::BITS].fetch_or(U::bit_mask(pos));
    }

    #[inline]
    pub fn clear_bit(&self, pos: usize) {
        self.units[pos / U::BITS].fetch_and(!U::bit_mask(pos));
    }

    pub fn into_bitmap<D: Device>(self, device: &D) -> Result<ValidityBitmap<U>> {
        let host: Vec<U> = self
            .units
            .into_vec()
            .into_iter()
            .map(|unit| unit.into_inner())
            .collect();
        let storage = device.transfer_to_device(&host)?;
        ValidityBitmap::from_storage(storage, self.len)
    }
}

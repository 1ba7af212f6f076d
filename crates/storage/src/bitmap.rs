//! Bit-packed validity bitmaps.
//!
//! Bit `i` lives in unit `i / W` at offset `i % W`, least significant bit
//! first, where `W` is the width of the storage unit. A set bit means the
//! element is valid.
//!
//! Accessors come in two tiers:
//!
//! * [`UncheckedBits`] is the kernel tier. It never compares `pos` against the
//!   bitmap's logical length, so positions in the padding of the last unit are
//!   reachable and positions past the storage panic (or, for the `unsafe`
//!   variants, are undefined behaviour). Callers derive `pos` from an index
//!   that has already been validated.
//! * [`CheckedBits`] is the host tier. Every call is validated against the
//!   logical length and reports [`Error::OutOfRange`].

use devcol_common::error::{Error, Result};
use devcol_common::index::{normalize_slice, slice_len};

use crate::chunk::chunk_count;
use crate::device::{Device, DeviceBuffer};
use crate::unit::{MaskUnit, StorageUnit};

/// Allocates storage able to address every bit in `[0, bit_count)`.
///
/// The initial value of every bit is unspecified.
pub fn make_validity_storage<U, D>(device: &D, bit_count: usize) -> Result<DeviceBuffer<U>>
where
    U: StorageUnit,
    D: Device,
{
    let unit_count = chunk_count(bit_count, U::BITS)?;
    device.allocate(unit_count)
}

/// Unvalidated bit access for the parallel hot path.
pub trait UncheckedBits {
    fn get_bit(&self, pos: usize) -> bool;

    /// Sets bit `pos` to 1, leaving every other bit untouched.
    fn set_bit(&mut self, pos: usize);

    /// Sets bit `pos` to 0, leaving every other bit untouched.
    fn clear_bit(&mut self, pos: usize);

    /// # Safety
    ///
    /// `pos` must be below the number of storage units times their width.
    unsafe fn get_bit_unchecked(&self, pos: usize) -> bool;

    /// # Safety
    ///
    /// `pos` must be below the number of storage units times their width.
    unsafe fn set_bit_unchecked(&mut self, pos: usize);
}

impl<U: StorageUnit> UncheckedBits for [U] {
    #[inline(always)]
    fn get_bit(&self, pos: usize) -> bool {
        (self[pos / U::BITS] >> (pos % U::BITS)) & U::ONE == U::ONE
    }

    #[inline(always)]
    fn set_bit(&mut self, pos: usize) {
        self[pos / U::BITS] |= U::bit_mask(pos);
    }

    #[inline(always)]
    fn clear_bit(&mut self, pos: usize) {
        self[pos / U::BITS] &= !U::bit_mask(pos);
    }

    #[inline(always)]
    unsafe fn get_bit_unchecked(&self, pos: usize) -> bool {
        let unit = unsafe { *self.get_unchecked(pos / U::BITS) };
        (unit >> (pos % U::BITS)) & U::ONE == U::ONE
    }

    #[inline(always)]
    unsafe fn set_bit_unchecked(&mut self, pos: usize) {
        unsafe {
            *self.get_unchecked_mut(pos / U::BITS) |= U::bit_mask(pos);
        }
    }
}

/// Bounds-checked bit access for host-side code.
pub trait CheckedBits {
    fn is_valid(&self, pos: usize) -> Result<bool>;

    fn set_valid(&mut self, pos: usize) -> Result<()>;

    fn set_null(&mut self, pos: usize) -> Result<()>;

    fn is_null(&self, pos: usize) -> Result<bool> {
        self.is_valid(pos).map(|valid| !valid)
    }
}

/// Equality compares the logical bits only; padding past `len` is ignored.
#[derive(Debug, Clone)]
pub struct ValidityBitmap<U: StorageUnit = MaskUnit> {
    storage: DeviceBuffer<U>,
    len: usize,
}

impl<U: StorageUnit> ValidityBitmap<U> {
    /// Bitmap over `len` elements with unspecified contents.
    pub fn allocate<D: Device>(device: &D, len: usize) -> Result<Self> {
        let storage = make_validity_storage(device, len)?;
        Ok(Self { storage, len })
    }

    pub fn new_valid<D: Device>(device: &D, len: usize) -> Result<Self> {
        let mut bitmap = Self::allocate(device, len)?;
        bitmap.fill(true);
        Ok(bitmap)
    }

    pub fn new_null<D: Device>(device: &D, len: usize) -> Result<Self> {
        let mut bitmap = Self::allocate(device, len)?;
        bitmap.fill(false);
        Ok(bitmap)
    }

    pub fn from_bools<D: Device>(device: &D, valid: &[bool]) -> Result<Self> {
        let mut bitmap = Self::new_null(device, valid.len())?;
        for (pos, _) in valid.iter().enumerate().filter(|(_, v)| **v) {
            bitmap.set_bit(pos);
        }
        Ok(bitmap)
    }

    /// Wraps existing storage. Fails if it is too short for `len` bits.
    pub fn from_storage(storage: DeviceBuffer<U>, len: usize) -> Result<Self> {
        let required = chunk_count(len, U::BITS)?;
        if storage.len() < required {
            return Err(Error::invalid_argument(format!(
                "{} bits need {} storage units, got {}",
                len,
                required,
                storage.len()
            )));
        }
        Ok(Self { storage, len })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn unit_bits(&self) -> usize {
        U::BITS
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.storage.len()
    }

    pub fn storage(&self) -> &DeviceBuffer<U> {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut DeviceBuffer<U> {
        &mut self.storage
    }

    pub fn into_storage(self) -> DeviceBuffer<U> {
        self.storage
    }

    pub fn fill(&mut self, valid: bool) {
        let value = if valid { U::MAX } else { U::ZERO };
        self.storage.as_mut_slice().fill(value);
    }

    pub fn count_valid(&self) -> usize {
        let (full, tail) = self.logical_units();
        let count: usize = full.iter().map(|u| u.count_ones()).sum();
        count + tail.map_or(0, |u| u.count_ones())
    }

    pub fn count_null(&self) -> usize {
        self.len - self.count_valid()
    }

    pub fn is_all_valid(&self) -> bool {
        self.count_valid() == self.len
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        let units = self.storage.as_slice();
        (0..self.len).map(move |pos| units.get_bit(pos))
    }

    /// Copies the bits selected by a Python-style `[start:stop]` slice.
    ///
    /// Out-of-range endpoints are clamped and an inverted range yields an
    /// empty bitmap.
    pub fn slice<D: Device>(
        &self,
        device: &D,
        start: Option<i64>,
        stop: Option<i64>,
    ) -> Result<Self> {
        let (start, stop) = normalize_slice(start, stop, self.len as i64);
        let len = slice_len(start, stop);
        let offset = start.max(0) as usize;

        let mut sliced = Self::new_null(device, len)?;
        let source = self.storage.as_slice();
        for pos in 0..len {
            if source.get_bit(offset + pos) {
                sliced.set_bit(pos);
            }
        }
        Ok(sliced)
    }

    /// Units wholly covered by `len`, and the partial last unit with its
    /// padding bits cleared.
    fn logical_units(&self) -> (&[U], Option<U>) {
        let units = self.storage.as_slice();
        let full_units = self.len / U::BITS;
        let remaining_bits = self.len % U::BITS;
        let tail = (remaining_bits > 0).then(|| units[full_units] & !(U::MAX << remaining_bits));
        (&units[..full_units], tail)
    }

    #[inline]
    fn check(&self, pos: usize) -> Result<()> {
        if pos >= self.len {
            return Err(Error::out_of_range(
                i64::try_from(pos).unwrap_or(i64::MAX),
                i64::try_from(self.len).unwrap_or(i64::MAX),
            ));
        }
        Ok(())
    }
}

impl<U: StorageUnit> PartialEq for ValidityBitmap<U> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.logical_units() == other.logical_units()
    }
}

impl<U: StorageUnit> Eq for ValidityBitmap<U> {}

impl<U: StorageUnit> UncheckedBits for ValidityBitmap<U> {
    #[inline(always)]
    fn get_bit(&self, pos: usize) -> bool {
        self.storage.as_slice().get_bit(pos)
    }

    #[inline(always)]
    fn set_bit(&mut self, pos: usize) {
        self.storage.as_mut_slice().set_bit(pos)
    }

    #[inline(always)]
    fn clear_bit(&mut self, pos: usize) {
        self.storage.as_mut_slice().clear_bit(pos)
    }

    #[inline(always)]
    unsafe fn get_bit_unchecked(&self, pos: usize) -> bool {
        unsafe { self.storage.as_slice().get_bit_unchecked(pos) }
    }

    #[inline(always)]
    unsafe fn set_bit_unchecked(&mut self, pos: usize) {
        unsafe { self.storage.as_mut_slice().set_bit_unchecked(pos) }
    }
}

impl<U: StorageUnit> CheckedBits for ValidityBitmap<U> {
    fn is_valid(&self, pos: usize) -> Result<bool> {
        self.check(pos)?;
        Ok(self.get_bit(pos))
    }

    fn set_valid(&mut self, pos: usize) -> Result<()> {
        self.check(pos)?;
        self.set_bit(pos);
        Ok(())
    }

    fn set_null(&mut self, pos: usize) -> Result<()> {
        self.check(pos)?;
        self.clear_bit(pos);
        Ok(())
    }
}

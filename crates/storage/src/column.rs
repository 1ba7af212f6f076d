use devcol_common::error::{Error, Result};
use devcol_common::index::{normalize_index, normalize_slice, slice_len};

use crate::bitmap::{UncheckedBits, ValidityBitmap};
use crate::device::{Device, DeviceBuffer};

/// Fixed-width column whose elements may be null.
///
/// A column without nulls carries no bitmap at all.
#[derive(Debug, Clone, PartialEq)]
pub struct NullableColumn<T: Copy> {
    data: DeviceBuffer<T>,
    validity: Option<ValidityBitmap>,
}

impl<T: Copy + Default> NullableColumn<T> {
    pub fn from_values<D: Device>(device: &D, values: &[T]) -> Result<Self> {
        Ok(Self {
            data: device.transfer_to_device(values)?,
            validity: None,
        })
    }

    pub fn from_options<D: Device>(device: &D, values: &[Option<T>]) -> Result<Self> {
        let host: Vec<T> = values.iter().map(|v| v.unwrap_or_default()).collect();
        let data = device.transfer_to_device(&host)?;

        let validity = if values.iter().all(Option::is_some) {
            None
        } else {
            let mut bitmap = ValidityBitmap::new_null(device, values.len())?;
            for (pos, value) in values.iter().enumerate() {
                if value.is_some() {
                    bitmap.set_bit(pos);
                }
            }
            Some(bitmap)
        };

        Ok(Self { data, validity })
    }

    pub fn with_validity(data: DeviceBuffer<T>, validity: Option<ValidityBitmap>) -> Result<Self> {
        if let Some(bitmap) = validity.as_ref().filter(|b| b.len() != data.len()) {
            return Err(Error::invalid_argument(format!(
                "validity covers {} elements but column has {}",
                bitmap.len(),
                data.len()
            )));
        }
        Ok(Self { data, validity })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &DeviceBuffer<T> {
        &self.data
    }

    pub fn validity(&self) -> Option<&ValidityBitmap> {
        self.validity.as_ref()
    }

    pub fn null_count(&self) -> usize {
        self.validity.as_ref().map_or(0, ValidityBitmap::count_null)
    }

    pub fn has_nulls(&self) -> bool {
        self.null_count() > 0
    }

    /// Element at a possibly negative `index`; `None` when it is null.
    pub fn get(&self, index: i64) -> Result<Option<T>> {
        let pos = normalize_index(index, self.len() as i64, true)? as usize;
        Ok(self.value_at(pos))
    }

    /// Copies the elements selected by a Python-style `[start:stop]` slice.
    pub fn slice<D: Device>(
        &self,
        device: &D,
        start: Option<i64>,
        stop: Option<i64>,
    ) -> Result<Self> {
        let (start, stop) = normalize_slice(start, stop, self.len() as i64);
        let len = slice_len(start, stop);
        let offset = start.max(0) as usize;
        let end = offset + len;

        let data = device.transfer_to_device(&self.data[offset..end])?;
        let validity = match &self.validity {
            Some(bitmap) => Some(bitmap.slice(device, Some(offset as i64), Some(end as i64))?),
            None => None,
        };
        Ok(Self { data, validity })
    }

    pub fn to_options(&self) -> Vec<Option<T>> {
        (0..self.len()).map(|pos| self.value_at(pos)).collect()
    }

    #[inline]
    fn value_at(&self, pos: usize) -> Option<T> {
        if self.validity.as_ref().is_some_and(|b| !b.get_bit(pos)) {
            None
        } else {
            Some(self.data[pos])
        }
    }
}

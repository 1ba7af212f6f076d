use devcol_common::error::{Error, Result};

use crate::device::{Device, DeviceBuffer};

/// Fills a new device buffer of `shape` (row-major) with copies of `scalar`.
pub fn scalar_broadcast_to<T, D>(
    device: &D,
    scalar: T,
    shape: &[usize],
) -> Result<DeviceBuffer<T>>
where
    T: Copy + Default,
    D: Device,
{
    let len = shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| {
            Error::invalid_argument(format!("broadcast shape {:?} overflows", shape))
        })?;
    let mut buffer = device.allocate(len)?;
    buffer.fill(scalar);
    Ok(buffer)
}

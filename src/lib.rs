//! devcol - validity bitmaps and index arithmetic for device-resident columns.

pub use devcol_common::config::DeviceConfig;
pub use devcol_common::error::{Error, Result};
pub use devcol_common::index::{normalize_index, normalize_slice, slice_len};
pub use devcol_common::numeric::{NumericKind, NumericRange, RangeValue, numeric_range};
pub use devcol_storage::{
    CheckedBits, Device, DeviceBuffer, HostDevice, MaskUnit, NullableColumn, SharedValidity,
    StorageUnit, UncheckedBits, ValidityBitmap, chunk_count, make_validity_storage,
    scalar_broadcast_to,
};

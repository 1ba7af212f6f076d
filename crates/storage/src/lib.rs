mod bitmap;
mod broadcast;
mod chunk;
mod column;
mod device;
mod shared;
mod unit;

pub use bitmap::{CheckedBits, UncheckedBits, ValidityBitmap, make_validity_storage};
pub use broadcast::scalar_broadcast_to;
pub use chunk::chunk_count;
pub use column::NullableColumn;
pub use device::{BUFFER_ALIGN, Device, DeviceBuffer, HostDevice};
pub use shared::SharedValidity;
pub use unit::{AtomicUnit, MaskUnit, StorageUnit};

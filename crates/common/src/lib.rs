//! Common types and errors for devcol.

pub mod config;
pub mod error;
pub mod index;
pub mod numeric;

pub use config::DeviceConfig;
pub use error::{Error, Result};
pub use index::{normalize_index, normalize_slice, slice_len};
pub use numeric::{NumericKind, NumericRange, RangeValue, numeric_range};

use devcol_common::error::{Error, Result};

/// Minimum number of `chunk_size`-sized chunks that cover `total` items.
///
/// Fails with [`Error::InvalidArgument`] when `chunk_size` is zero.
#[inline]
pub fn chunk_count(total: usize, chunk_size: usize) -> Result<usize> {
    if chunk_size == 0 {
        return Err(Error::invalid_argument("chunk size must be positive"));
    }
    Ok(total.div_ceil(chunk_size))
}

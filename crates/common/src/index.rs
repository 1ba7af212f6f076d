//! Translation of user-facing indices and slices into bounds over a sequence
//! of known length.
//!
//! Negative positions count from the end, so `-1` addresses the last element.

use log::trace;

use crate::error::{Error, Result};

/// Normalizes a possibly negative `index` against a sequence of `size`
/// elements.
///
/// A negative index is rewritten as `index + size`. When `do_raise` is set,
/// an index that still falls outside `[0, size)` fails with
/// [`Error::OutOfRange`]. Otherwise the result is clamped to at most `size`.
///
/// The clamp only applies to the upper bound: `normalize_index(-15, 10, false)`
/// returns `-5`. Callers that slice with the result must treat such bounds as
/// selecting nothing (see [`slice_len`]).
pub fn normalize_index(index: i64, size: i64, do_raise: bool) -> Result<i64> {
    debug_assert!(size >= 0, "sequence length must be non-negative");

    if !do_raise {
        return Ok(clamp_index(index, size));
    }
    let index = wrap_negative(index, size);
    if !(0..size).contains(&index) {
        trace!("index {} out of range for length {}", index, size);
        return Err(Error::out_of_range(index, size));
    }
    Ok(index)
}

/// Normalizes the endpoints of a slice over a sequence of `size` elements.
///
/// A missing `start` means `0` and a missing `stop` means `size`. Both
/// endpoints are normalized like [`normalize_index`] without raising, so this never
/// fails; the returned range may be inverted or start below zero.
pub fn normalize_slice(start: Option<i64>, stop: Option<i64>, size: i64) -> (i64, i64) {
    let start = start.unwrap_or(0);
    let stop = stop.unwrap_or(size);
    (clamp_index(start, size), clamp_index(stop, size))
}

/// Number of elements selected by a normalized `[start, stop)` range.
///
/// Inverted ranges select nothing and a negative start is read as `0`.
pub fn slice_len(start: i64, stop: i64) -> usize {
    let start = start.max(0);
    if stop <= start {
        0
    } else {
        (stop - start) as usize
    }
}

#[inline]
fn wrap_negative(index: i64, size: i64) -> i64 {
    if index < 0 { index + size } else { index }
}

#[inline]
fn clamp_index(index: i64, size: i64) -> i64 {
    wrap_negative(index, size).min(size)
}

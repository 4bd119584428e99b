//! Python bindings for `zeroscan`.
//!
//! Every function accepts any object exporting the buffer protocol with byte
//! items (`bytes`, `bytearray`, `memoryview`, `mmap`, ...). The buffer is only
//! borrowed for the duration of the call.

mod buffer;
mod error;
mod index;

use std::{num::NonZeroUsize, ops::Range};

use ::zeroscan::checked_signed_range;
use pyo3::prelude::*;

pub use crate::index::Index;
use crate::{
    buffer::with_bytes,
    error::{out_of_range, zero_block_size},
};

/// `length=None` means "to the end of the buffer". An offset outside the
/// buffer is reported with length 0.
fn resolve(
    available: usize,
    Index(offset): Index,
    length: Option<Index>,
) -> PyResult<Range<usize>> {
    let length = match length {
        Some(Index(length)) => length,
        None => {
            let available = i128::try_from(available).unwrap_or(i128::MAX);
            if (0..=available).contains(&offset) {
                available - offset
            } else {
                0
            }
        }
    };
    checked_signed_range(available, offset, length).map_err(out_of_range)
}

/// Positive block sizes too large for `usize` mean "one block".
fn checked_block_size(Index(size): Index) -> PyResult<NonZeroUsize> {
    if size <= 0 {
        return Err(zero_block_size());
    }
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    NonZeroUsize::new(size).ok_or_else(zero_block_size)
}

/// Return True if every byte of `buffer[offset:offset + length]` is zero.
///
/// Raises IndexError if the range does not lie within the buffer.
#[pyfunction]
#[pyo3(signature = (buffer, offset=Index(0), length=None))]
pub fn is_zero(
    py: Python<'_>,
    buffer: &Bound<'_, PyAny>,
    offset: Index,
    length: Option<Index>,
) -> PyResult<bool> {
    with_bytes(py, buffer, |bytes| {
        let range = resolve(bytes.len(), offset, length)?;
        ::zeroscan::is_zero(bytes, range.start, range.len()).map_err(out_of_range)
    })
}

/// Return the index of the first non-zero byte in
/// `buffer[offset:offset + length]`, or None if the range is all zero.
#[pyfunction]
#[pyo3(signature = (buffer, offset=Index(0), length=None))]
pub fn first_nonzero(
    py: Python<'_>,
    buffer: &Bound<'_, PyAny>,
    offset: Index,
    length: Option<Index>,
) -> PyResult<Option<usize>> {
    with_bytes(py, buffer, |bytes| {
        let range = resolve(bytes.len(), offset, length)?;
        ::zeroscan::first_nonzero(bytes, range.start, range.len()).map_err(out_of_range)
    })
}

/// Classify `buffer[offset:offset + length]` in blocks of `block_size` bytes
/// and return `(offset, length, is_zero)` for each run of same-kind blocks.
#[pyfunction]
#[pyo3(signature = (buffer, block_size, offset=Index(0), length=None))]
pub fn zero_runs(
    py: Python<'_>,
    buffer: &Bound<'_, PyAny>,
    block_size: Index,
    offset: Index,
    length: Option<Index>,
) -> PyResult<Vec<(usize, usize, bool)>> {
    let block_size = checked_block_size(block_size)?;
    with_bytes(py, buffer, |bytes| {
        let range = resolve(bytes.len(), offset, length)?;
        let runs = ::zeroscan::runs(bytes, range.start, range.len(), block_size)
            .map_err(out_of_range)?;
        Ok(runs.map(|r| (r.offset, r.len, r.zero)).collect())
    })
}

/// The native `zeroscan` extension module.
#[pymodule]
pub fn zeroscan(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_zero, m)?)?;
    m.add_function(wrap_pyfunction!(first_nonzero, m)?)?;
    m.add_function(wrap_pyfunction!(zero_runs, m)?)?;
    Ok(())
}

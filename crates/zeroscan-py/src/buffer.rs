use std::slice;

use pyo3::{buffer::PyBuffer, exceptions::PyBufferError, prelude::*};

/// Borrow the bytes behind any buffer-protocol object for the duration of
/// `f`.
///
/// The exporter is released when this returns; no reference to its memory
/// outlives the call.
pub(crate) fn with_bytes<R>(
    py: Python<'_>,
    obj: &Bound<'_, PyAny>,
    f: impl FnOnce(&[u8]) -> PyResult<R>,
) -> PyResult<R> {
    let buf = PyBuffer::<u8>::get(obj)?;
    let cells = buf
        .as_slice(py)
        .ok_or_else(|| PyBufferError::new_err("buffer must be C-contiguous"))?;
    // SAFETY: `ReadOnlyCell<u8>` is `repr(transparent)` over `u8`. `buf` pins
    // the exporter's memory until it is dropped after `f` returns, and the GIL
    // is held throughout, so no Python code can resize or write it meanwhile.
    let bytes = unsafe { slice::from_raw_parts(cells.as_ptr().cast::<u8>(), cells.len()) };
    f(bytes)
}

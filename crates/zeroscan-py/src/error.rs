//! `zeroscan` error -> Python exception mapping.

use ::zeroscan::OutOfRange;
use pyo3::{
    exceptions::{PyIndexError, PyValueError},
    PyErr,
};

/// A bad range is the caller indexing past the buffer: `IndexError`.
pub(crate) fn out_of_range(err: OutOfRange) -> PyErr {
    PyIndexError::new_err(err.to_string())
}

pub(crate) fn zero_block_size() -> PyErr {
    PyValueError::new_err("block_size must be a positive integer")
}

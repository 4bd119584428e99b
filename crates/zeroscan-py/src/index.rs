use pyo3::{exceptions::PyOverflowError, prelude::*};

/// A Python `int` used as an offset, length or block size.
///
/// Python ints are unbounded. Values beyond `i128` saturate so they still
/// reach range validation instead of failing in argument conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(pub i128);

impl<'py> FromPyObject<'py> for Index {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        match ob.extract::<i128>() {
            Ok(n) => Ok(Index(n)),
            Err(err) if err.is_instance_of::<PyOverflowError>(ob.py()) => {
                Ok(Index(if ob.gt(0)? { i128::MAX } else { i128::MIN }))
            }
            Err(err) => Err(err),
        }
    }
}

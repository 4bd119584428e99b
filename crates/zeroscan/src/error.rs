use thiserror::Error;

/// A requested range does not lie within the buffer.
///
/// `offset` and `length` are kept exactly as the caller supplied them, which
/// for foreign callers may include negative values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("range at offset {offset} with length {length} is out of bounds for a buffer of {available} bytes")]
pub struct OutOfRange {
    /// Requested start of the range.
    pub offset: i128,
    /// Requested number of bytes.
    pub length: i128,
    /// Size of the buffer the range was checked against.
    pub available: usize,
}

impl OutOfRange {
    pub(crate) fn new(offset: usize, length: usize, available: usize) -> Self {
        Self::signed(widen(offset), widen(length), available)
    }

    pub(crate) fn signed(offset: i128, length: i128, available: usize) -> Self {
        Self {
            offset,
            length,
            available,
        }
    }
}

fn widen(n: usize) -> i128 {
    i128::try_from(n).unwrap_or(i128::MAX)
}

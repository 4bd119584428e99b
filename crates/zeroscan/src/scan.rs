use crate::{OutOfRange, checked_range};

/// Width in bytes of the words compared by [`Strategy::Wide`].
const WORD: usize = 16;

/// Which loop is used to scan a range.
///
/// Both strategies return the same answer for every input; they differ only
/// in how many bytes are inspected per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Linear scan one byte at a time, stopping at the first non-zero byte.
    Bytewise,
    /// Reduce 16-byte words at a time, stopping at the first word containing
    /// a non-zero byte, then finish the tail bytewise.
    #[default]
    Wide,
}

/// Returns `true` if every byte of `buffer[offset..offset + length]` is zero.
///
/// An empty range is vacuously zero.
///
/// # Errors
///
/// Returns [`OutOfRange`] if the range does not lie within `buffer`. No byte
/// is read in that case.
pub fn is_zero(buffer: &[u8], offset: usize, length: usize) -> Result<bool, OutOfRange> {
    is_zero_with(Strategy::default(), buffer, offset, length)
}

/// [`is_zero`] with an explicit scan [`Strategy`].
///
/// # Errors
///
/// Returns [`OutOfRange`] if the range does not lie within `buffer`.
pub fn is_zero_with(
    strategy: Strategy,
    buffer: &[u8],
    offset: usize,
    length: usize,
) -> Result<bool, OutOfRange> {
    let range = checked_range(buffer.len(), offset, length)?;
    let bytes = &buffer[range];
    Ok(match strategy {
        Strategy::Bytewise => bytewise(bytes),
        Strategy::Wide => wide(bytes),
    })
}

/// Returns `true` if every byte of `bytes` is zero.
#[must_use]
pub fn is_zero_slice(bytes: &[u8]) -> bool {
    wide(bytes)
}

/// Index into `buffer` of the first non-zero byte in
/// `buffer[offset..offset + length]`, or `None` if the range is all zero.
///
/// # Errors
///
/// Returns [`OutOfRange`] if the range does not lie within `buffer`.
pub fn first_nonzero(
    buffer: &[u8],
    offset: usize,
    length: usize,
) -> Result<Option<usize>, OutOfRange> {
    let range = checked_range(buffer.len(), offset, length)?;
    Ok(position_nonzero(&buffer[range]).map(|i| offset + i))
}

fn bytewise(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

#[inline]
fn word_is_zero(word: &[u8]) -> bool {
    word.iter().fold(0u8, |acc, &b| acc | b) == 0
}

fn wide(bytes: &[u8]) -> bool {
    let mut words = bytes.chunks_exact(WORD);
    words.by_ref().all(word_is_zero) && bytewise(words.remainder())
}

fn position_nonzero(bytes: &[u8]) -> Option<usize> {
    let mut words = bytes.chunks_exact(WORD);
    let mut base = 0;
    for word in words.by_ref() {
        if !word_is_zero(word) {
            return word.iter().position(|&b| b != 0).map(|i| base + i);
        }
        base += WORD;
    }
    words.remainder().iter().position(|&b| b != 0).map(|i| base + i)
}

//! Fixed-granularity classification of a range into zero and data blocks.
//!
//! A disk-image writer works in clusters: a cluster that is entirely zero
//! need not be stored. [`blocks`] reports each cluster of a range, and
//! [`runs`] merges neighbouring clusters of the same kind so the caller can
//! emit one extent per run.

use core::{iter::Peekable, num::NonZeroUsize};

use crate::{OutOfRange, checked_range, is_zero_slice};

/// One block of a classified range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Index of the block's first byte in the buffer.
    pub offset: usize,
    /// Number of bytes in the block. Only the last block of a range may be
    /// shorter than the block size.
    pub len: usize,
    /// Whether every byte of the block is zero.
    pub zero: bool,
}

/// A maximal sequence of adjacent blocks sharing the same zero state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Index of the run's first byte in the buffer.
    pub offset: usize,
    /// Number of bytes covered by the run.
    pub len: usize,
    /// Whether every byte of the run is zero.
    pub zero: bool,
}

/// Iterator returned by [`blocks`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    bytes: &'a [u8],
    next_offset: usize,
    block_size: NonZeroUsize,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.bytes.is_empty() {
            return None;
        }
        let len = self.block_size.get().min(self.bytes.len());
        let (head, tail) = self.bytes.split_at(len);
        let block = Block {
            offset: self.next_offset,
            len,
            zero: is_zero_slice(head),
        };
        self.bytes = tail;
        self.next_offset += len;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bytes.len().div_ceil(self.block_size.get());
        (n, Some(n))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

/// Iterator returned by [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    blocks: Peekable<Blocks<'a>>,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let first = self.blocks.next()?;
        let mut run = Run {
            offset: first.offset,
            len: first.len,
            zero: first.zero,
        };
        while let Some(block) = self.blocks.next_if(|b| b.zero == run.zero) {
            run.len += block.len;
        }
        Some(run)
    }
}

/// Split `buffer[offset..offset + length]` into blocks of `block_size` bytes
/// and report whether each one is all zero.
///
/// Block offsets are relative to the start of `buffer`, so the first block
/// begins at `offset`.
///
/// # Errors
///
/// Returns [`OutOfRange`] if the range does not lie within `buffer`.
pub fn blocks(
    buffer: &[u8],
    offset: usize,
    length: usize,
    block_size: NonZeroUsize,
) -> Result<Blocks<'_>, OutOfRange> {
    let range = checked_range(buffer.len(), offset, length)?;
    Ok(Blocks {
        bytes: &buffer[range],
        next_offset: offset,
        block_size,
    })
}

/// Like [`blocks`], but merges adjacent blocks with the same zero state.
///
/// # Errors
///
/// Returns [`OutOfRange`] if the range does not lie within `buffer`.
pub fn runs(
    buffer: &[u8],
    offset: usize,
    length: usize,
    block_size: NonZeroUsize,
) -> Result<Runs<'_>, OutOfRange> {
    Ok(Runs {
        blocks: blocks(buffer, offset, length, block_size)?.peekable(),
    })
}

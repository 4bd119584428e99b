//! Detection of all-zero byte ranges.
//!
//! The core question is answered by [`is_zero`]: given a borrowed buffer, an
//! offset and a length, does every byte in `buffer[offset..offset + length]`
//! equal `0x00`? Bounds are validated before any byte is read and a bad range
//! is reported as [`OutOfRange`] instead of being trusted.
//!
//! [`blocks`] and [`runs`] build on the same scan to classify a larger range
//! at a fixed granularity, which is how disk-image writers find sparse
//! clusters.
//!
//! ```rust
//! use zeroscan::is_zero;
//!
//! assert_eq!(is_zero(&[0, 0, 1, 0], 0, 4), Ok(false));
//! assert_eq!(is_zero(&[0, 0, 1, 0], 0, 2), Ok(true));
//! assert!(is_zero(&[0, 0], 1, 2).is_err());
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod blocks;
mod error;
mod range;
mod scan;

#[cfg(test)]
mod tests;

pub use blocks::{Block, Blocks, Run, Runs, blocks, runs};
pub use error::OutOfRange;
pub use range::{checked_range, checked_signed_range};
pub use scan::{Strategy, first_nonzero, is_zero, is_zero_slice, is_zero_with};

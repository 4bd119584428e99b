use core::ops::Range;

use crate::OutOfRange;

/// Resolve `offset` and `length` into an index range of a buffer holding
/// `available` bytes.
///
/// An empty range is valid anywhere up to and including `available`.
///
/// # Errors
///
/// Returns [`OutOfRange`] when `offset + length` overflows or exceeds
/// `available`.
pub fn checked_range(
    available: usize,
    offset: usize,
    length: usize,
) -> Result<Range<usize>, OutOfRange> {
    match offset.checked_add(length) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(OutOfRange::new(offset, length, available)),
    }
}

/// [`checked_range`] for callers that hand over signed integers, such as a
/// managed runtime whose native integer type is signed or unbounded.
///
/// # Errors
///
/// Returns [`OutOfRange`] when either value is negative or the range does not
/// fit in `available` bytes.
pub fn checked_signed_range(
    available: usize,
    offset: i128,
    length: i128,
) -> Result<Range<usize>, OutOfRange> {
    let err = || OutOfRange::signed(offset, length, available);
    let start = usize::try_from(offset).map_err(|_| err())?;
    let len = usize::try_from(length).map_err(|_| err())?;
    checked_range(available, start, len).map_err(|_| err())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(4, 0, 4, Some(0..4))]
    #[case(4, 4, 0, Some(4..4))]
    #[case(4, 1, 2, Some(1..3))]
    #[case(0, 0, 0, Some(0..0))]
    #[case(4, 5, 0, None)]
    #[case(4, 2, 3, None)]
    #[case(4, usize::MAX, 2, None)]
    #[case(4, 1, usize::MAX, None)]
    fn unsigned_ranges(
        #[case] available: usize,
        #[case] offset: usize,
        #[case] length: usize,
        #[case] expected: Option<Range<usize>>,
    ) {
        assert_eq!(checked_range(available, offset, length).ok(), expected);
    }

    #[rstest]
    #[case(4, 0, 4, Some(0..4))]
    #[case(4, -1, 1, None)]
    #[case(4, 0, -1, None)]
    #[case(4, i128::MIN, i128::MIN, None)]
    #[case(4, 0, i128::MAX, None)]
    #[case(4, 3, 2, None)]
    fn signed_ranges(
        #[case] available: usize,
        #[case] offset: i128,
        #[case] length: i128,
        #[case] expected: Option<Range<usize>>,
    ) {
        assert_eq!(checked_signed_range(available, offset, length).ok(), expected);
    }

    #[test]
    fn signed_error_keeps_caller_values() {
        let err = checked_signed_range(4, -2, 7).unwrap_err();
        assert_eq!(err, OutOfRange { offset: -2, length: 7, available: 4 });
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let err = checked_range(8, usize::MAX, 1).unwrap_err();
        assert_eq!(err.offset, i128::from(u64::try_from(usize::MAX).unwrap()));
        assert_eq!(err.length, 1);
    }
}


use std::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// A buffer that is mostly zero, with a sprinkling of set bytes.
///
/// Uniformly random bytes are almost never zero, which would leave the
/// all-zero paths untested.
#[derive(Debug, Clone)]
pub(crate) struct Sparse(pub Vec<u8>);

impl Arbitrary for Sparse {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() * 4 + 1);
        let density = *g.choose(&[0u8, 1, 8, 64]).unwrap_or(&0);
        let bytes = (0..len)
            .map(|_| {
                if u8::arbitrary(g) < density {
                    u8::arbitrary(g).max(1)
                } else {
                    0
                }
            })
            .collect();
        Sparse(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Sparse))
    }
}

pub(crate) fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

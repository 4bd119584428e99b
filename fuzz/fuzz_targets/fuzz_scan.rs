#![no_main]
use std::num::NonZeroUsize;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zeroscan::{OutOfRange, Strategy, blocks, first_nonzero, is_zero_with, runs};

/// A mostly-zero buffer described by its length and the few bytes that are
/// set, plus a range that may or may not fit.
#[derive(Debug, Arbitrary)]
struct Input {
    len: u16,
    set: Vec<(u16, u8)>,
    offset: usize,
    length: usize,
    block_size: u8,
}

fn scan(input: Input) {
    let mut buf = vec![0u8; usize::from(input.len)];
    for (pos, byte) in input.set {
        if let Some(slot) = buf.get_mut(usize::from(pos)) {
            *slot = byte;
        }
    }
    let (offset, length) = (input.offset, input.length);

    let bytewise = is_zero_with(Strategy::Bytewise, &buf, offset, length);
    let wide = is_zero_with(Strategy::Wide, &buf, offset, length);
    assert_eq!(bytewise, wide);
    if let Err(err) = wide {
        let json = serde_json::to_string(&err).expect("error serializes");
        assert_eq!(serde_json::from_str::<OutOfRange>(&json).ok(), Some(err));
    }

    let reference = offset
        .checked_add(length)
        .and_then(|end| buf.get(offset..end))
        .map(|bytes| bytes.iter().position(|&b| b != 0).map(|i| offset + i));
    assert_eq!(first_nonzero(&buf, offset, length).ok(), reference);
    assert_eq!(wide.ok(), reference.map(|p| p.is_none()));

    let Some(size) = NonZeroUsize::new(usize::from(input.block_size)) else {
        return;
    };
    match (blocks(&buf, offset, length, size), runs(&buf, offset, length, size)) {
        (Ok(bs), Ok(rs)) => {
            let covered: usize = bs.map(|b| b.len).sum();
            assert_eq!(covered, length);
            let covered: usize = rs.map(|r| r.len).sum();
            assert_eq!(covered, length);
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        _ => panic!("blocks and runs disagree on range validity"),
    }
}

fuzz_target!(|input: Input| scan(input));

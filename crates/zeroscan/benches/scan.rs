//! Benchmark – `zeroscan` scan strategies
#![allow(missing_docs)]

use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use zeroscan::{Strategy, is_zero_with, runs};

/// A zero buffer of `len` bytes with a single set byte at `hit`, or none.
fn make_buffer(len: usize, hit: Option<usize>) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    if let Some(i) = hit {
        buf[i] = 1;
    }
    buf
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_zero");

    for &len in &[64usize, 4_096, 65_536, 1 << 20] {
        // Worst case for the scan: every byte must be read.
        let zeros = make_buffer(len, None);
        // Early exit halfway through.
        let half = make_buffer(len, Some(len / 2));

        group.throughput(Throughput::Bytes(len as u64));
        for strategy in [Strategy::Bytewise, Strategy::Wide] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}/zeros"), len),
                &zeros,
                |b, buf| b.iter(|| is_zero_with(strategy, black_box(buf), 0, buf.len())),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}/half"), len),
                &half,
                |b, buf| b.iter(|| is_zero_with(strategy, black_box(buf), 0, buf.len())),
            );
        }
    }
    group.finish();
}

fn bench_runs(c: &mut Criterion) {
    // 64 MiB image with a data cluster every 16 clusters.
    const CLUSTER: usize = 64 * 1024;
    let mut img = vec![0u8; 1024 * CLUSTER];
    for i in (0..img.len()).step_by(16 * CLUSTER) {
        img[i] = 0xff;
    }
    let size = NonZeroUsize::new(CLUSTER).expect("cluster size is non-zero");

    let mut group = c.benchmark_group("runs");
    group.throughput(Throughput::Bytes(img.len() as u64));
    group.sample_size(20);
    group.bench_function("sparse_image", |b| {
        b.iter(|| runs(black_box(&img), 0, img.len(), size).map(Iterator::count));
    });
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_runs);
criterion_main!(benches);

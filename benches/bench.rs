use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lockstep::prelude::*;
use lockstep::plain;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip");
    for width in [2, 8, 64] {
        group.bench_with_input(BenchmarkId::new("reused rows", width), &width, |b, &w| {
            b.iter(|| zip_dropping_rows(black_box(w), 1000))
        });
        group.bench_with_input(BenchmarkId::new("kept rows", width), &width, |b, &w| {
            b.iter(|| zip_keeping_rows(black_box(w), 1000))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("combine");
    for width in [2, 8, 64] {
        group.bench_with_input(BenchmarkId::new("vec", width), &width, |b, &w| {
            b.iter(|| combine_sum(black_box(w), 1000))
        });
    }
    group.finish();

    c.bench_function("combine array 4", |b| b.iter(|| combine_array(black_box(1000))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn columns(width: usize, len: u64) -> Vec<lockstep::Plain<std::ops::Range<u64>>> {
    (0..width).map(|_| plain(0..len)).collect()
}

/// Every row is dropped before the next round, so the zip writes in place.
fn zip_dropping_rows(width: usize, len: u64) -> u64 {
    let z = columns(width, len).zip().unwrap();
    z.map(|row| row.unwrap()[0]).sum()
}

/// Every row is kept alive, so each round needs fresh storage.
fn zip_keeping_rows(width: usize, len: u64) -> usize {
    let z = columns(width, len).zip().unwrap();
    let rows: Vec<_> = z.map(Result::unwrap).collect();
    rows.len()
}

fn combine_sum(width: usize, len: u64) -> u64 {
    let c = columns(width, len)
        .combine(|row: Vec<u64>| row.into_iter().sum::<u64>())
        .unwrap();
    c.map(Result::unwrap).sum()
}

fn combine_array(len: u64) -> u64 {
    let c = [plain(0..len), plain(0..len), plain(0..len), plain(0..len)]
        .combine(|[a, b, c, d]: [u64; 4]| a ^ b ^ c ^ d)
        .unwrap();
    c.map(Result::unwrap).sum()
}

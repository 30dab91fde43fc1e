//! Criterion micro-benchmarks for the comparator-driven bubble sort.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sqlist_sort::{bubble_sort, sort_records};
use sqlist_test_utils::descending;

const WIDTH: usize = std::mem::size_of::<i32>();

fn cmp_i32_records(a: &[u8], b: &[u8]) -> std::cmp::Ordering {
    let a = i32::from_ne_bytes([a[0], a[1], a[2], a[3]]);
    let b = i32::from_ne_bytes([b[0], b[1], b[2], b[3]]);
    a.cmp(&b)
}

fn bench_bubble_sort_descending_256(c: &mut Criterion) {
    let values = descending(256);
    c.bench_function("bubble_sort_descending_256", |b| {
        b.iter_batched(
            || values.clone(),
            |mut v| {
                bubble_sort(&mut v, |a, b| a.cmp(b));
                black_box(v)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_sort_records_descending_256(c: &mut Criterion) {
    let bytes: Vec<u8> = descending(256)
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect();
    c.bench_function("sort_records_descending_256", |b| {
        b.iter_batched(
            || bytes.clone(),
            |mut buf| {
                sort_records(&mut buf, 256, WIDTH, cmp_i32_records).unwrap();
                black_box(buf)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_bubble_sort_descending_256,
    bench_sort_records_descending_256
);
criterion_main!(benches);

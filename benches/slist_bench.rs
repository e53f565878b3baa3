// benches/slist_bench.rs

//! Benchmarks for the sorted-list core: insert throughput, range queries,
//! and equal-score search over populated lists.

use bytes::Bytes;
use criterion::{Criterion, criterion_group, criterion_main};
use slistdb::core::storage::slist::{RangeSpec, SortedList, Token};
use std::hint::black_box;

fn populated(n: u32) -> SortedList {
    let mut list = SortedList::new();
    for i in 0..n {
        // Spread duplicates over a quarter of the score space.
        list.insert(
            Token::new(Bytes::from(format!("score{:05}", i % (n / 4).max(1)))),
            Token::new(Bytes::from(format!("member{i:06}"))),
        );
    }
    list
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut list = SortedList::new();
            for i in 0..10_000u32 {
                list.insert(
                    Token::new(Bytes::from(format!("score{:05}", i % 2500))),
                    Token::new(Bytes::from(format!("member{i:06}"))),
                );
            }
            black_box(list.len())
        })
    });
}

fn bench_range(c: &mut Criterion) {
    let list = populated(10_000);
    let range = RangeSpec::parse(
        &Bytes::from_static(b"[score00100"),
        &Bytes::from_static(b"[score00200"),
    )
    .unwrap();
    c.bench_function("range_window_10k", |b| {
        b.iter(|| black_box(list.range(&range)).len())
    });
}

fn bench_search(c: &mut Criterion) {
    let list = populated(10_000);
    let score = Token::from_static(b"score01000");
    c.bench_function("search_equal_score_10k", |b| {
        b.iter(|| black_box(list.entries_with_score(&score)).len())
    });
}

criterion_group!(benches, bench_insert, bench_range, bench_search);
criterion_main!(benches);

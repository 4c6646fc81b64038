// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::cast_precision_loss)] // Sample data conversions
#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting

//! Encode/decode benchmarks for derived records and dynamic JSON objects.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mapquery::{Multimap, Record};

#[derive(Debug, Default, Clone, Record)]
struct BenchPaging {
    pub page: u32,
    #[query(key = "size,per_page")]
    pub size: Option<u16>,
}

/// Search-form shaped record: a few scalars, sequences and one flattened record.
#[derive(Debug, Default, Clone, Record)]
struct BenchSearch {
    #[query(key = "q,query")]
    pub text: String,
    pub tags: Vec<String>,
    pub ids: Vec<u64>,
    pub min_score: f64,
    pub exact: bool,
    #[query(flatten)]
    pub paging: Option<BenchPaging>,
    pub extra: serde_json::Value,
}

fn sample(i: usize) -> BenchSearch {
    BenchSearch {
        text: format!("query {}", i),
        tags: (0..4).map(|t| format!("tag_{}", t)).collect(),
        ids: (0..8).map(|n| (i * 8 + n) as u64).collect(),
        min_score: 0.5 + i as f64 * 0.01,
        exact: i % 2 == 0,
        paging: Some(BenchPaging {
            page: i as u32,
            size: Some(50),
        }),
        extra: serde_json::json!({ "trace": i }),
    }
}

fn bench_encode(c: &mut Criterion) {
    let samples: Vec<BenchSearch> = (0..100).map(sample).collect();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(100));

    group.bench_function("search_x100", |b| {
        b.iter(|| {
            for s in samples.iter() {
                black_box(mapquery::encode(black_box(s)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let encoded: Vec<Multimap> = (0..100)
        .map(|i| mapquery::encode(&sample(i)).unwrap())
        .collect();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(100));

    group.bench_function("search_x100", |b| {
        b.iter(|| {
            for input in encoded.iter() {
                let mut target: Option<Box<BenchSearch>> = None;
                mapquery::decode(black_box(input), &mut target).unwrap();
                black_box(target);
            }
        })
    });
    group.finish();
}

fn bench_sequence_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for width in [1usize, 16, 256] {
        let record = BenchSearch {
            ids: (0..width as u64).collect(),
            ..BenchSearch::default()
        };
        let input = mapquery::encode(&record).unwrap();
        group.throughput(Throughput::Elements(width as u64));

        group.bench_with_input(BenchmarkId::new("decode_ids", width), &input, |b, input| {
            b.iter(|| {
                let mut target = BenchSearch::default();
                mapquery::decode(black_box(input), &mut target).unwrap();
                black_box(target);
            })
        });
    }
    group.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let value = serde_json::json!({
        "q": "query",
        "tags": ["a", "b", "c"],
        "page": 3,
        "exact": true,
    });
    let encoded = mapquery::encode_dynamic(&value).unwrap();

    let mut group = c.benchmark_group("dynamic");
    group.bench_function("encode", |b| {
        b.iter(|| black_box(mapquery::encode_dynamic(black_box(&value)).unwrap()))
    });
    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut target = serde_json::Value::Null;
            mapquery::decode_dynamic(black_box(&encoded), &mut target).unwrap();
            black_box(target);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_sequence_width,
    bench_dynamic
);
criterion_main!(benches);

// SPDX-License-Identifier: Apache-2.0

//! Criterion microbenchmarks for the three contenders.
//!
//! Complements the single-shot CLI measurements with statistically sampled
//! parse and parse+traverse timings over generated documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shootout_core::{Contender, SerdeJson, SimdJson, SonicRs};

/// Record counts to benchmark; documents are a few hundred bytes per record.
const RECORD_COUNTS: &[usize] = &[100, 1_000, 10_000];

/// Generate a records-style document with mixed numeric and string leaves.
fn generate_document(records: usize) -> Vec<u8> {
    let mut json = String::from("[");
    for i in 0..records {
        if i > 0 {
            json.push(',');
        }
        json.push_str(&format!(
            "{{\"id\":{},\"score\":{:.3},\"name\":\"record-{}\",\"tags\":[{},{},{}],\"active\":{}}}",
            i,
            i as f64 * 0.125,
            i,
            i * 2,
            i * 3,
            i * 5,
            i % 2 == 0,
        ));
    }
    json.push(']');
    json.into_bytes()
}

fn bench_contender_parse<C: Contender>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    contender: &C,
    doc: &[u8],
) {
    group.bench_function(C::NAME, |b| {
        b.iter(|| {
            let mut scratch = doc.to_vec();
            // The tree may borrow scratch, so it is dropped in here
            let tree = contender.parse(black_box(&mut scratch));
            black_box(tree.is_ok())
        })
    });
}

fn bench_contender_parse_traverse<C: Contender>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    contender: &C,
    doc: &[u8],
) {
    group.bench_function(C::NAME, |b| {
        b.iter(|| {
            let mut scratch = doc.to_vec();
            let checksum = match contender.parse(black_box(&mut scratch)) {
                Ok(tree) => contender.accumulate(&tree),
                Err(_) => 0.0,
            };
            black_box(checksum)
        })
    });
}

/// Parse only, no traversal.
fn bench_parse(c: &mut Criterion) {
    for &records in RECORD_COUNTS {
        let doc = generate_document(records);

        let mut group = c.benchmark_group(format!("parse/{}", records));
        group.throughput(Throughput::Bytes(doc.len() as u64));

        bench_contender_parse(&mut group, &SimdJson, &doc);
        bench_contender_parse(&mut group, &SerdeJson, &doc);
        bench_contender_parse(&mut group, &SonicRs, &doc);

        group.finish();
    }
}

/// Full pipeline: parse plus numeric leaf accumulation.
fn bench_parse_traverse(c: &mut Criterion) {
    for &records in RECORD_COUNTS {
        let doc = generate_document(records);

        let mut group = c.benchmark_group(format!("parse_traverse/{}", records));
        group.throughput(Throughput::Bytes(doc.len() as u64));

        bench_contender_parse_traverse(&mut group, &SimdJson, &doc);
        bench_contender_parse_traverse(&mut group, &SerdeJson, &doc);
        bench_contender_parse_traverse(&mut group, &SonicRs, &doc);

        group.finish();
    }
}

criterion_group!(benches, bench_parse, bench_parse_traverse);
criterion_main!(benches);

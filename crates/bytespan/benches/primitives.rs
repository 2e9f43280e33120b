#![allow(missing_docs)]

use bytespan::{ByteString, construct, raw};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Deterministically create a payload of exactly `len` bytes.
fn make_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for &size in &[64usize, 4096, 262_144] {
        let payload = make_payload(size);

        group.bench_with_input(BenchmarkId::new("create", size), &payload, |b, payload| {
            b.iter(|| construct::create(payload.len(), |dst| raw::copy(dst, payload)));
        });

        // Worst-case: the 2x upper bound is always pessimistic, so every
        // iteration pays the trim copy.
        group.bench_with_input(
            BenchmarkId::new("create_and_trim_half_used", size),
            &payload,
            |b, payload| {
                b.iter(|| {
                    construct::create_and_trim(payload.len() * 2, |dst| {
                        raw::copy(dst, payload);
                        payload.len()
                    })
                });
            },
        );
    }
    group.finish();
}

fn bench_raw_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw");
    let payload = make_payload(65_536);
    let s = ByteString::copy_from_slice(&payload);

    group.bench_function("find_byte_missing", |b| {
        b.iter(|| black_box(raw::find_byte(&s, 0xFE)));
    });
    group.bench_function("count", |b| {
        b.iter(|| black_box(raw::count(&s, 7)));
    });
    group.bench_function("maximum", |b| {
        b.iter(|| black_box(raw::maximum(&s)));
    });
    group.bench_function("reverse", |b| {
        b.iter(|| s.reversed());
    });
    group.bench_function("slice_zero_copy", |b| {
        b.iter(|| black_box(s.slice(1024..2048)));
    });
    group.finish();
}

criterion_group!(benches, bench_construction, bench_raw_ops);
criterion_main!(benches);

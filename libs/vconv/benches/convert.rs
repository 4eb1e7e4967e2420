use std::fmt::Write;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use vconv::{ByteArrayConverter, Convert, LittleEndian, TextConverter};

fn bench_integer_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_text");

    group.bench_function("text_converter_i64", |b| {
        let mut conv = TextConverter::new();
        b.iter(|| conv.convert(black_box(-9_876_543_210_i64)).len())
    });

    group.bench_function("fmt_write_i64", |b| {
        let mut out = String::with_capacity(64);
        b.iter(|| {
            out.clear();
            let _ = write!(out, "{}", black_box(-9_876_543_210_i64));
            out.len()
        })
    });

    group.finish();
}

fn bench_float_text(c: &mut Criterion) {
    let mut conv = TextConverter::new();
    c.bench_function("text_converter_f64_precision_3", |b| {
        b.iter(|| {
            conv.convert_with_precision(black_box(1234.56789_f64), Some(3))
                .len()
        })
    });
}

fn bench_bytes(c: &mut Criterion) {
    let conv = ByteArrayConverter::<u64, LittleEndian>::new();
    let payload = 0x0102_0304_0506_0708_u64.to_le_bytes();

    c.bench_function("bytes_round_trip_u64", |b| {
        b.iter(|| {
            let bytes = conv.to_bytes(black_box(0x0102_0304_0506_0708));
            conv.read(black_box(&bytes)).ok()
        })
    });

    c.bench_function("bytes_read_prefix_u64", |b| {
        b.iter(|| conv.read_prefix(black_box(&payload)).map(|(v, _)| v).ok())
    });
}

criterion_group!(benches, bench_integer_text, bench_float_text, bench_bytes);
criterion_main!(benches);

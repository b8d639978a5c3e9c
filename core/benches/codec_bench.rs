use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use binary_core::codec::{read_unsigned_var_int, write_unsigned_var_int, write_var_int};
use binary_core::stream::Stream;

const RECORDS: usize = 1024;

fn bench_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_fixed_width");
    group.throughput(Throughput::Elements(RECORDS as u64));

    group.bench_function("put_mixed", |b| {
        b.iter(|| {
            let mut s = Stream::new();
            for i in 0..RECORDS {
                s.put_int(black_box(i as i32));
                s.put_lshort(black_box(i as u16));
                s.put_ltriad(black_box(i as u32));
                s.put_long(black_box(i as i64));
                s.put_lfloat(black_box(i as f32));
            }
            s
        })
    });

    let mut encoded = Stream::new();
    for i in 0..RECORDS {
        encoded.put_int(i as i32);
        encoded.put_lshort(i as u16);
        encoded.put_ltriad(i as u32);
        encoded.put_long(i as i64);
        encoded.put_lfloat(i as f32);
    }
    let bytes = encoded.into_inner();

    group.bench_function("get_mixed", |b| {
        b.iter(|| {
            let mut s = Stream::from_bytes(bytes.clone(), 0);
            let mut acc = 0i64;
            while !s.feof() {
                acc += s.get_int().unwrap() as i64;
                acc += s.get_lshort().unwrap() as i64;
                acc += s.get_ltriad().unwrap() as i64;
                acc += s.get_long().unwrap();
                acc += s.get_lfloat(None).unwrap() as i64;
            }
            black_box(acc)
        })
    });

    group.finish();
}

fn bench_varint(c: &mut Criterion) {
    let values: Vec<u64> = (0..RECORDS as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();

    let mut group = c.benchmark_group("varint");
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("encode_unsigned", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &v in &values {
                total += write_unsigned_var_int(black_box(v)).unwrap().len();
            }
            total
        })
    });

    group.bench_function("encode_signed", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &v in &values {
                total += write_var_int(black_box(v as i64)).unwrap().len();
            }
            total
        })
    });

    let mut wire = Vec::new();
    for &v in &values {
        wire.extend_from_slice(&write_unsigned_var_int(v).unwrap());
    }

    group.bench_function("decode_unsigned", |b| {
        b.iter(|| {
            let mut src: &[u8] = black_box(&wire);
            let mut acc = 0u64;
            while !src.is_empty() {
                acc ^= read_unsigned_var_int(&mut src).unwrap();
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fixed_width, bench_varint);
criterion_main!(benches);

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use protean_wire::{decode, encode, Variant};

/// A message shaped like live traffic: a record batch keyed by field name.
fn record_batch(rows: usize) -> Variant {
    let mut records = Vec::with_capacity(rows);
    for i in 0..rows {
        let mut row = BTreeMap::new();
        row.insert(b"id".to_vec(), Variant::Int64(i as i64));
        row.insert(b"name".to_vec(), Variant::string(format!("instrument-{i}")));
        row.insert(b"price".to_vec(), Variant::Double(100.0 + i as f64 * 0.25));
        row.insert(b"active".to_vec(), Variant::Bool(i % 3 != 0));
        records.push(Variant::Mapping(row));
    }
    Variant::List(records)
}

fn bench_encode(c: &mut Criterion) {
    let batch = record_batch(1000);

    c.bench_function("encode_1k_records_plain", |b| {
        b.iter(|| encode(black_box(&batch), false).unwrap())
    });
    c.bench_function("encode_1k_records_deflate", |b| {
        b.iter(|| encode(black_box(&batch), true).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let batch = record_batch(1000);
    let plain = encode(&batch, false).unwrap();
    let packed = encode(&batch, true).unwrap();

    c.bench_function("decode_1k_records_plain", |b| {
        b.iter(|| decode(black_box(&plain)).unwrap())
    });
    c.bench_function("decode_1k_records_deflate", |b| {
        b.iter(|| decode(black_box(&packed)).unwrap())
    });
}

fn bench_double_array(c: &mut Criterion) {
    let array = Variant::Array((0..65_536).map(|i| i as f64 * 0.5).collect());
    let bytes = encode(&array, false).unwrap();

    c.bench_function("encode_64k_doubles", |b| {
        b.iter(|| encode(black_box(&array), false).unwrap())
    });
    c.bench_function("decode_64k_doubles", |b| {
        b.iter(|| decode(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_double_array);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regfield::registers;

registers! {
    register Packet: u32 {
        version: 0..3,
        kind: 3..8,
        length: 8..19,
        _reserved: 19..24,
        checksum: 24..32,
    }
}

fn bench_field_access(c: &mut Criterion) {
    c.bench_function("get", |b| {
        b.iter(|| Packet::length(black_box(0xdead_beef)))
    });

    c.bench_function("set", |b| {
        b.iter(|| Packet::with_length(black_box(0xdead_beef), black_box(0x2a)))
    });

    c.bench_function("decode_all_fields", |b| {
        b.iter(|| {
            let raw = black_box(0xdead_beef);
            Packet::FIELDS
                .iter()
                .map(|field| field.get(raw))
                .fold(0u32, |acc, value| acc ^ value)
        })
    });
}

criterion_group!(benches, bench_field_access);
criterion_main!(benches);

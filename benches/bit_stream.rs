use criterion::{criterion_group, criterion_main, Criterion};
use bitcodec::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 100_000;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let widths = (0..N).map(|_| r.random_range(1..=8_usize)).collect::<Vec<_>>();
    let mut data = vec![0_u8; N];
    r.fill(&mut data[..]);

    c.bench_function("read_bits", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(&data);
            for &n_bits in &widths {
                if let Ok(value) = reader.read_bits(n_bits) {
                    black_box(value);
                } else {
                    break;
                }
            }
        })
    });

    c.bench_function("write_value", |b| {
        b.iter(|| {
            let mut writer = BitWriter::new();
            for (&n_bits, &byte) in widths.iter().zip(&data) {
                let _ = writer.write_value(byte >> (8 - n_bits), n_bits);
            }
            black_box(writer.finalize(false))
        })
    });

    c.bench_function("write_value + pop", |b| {
        b.iter(|| {
            let mut writer = BitWriter::new();
            for (&n_bits, &byte) in widths.iter().zip(&data) {
                let _ = writer.write_value(byte >> (8 - n_bits), n_bits);
                let _ = writer.pop(n_bits / 2);
            }
            black_box(writer.finalize(false))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

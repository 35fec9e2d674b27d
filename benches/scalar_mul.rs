use p256_core::curve::G;
use p256_core::field::U256;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_scalar_mul(c: &mut Criterion) {
    let k = U256::from_hex("d372a54da9f7d98cc47cf814f7acccb32253452606a9e88c800ce5b7de762952");

    c.bench_function("scalar mul full-width k", |b| {
        b.iter(|| black_box(G) * black_box(k))
    });

    c.bench_function("point double", |b| b.iter(|| black_box(G) + black_box(G)));
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);

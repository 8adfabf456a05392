use std::str::FromStr;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bigint_crypto::BigInt;

fn bench_multiplication(c: &mut Criterion) {
    // 405 digits each, far past the split-multiplication threshold.
    let a = BigInt::from_str(&"123456789".repeat(45)).expect("parse lhs");
    let b = BigInt::from_str(&"987654321".repeat(45)).expect("parse rhs");

    c.bench_function("mul_405_digits", |bencher| {
        bencher.iter(|| black_box(&a * &b))
    });
}

fn bench_modpow(c: &mut Criterion) {
    let base = BigInt::from_str(&"987654321".repeat(5)).expect("parse base");
    let exponent = BigInt::from(65537);
    let modulus = BigInt::from_str(&"123456789".repeat(5)).expect("parse modulus");

    c.bench_function("modpow_45_digit_modulus", |bencher| {
        bencher.iter(|| black_box(BigInt::modpow(&base, &exponent, &modulus).expect("modpow")))
    });
}

criterion_group!(benches, bench_multiplication, bench_modpow);
criterion_main!(benches);

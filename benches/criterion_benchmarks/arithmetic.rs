use criterion::{black_box, Criterion, criterion_group};

use proper_fraction::{F128, F64};

pub fn new_reduces(c: &mut Criterion) {
    c.bench_function("new with a large common factor", |b| b.iter(|| {
        F64!(black_box(1500 * 7919), black_box(-90 * 7919))
    }));
}

pub fn add_small(c: &mut Criterion) {
    c.bench_function("add two small fractions", |b| b.iter(|| {
        black_box(F64!(1, 12)) + black_box(F64!(2, 3))
    }));
}

pub fn add_zero_denominator(c: &mut Criterion) {
    c.bench_function("add to an infinite value", |b| b.iter(|| {
        black_box(F64!(1, 0)) + black_box(F64!(5, 6))
    }));
}

pub fn mul_wide(c: &mut Criterion) {
    c.bench_function("multiply with i128 components", |b| b.iter(|| {
        black_box(F128!(2_i128.pow(40) - 87, 3_i128.pow(20))) * black_box(F128!(3_i128.pow(19), 2_i128.pow(40)))
    }));
}

pub fn compare(c: &mut Criterion) {
    c.bench_function("greater than", |b| b.iter(|| {
        black_box(F64!(2, 3)) > black_box(F64!(5, 12))
    }));
}

criterion_group!(arithmetic,
    new_reduces,
    add_small,
    add_zero_denominator,
    mul_wide,
    compare,
);

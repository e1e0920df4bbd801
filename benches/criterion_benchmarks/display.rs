use criterion::{black_box, Criterion, criterion_group};

use proper_fraction::F64;

pub fn display_whole(c: &mut Criterion) {
    c.bench_function("display a whole value", |b| b.iter(|| {
        black_box(F64!(1500, 60)).to_string()
    }));
}

pub fn display_proper(c: &mut Criterion) {
    c.bench_function("display a proper fraction", |b| b.iter(|| {
        black_box(F64!(1500, 90)).to_string()
    }));
}

criterion_group!(display,
    display_whole,
    display_proper,
);

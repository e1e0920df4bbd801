use criterion::criterion_main;

mod arithmetic;
mod display;

criterion_main!(arithmetic::arithmetic, display::display);

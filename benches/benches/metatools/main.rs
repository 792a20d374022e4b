mod chain;
mod matmul;

use criterion::{criterion_group, criterion_main};

criterion_group!(benches, chain::basic, matmul::basic);
criterion_main!(benches);

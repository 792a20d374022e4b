use criterion::{black_box, Criterion};
use metatools_chain::{build_chain, ChainSpec};

// Middle module counts for chain construction
const NUMS: [(usize, &str); 3] = [(10, "small"), (200, "default"), (5000, "large")];

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain");

    for &(num, num_name) in &NUMS {
        let spec = ChainSpec::with_num(num);
        let bench_name = format!("build/{}", num_name);

        group.bench_function(&bench_name, |b| b.iter(|| black_box(build_chain(black_box(&spec)))));
    }

    group.finish();
}

use criterion::{black_box, Criterion};
use metatools_matrix::{fixed_lhs, fixed_rhs, MatmulDemo, Matrix3};
use rand::{rngs::StdRng, SeedableRng};

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("matmul");

    let mut rng = StdRng::seed_from_u64(0);
    let a = Matrix3::<f64>::rand_with_rng(&mut rng);
    let b = Matrix3::<f64>::rand_with_rng(&mut rng);
    group.bench_function("f64", |bench| bench.iter(|| black_box(black_box(&a).matmul(black_box(&b)))));

    let (x, y) = (fixed_lhs(), fixed_rhs());
    group.bench_function("i64", |bench| bench.iter(|| black_box(black_box(&x).matmul(black_box(&y)))));

    group.bench_function("demo", |bench| bench.iter(|| black_box(MatmulDemo::run_with_rng(&mut rng))));

    group.finish();
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_matrix::{Matrix, NumericKind};

fn bench_determinant(c: &mut Criterion) {
    let well_conditioned = Matrix::random(32, 32)
        .unwrap()
        .add(
            &Matrix::identity(32).unwrap().scale(32, NumericKind::F64),
            NumericKind::F64,
        )
        .unwrap();

    c.bench_function("det_lu_32x32", |b| {
        b.iter(|| black_box(&well_conditioned).det().unwrap())
    });

    // zero leading element forces the O(n!) cofactor path; keep it small
    let mut degenerate = Matrix::random(8, 8).unwrap();
    degenerate.set(0, 0, 0.0).unwrap();

    c.bench_function("det_cofactor_8x8", |b| {
        b.iter(|| black_box(&degenerate).det().unwrap())
    });
}

fn bench_dot(c: &mut Criterion) {
    let a = Matrix::random(64, 64).unwrap();
    let b_mat = Matrix::random(64, 64).unwrap();

    c.bench_function("dot_f64_64x64", |b| {
        b.iter(|| black_box(&a).dot(black_box(&b_mat), NumericKind::F64).unwrap())
    });
}

criterion_group!(benches, bench_determinant, bench_dot);
criterion_main!(benches);

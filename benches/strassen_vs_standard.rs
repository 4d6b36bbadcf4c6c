use criterion::{black_box, Criterion, criterion_group, criterion_main};
use densemat::{MatMul, Matrix, MultiplyOptions, StrassenMultiplier, multiply_standard};

fn bench_strassen_vs_standard(c: &mut Criterion) {
    let n = 256;
    let grid: Vec<Vec<f64>> = (0..n).map(|i| (0..n).map(|j| ((i * n + j) as f64).sin()).collect()).collect();
    let a = Matrix::new(grid).unwrap();
    let b = a.transpose();
    let parallel = StrassenMultiplier::new();
    let sequential = StrassenMultiplier::with_options(&MultiplyOptions::sequential());

    c.bench_function("strassen parallel", |ben| {
        ben.iter(|| parallel.multiply(black_box(&a), black_box(&b)).unwrap())
    });

    c.bench_function("strassen sequential", |ben| {
        ben.iter(|| sequential.multiply(black_box(&a), black_box(&b)).unwrap())
    });

    c.bench_function("standard", |ben| {
        ben.iter(|| multiply_standard(black_box(&a), black_box(&b)))
    });

    let (fa, fb) = (a.to_faer(), b.to_faer());
    c.bench_function("faer matmul", |ben| {
        ben.iter(|| black_box(&fa) * black_box(&fb))
    });
}

criterion_group!(benches, bench_strassen_vs_standard);
criterion_main!(benches);

use densemat::{Matrix, MulContext, MulKind, MultiplyOptions, matrices_approx_eq};
use std::time::Instant;

fn main() {
    env_logger::init();
    let n = 1000;
    // ones times (2 on the diagonal, 1 elsewhere): every entry is n + 1
    let a = Matrix::new(vec![vec![1.0; n]; n]).unwrap();
    let b = Matrix::new((0..n).map(|i| (0..n).map(|j| if i == j { 2.0 } else { 1.0 }).collect()).collect()).unwrap();

    let opts = MultiplyOptions::default();
    let mut results = Vec::new();
    for kind in [MulKind::Strassen, MulKind::Standard] {
        let ctx = MulContext::new(kind, &opts);
        let start = Instant::now();
        let c = ctx.multiply(&a, &b).unwrap();
        println!("{kind:?}: {:?}", start.elapsed());
        results.push(c);
    }
    println!("{}", results[0]);
    println!("results agree: {}", matrices_approx_eq(&results[1], &results[0], 1e-9));
}

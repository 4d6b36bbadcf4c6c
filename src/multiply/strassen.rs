//! Strassen multiplication with bounded parallel fan-out.
//!
//! Operands are padded to a common power-of-two square, multiplied
//! recursively, and the result is truncated back to `a.rows() x b.cols()`.
//! Each recursion level above the base case splits both operands into
//! quadrants and forms the seven Strassen products
//!
//! ```text
//! p1 = a11 (b12 - b22)        p5 = (a11 + a22)(b11 + b22)
//! p2 = (a11 + a12) b22        p6 = (a12 - a22)(b21 + b22)
//! p3 = (a21 + a22) b11        p7 = (a11 - a21)(b11 + b12)
//! p4 = a22 (b21 - b11)
//! ```
//!
//! which are recombined as
//!
//! ```text
//! c11 = p5 + p4 - p2 + p6     c12 = p1 + p2
//! c21 = p3 + p4               c22 = p5 + p1 - p3 - p7
//! ```
//!
//! The seven products are independent and own their operands, so the top
//! `parallel_depth` levels hand them to the executor as one fan-out and
//! wait for all seven before recombining. Deeper levels recurse on the
//! current thread. At or below `base_case_size` the cubic algorithm takes
//! over.
//!
//! # References
//! - Strassen, V. (1969). Gaussian elimination is not optimal. Numer. Math. 13.

use crate::config::MultiplyOptions;
use crate::error::MatError;
use crate::matrix::Matrix;
use crate::matrix::geometry::{Quadrants, combine, pad, split, truncate};
use crate::multiply::{MatMul, check_inner_dims, multiply_standard};
use crate::parallel::{Executor, UniverseExecutor, default_parallel_depth};
use log::{debug, trace};

pub struct StrassenMultiplier {
    base_case_size: usize,
    parallel_depth: usize,
    executor: UniverseExecutor,
}

impl StrassenMultiplier {
    /// Engine with default options (base case 64, one worker per CPU).
    pub fn new() -> Self {
        Self::with_options(&MultiplyOptions::default())
    }

    pub fn with_options(opts: &MultiplyOptions) -> Self {
        let executor = UniverseExecutor::from_options(opts);
        let parallel_depth = opts
            .parallel_depth
            .unwrap_or_else(|| default_parallel_depth(executor.workers()));
        Self {
            base_case_size: opts.base_case_size.max(1),
            parallel_depth,
            executor,
        }
    }

    pub fn base_case_size(&self) -> usize {
        self.base_case_size
    }

    pub fn parallel_depth(&self) -> usize {
        self.parallel_depth
    }

    /// Multiply two `s x s` operands, `s` a power of two.
    fn multiply_recursive(&self, a: &Matrix, b: &Matrix, depth: usize) -> Matrix {
        let size = a.rows();
        if size <= self.base_case_size {
            return multiply_standard(a, b);
        }
        let n = size / 2;

        let Quadrants { q11: a11, q12: a12, q21: a21, q22: a22 } = split(a);
        let Quadrants { q11: b11, q12: b12, q21: b21, q22: b22 } = split(b);

        // Sums first: the lone quadrants are moved into their tasks below.
        let b12_b22 = b12.minus(&b22);
        let a11_a12 = a11.plus(&a12);
        let a21_a22 = a21.plus(&a22);
        let b21_b11 = b21.minus(&b11);
        let a11_a22 = a11.plus(&a22);
        let b11_b22 = b11.plus(&b22);
        let a12_a22 = a12.minus(&a22);
        let b21_b22 = b21.plus(&b22);
        let a11_a21 = a11.minus(&a21);
        let b11_b12 = b11.plus(&b12);

        let tasks = vec![
            (a11, b12_b22),
            (a11_a12, b22),
            (a21_a22, b11),
            (a22, b21_b11),
            (a11_a22, b11_b22),
            (a12_a22, b21_b22),
            (a11_a21, b11_b12),
        ];

        let products: Vec<Matrix> = if depth < self.parallel_depth {
            trace!("strassen fan-out: size {size}, depth {depth}");
            self.executor
                .fan_out(tasks, |(x, y)| self.multiply_recursive(&x, &y, depth + 1))
        } else {
            tasks
                .into_iter()
                .map(|(x, y)| self.multiply_recursive(&x, &y, depth + 1))
                .collect()
        };
        let Ok([p1, p2, p3, p4, p5, p6, p7]) = <[Matrix; 7]>::try_from(products) else {
            unreachable!("fan-out returns one product per task");
        };

        let c11 = p5.plus(&p4).minus(&p2).plus(&p6);
        let c12 = p1.plus(&p2);
        let c21 = p3.plus(&p4);
        let c22 = p5.plus(&p1).minus(&p3).minus(&p7);

        combine(&c11, &c12, &c21, &c22, n)
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StrassenMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrassenMultiplier")
            .field("base_case_size", &self.base_case_size)
            .field("parallel_depth", &self.parallel_depth)
            .field("executor", &self.executor)
            .finish()
    }
}

impl MatMul for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        check_inner_dims(a, b)?;
        let (a_sq, b_sq) = pad(a, b);
        debug!(
            "strassen multiply {}x{} by {}x{}: padded to {}, base case {}, parallel depth {} on {:?}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
            a_sq.rows(),
            self.base_case_size,
            self.parallel_depth,
            self.executor
        );
        let product = self.multiply_recursive(&a_sq, &b_sq, 0);
        Ok(truncate(&product, a.rows(), b.cols()))
    }

    fn name(&self) -> &'static str {
        "strassen"
    }
}

impl Matrix {
    /// `self · other` with the crate-wide default Strassen engine.
    ///
    /// Fails with [`MatError::DimensionMismatch`] when `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatError> {
        default_engine().multiply(self, other)
    }
}

fn default_engine() -> &'static StrassenMultiplier {
    static ENGINE: std::sync::OnceLock<StrassenMultiplier> = std::sync::OnceLock::new();
    ENGINE.get_or_init(StrassenMultiplier::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seeded(rows: usize, cols: usize, seed: usize) -> Matrix {
        Matrix::from_fn(rows, cols, |i, j| ((i * 31 + j * 17 + seed) % 13) as f64 - 6.0)
    }

    fn assert_close(got: &Matrix, want: &Matrix) {
        assert_eq!(got.shape(), want.shape());
        for (g, w) in got.as_slice().iter().zip(want.as_slice()) {
            assert_relative_eq!(*g, *w, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn two_by_two_product() {
        let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::new(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn recursion_below_tiny_base_case_matches_standard() {
        // A base case of 1 exercises every recursion level down to scalars.
        let engine = StrassenMultiplier::with_options(&MultiplyOptions::sequential().with_base_case_size(1));
        for &(m, k, n) in &[(2, 2, 2), (3, 5, 4), (7, 7, 7), (8, 3, 9), (16, 16, 16)] {
            let a = seeded(m, k, 1);
            let b = seeded(k, n, 2);
            assert_close(&engine.multiply(&a, &b).unwrap(), &multiply_standard(&a, &b));
        }
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let opts = MultiplyOptions::default().with_base_case_size(4).with_num_threads(4);
        let parallel = StrassenMultiplier::with_options(&opts.clone().with_parallel_depth(3));
        let sequential = StrassenMultiplier::with_options(&opts.with_parallel_depth(0));
        let a = seeded(37, 29, 3);
        let b = seeded(29, 41, 4);
        let p = parallel.multiply(&a, &b).unwrap();
        let s = sequential.multiply(&a, &b).unwrap();
        assert_close(&p, &s);
        assert_close(&p, &multiply_standard(&a, &b));
    }

    #[test]
    fn zero_base_case_is_clamped() {
        let engine = StrassenMultiplier::with_options(&MultiplyOptions::sequential().with_base_case_size(0));
        assert_eq!(engine.base_case_size(), 1);
        let a = seeded(3, 3, 5);
        assert_close(&engine.multiply(&a, &a).unwrap(), &multiply_standard(&a, &a));
    }

    #[test]
    fn rejects_incompatible_operands() {
        let a = seeded(2, 3, 0);
        let b = seeded(2, 2, 0);
        assert!(matches!(a.multiply(&b), Err(MatError::DimensionMismatch { op: "multiply", .. })));
    }
}

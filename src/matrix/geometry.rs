//! Shape transforms for divide-and-conquer multiplication.
//!
//! Strassen recursion needs square operands whose side is a power of two.
//! [`pad`] embeds two arbitrary matrices in zero-filled squares of that
//! size, [`split`] cuts a square into four quadrants, [`combine`] glues
//! four quadrants back together and [`truncate`] recovers the meaningful
//! top-left block of a padded result.
//!
//! `split` and `combine` are only ever called on shapes the caller has
//! already validated; a violated precondition is a bug and panics.

use crate::matrix::Matrix;

/// The four equally sized blocks of a square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants {
    /// Top-left.
    pub q11: Matrix,
    /// Top-right.
    pub q12: Matrix,
    /// Bottom-left.
    pub q21: Matrix,
    /// Bottom-right.
    pub q22: Matrix,
}

/// Smallest power of two `>= n`.
///
/// # Panics
/// Panics if `n == 0`.
pub fn next_power_of_two(n: usize) -> usize {
    assert!(n >= 1, "next_power_of_two is defined for n >= 1");
    n.next_power_of_two()
}

/// Embed `a` and `b` in the top-left corner of two zero matrices of side
/// `next_power_of_two(max(a.rows, a.cols, b.rows, b.cols))`.
pub fn pad(a: &Matrix, b: &Matrix) -> (Matrix, Matrix) {
    let largest = a.rows().max(a.cols()).max(b.rows()).max(b.cols());
    let size = next_power_of_two(largest);
    (embed(a, size), embed(b, size))
}

fn embed(m: &Matrix, size: usize) -> Matrix {
    let mut out = Matrix::filled(size, size, 0.0);
    for (i, row) in m.row_iter().enumerate() {
        out.row_mut(i)[..row.len()].copy_from_slice(row);
    }
    out
}

/// Cut a square matrix of even side `2n` into its four `n x n` quadrants.
///
/// # Panics
/// Panics if `m` is not square or its side is odd.
pub fn split(m: &Matrix) -> Quadrants {
    assert!(m.is_square(), "split requires a square matrix, got {} x {}", m.rows(), m.cols());
    assert!(m.rows() % 2 == 0, "split requires an even side, got {}", m.rows());
    let n = m.rows() / 2;
    Quadrants {
        q11: block(m, 0, 0, n),
        q12: block(m, 0, n, n),
        q21: block(m, n, 0, n),
        q22: block(m, n, n, n),
    }
}

fn block(m: &Matrix, row0: usize, col0: usize, n: usize) -> Matrix {
    let mut out = Matrix::filled(n, n, 0.0);
    for i in 0..n {
        out.row_mut(i).copy_from_slice(&m.row(row0 + i)[col0..col0 + n]);
    }
    out
}

/// Inverse of [`split`]: place `c11, c12, c21, c22` at offsets `(0,0)`,
/// `(0,n)`, `(n,0)` and `(n,n)` of a new `2n x 2n` matrix.
///
/// # Panics
/// Panics if any quadrant is not `n x n`.
pub fn combine(c11: &Matrix, c12: &Matrix, c21: &Matrix, c22: &Matrix, n: usize) -> Matrix {
    for q in [c11, c12, c21, c22] {
        assert_eq!(q.shape(), (n, n), "combine expects {n} x {n} quadrants");
    }
    let mut out = Matrix::filled(2 * n, 2 * n, 0.0);
    for i in 0..n {
        let top = out.row_mut(i);
        top[..n].copy_from_slice(c11.row(i));
        top[n..].copy_from_slice(c12.row(i));
        let bottom = out.row_mut(n + i);
        bottom[..n].copy_from_slice(c21.row(i));
        bottom[n..].copy_from_slice(c22.row(i));
    }
    out
}

/// Copy of the top-left `rows x cols` block of `m`.
///
/// # Panics
/// Panics if the block does not fit inside `m`.
pub fn truncate(m: &Matrix, rows: usize, cols: usize) -> Matrix {
    assert!(rows <= m.rows() && cols <= m.cols(), "cannot truncate {} x {} to {rows} x {cols}", m.rows(), m.cols());
    let mut out = Matrix::filled(rows, cols, 0.0);
    for i in 0..rows {
        out.row_mut(i).copy_from_slice(&m.row(i)[..cols]);
    }
    out
}

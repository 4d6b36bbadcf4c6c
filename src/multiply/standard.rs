//! Cubic (schoolbook) multiplication.

use crate::error::MatError;
use crate::matrix::Matrix;
use crate::multiply::{MatMul, check_inner_dims};

/// `result[i][j] = Σₖ A[i][k] · B[k][j]` with `k` ascending.
///
/// No shape validation beyond a debug assertion: the caller guarantees
/// `a.cols() == b.rows()`. Used as the Strassen base case and as a
/// reference for verification.
pub fn multiply_standard(a: &Matrix, b: &Matrix) -> Matrix {
    debug_assert_eq!(a.cols(), b.rows(), "inner dimensions must agree");
    let mut out = Matrix::filled(a.rows(), b.cols(), 0.0);
    for i in 0..a.rows() {
        let out_row = out.row_mut(i);
        for (k, &aik) in a.row(i).iter().enumerate() {
            for (o, &bkj) in out_row.iter_mut().zip(b.row(k)) {
                *o += aik * bkj;
            }
        }
    }
    out
}

/// Checked wrapper around [`multiply_standard`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMultiplier;

impl StandardMultiplier {
    pub fn new() -> Self {
        StandardMultiplier
    }
}

impl MatMul for StandardMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        check_inner_dims(a, b)?;
        Ok(multiply_standard(a, b))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_two_by_two() {
        let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::new(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = multiply_standard(&a, &b);
        assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn handles_rectangular_operands() {
        // [2x3] · [3x1]
        let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::new(vec![vec![1.0], vec![0.0], vec![-1.0]]).unwrap();
        let c = StandardMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![-2.0], vec![-2.0]]);
    }

    #[test]
    fn rejects_incompatible_operands() {
        let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::new(vec![vec![7.0, 8.0], vec![9.0, 10.0]]).unwrap();
        let err = StandardMultiplier.multiply(&a, &b).unwrap_err();
        assert!(matches!(err, MatError::DimensionMismatch { op: "multiply", .. }));
    }
}

//! Elementwise arithmetic and reductions on [`Matrix`].
//!
//! All operations except [`Matrix::scale`] return a new matrix. Checked
//! variants validate shapes and report mismatches as [`MatError`]; the
//! crate-internal `plus`/`minus` helpers are for operands whose shapes are
//! already known to agree (Strassen recombination).

use crate::error::MatError;
use crate::matrix::Matrix;

impl Matrix {
    /// `C[i][j] = A[i][j] + B[i][j]`.
    pub fn sum(&self, other: &Matrix) -> Result<Matrix, MatError> {
        if self.shape() != other.shape() {
            return Err(MatError::same_shape("sum", self.shape(), other.shape()));
        }
        Ok(self.plus(other))
    }

    /// `A - B`, computed as `A + (-1 · copy of B)`. `other` is left untouched.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatError> {
        let negated = other.scaled(-1.0);
        self.sum(&negated)
            .map_err(|_| MatError::same_shape("subtract", self.shape(), other.shape()))
    }

    /// Multiply every entry by `scalar`, in place.
    pub fn scale(&mut self, scalar: f64) {
        for v in self.as_mut_slice() {
            *v *= scalar;
        }
    }

    /// A scaled copy; `self` is left untouched.
    pub fn scaled(&self, scalar: f64) -> Matrix {
        let mut duplicate = self.clone();
        duplicate.scale(scalar);
        duplicate
    }

    /// New `cols x rows` matrix with `T[j][i] = A[i][j]`.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.cols(), self.rows(), |j, i| self[(i, j)])
    }

    /// Hadamard product `C[i][j] = A[i][j] · B[i][j]`.
    pub fn multiply_elements(&self, other: &Matrix) -> Result<Matrix, MatError> {
        if self.shape() != other.shape() {
            return Err(MatError::ShapeMismatch {
                left_rows: self.rows(),
                left_cols: self.cols(),
                right_rows: other.rows(),
                right_cols: other.cols(),
            });
        }
        Ok(self.zip_with(other, |a, b| a * b))
    }

    /// Column totals as a `1 x cols` matrix: `result[0][j] = Σᵢ A[i][j]`.
    pub fn sum_rows(&self) -> Matrix {
        let mut out = Matrix::filled(1, self.cols(), 0.0);
        let acc = out.row_mut(0);
        for row in self.row_iter() {
            for (a, &v) in acc.iter_mut().zip(row) {
                *a += v;
            }
        }
        out
    }

    /// Row totals as a `rows x 1` matrix: `result[i][0] = Σⱼ A[i][j]`.
    pub fn sum_columns(&self) -> Matrix {
        let totals: Vec<f64> = self.row_iter().map(|row| row.iter().sum()).collect();
        Matrix::from_fn(self.rows(), 1, |i, _| totals[i])
    }

    pub(crate) fn plus(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |a, b| a + b)
    }

    pub(crate) fn minus(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with<F>(&self, other: &Matrix, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.shape(), other.shape(), "elementwise operands must share a shape");
        let mut out = self.clone();
        for (a, &b) in out.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, b);
        }
        out
    }
}

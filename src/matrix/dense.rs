//! Dense row-major matrix storage.
//!
//! `Matrix` owns one contiguous `Vec<f64>` laid out row by row. Shapes are
//! validated once, at construction, and never change afterwards; the only
//! public way to alter the values of an existing matrix is
//! [`Matrix::scale`](crate::matrix::Matrix::scale). Every other operation
//! allocates a fresh matrix, so results never alias their operands.
//!
//! Conversions to and from `faer::Mat<f64>` are provided for interop with
//! the faer ecosystem (column-major on that side).

use crate::error::MatError;
use faer::Mat;
use std::ops::Index;

/// A dense `rows x cols` matrix of `f64` with `rows >= 1` and `cols >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a table of rows.
    ///
    /// Fails with [`MatError::ShapeError`] when the table has no rows, the
    /// first row is empty, or the rows have different lengths.
    pub fn new(grid: Vec<Vec<f64>>) -> Result<Self, MatError> {
        let cols = match grid.first() {
            None => return Err(MatError::ShapeError("matrix has no rows".into())),
            Some(first) if first.is_empty() => {
                return Err(MatError::ShapeError("first row is empty".into()));
            }
            Some(first) => first.len(),
        };
        if let Some((i, row)) = grid.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatError::ShapeError(format!(
                "row {i} has {} values, expected {cols}",
                row.len()
            )));
        }
        let rows = grid.len();
        let data = grid.into_iter().flatten().collect();
        Ok(Self { rows, cols, data })
    }

    /// An all-zero matrix. Fails with [`MatError::DimensionError`] if either
    /// dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatError> {
        if rows == 0 || cols == 0 {
            return Err(MatError::DimensionError { rows, cols });
        }
        Ok(Self::filled(rows, cols, 0.0))
    }

    /// Internal constructor for shapes that are already known to be valid.
    pub(crate) fn filled(rows: usize, cols: usize, value: f64) -> Self {
        debug_assert!(rows > 0 && cols > 0, "empty matrix {rows} x {cols}");
        Self { rows, cols, data: vec![value; rows * cols] }
    }

    /// Internal constructor evaluating `f(i, j)` for every entry in row order.
    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        debug_assert!(rows > 0 && cols > 0, "empty matrix {rows} x {cols}");
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows (M).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (N).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range for {} x {}", self.rows, self.cols);
        self.data[i * self.cols + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = i * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterate over the rows in order.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    /// The backing storage, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Copy the values out as a table of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.row_iter().map(<[f64]>::to_vec).collect()
    }

    /// Copy a faer matrix. Fails with [`MatError::DimensionError`] if it is empty.
    pub fn from_faer(mat: &Mat<f64>) -> Result<Self, MatError> {
        let (rows, cols) = (mat.nrows(), mat.ncols());
        if rows == 0 || cols == 0 {
            return Err(MatError::DimensionError { rows, cols });
        }
        Ok(Self::from_fn(rows, cols, |i, j| mat[(i, j)]))
    }

    /// Copy into a (column-major) faer matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.rows, self.cols, |i, j| self.data[i * self.cols + j])
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatError;

    fn try_from(grid: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::new(grid)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range for {} x {}", self.rows, self.cols);
        &self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_rows() {
        let grid = vec![vec![1.1, 2.2, 3.3], vec![4.4, 5.5, 6.6]];
        let m = Matrix::new(grid.clone()).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.to_rows(), grid);
        assert_eq!(m[(1, 2)], 6.6);
        assert_eq!(m.row(0), &[1.1, 2.2, 3.3]);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Matrix::new(vec![]), Err(MatError::ShapeError(_))));
        assert!(matches!(Matrix::new(vec![vec![]]), Err(MatError::ShapeError(_))));
    }

    #[test]
    fn rejects_ragged_rows() {
        let grid = vec![vec![1.1, 2.2, 3.3], vec![4.4, 5.5]];
        let err = Matrix::new(grid).unwrap_err();
        assert!(matches!(err, MatError::ShapeError(ref msg) if msg.contains("row 1")));
    }

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 5).unwrap();
        assert_eq!(m.shape(), (3, 5));
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zeros_rejects_zero_dimensions() {
        assert_eq!(Matrix::zeros(0, 4), Err(MatError::DimensionError { rows: 0, cols: 4 }));
        assert_eq!(Matrix::zeros(2, 0), Err(MatError::DimensionError { rows: 2, cols: 0 }));
    }

    #[test]
    fn faer_conversion_keeps_layout() {
        let m = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let f = m.to_faer();
        assert_eq!((f.nrows(), f.ncols()), (2, 3));
        assert_eq!(f[(1, 0)], 4.0);
        assert_eq!(Matrix::from_faer(&f).unwrap(), m);
        assert!(Matrix::from_faer(&Mat::<f64>::zeros(0, 3)).is_err());
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let m = Matrix::zeros(2, 2).unwrap();
        let _ = m.get(2, 0);
    }
}

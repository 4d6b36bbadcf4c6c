//! Matrix–matrix multiplication engines.

use crate::error::MatError;
use crate::matrix::Matrix;

/// Common interface for any multiplication algorithm.
pub trait MatMul {
    /// Compute `A · B`. Fails with [`MatError::DimensionMismatch`] when
    /// `a.cols() != b.rows()`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError>;

    /// Short algorithm name for logs.
    fn name(&self) -> &'static str;
}

/// Shape check shared by every engine.
pub(crate) fn check_inner_dims(a: &Matrix, b: &Matrix) -> Result<(), MatError> {
    if a.cols() != b.rows() {
        return Err(MatError::DimensionMismatch {
            op: "multiply",
            expected: format!("{} rows in the right operand", a.cols()),
            got: b.rows().to_string(),
        });
    }
    Ok(())
}

pub mod standard;
pub use standard::{StandardMultiplier, multiply_standard};

pub mod strassen;
pub use strassen::StrassenMultiplier;

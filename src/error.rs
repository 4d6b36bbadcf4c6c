use thiserror::Error;

// Unified error type for densemat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("invalid matrix shape: {0}")]
    ShapeError(String),
    #[error("dimensions of a matrix must be above zero (got {rows} x {cols})")]
    DimensionError { rows: usize, cols: usize },
    #[error("dimension mismatch: {op} needs {expected}, got {got}")]
    DimensionMismatch {
        op: &'static str,
        expected: String,
        got: String,
    },
    #[error("shape mismatch: {left_rows} x {left_cols} vs {right_rows} x {right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("vectors have different dimensionality ({0} vs {1})")]
    VectorDimensionMismatch(usize, usize),
    #[error("cross product is only defined for 3 dimensions (got {0})")]
    CrossProductDimension(usize),
    #[error("cannot build a vector from an empty slice")]
    EmptyVector,
    #[error("vector has zero length")]
    ZeroLength,
}

impl MatError {
    /// Shape mismatch between two same-shape operands, reported as `op`.
    pub(crate) fn same_shape(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        MatError::DimensionMismatch {
            op,
            expected: format!("{} x {}", lhs.0, lhs.1),
            got: format!("{} x {}", rhs.0, rhs.1),
        }
    }
}

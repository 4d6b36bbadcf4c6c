//! Factory for multiplication engines.
//!
//! `MulContext` owns one engine chosen by [`MulKind`]. Building the
//! Strassen engine creates its worker pool, so a context should be built
//! once and reused.

use crate::config::MultiplyOptions;
use crate::error::MatError;
use crate::matrix::Matrix;
use crate::multiply::{MatMul, StandardMultiplier, StrassenMultiplier};
use log::debug;

/// Enum representing the available multiplication algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulKind {
    /// Cubic triple loop.
    Standard,
    /// Strassen recursion with parallel fan-out.
    Strassen,
}

/// A configured multiplication engine.
pub struct MulContext {
    /// The algorithm in use
    pub kind: MulKind,
    engine: Box<dyn MatMul + Send + Sync>,
}

impl MulContext {
    pub fn new(kind: MulKind, opts: &MultiplyOptions) -> Self {
        let engine: Box<dyn MatMul + Send + Sync> = match kind {
            MulKind::Standard => Box::new(StandardMultiplier::new()),
            MulKind::Strassen => Box::new(StrassenMultiplier::with_options(opts)),
        };
        debug!("built {} multiplication context with {:?}", engine.name(), opts);
        Self { kind, engine }
    }

    /// Compute `a · b` with the configured engine.
    ///
    /// # Returns
    /// * `Ok(Matrix)` of shape `a.rows() x b.cols()`
    /// * `Err(MatError::DimensionMismatch)` if `a.cols() != b.rows()`
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        self.engine.multiply(a, b)
    }
}

impl Default for MulContext {
    fn default() -> Self {
        Self::new(MulKind::Strassen, &MultiplyOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_kinds_agree_on_small_input() {
        let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::new(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
        let opts = MultiplyOptions::sequential();
        let standard = MulContext::new(MulKind::Standard, &opts).multiply(&a, &b).unwrap();
        let strassen = MulContext::new(MulKind::Strassen, &opts).multiply(&a, &b).unwrap();
        assert_eq!(standard.to_rows(), vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
        assert_eq!(standard, strassen);
    }

    #[test]
    fn reports_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let ctx = MulContext::new(MulKind::Standard, &MultiplyOptions::default());
        assert_eq!(ctx.kind, MulKind::Standard);
        assert!(ctx.multiply(&a, &a).is_err());
    }
}

//! Relative-tolerance comparison of floating-point values.
//!
//! Strassen recombination accumulates rounding error across recursion
//! levels, so results are compared with `|a - b| / max(|a|, ε) <= tol`
//! rather than bit for bit.

use crate::matrix::Matrix;
use num_traits::Float;

/// Relative tolerance used by [`approx_eq`] (±0.00001 %).
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// `|a - b| / max(|a|, ε) <= tol`, with `a` as the reference value.
pub fn equal_float<T: Float>(a: T, b: T, tol: T) -> bool {
    let diff = (a - b).abs();
    diff / a.abs().max(T::epsilon()) <= tol
}

/// [`equal_float`] at [`DEFAULT_TOLERANCE`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    equal_float(a, b, DEFAULT_TOLERANCE)
}

/// Same shape and every entry of `b` within `tol` of the matching entry of `a`.
pub fn matrices_approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
    a.shape() == b.shape()
        && a.as_slice().iter().zip(b.as_slice()).all(|(&x, &y)| equal_float(x, y, tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_reference_magnitude() {
        assert!(approx_eq(1001.0, 1001.0 + 1e-5));
        assert!(!approx_eq(1.0, 1.001));
        assert!(equal_float(1.0f32, 1.05, 0.1));
        assert!(approx_eq(0.0, 0.0));
        assert!(!approx_eq(0.0, 1e-3));
    }

    #[test]
    fn matrix_comparison_checks_shape() {
        let a = Matrix::new(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::new(vec![vec![1.0], vec![2.0]]).unwrap();
        assert!(matrices_approx_eq(&a, &a, DEFAULT_TOLERANCE));
        assert!(!matrices_approx_eq(&a, &b, DEFAULT_TOLERANCE));
    }
}

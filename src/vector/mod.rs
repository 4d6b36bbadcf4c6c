//! Dense `f64` vectors: arithmetic, dot/cross products, normalization and
//! cosine similarity.
//!
//! The Euclidean length is always computed from the current values; it is
//! never cached, so it cannot go stale after [`Vector::scale`] or
//! [`Vector::normalize`].

use crate::error::MatError;
use std::fmt;

/// A non-empty vector of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Fails with [`MatError::EmptyVector`] for an empty input.
    pub fn new(data: Vec<f64>) -> Result<Self, MatError> {
        if data.is_empty() {
            return Err(MatError::EmptyVector);
        }
        Ok(Self { data })
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Euclidean length ‖v‖₂.
    pub fn length(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn check_dim(&self, other: &Vector) -> Result<(), MatError> {
        if self.dim() != other.dim() {
            return Err(MatError::VectorDimensionMismatch(self.dim(), other.dim()));
        }
        Ok(())
    }

    /// Componentwise sum.
    pub fn sum(&self, other: &Vector) -> Result<Vector, MatError> {
        self.check_dim(other)?;
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect();
        Ok(Vector { data })
    }

    /// `self - other`, via a negated copy of `other`.
    pub fn subtract(&self, other: &Vector) -> Result<Vector, MatError> {
        let mut duplicate = other.clone();
        duplicate.scale(-1.0);
        self.sum(&duplicate)
    }

    /// Multiply every component by `scalar`, in place.
    pub fn scale(&mut self, scalar: f64) {
        for c in &mut self.data {
            *c *= scalar;
        }
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, MatError> {
        self.check_dim(other)?;
        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    /// Cross product; both vectors must be 3-dimensional.
    pub fn cross(&self, other: &Vector) -> Result<Vector, MatError> {
        for dim in [self.dim(), other.dim()] {
            if dim != 3 {
                return Err(MatError::CrossProductDimension(dim));
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// Rescale in place to unit length. Fails with [`MatError::ZeroLength`]
    /// for the zero vector, which is left unchanged.
    pub fn normalize(&mut self) -> Result<(), MatError> {
        let len = self.length();
        if len == 0.0 {
            return Err(MatError::ZeroLength);
        }
        self.scale(1.0 / len);
        Ok(())
    }

    /// `dot(a, b) / (‖a‖ ‖b‖)`.
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f64, MatError> {
        let dot = self.dot(other)?;
        let norms = self.length() * other.length();
        if norms == 0.0 {
            return Err(MatError::ZeroLength);
        }
        Ok(dot / norms)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = MatError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        Vector::new(data)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dim: {}", self.dim())?;
        writeln!(f, "Len: {:.2}", self.length())?;
        let d = &self.data;
        if d.len() > 3 {
            write!(f, "Vec: [{:.1} {:.1} {:.1} ... {:.1}]", d[0], d[1], d[2], d[d.len() - 1])
        } else {
            let parts: Vec<String> = d.iter().map(|c| format!("{c:.1}")).collect();
            write!(f, "Vec: [{}]", parts.join(" "))
        }
    }
}

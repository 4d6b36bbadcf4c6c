//! densemat: dense matrix and vector arithmetic with a parallel Strassen engine
//!
//! This crate provides a validated dense `f64` matrix type, elementwise
//! arithmetic and reductions, a small vector type, and matrix
//! multiplication by either the cubic algorithm or Strassen's
//! divide-and-conquer scheme, whose seven sub-products fan out onto a
//! bounded rayon pool.

pub mod parallel;

pub mod config;
pub mod context;
pub mod error;
pub mod matrix;
pub mod multiply;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use error::*;
pub use matrix::*;
pub use multiply::*;
pub use utils::*;
pub use vector::*;

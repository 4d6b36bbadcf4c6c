//! Context module for densemat.
//!
//! This module provides the context/factory type that selects a
//! multiplication algorithm, builds it once from [`MultiplyOptions`](crate::config::MultiplyOptions)
//! and then serves any number of products.
//!
//! Modules:
//! - [`mul_context`]: Contains the `MulContext` struct and the `MulKind` selector.
//!
//! # Example
//! ```rust
//! use densemat::{Matrix, MulContext, MulKind, MultiplyOptions};
//! let ctx = MulContext::new(MulKind::Strassen, &MultiplyOptions::default());
//! let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let c = ctx.multiply(&a, &a).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![7.0, 10.0], vec![15.0, 22.0]]);
//! ```

pub mod mul_context;
pub use mul_context::{MulContext, MulKind};

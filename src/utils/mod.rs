//! Shared numeric helpers.

pub mod float;
pub use float::{DEFAULT_TOLERANCE, approx_eq, equal_float, matrices_approx_eq};

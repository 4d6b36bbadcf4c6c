//! Matrix module: dense storage, elementwise arithmetic, display and the
//! block geometry used by divide-and-conquer multiplication.

pub mod dense;
pub use dense::Matrix;
pub mod display;
pub mod elementwise;
pub mod geometry;
pub use geometry::Quadrants;

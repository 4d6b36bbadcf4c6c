//! Configuration for the multiplication engines.

pub mod options;
pub use options::MultiplyOptions;

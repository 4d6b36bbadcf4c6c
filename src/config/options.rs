//! API options for the Strassen multiplication engine.
//!
//! This module provides the `MultiplyOptions` struct, used to tune the
//! Strassen engine: the size at or below which recursion falls back to the
//! cubic algorithm, how many recursion levels fan out onto the worker pool,
//! and how many worker threads that pool gets.

/// Side length at or below which Strassen switches to the standard algorithm.
pub const DEFAULT_BASE_CASE_SIZE: usize = 64;

/// Multiplication engine parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplyOptions {
    /// Base-case side length; values below 1 are treated as 1.
    pub base_case_size: usize,

    /// Number of recursion levels that evaluate their seven products in
    /// parallel. `None` derives it from the worker count; `Some(0)` runs
    /// everything on the calling thread.
    pub parallel_depth: Option<usize>,

    /// Worker threads for the pool (`None` = one per logical CPU).
    pub num_threads: Option<usize>,
}

impl Default for MultiplyOptions {
    fn default() -> Self {
        Self {
            base_case_size: DEFAULT_BASE_CASE_SIZE,
            parallel_depth: None,
            num_threads: None,
        }
    }
}

impl MultiplyOptions {
    pub fn with_base_case_size(mut self, size: usize) -> Self {
        self.base_case_size = size;
        self
    }

    pub fn with_parallel_depth(mut self, depth: usize) -> Self {
        self.parallel_depth = Some(depth);
        self
    }

    pub fn with_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Fully sequential evaluation.
    pub fn sequential() -> Self {
        Self::default().with_parallel_depth(0).with_num_threads(1)
    }
}

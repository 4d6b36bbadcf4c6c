//! Bounded fan-out/fan-in execution.
//!
//! An [`Executor`] takes a batch of independent tasks, runs them (possibly
//! concurrently) and returns their results in submission order once every
//! task has finished. Concurrency is bounded by the executor: the rayon
//! backend runs tasks on a fixed-size thread pool, the serial backend on the
//! calling thread.

use crate::config::MultiplyOptions;

/// Runs a batch of independent tasks and waits for all of them.
pub trait Executor {
    /// Number of workers tasks can run on.
    fn workers(&self) -> usize;

    /// Apply `f` to every task and return the results in task order.
    /// Returns only after every task has completed.
    fn fan_out<I, R, F>(&self, tasks: Vec<I>, f: F) -> Vec<R>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> R + Send + Sync;
}

/// Evaluates tasks one after another on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialExecutor;

impl Executor for SerialExecutor {
    fn workers(&self) -> usize {
        1
    }

    fn fan_out<I, R, F>(&self, tasks: Vec<I>, f: F) -> Vec<R>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> R + Send + Sync,
    {
        tasks.into_iter().map(f).collect()
    }
}

#[cfg(feature = "rayon")]
pub mod rayon_exec;
#[cfg(feature = "rayon")]
pub use rayon_exec::RayonExecutor;

pub enum UniverseExecutor {
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
    Serial(SerialExecutor),
}

impl UniverseExecutor {
    /// Pick a backend for `opts`: a single requested thread (or a build
    /// without the `rayon` feature) gives the serial executor.
    pub fn from_options(opts: &MultiplyOptions) -> Self {
        match opts.num_threads {
            Some(1) => UniverseExecutor::Serial(SerialExecutor),
            #[cfg(feature = "rayon")]
            threads => UniverseExecutor::Rayon(RayonExecutor::new(threads)),
            #[cfg(not(feature = "rayon"))]
            _ => UniverseExecutor::Serial(SerialExecutor),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "rayon")]
            UniverseExecutor::Rayon(_) => "rayon",
            UniverseExecutor::Serial(_) => "serial",
        }
    }
}

impl std::fmt::Debug for UniverseExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({} workers)", self.name(), self.workers())
    }
}

impl Executor for UniverseExecutor {
    fn workers(&self) -> usize {
        match self {
            #[cfg(feature = "rayon")]
            UniverseExecutor::Rayon(exec) => exec.workers(),
            UniverseExecutor::Serial(exec) => exec.workers(),
        }
    }

    fn fan_out<I, R, F>(&self, tasks: Vec<I>, f: F) -> Vec<R>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> R + Send + Sync,
    {
        match self {
            #[cfg(feature = "rayon")]
            UniverseExecutor::Rayon(exec) => exec.fan_out(tasks, f),
            UniverseExecutor::Serial(exec) => exec.fan_out(tasks, f),
        }
    }
}

/// Smallest recursion depth `d >= 1` whose `7^d` tasks cover `workers`;
/// zero when there is only one worker.
pub fn default_parallel_depth(workers: usize) -> usize {
    if workers <= 1 {
        return 0;
    }
    let mut depth = 1;
    let mut tasks = 7usize;
    while tasks < workers {
        depth += 1;
        tasks = tasks.saturating_mul(7);
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_preserves_order() {
        let out = SerialExecutor.fan_out(vec![1, 2, 3], |x| x * 10);
        assert_eq!(out, vec![10, 20, 30]);
    }

    #[test]
    fn single_thread_selects_serial() {
        let exec = UniverseExecutor::from_options(&MultiplyOptions::sequential());
        assert_eq!(exec.name(), "serial");
        assert_eq!(exec.workers(), 1);
    }

    #[test]
    fn depth_covers_workers() {
        assert_eq!(default_parallel_depth(1), 0);
        assert_eq!(default_parallel_depth(2), 1);
        assert_eq!(default_parallel_depth(7), 1);
        assert_eq!(default_parallel_depth(8), 2);
        assert_eq!(default_parallel_depth(64), 3);
    }
}

// rayon-based bounded fan-out

use super::Executor;
use log::warn;
use rayon::prelude::*;

/// Runs fan-outs on a dedicated fixed-size rayon pool. Nested fan-outs
/// issued from inside a task reuse the same pool, so the number of threads
/// never grows with recursion depth.
pub struct RayonExecutor {
    pool: Option<rayon::ThreadPool>,
    threads: usize,
}

impl RayonExecutor {
    /// Pool with `threads` workers, or one per logical CPU.
    pub fn new(threads: Option<usize>) -> Self {
        let threads = threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("densemat-worker-{i}"))
            .build();
        match pool {
            Ok(pool) => RayonExecutor { pool: Some(pool), threads },
            Err(err) => {
                // Fall back to the global pool.
                warn!("could not build a {threads}-thread pool ({err}); using the global rayon pool");
                RayonExecutor { pool: None, threads: rayon::current_num_threads() }
            }
        }
    }
}

impl Executor for RayonExecutor {
    fn workers(&self) -> usize {
        self.threads
    }

    fn fan_out<I, R, F>(&self, tasks: Vec<I>, f: F) -> Vec<R>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> R + Send + Sync,
    {
        match &self.pool {
            Some(pool) => pool.install(|| tasks.into_par_iter().map(&f).collect()),
            None => tasks.into_par_iter().map(&f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_follow_task_order() {
        let exec = RayonExecutor::new(Some(2));
        assert_eq!(exec.workers(), 2);
        let out = exec.fan_out((0..7).collect(), |x: u64| x * x);
        assert_eq!(out, vec![0, 1, 4, 9, 16, 25, 36]);
    }

    #[test]
    fn nested_fan_out_completes() {
        let exec = RayonExecutor::new(Some(2));
        let out = exec.fan_out(vec![1u64, 2, 3], |x| exec.fan_out(vec![x; 7], |y| y).iter().sum::<u64>());
        assert_eq!(out, vec![7, 14, 21]);
    }
}

//! Rayon-based parallel executor.

use docnav_traits::Executor;
use rayon::prelude::*;

/// A parallel executor on rayon's global work-stealing pool.
///
/// Indexed parallel iterators collect in input order, so page results come
/// back in the order the pages were listed even though they run concurrently.
///
/// To limit the number of threads, configure the global pool before the
/// first executor is created:
///
/// ```ignore
/// rayon::ThreadPoolBuilder::new().num_threads(4).build_global()?;
/// let executor = RayonExecutor::new();
/// ```
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Size of rayon's global pool when the executor was created.
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

//! Executor trait for abstracting how independent pages are scheduled.
//!
//! The pipeline hands every page of a site to an executor as one work item.
//! Implementations decide whether items run sequentially or in parallel, but
//! must return results in the order of the input items.

use std::fmt::Debug;

/// Runs a function over a batch of independent items.
///
/// # Implementations
///
/// - [`SyncExecutor`]: runs items one after another on the calling thread
/// - `RayonExecutor` (docnav-executor): work-stealing thread pool
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. Results are returned in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Like [`execute_all`](Executor::execute_all) for fallible work. A failing
    /// item does not stop the others.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// Number of items that may run at the same time.
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Sequential executor. Works everywhere and keeps logs in page order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

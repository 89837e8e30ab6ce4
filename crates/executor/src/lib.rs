//! Executor implementations for docnav.
//!
//! Every page of a site is processed on its own, so a site run can spread its
//! pages over rayon's pool or walk them one by one. Results come back in the
//! order the pages were listed either way.
//!
//! ```
//! use docnav_executor::{Executor, ExecutorImpl};
//!
//! let executor = ExecutorImpl::sequential();
//! let sizes = executor.execute_all_fallible(vec!["<p/>", ""], |page: &str| {
//!     if page.is_empty() { Err("empty page") } else { Ok(page.len()) }
//! });
//! assert_eq!(sizes, vec![Ok(4), Err("empty page")]);
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use docnav_traits::{Executor, SyncExecutor};

/// The executor a site run was configured with.
///
/// `Executor` has generic methods and cannot be a trait object; the site
/// pipeline keeps this enum instead and every call is forwarded to the variant.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),

    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

/// Forwards `$call` to whichever executor `$this` holds.
macro_rules! dispatch {
    ($this:expr, $exec:ident => $call:expr) => {
        match $this {
            ExecutorImpl::Sync($exec) => $call,
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon($exec) => $call,
        }
    };
}

impl ExecutorImpl {
    /// The sequential executor, regardless of enabled features.
    pub fn sequential() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        dispatch!(self, exec => exec.execute_all(items, f))
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        dispatch!(self, exec => exec.execute_all_fallible(items, f))
    }

    fn parallelism(&self) -> usize {
        dispatch!(self, exec => exec.parallelism())
    }

    fn name(&self) -> &'static str {
        dispatch!(self, exec => exec.name())
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::sequential()
        }
    }
}

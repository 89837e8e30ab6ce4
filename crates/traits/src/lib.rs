pub mod executor;
pub mod page;

pub use executor::{Executor, SyncExecutor};
pub use page::{InMemoryPageProvider, PageEntry, PageError, PageProvider, site_root_for};

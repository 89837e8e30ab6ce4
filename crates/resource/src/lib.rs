//! Page providers for the docnav site pipeline.
//!
//! ## Available Providers
//!
//! - [`FilesystemPageProvider`]: pages of a site directory on disk
//!
//! ## Re-exports
//!
//! - [`InMemoryPageProvider`]: pre-populated in-memory pages

mod filesystem;

pub use filesystem::{FilesystemPageProvider, PAGE_EXTENSIONS};

pub use docnav_traits::InMemoryPageProvider;

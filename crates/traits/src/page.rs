//! PageProvider trait for abstracting where site pages live.
//!
//! The pipeline lists, loads and stores pages through this trait so it can run
//! against a directory on disk as well as against pages held in memory.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for page storage operations.
#[derive(Error, Debug, Clone)]
pub enum PageError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Failed to load page '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Failed to store page '{path}': {message}")]
    StoreFailed { path: String, message: String },

    #[error("Page path rejected: {0}")]
    PathRejected(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PageError {
    fn from(err: std::io::Error) -> Self {
        PageError::Io(err.to_string())
    }
}

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// `/`-separated path relative to the site directory.
    pub path: String,
    /// Relative path from the page back to the site root: `""`, `"../"`, ...
    pub site_root: String,
}

impl PageEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let site_root = site_root_for(&path);
        Self { path, site_root }
    }
}

/// `"../"` once per directory level of `path`.
///
/// ```
/// assert_eq!(docnav_traits::site_root_for("index.html"), "");
/// assert_eq!(docnav_traits::site_root_for("docs/types/Body.html"), "../../");
/// ```
pub fn site_root_for(path: &str) -> String {
    "../".repeat(path.matches('/').count())
}

/// A source and sink for the pages of one site.
///
/// # Implementations
///
/// - `FilesystemPageProvider` (docnav-resource): pages below a directory
/// - [`InMemoryPageProvider`]: pages held in memory (always available)
pub trait PageProvider: Send + Sync + Debug {
    /// All pages of the site, sorted by path.
    fn list(&self) -> Result<Vec<PageEntry>, PageError>;

    /// The markup of the page at `path`.
    fn load(&self, path: &str) -> Result<String, PageError>;

    /// Writes the processed markup of the page at `path`.
    fn store(&self, path: &str, markup: &str) -> Result<(), PageError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory page store.
#[derive(Debug, Default)]
pub struct InMemoryPageProvider {
    pages: RwLock<BTreeMap<String, String>>,
}

impl InMemoryPageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a page.
    ///
    /// # Errors
    ///
    /// Returns `PageError::StoreFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, markup: impl Into<String>) -> Result<(), PageError> {
        let path = path.into();
        let mut pages = self.pages.write().map_err(|_| PageError::StoreFailed {
            path: path.clone(),
            message: "page store lock poisoned".to_string(),
        })?;
        pages.insert(path, markup.into());
        Ok(())
    }

    /// Current markup of a page, `None` if absent or the lock is poisoned.
    pub fn get(&self, path: &str) -> Option<String> {
        self.pages.read().ok()?.get(path).cloned()
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.pages.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.pages.read().map(|p| p.is_empty()).unwrap_or(true)
    }
}

impl PageProvider for InMemoryPageProvider {
    fn list(&self) -> Result<Vec<PageEntry>, PageError> {
        let pages = self.pages.read().map_err(|_| PageError::LoadFailed {
            path: String::new(),
            message: "page store lock poisoned".to_string(),
        })?;
        Ok(pages.keys().map(|path| PageEntry::new(path.as_str())).collect())
    }

    fn load(&self, path: &str) -> Result<String, PageError> {
        let pages = self.pages.read().map_err(|_| PageError::LoadFailed {
            path: path.to_string(),
            message: "page store lock poisoned".to_string(),
        })?;
        pages
            .get(path)
            .cloned()
            .ok_or_else(|| PageError::NotFound(path.to_string()))
    }

    fn store(&self, path: &str, markup: &str) -> Result<(), PageError> {
        self.add(path, markup)
    }

    fn name(&self) -> &'static str {
        "InMemoryPageProvider"
    }
}

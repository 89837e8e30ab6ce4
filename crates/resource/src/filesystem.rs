//! Filesystem-based page provider.
//!
//! Page paths are validated so that loads and stores stay inside the site
//! directory (and the output directory, when one is set).

use docnav_traits::{PageEntry, PageError, PageProvider};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as pages.
pub const PAGE_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Pages below a site directory.
///
/// Pages are read from the site directory and written back in place, or into
/// a separate output directory that mirrors the site's layout.
#[derive(Debug)]
pub struct FilesystemPageProvider {
    root: PathBuf,
    out_dir: Option<PathBuf>,
}

impl FilesystemPageProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            out_dir: None,
        }
    }

    /// Writes pages below `out_dir` instead of overwriting the sources.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, out_dir: P) -> Self {
        self.out_dir = Some(out_dir.as_ref().to_path_buf());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory pages are written to.
    pub fn output_root(&self) -> &Path {
        self.out_dir.as_deref().unwrap_or(&self.root)
    }

    /// Joins a relative page path onto `base`.
    ///
    /// Absolute paths and paths containing `..` are rejected.
    fn resolve(base: &Path, path: &str) -> Result<PathBuf, PageError> {
        let relative = Path::new(path);
        if relative.is_absolute() {
            return Err(PageError::PathRejected(format!("{path} (absolute path)")));
        }
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    return Err(PageError::PathRejected(format!(
                        "{path} (path traversal blocked)"
                    )));
                }
            }
        }
        Ok(base.join(relative))
    }

    fn is_page(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| PAGE_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
    }

    /// `/`-separated form of a path relative to the site directory.
    fn page_path(relative: &Path) -> Option<String> {
        let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
        parts.map(|parts| parts.join("/"))
    }
}

impl PageProvider for FilesystemPageProvider {
    fn list(&self) -> Result<Vec<PageEntry>, PageError> {
        if !self.root.is_dir() {
            return Err(PageError::NotFound(self.root.display().to_string()));
        }

        // Compared in canonical form so `./site` and `site/build`, or a site
        // reached through a symlink, still match up.
        let root = self.root.canonicalize()?;
        // An output directory nested in the site must not feed back into it.
        let skip = self
            .out_dir
            .as_ref()
            .and_then(|out| out.canonicalize().ok())
            .filter(|out| out.starts_with(&root) && *out != root);

        let mut pages = Vec::new();
        let walker = WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| skip.as_deref() != Some(entry.path()));

        for entry in walker {
            let entry = entry.map_err(|e| PageError::Io(e.to_string()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !Self::is_page(path) {
                continue;
            }
            let Ok(relative) = path.strip_prefix(&root) else {
                continue;
            };
            match Self::page_path(relative) {
                Some(page) => pages.push(PageEntry::new(page)),
                None => log::warn!("skipping page with non UTF-8 path: {}", path.display()),
            }
        }

        pages.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("found {} pages under {}", pages.len(), self.root.display());
        Ok(pages)
    }

    fn load(&self, path: &str) -> Result<String, PageError> {
        let full_path = Self::resolve(&self.root, path)?;
        std::fs::read_to_string(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PageError::NotFound(path.to_string())
            } else {
                PageError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn store(&self, path: &str, markup: &str) -> Result<(), PageError> {
        let full_path = Self::resolve(self.output_root(), path)?;
        let store_failed = |e: std::io::Error| PageError::StoreFailed {
            path: path.to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(store_failed)?;
        }
        std::fs::write(&full_path, markup).map_err(store_failed)
    }

    fn name(&self) -> &'static str {
        "FilesystemPageProvider"
    }
}

use std::path::PathBuf;

/// Where the doc-link table comes from.
///
/// JSON tables are merged over the built-in table; their entries replace
/// built-in entries with the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkSource {
    /// The site's API reference table.
    #[default]
    Builtin,
    /// A JSON object of `"Name": "path.html"` pairs read from a file.
    File(PathBuf),
    /// A JSON object of `"Name": "path.html"` pairs.
    Json(String),
}

/// Selects how the pages of a site are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutorKind {
    /// Rayon's work-stealing pool when the `rayon-executor` feature is
    /// enabled, sequential otherwise. (Default)
    #[default]
    Parallel,
    /// One page after another on the calling thread.
    Sequential,
}

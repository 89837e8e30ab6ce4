pub mod fixtures;

use docnav::{PageContext, PipelineBuilder, PipelineError, ProcessedPage};
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Runs the table-of-contents pass alone over `source`.
pub fn number_page(source: &str) -> Result<ProcessedPage, PipelineError> {
    PipelineBuilder::new()
        .with_doclinks(false)
        .build_processor()?
        .process(source, &PageContext::default())
}

/// Runs the doc-link pass alone over `source`.
pub fn link_page(source: &str, site_root: &str) -> Result<ProcessedPage, PipelineError> {
    PipelineBuilder::new()
        .with_toc(false)
        .build_processor()?
        .process(source, &PageContext::new(site_root))
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Whether any `<a>` element of `html` opens inside another one.
pub fn has_nested_anchor(html: &str) -> bool {
    let mut depth = 0usize;
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        if rest.starts_with("a ") || rest.starts_with("a>") {
            if depth > 0 {
                return true;
            }
            depth += 1;
        } else if rest.starts_with("/a>") {
            depth = depth.saturating_sub(1);
        }
    }
    false
}

/// Writes `pages` below `root`, creating directories as needed.
pub fn write_site(root: &Path, pages: &[(&str, &str)]) -> std::io::Result<()> {
    for (path, markup) in pages {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(full, markup)?;
    }
    Ok(())
}

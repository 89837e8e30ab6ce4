// src/error.rs
use docnav_doclinks::LinkTableError;
use docnav_dom::DomError;
use docnav_toc::TocError;
use docnav_traits::PageError;
use thiserror::Error;

/// Error type for processing a page or a site.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document error: {0}")]
    Dom(#[from] DomError),

    #[error("Table of contents failed: {0}")]
    Toc(#[from] TocError),

    #[error("Link table error: {0}")]
    LinkTable(#[from] LinkTableError),

    #[error("Page storage error: {0}")]
    Page(#[from] PageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

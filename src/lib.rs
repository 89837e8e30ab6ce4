//! # docnav
//!
//! Post-processes the pages of a static documentation site: numbers chapters
//! and sections, renders tables of contents into contents containers and
//! links type names in bold prose to their API reference pages.
//!
//! ```ignore
//! use docnav::{FilesystemPageProvider, PipelineBuilder};
//! use std::sync::Arc;
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let report = pipeline.run(Arc::new(FilesystemPageProvider::new("site")))?;
//! assert!(report.is_success());
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    ExecutorKind, LinkSource, PageContext, PageOutcome, PagePlan, PageProcessor, PageReport,
    PipelineBuilder, ProcessedPage, SitePipeline, SiteReport,
};

pub use docnav_doclinks::{DocLinker, LinkTable};
pub use docnav_dom::Document;
pub use docnav_resource::FilesystemPageProvider;
pub use docnav_toc::{TocBuilder, TocError, TocOptions, slugify_title};
pub use docnav_traits::{InMemoryPageProvider, PageEntry, PageProvider};
pub use docnav_types::{Chapter, ContentsContainer, Edit, Fragment, Section};

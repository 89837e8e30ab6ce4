//! Page and site processing.
//!
//! - [`PipelineBuilder`]: configures the passes and builds processors
//! - [`PageProcessor`]: runs the enabled passes over one page
//! - [`SitePipeline`]: runs a processor over every page of a [`PageProvider`](docnav_traits::PageProvider)
//!
//! # Example
//!
//! ```ignore
//! use docnav::{PageContext, PipelineBuilder};
//!
//! let processor = PipelineBuilder::new().with_doclinks(false).build_processor()?;
//! let page = processor.process(&source, &PageContext::new("../"))?;
//! println!("{}", page.html);
//! ```

mod builder;
pub mod config;
mod processor;
mod site;

pub use builder::PipelineBuilder;
pub use config::{ExecutorKind, LinkSource};
pub use processor::{PageContext, PagePlan, PageProcessor, ProcessedPage};
pub use site::{PageOutcome, PageReport, SitePipeline, SiteReport};

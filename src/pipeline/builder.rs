// src/pipeline/builder.rs
use super::config::{ExecutorKind, LinkSource};
use super::processor::PageProcessor;
use super::site::SitePipeline;
use crate::error::PipelineError;
use docnav_doclinks::{DocLinker, LinkTable};
use docnav_executor::ExecutorImpl;
use docnav_toc::{TocBuilder, TocOptions};
use std::path::Path;
use std::sync::Arc;

/// A builder for [`PageProcessor`]s and [`SitePipeline`]s.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    toc: bool,
    doclinks: bool,
    toc_options: TocOptions,
    links: LinkSource,
    docs_dir: Option<String>,
    executor: ExecutorKind,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            toc: true,
            doclinks: true,
            toc_options: TocOptions::default(),
            links: LinkSource::default(),
            docs_dir: None,
            executor: ExecutorKind::default(),
        }
    }
}

impl PipelineBuilder {
    /// Creates a builder with both passes enabled and the built-in link table.
    pub fn new() -> Self { Default::default() }

    /// Enables or disables chapter numbering and table-of-contents rendering.
    pub fn with_toc(mut self, enabled: bool) -> Self { self.toc = enabled; self }

    /// Enables or disables linking of type names to the API reference.
    pub fn with_doclinks(mut self, enabled: bool) -> Self { self.doclinks = enabled; self }

    /// Sets the marker classes and slug rules of the pages.
    pub fn with_toc_options(mut self, options: TocOptions) -> Self { self.toc_options = options; self }

    pub fn with_links(mut self, links: LinkSource) -> Self { self.links = links; self }

    /// Merges the JSON link table in `path` over the built-in table.
    pub fn with_link_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_links(LinkSource::File(path.as_ref().to_path_buf()))
    }

    /// Merges a JSON link table over the built-in table.
    pub fn with_link_source(self, json: impl Into<String>) -> Self {
        self.with_links(LinkSource::Json(json.into()))
    }

    /// Directory of the API reference below the site root. Defaults to `docs/`.
    pub fn with_docs_dir(mut self, docs_dir: impl Into<String>) -> Self { self.docs_dir = Some(docs_dir.into()); self }

    /// Selects how the pages of a site are scheduled.
    pub fn with_executor(mut self, executor: ExecutorKind) -> Self { self.executor = executor; self }

    /// The link table the doc-link pass will use.
    pub fn link_table(&self) -> Result<LinkTable, PipelineError> {
        let mut table = LinkTable::builtin().clone();
        match &self.links {
            LinkSource::Builtin => {}
            LinkSource::File(path) => table.extend(LinkTable::from_file(path)?),
            LinkSource::Json(source) => table.extend(LinkTable::from_json(source)?),
        }
        Ok(table)
    }

    /// The built-in table is shared rather than copied when nothing is merged over it.
    fn shared_link_table(&self) -> Result<Arc<LinkTable>, PipelineError> {
        match &self.links {
            LinkSource::Builtin => Ok(LinkTable::shared_builtin()),
            _ => Ok(Arc::new(self.link_table()?)),
        }
    }

    /// Builds a processor for single pages.
    pub fn build_processor(&self) -> Result<PageProcessor, PipelineError> {
        if !self.toc && !self.doclinks {
            return Err(PipelineError::Config(
                "Both passes are disabled. Enable the table of contents or doc links.".to_string(),
            ));
        }

        let toc = self.toc.then(|| TocBuilder::new(self.toc_options.clone()));
        let doclinks = if self.doclinks {
            let linker = DocLinker::new(self.shared_link_table()?);
            Some(match &self.docs_dir {
                Some(dir) => linker.with_docs_dir(dir.as_str()),
                None => linker,
            })
        } else {
            None
        };

        Ok(PageProcessor::new(toc, doclinks))
    }

    /// Consumes the builder and creates the [`SitePipeline`].
    pub fn build(self) -> Result<SitePipeline, PipelineError> {
        let processor = self.build_processor()?;
        let executor = self.select_executor();
        log::debug!("Selected {:?} for site runs.", executor);
        Ok(SitePipeline::new(processor, executor))
    }

    fn select_executor(&self) -> ExecutorImpl {
        match self.executor {
            ExecutorKind::Sequential => ExecutorImpl::sequential(),
            ExecutorKind::Parallel => ExecutorImpl::default(),
        }
    }
}

use super::processor::{PageContext, PageProcessor, ProcessedPage};
use crate::error::PipelineError;
use docnav_executor::{Executor, ExecutorImpl};
use docnav_traits::{PageEntry, PageProvider};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// What happened to one page of a site run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PageOutcome {
    #[serde(rename_all = "camelCase")]
    Processed {
        chapters: usize,
        toc_edits: usize,
        doclink_edits: usize,
    },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub path: String,
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

impl PageReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, PageOutcome::Failed { .. })
    }
}

/// Per-page outcomes of a site run, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteReport {
    pub pages: Vec<PageReport>,
}

impl SiteReport {
    pub fn processed(&self) -> usize {
        self.pages.len() - self.failures().count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &PageReport> {
        self.pages.iter().filter(|page| page.is_failure())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Runs a [`PageProcessor`] over every page of a site.
#[derive(Debug, Clone)]
pub struct SitePipeline {
    processor: Arc<PageProcessor>,
    executor: ExecutorImpl,
}

impl SitePipeline {
    pub fn new(processor: PageProcessor, executor: ExecutorImpl) -> Self {
        Self {
            processor: Arc::new(processor),
            executor,
        }
    }

    pub fn processor(&self) -> &PageProcessor {
        &self.processor
    }

    pub fn executor(&self) -> &ExecutorImpl {
        &self.executor
    }

    /// Processes every page of `provider` and stores the results back through it.
    ///
    /// A failing page is reported and does not stop the others. Only failing to
    /// list the site is an error.
    pub fn run(&self, provider: Arc<dyn PageProvider>) -> Result<SiteReport, PipelineError> {
        let start = Instant::now();
        let entries = provider.list()?;
        log::info!(
            "Processing {} pages from {} with {} (parallelism {}).",
            entries.len(),
            provider.name(),
            self.executor.name(),
            self.executor.parallelism()
        );

        let paths: Vec<String> = entries.iter().map(|entry| entry.path.clone()).collect();
        let processor = Arc::clone(&self.processor);
        let results = self.executor.execute_all_fallible(entries, move |entry: PageEntry| {
            process_entry(&processor, provider.as_ref(), &entry).map(|page| PageOutcome::Processed {
                chapters: page.chapters.len(),
                toc_edits: page.toc_edits,
                doclink_edits: page.doclink_edits,
            })
        });

        let pages = paths
            .into_iter()
            .zip(results)
            .map(|(path, result)| {
                let outcome = result.unwrap_or_else(|e| {
                    log::warn!("Failed to process '{}': {}", path, e);
                    PageOutcome::Failed {
                        error: e.to_string(),
                    }
                });
                PageReport { path, outcome }
            })
            .collect();

        let report = SiteReport { pages };
        log::info!(
            "Processed {} pages ({} failed) in {:.2?}.",
            report.processed(),
            report.failures().count(),
            start.elapsed()
        );
        Ok(report)
    }
}

fn process_entry(
    processor: &PageProcessor,
    provider: &dyn PageProvider,
    entry: &PageEntry,
) -> Result<ProcessedPage, PipelineError> {
    let source = provider.load(&entry.path)?;
    let page = processor.process(&source, &PageContext::from(entry))?;
    provider.store(&entry.path, &page.html)?;
    log::debug!(
        "'{}': {} chapters, {} toc edits, {} doc links",
        entry.path,
        page.chapters.len(),
        page.toc_edits,
        page.doclink_edits
    );
    Ok(page)
}

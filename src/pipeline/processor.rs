use crate::error::PipelineError;
use docnav_doclinks::DocLinker;
use docnav_dom::Document;
use docnav_toc::TocBuilder;
use docnav_traits::PageEntry;
use docnav_types::{Chapter, ContentsContainer, Edit};
use serde::Serialize;

/// Where a page sits in its site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Relative path from the page to the site root, e.g. `""` or `"../"`.
    pub site_root: String,
}

impl PageContext {
    pub fn new(site_root: impl Into<String>) -> Self {
        Self {
            site_root: site_root.into(),
        }
    }
}

impl From<&PageEntry> for PageContext {
    fn from(entry: &PageEntry) -> Self {
        Self::new(entry.site_root.as_str())
    }
}

/// The edits planned for one page.
///
/// Doc-link edits are planned on the page after the table-of-contents edits
/// were applied, so their targets may include nodes those edits created.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlan {
    pub chapters: Vec<Chapter>,
    pub containers: Vec<ContentsContainer>,
    pub toc: Vec<Edit>,
    pub doclinks: Vec<Edit>,
}

impl PagePlan {
    pub fn edit_count(&self) -> usize {
        self.toc.len() + self.doclinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

/// A page after processing.
#[derive(Debug, Clone)]
pub struct ProcessedPage {
    /// The rewritten page. Identical to the source when no edits were made.
    pub html: String,
    pub chapters: Vec<Chapter>,
    pub toc_edits: usize,
    pub doclink_edits: usize,
}

impl ProcessedPage {
    pub fn changed(&self) -> bool {
        self.toc_edits + self.doclink_edits > 0
    }
}

/// Runs the enabled passes over single pages.
///
/// Holds only immutable configuration, so one processor can be shared by
/// every worker of a site run.
#[derive(Debug, Clone)]
pub struct PageProcessor {
    toc: Option<TocBuilder>,
    doclinks: Option<DocLinker>,
}

impl PageProcessor {
    /// `None` disables a pass.
    pub fn new(toc: Option<TocBuilder>, doclinks: Option<DocLinker>) -> Self {
        Self { toc, doclinks }
    }

    pub fn toc(&self) -> Option<&TocBuilder> {
        self.toc.as_ref()
    }

    pub fn doclinks(&self) -> Option<&DocLinker> {
        self.doclinks.as_ref()
    }

    /// Plans and applies every enabled pass, then serializes the page.
    pub fn process(&self, source: &str, context: &PageContext) -> Result<ProcessedPage, PipelineError> {
        let mut doc = Document::parse(source)?;
        let plan = self.run(&mut doc, context)?;

        // Untouched pages keep their exact bytes.
        let html = if plan.is_empty() {
            source.to_string()
        } else {
            doc.to_markup()?
        };

        Ok(ProcessedPage {
            html,
            chapters: plan.chapters,
            toc_edits: plan.toc.len(),
            doclink_edits: plan.doclinks.len(),
        })
    }

    /// The edits [`process`](Self::process) would make, without serializing.
    pub fn plan(&self, source: &str, context: &PageContext) -> Result<PagePlan, PipelineError> {
        let mut doc = Document::parse(source)?;
        self.run(&mut doc, context)
    }

    fn run(&self, doc: &mut Document, context: &PageContext) -> Result<PagePlan, PipelineError> {
        let mut plan = PagePlan::default();

        if let Some(toc) = &self.toc {
            let toc_plan = toc.plan(doc)?;
            doc.apply(&toc_plan.edits)?;
            plan.chapters = toc_plan.chapters;
            plan.containers = toc_plan.containers;
            plan.toc = toc_plan.edits;
        }

        if let Some(linker) = &self.doclinks {
            plan.doclinks = linker.plan(doc, &context.site_root);
            doc.apply(&plan.doclinks)?;
        }

        log::debug!(
            "planned {} toc and {} doc-link edits",
            plan.toc.len(),
            plan.doclinks.len()
        );
        Ok(plan)
    }
}

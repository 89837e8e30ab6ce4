//! # docnav-toc
//!
//! Numbers the chapters and sections of a documentation page and renders
//! cross-referencing tables of contents into its contents containers.
//!
//! Planning is pure: [`TocBuilder::plan`] reads a [`Document`] and returns the
//! edits to make. Numbering happens in one forward pass per chapter, so labels,
//! identifiers and later lookups by slug agree; rendering runs afterwards over
//! the complete chapter list, so any number of containers (a sidebar and an
//! in-page list, say) share one numbering.
//!
//! ```ignore
//! let mut doc = Document::parse(&page)?;
//! let plan = TocBuilder::default().plan(&doc)?;
//! doc.apply(&plan.edits)?;
//! ```

pub mod error;
mod numbering;
pub mod options;
mod render;
mod slug;

pub use error::TocError;
pub use options::TocOptions;
pub use slug::slugify_title;

use docnav_dom::Document;
use docnav_types::{Chapter, ContentsContainer, Edit};

/// Everything the builder derived from one page.
#[derive(Debug, Clone, Default)]
pub struct TocPlan {
    pub chapters: Vec<Chapter>,
    pub containers: Vec<ContentsContainer>,
    /// Numbering edits followed by rendering edits.
    pub edits: Vec<Edit>,
}

impl TocPlan {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TocBuilder {
    options: TocOptions,
}

impl TocBuilder {
    pub fn new(options: TocOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TocOptions {
        &self.options
    }

    /// The numbered chapter projection of `doc`.
    pub fn collect_chapters(&self, doc: &Document) -> Result<Vec<Chapter>, TocError> {
        numbering::collect_chapters(doc, &self.options)
    }

    /// Contents containers of `doc` in document order.
    pub fn collect_containers(&self, doc: &Document) -> Vec<ContentsContainer> {
        render::collect_containers(doc, &self.options)
    }

    /// Plans numbering and rendering for `doc`.
    ///
    /// A page without contents containers is left alone: the plan is empty and
    /// chapter markup is not even inspected.
    pub fn plan(&self, doc: &Document) -> Result<TocPlan, TocError> {
        let containers = self.collect_containers(doc);
        if containers.is_empty() {
            log::debug!("no '{}' containers; skipping table of contents", self.options.contents_class);
            return Ok(TocPlan::default());
        }

        let chapters = self.collect_chapters(doc)?;
        let mut edits = numbering::numbering_edits(&chapters);
        edits.extend(render::render_edits(&containers, &chapters));
        log::debug!(
            "numbered {} chapters for {} containers ({} edits)",
            chapters.len(),
            containers.len(),
            edits.len()
        );

        Ok(TocPlan {
            chapters,
            containers,
            edits,
        })
    }
}

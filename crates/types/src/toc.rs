use crate::ids::{AnchorId, NodeId};
use serde::Serialize;

/// A numbered chapter found in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// 1-based position in document order.
    pub index: usize,
    /// Inner markup of the chapter's title element, as written in the page.
    pub title: String,
    /// Identifier derived from the title; also the chapter element's `id`.
    pub slug: AnchorId,
    /// The chapter marker element.
    pub node: NodeId,
    /// The chapter's title element.
    pub title_node: NodeId,
    pub sections: Vec<Section>,
}

impl Chapter {
    /// The visible number, e.g. `"2"`.
    pub fn label(&self) -> String {
        self.index.to_string()
    }
}

/// A numbered section inside a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// 1-based position within the chapter.
    pub index: usize,
    pub chapter_index: usize,
    /// Inner markup of the section marker.
    pub title: String,
    /// Identifier derived from the section title alone.
    pub slug: String,
    /// Composite identifier `<chapter-slug>.<section-slug>`.
    pub anchor: AnchorId,
    pub node: NodeId,
}

impl Section {
    /// The visible number, e.g. `"2.1"`.
    pub fn label(&self) -> String {
        format!("{}.{}", self.chapter_index, self.index)
    }
}

/// A placeholder element that receives a rendered table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentsContainer {
    pub node: NodeId,
    /// Slug of the chapter this container belongs to, taken from its `id`.
    /// `None` when the container is not scoped to any chapter.
    pub chapter_slug: Option<String>,
}

impl ContentsContainer {
    /// Whether `chapter` is the current chapter for this container.
    pub fn is_current(&self, chapter: &Chapter) -> bool {
        self.chapter_slug.as_deref() == Some(chapter.slug.as_str())
    }
}

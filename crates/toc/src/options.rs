/// Markup contract of the pages being numbered.
///
/// The defaults match the documentation site's templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// Class marking a chapter element.
    pub chapter_class: String,
    /// Class marking the title element inside a chapter.
    pub title_class: String,
    /// Class marking a section element inside a chapter.
    pub section_class: String,
    /// Class marking a placeholder that receives the rendered contents.
    pub contents_class: String,
    /// Prefix of a contents container's `id`; the rest is the current chapter's slug.
    pub contents_id_prefix: String,
    /// Replace `&amp;` with `__` when deriving slugs.
    pub escape_ampersands: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            chapter_class: "chapter".to_string(),
            title_class: "title".to_string(),
            section_class: "section".to_string(),
            contents_class: "contents".to_string(),
            contents_id_prefix: "contents-".to_string(),
            escape_ampersands: true,
        }
    }
}

/// Classes of the elements the builder generates.
pub(crate) mod classes {
    pub const CHAPTER_NUMBER: &str = "chapter-number";
    pub const SECTION_NUMBER: &str = "section-number";
    pub const DISABLED: &str = "disabled";
    pub const SECTION_CONTENTS: &str = "section-contents";
    pub const SUBCONTENT: &str = "subcontent";
}

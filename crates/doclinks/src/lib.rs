//! # docnav-doclinks
//!
//! Turns type names written in bold prose (`<b>Body</b>`) into links to their
//! API documentation pages.
//!
//! Only a `<b>` whose first child is a text node exactly equal to a known name
//! is linked; its children are replaced by
//! `<a class="doclink" href="{site_root}docs/{path}">Name</a>`. Unknown names
//! are left as they are, and `<b id="disabled-doc">` opts an element out. A
//! `<b>` that already sits inside a link is skipped, since HTML does not
//! allow nested anchors.

pub mod error;
mod table;

pub use error::LinkTableError;
pub use table::LinkTable;

use docnav_dom::Document;
use docnav_types::{Edit, Fragment};
use std::sync::Arc;

const BOLD_ELEMENT: &str = "b";
const LINK_ELEMENT: &str = "a";
const DISABLED_ID: &str = "disabled-doc";
const LINK_CLASS: &str = "doclink";
const DEFAULT_DOCS_DIR: &str = "docs/";

#[derive(Debug, Clone)]
pub struct DocLinker {
    table: Arc<LinkTable>,
    docs_dir: String,
}

impl Default for DocLinker {
    fn default() -> Self {
        Self::new(LinkTable::shared_builtin())
    }
}

impl DocLinker {
    pub fn new(table: Arc<LinkTable>) -> Self {
        Self {
            table,
            docs_dir: DEFAULT_DOCS_DIR.to_string(),
        }
    }

    /// Directory of the API reference below the site root. Defaults to `docs/`.
    pub fn with_docs_dir(mut self, docs_dir: impl Into<String>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }

    pub fn table(&self) -> &LinkTable {
        &self.table
    }

    /// Plans the links for `doc`. `site_root` is the relative path from the
    /// page to the site root, e.g. `""` or `"../"`.
    pub fn plan(&self, doc: &Document, site_root: &str) -> Vec<Edit> {
        let mut edits = Vec::new();
        for bold in doc.elements_named(doc.root(), BOLD_ELEMENT) {
            if doc.attribute(bold, "id") == Some(DISABLED_ID) {
                continue;
            }
            if doc
                .ancestors(bold)
                .any(|n| doc.element_name(n) == Some(LINK_ELEMENT))
            {
                continue;
            }
            let Some(name) = doc.first_child(bold).and_then(|c| doc.text(c)) else {
                continue;
            };
            let Some(path) = self.table.get(name) else {
                log::trace!("no documentation page for '{name}'");
                continue;
            };

            edits.push(Edit::ReplaceChildren {
                target: bold,
                fragment: Fragment::element(LINK_ELEMENT)
                    .with_attr("class", LINK_CLASS)
                    .with_attr("href", format!("{site_root}{}{path}", self.docs_dir))
                    .with_child(Fragment::text(name)),
            });
        }
        log::debug!("linked {} type names", edits.len());
        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
<p>A <b>Body</b> owns <b>Shapes</b>; a <b>Widget</b> is unknown.</p>
<p><b id="disabled-doc">Space</b> <b><i>Space</i></b> <b>Space </b></p>
</body></html>"#;

    fn hrefs(edits: &[Edit]) -> Vec<&str> {
        edits
            .iter()
            .filter_map(|e| e.fragment().and_then(|f| f.attr("href")))
            .collect()
    }

    #[test]
    fn test_links_known_names_only() {
        let doc = Document::parse(PAGE).unwrap();
        let edits = DocLinker::default().plan(&doc, "../");
        assert_eq!(
            hrefs(&edits),
            [
                "../docs/types/nape/phys/Body.html",
                "../docs/types/nape/shape/Shape.html"
            ]
        );
        assert_eq!(edits[1].fragment().unwrap().text_content(), "Shapes");
        assert_eq!(edits[0].fragment().unwrap().attr("class"), Some("doclink"));
    }

    #[test]
    fn test_disabled_and_non_text_bold_is_skipped() {
        let doc = Document::parse(PAGE).unwrap();
        let edits = DocLinker::default().plan(&doc, "");
        // "Space" appears three times but never as a plain, enabled, exact name
        assert!(hrefs(&edits).iter().all(|h| !h.contains("Space")));
    }

    #[test]
    fn test_bold_inside_a_link_is_skipped() {
        let doc = Document::parse(
            r##"<p><a href="#Using_Body"><span>1</span> Using <b>Body</b></a> and <b>Body</b></p>"##,
        )
        .unwrap();
        let edits = DocLinker::default().plan(&doc, "");

        assert_eq!(edits.len(), 1);
        let p = doc.first_child(doc.root()).unwrap();
        assert_eq!(doc.parent(edits[0].target()), Some(p));
    }

    #[test]
    fn test_default_linkers_share_the_builtin_table() {
        let a = DocLinker::default();
        let b = DocLinker::default();
        assert!(std::ptr::eq(a.table(), b.table()));
        assert!(std::ptr::eq(a.table(), LinkTable::builtin()));
    }

    #[test]
    fn test_custom_table_and_docs_dir() {
        let table: LinkTable = [("Widget".to_string(), "Widget.html".to_string())]
            .into_iter()
            .collect();
        let linker = DocLinker::new(Arc::new(table)).with_docs_dir("api/");
        let doc = Document::parse(PAGE).unwrap();
        assert_eq!(hrefs(&linker.plan(&doc, "")), ["api/Widget.html"]);
    }

    #[test]
    fn test_applied_links_serialize() {
        let mut doc = Document::parse("<p><b>Vec2</b></p>").unwrap();
        let edits = DocLinker::default().plan(&doc, "");
        doc.apply(&edits).unwrap();
        assert_eq!(
            doc.to_markup().unwrap(),
            r#"<p><b><a class="doclink" href="docs/types/nape/geom/Vec2.html">Vec2</a></b></p>"#
        );
    }
}

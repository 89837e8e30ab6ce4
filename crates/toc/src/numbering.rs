//! First pass: find chapters and sections, number them, derive their anchors.

use crate::error::TocError;
use crate::options::{TocOptions, classes};
use crate::slug::slugify_title;
use docnav_dom::Document;
use docnav_types::{AnchorId, Chapter, Edit, Fragment, Section};
use std::collections::HashSet;

pub(crate) fn collect_chapters(doc: &Document, options: &TocOptions) -> Result<Vec<Chapter>, TocError> {
    let mut chapters = Vec::new();
    let mut seen_slugs = HashSet::new();

    for (i, node) in doc.elements_with_class(doc.root(), &options.chapter_class).enumerate() {
        let index = i + 1;
        let title_node = doc
            .elements_with_class(node, &options.title_class)
            .next()
            .ok_or(TocError::MissingTitle { chapter: index })?;
        if doc.elements_with_class(node, classes::CHAPTER_NUMBER).next().is_some() {
            return Err(TocError::AlreadyNumbered { chapter: index });
        }

        let title = doc.inner_markup(title_node)?;
        let slug = slugify_title(&title, options.escape_ampersands);
        if !seen_slugs.insert(slug.clone()) {
            log::warn!("chapter {index} repeats the anchor '{slug}'; links to it will resolve to the first one");
        }

        let sections = doc
            .elements_with_class(node, &options.section_class)
            .enumerate()
            .map(|(j, section)| -> Result<Section, TocError> {
                let section_title = doc.inner_markup(section)?;
                let section_slug = slugify_title(&section_title, options.escape_ampersands);
                Ok(Section {
                    index: j + 1,
                    chapter_index: index,
                    anchor: AnchorId::from(format!("{slug}.{section_slug}")),
                    title: section_title,
                    slug: section_slug,
                    node: section,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        chapters.push(Chapter {
            index,
            title,
            slug: AnchorId::from(slug),
            node,
            title_node,
            sections,
        });
    }

    Ok(chapters)
}

/// Labels, line breaks and identifiers for every chapter and section.
pub(crate) fn numbering_edits(chapters: &[Chapter]) -> Vec<Edit> {
    let mut edits = Vec::new();
    for chapter in chapters {
        edits.push(Edit::InsertBefore {
            target: chapter.title_node,
            fragment: number_label(classes::CHAPTER_NUMBER, chapter.label()),
        });
        edits.push(Edit::InsertAfter {
            target: chapter.title_node,
            fragment: Fragment::line_break(),
        });
        edits.push(Edit::SetAttribute {
            target: chapter.node,
            name: "id".to_string(),
            value: chapter.slug.to_string(),
        });

        for section in &chapter.sections {
            edits.push(Edit::InsertBefore {
                target: section.node,
                fragment: number_label(classes::SECTION_NUMBER, section.label()),
            });
            edits.push(Edit::InsertAfter {
                target: section.node,
                fragment: Fragment::line_break(),
            });
            edits.push(Edit::SetAttribute {
                target: section.node,
                name: "id".to_string(),
                value: section.anchor.to_string(),
            });
        }
    }
    edits
}

fn number_label(class: &str, label: String) -> Fragment {
    Fragment::element("span")
        .with_attr("class", class)
        .with_child(Fragment::text(label))
}

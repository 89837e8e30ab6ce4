//! Second pass: render the numbered chapters into every contents container.

use crate::options::{TocOptions, classes};
use docnav_dom::Document;
use docnav_types::{Chapter, ContentsContainer, Edit, Fragment, Section};

pub(crate) fn collect_containers(doc: &Document, options: &TocOptions) -> Vec<ContentsContainer> {
    doc.elements_with_class(doc.root(), &options.contents_class)
        .map(|node| ContentsContainer {
            node,
            chapter_slug: doc
                .attribute(node, "id")
                .and_then(|id| id.strip_prefix(options.contents_id_prefix.as_str()))
                .map(str::to_string),
        })
        .collect()
}

pub(crate) fn render_edits(containers: &[ContentsContainer], chapters: &[Chapter]) -> Vec<Edit> {
    let mut edits = Vec::new();
    for container in containers {
        for chapter in chapters {
            let append = |fragment: Fragment| Edit::Append {
                target: container.node,
                fragment,
            };
            if container.is_current(chapter) {
                edits.push(append(current_chapter_line(chapter)));
                edits.push(append(Fragment::line_break()));
                edits.push(append(section_table(chapter)));
            } else {
                edits.push(append(chapter_link_line(chapter)));
                edits.push(append(Fragment::line_break()));
            }
        }
    }
    edits
}

/// `<span><a href="#slug">i title</a></span>`
fn chapter_link_line(chapter: &Chapter) -> Fragment {
    Fragment::element("span").with_child(
        Fragment::element("a")
            .with_attr("href", chapter.slug.href())
            .with_child(Fragment::text(format!("{} ", chapter.label())))
            .with_child(Fragment::markup(chapter.title.as_str())),
    )
}

/// `<span><a class="disabled">i title</a></span>`
fn current_chapter_line(chapter: &Chapter) -> Fragment {
    Fragment::element("span").with_child(
        Fragment::element("a")
            .with_attr("class", classes::DISABLED)
            .with_child(Fragment::text(format!("{} ", chapter.label())))
            .with_child(Fragment::markup(chapter.title.as_str())),
    )
}

fn section_table(chapter: &Chapter) -> Fragment {
    chapter.sections.iter().fold(
        Fragment::element("table").with_attr("class", classes::SECTION_CONTENTS),
        |table, section| {
            table.with_child(
                Fragment::element("tr").with_child(
                    Fragment::element("td")
                        .with_child(section_link(section))
                        .with_child(Fragment::line_break()),
                ),
            )
        },
    )
}

/// `<span class="subcontent"><a href="#chapter.section">i.j title</a></span>`
fn section_link(section: &Section) -> Fragment {
    Fragment::element("span")
        .with_attr("class", classes::SUBCONTENT)
        .with_child(
            Fragment::element("a")
                .with_attr("href", section.anchor.href())
                .with_child(Fragment::text(format!("{} ", section.label())))
                .with_child(Fragment::markup(section.title.as_str())),
        )
}

mod common;

use common::fixtures::{chapter, container, page, shapes_and_joints};
use common::{TestResult, count, number_page};
use docnav::{Document, PipelineError, TocBuilder, TocError, slugify_title};
use std::collections::HashSet;

#[test]
fn test_shapes_and_joints_scenario() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = number_page(&shapes_and_joints())?.html;

    assert!(html.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>"));
    assert!(html.contains(
        r#"<div class="chapter" id="Intro"><span class="chapter-number">1</span><h2 class="title">Intro</h2><br/></div>"#
    ));
    assert!(html.contains(
        r#"<div class="chapter" id="Shapes____Joints"><span class="chapter-number">2</span><h2 class="title">Shapes &amp; Joints</h2><br/>"#
    ));
    assert!(html.contains(
        r#"<span class="section-number">2.1</span><h3 class="section" id="Shapes____Joints.Pivot_Joint">Pivot Joint</h3><br/>"#
    ));
    assert!(html.contains(concat!(
        r#"<div class="contents" id="contents-Shapes____Joints">"#,
        r##"<span><a href="#Intro">1 Intro</a></span><br/>"##,
        r#"<span><a class="disabled">2 Shapes &amp; Joints</a></span><br/>"#,
        r#"<table class="section-contents"><tr><td>"#,
        r##"<span class="subcontent"><a href="#Shapes____Joints.Pivot_Joint">2.1 Pivot Joint</a></span><br/>"##,
        r#"</td></tr></table></div>"#
    )));
    Ok(())
}

#[test]
fn test_page_without_containers_is_byte_identical() -> TestResult {
    let source = page(&format!(
        "{}{}",
        chapter("Intro", &["First"]),
        chapter("Usage", &[])
    ));

    let processed = number_page(&source)?;

    assert_eq!(processed.html, source);
    assert!(!processed.changed());
    Ok(())
}

#[test]
fn test_page_without_containers_skips_chapter_checks() -> TestResult {
    // A chapter with no title would fail numbering, but nothing asks for it.
    let source = page(r#"<div class="chapter"><p>untitled</p></div>"#);
    assert_eq!(number_page(&source)?.html, source);
    Ok(())
}

#[test]
fn test_unscoped_container_renders_plain_links_only() -> TestResult {
    let source = page(&format!(
        "{}{}{}",
        container(None),
        chapter("Intro", &["One"]),
        chapter("Usage", &["Two", "Three"])
    ));

    let html = number_page(&source)?.html;

    assert!(html.contains(concat!(
        r#"<div class="contents">"#,
        r##"<span><a href="#Intro">1 Intro</a></span><br/>"##,
        r##"<span><a href="#Usage">2 Usage</a></span><br/>"##,
        "</div>"
    )));
    assert_eq!(count(&html, "section-contents"), 0);
    assert_eq!(count(&html, r#"class="disabled""#), 0);
    Ok(())
}

#[test]
fn test_unmatched_container_id_renders_plain_links_only() -> TestResult {
    let source = page(&format!(
        "{}{}{}",
        container(Some("contents-Missing")),
        container(Some("sidebar")),
        chapter("Intro", &["One"])
    ));

    let html = number_page(&source)?.html;

    assert_eq!(count(&html, r##"<a href="#Intro">1 Intro</a>"##), 2);
    assert_eq!(count(&html, "<table"), 0);
    Ok(())
}

#[test]
fn test_current_chapter_without_sections_gets_empty_table() -> TestResult {
    let source = page(&format!(
        "{}{}",
        container(Some("contents-Intro")),
        chapter("Intro", &[])
    ));

    let html = number_page(&source)?.html;

    assert!(html.contains(
        r#"<span><a class="disabled">1 Intro</a></span><br/><table class="section-contents"></table>"#
    ));
    Ok(())
}

#[test]
fn test_every_container_shares_one_numbering() -> TestResult {
    let source = page(&format!(
        "{}{}{}{}",
        container(None),
        chapter("Intro", &[]),
        chapter("Usage", &["Setup"]),
        container(Some("contents-Usage")),
    ));

    let html = number_page(&source)?.html;

    // Each chapter is labelled once, whatever the number of containers.
    assert_eq!(count(&html, r#"<span class="chapter-number">"#), 2);
    assert_eq!(count(&html, r#"<span class="section-number">2.1</span>"#), 1);
    assert_eq!(count(&html, r##"<a href="#Intro">1 Intro</a>"##), 2);
    assert_eq!(count(&html, r##"<a href="#Usage">2 Usage</a>"##), 1);
    assert_eq!(count(&html, r#"<a class="disabled">2 Usage</a>"#), 1);
    Ok(())
}

#[test]
fn test_labels_follow_document_order() -> TestResult {
    let titles = ["Alpha", "Beta", "Gamma", "Delta"];
    let body: String = std::iter::once(container(None))
        .chain(titles.iter().map(|t| chapter(t, &["x", "y", "z"])))
        .collect();
    let doc = Document::parse(&page(&body))?;

    let chapters = TocBuilder::default().collect_chapters(&doc)?;

    for (i, chapter) in chapters.iter().enumerate() {
        assert_eq!(chapter.label(), (i + 1).to_string());
        assert_eq!(chapter.title, titles[i]);
        let labels: Vec<String> = chapter.sections.iter().map(|s| s.label()).collect();
        assert_eq!(labels, [1, 2, 3].map(|j| format!("{}.{j}", i + 1)));
    }
    Ok(())
}

#[test]
fn test_identifiers_are_unique() -> TestResult {
    let body = format!(
        "{}{}{}",
        container(None),
        chapter("Getting Started", &["Install", "First Space"]),
        chapter("Getting  Started", &["Install"])
    );
    let doc = Document::parse(&page(&body))?;

    let chapters = TocBuilder::default().collect_chapters(&doc)?;

    let chapter_ids: HashSet<&str> = chapters.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(chapter_ids.len(), 2);
    for chapter in &chapters {
        let anchors: HashSet<&str> = chapter.sections.iter().map(|s| s.anchor.as_str()).collect();
        assert_eq!(anchors.len(), chapter.sections.len());
        assert!(anchors.iter().all(|a| a.starts_with(&format!("{}.", chapter.slug))));
    }
    Ok(())
}

#[test]
fn test_slug_transform_is_idempotent() {
    for title in ["Shapes &amp; Joints", "a\tb\nc", "  spaced  out ", "plain"] {
        let once = slugify_title(title, true);
        assert_eq!(slugify_title(&once, true), once);
        assert!(!once.chars().any(char::is_whitespace));
    }
    assert_eq!(slugify_title("Shapes &amp; Joints", false), "Shapes_&amp;_Joints");
}

#[test]
fn test_missing_title_fails_fast() {
    let source = page(&format!(
        "{}{}{}",
        container(None),
        chapter("Intro", &[]),
        r#"<div class="chapter"><p>no title</p></div>"#
    ));

    let err = number_page(&source).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Toc(TocError::MissingTitle { chapter: 2 })
    ));
}

#[test]
fn test_processed_page_is_not_numbered_twice() -> TestResult {
    let first = number_page(&shapes_and_joints())?;

    let err = number_page(&first.html).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Toc(TocError::AlreadyNumbered { chapter: 1 })
    ));
    Ok(())
}

#[test]
fn test_title_markup_is_carried_into_links() -> TestResult {
    let source = page(&format!(
        "{}{}",
        container(None),
        chapter("Using <em>Space</em>", &[])
    ));

    let html = number_page(&source)?.html;

    assert!(html.contains(r#"id="Using_&lt;em&gt;Space&lt;/em&gt;""#));
    assert!(html.contains(r##"<a href="#Using_&lt;em&gt;Space&lt;/em&gt;">1 Using <em>Space</em></a>"##));
    Ok(())
}

#[test]
fn test_prefixed_title_markup_is_carried_into_links() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = format!(
        "<!DOCTYPE html>\n\
         <html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:m=\"http://www.w3.org/1998/Math/MathML\"><body>{}{}</body></html>",
        container(None),
        chapter("Vectors <m:mi>v</m:mi>", &[])
    );

    let html = number_page(&source)?.html;

    assert!(html.contains(r##"<a href="#Vectors_&lt;m:mi&gt;v&lt;/m:mi&gt;">1 Vectors <m:mi>v</m:mi></a>"##));
    assert_eq!(count(&html, "xmlns:m="), 1);
    Ok(())
}

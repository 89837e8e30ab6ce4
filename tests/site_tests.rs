mod common;

use common::fixtures::{chapter, container, page, shapes_and_joints};
use common::{TestResult, count, write_site};
use docnav::{
    ExecutorKind, FilesystemPageProvider, InMemoryPageProvider, PageOutcome, PipelineBuilder,
};
use std::fs;
use std::sync::Arc;

fn guide() -> String {
    page(&format!(
        "{}{}<p>See <b>Body</b>.</p>",
        container(Some("contents-Bodies")),
        chapter("Bodies", &["Creating", "Moving"])
    ))
}

#[test]
fn test_site_is_processed_in_place() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    write_site(
        dir.path(),
        &[
            ("index.html", shapes_and_joints().as_str()),
            ("manual/bodies.html", guide().as_str()),
            ("manual/notes.txt", "<b>Body</b>"),
        ],
    )?;

    let pipeline = PipelineBuilder::new()
        .with_executor(ExecutorKind::Sequential)
        .build()?;
    let report = pipeline.run(Arc::new(FilesystemPageProvider::new(dir.path())))?;

    assert!(report.is_success());
    let paths: Vec<&str> = report.pages.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, ["index.html", "manual/bodies.html"]);

    let bodies = fs::read_to_string(dir.path().join("manual/bodies.html"))?;
    assert!(bodies.contains(r#"href="../docs/types/nape/phys/Body.html""#));
    assert!(bodies.contains(r#"<span class="section-number">1.2</span>"#));
    assert_eq!(fs::read_to_string(dir.path().join("manual/notes.txt"))?, "<b>Body</b>");
    Ok(())
}

#[test]
fn test_site_written_to_output_directory() -> TestResult {
    let site = tempfile::tempdir()?;
    let out = tempfile::tempdir()?;
    let source = guide();
    write_site(site.path(), &[("a/b/guide.xhtml", source.as_str())])?;

    let pipeline = PipelineBuilder::new().build()?;
    let provider = FilesystemPageProvider::new(site.path()).with_output_dir(out.path());
    let report = pipeline.run(Arc::new(provider))?;

    assert_eq!(report.processed(), 1);
    assert_eq!(fs::read_to_string(site.path().join("a/b/guide.xhtml"))?, source);
    let written = fs::read_to_string(out.path().join("a/b/guide.xhtml"))?;
    assert!(written.contains(r#"href="../../docs/types/nape/phys/Body.html""#));
    Ok(())
}

#[test]
fn test_failures_are_reported_per_page() -> TestResult {
    let provider = Arc::new(InMemoryPageProvider::new());
    provider.add("good.html", guide())?;
    provider.add("broken.html", "<html><body><p></body></html>")?;
    provider.add("untitled.html", page(&format!("{}<div class=\"chapter\"/>", container(None))))?;

    let report = PipelineBuilder::new().build()?.run(provider.clone())?;

    assert_eq!(report.processed(), 1);
    let failed: Vec<&str> = report.failures().map(|p| p.path.as_str()).collect();
    assert_eq!(failed, ["broken.html", "untitled.html"]);
    for page in report.failures() {
        let PageOutcome::Failed { error } = &page.outcome else {
            unreachable!("failures() only yields failed pages");
        };
        assert!(!error.is_empty());
    }
    assert_eq!(
        count(&provider.get("good.html").unwrap_or_default(), "chapter-number"),
        1
    );
    Ok(())
}

#[test]
fn test_second_run_fails_every_numbered_page() -> TestResult {
    let provider = Arc::new(InMemoryPageProvider::new());
    provider.add("index.html", shapes_and_joints())?;
    provider.add("plain.html", page("<p>nothing to number</p>"))?;
    let pipeline = PipelineBuilder::new().with_doclinks(false).build()?;

    assert!(pipeline.run(provider.clone())?.is_success());
    let once = provider.get("index.html").unwrap_or_default();

    let second = pipeline.run(provider.clone())?;

    let failed: Vec<&str> = second.failures().map(|p| p.path.as_str()).collect();
    assert_eq!(failed, ["index.html"]);
    assert!(matches!(
        &second.pages[0].outcome,
        PageOutcome::Failed { error } if error.contains("already numbered")
    ));
    assert_eq!(provider.get("index.html").unwrap_or_default(), once);
    Ok(())
}

#[test]
fn test_parallel_and_sequential_runs_agree() -> TestResult {
    let pages: Vec<(String, String)> = (0..24)
        .map(|i| {
            let body = format!(
                "{}{}{}",
                container(Some(&format!("contents-Chapter_{i}"))),
                chapter(&format!("Chapter {i}"), &["One", "Two"]),
                chapter("Appendix", &[])
            );
            (format!("p{i:02}.html"), page(&body))
        })
        .collect();

    let mut outputs = Vec::new();
    for kind in [ExecutorKind::Sequential, ExecutorKind::Parallel] {
        let provider = Arc::new(InMemoryPageProvider::new());
        for (path, markup) in &pages {
            provider.add(path.as_str(), markup.as_str())?;
        }
        let report = PipelineBuilder::new().with_executor(kind).build()?.run(provider.clone())?;
        assert!(report.is_success());
        let paths: Vec<String> = report.pages.iter().map(|p| p.path.clone()).collect();
        let html: Vec<String> = paths.iter().filter_map(|p| provider.get(p)).collect();
        outputs.push((paths, html));
    }

    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

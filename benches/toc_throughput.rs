//! Page processing throughput benchmarks
//!
//! Measures a single page with a growing number of chapters, and a whole
//! in-memory site under each executor.
//!
//! Run benchmarks: `cargo bench --bench toc_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docnav::{ExecutorKind, InMemoryPageProvider, PageContext, PipelineBuilder};
use std::hint::black_box;
use std::sync::Arc;

/// A page with `chapters` chapters of four sections each, a sidebar and an
/// in-page contents list.
fn manual_page(chapters: usize) -> String {
    let mut body = String::from(r#"<div class="contents" id="contents-Chapter_1"></div>"#);
    for i in 1..=chapters {
        body.push_str(&format!(r#"<div class="chapter"><h2 class="title">Chapter {i}</h2>"#));
        for j in 1..=4 {
            body.push_str(&format!(
                r#"<h3 class="section">Part {j}</h3><p>A <b>Body</b> with <b>Shapes</b> in a <b>Space</b>.</p>"#
            ));
        }
        body.push_str("</div>");
    }
    body.push_str(r#"<div class="contents"></div>"#);
    format!("<!DOCTYPE html>\n<html><head><title>Manual</title></head><body>{body}</body></html>")
}

fn bench_single_page(c: &mut Criterion) {
    let processor = PipelineBuilder::new()
        .build_processor()
        .expect("default pipeline builds");
    let context = PageContext::new("../");

    let mut group = c.benchmark_group("single_page");
    for chapters in [1, 10, 50, 200] {
        let page = manual_page(chapters);
        group.throughput(Throughput::Bytes(page.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(chapters), &page, |b, page| {
            b.iter(|| processor.process(black_box(page), &context).expect("page processes"))
        });
    }
    group.finish();
}

fn bench_site(c: &mut Criterion) {
    let page = manual_page(20);
    let mut group = c.benchmark_group("site");
    group.throughput(Throughput::Elements(64));

    for (name, kind) in [
        ("sequential", ExecutorKind::Sequential),
        ("parallel", ExecutorKind::Parallel),
    ] {
        let pipeline = PipelineBuilder::new()
            .with_executor(kind)
            .build()
            .expect("pipeline builds");
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let provider = InMemoryPageProvider::new();
                    for i in 0..64 {
                        provider
                            .add(format!("section{}/page{i}.html", i % 4), page.as_str())
                            .expect("page stored");
                    }
                    Arc::new(provider)
                },
                |provider| pipeline.run(provider).expect("site runs"),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_page, bench_site);
criterion_main!(benches);

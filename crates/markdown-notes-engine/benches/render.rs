use criterion::{Criterion, criterion_group, criterion_main};
use markdown_notes_engine::{Renderer, process_inline};
use std::hint::black_box;
mod common;

fn bench_render_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let renderer = Renderer::default();
    for size in [1, 100] {
        let content = common::generate_notes_content(size);
        group.bench_function(format!("document_x{size}"), |b| {
            b.iter(|| {
                let html = renderer.render(black_box(&content));
                black_box(html);
            });
        });
    }

    group.bench_function("page_x100", |b| {
        let content = common::generate_notes_content(100);
        b.iter(|| black_box(renderer.render_page(black_box(&content))));
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(20);

    let line = common::generate_marker_heavy_line(50);
    group.bench_function("marker_heavy_line", |b| {
        b.iter(|| black_box(process_inline(black_box(&line))));
    });

    group.finish();
}

criterion_group!(benches, bench_render_document, bench_inline);
criterion_main!(benches);

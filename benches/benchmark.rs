//! Performance benchmarks for kh-html-parser.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kh_html_parser::{collapse_whitespace, extract};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="km">
<head>
    <meta charset="UTF-8">
    <title>ព័ត៌មាន​ថ្មីៗ</title>
    <style>body { font-family: "Khmer OS"; }</style>
</head>
<body>
    <nav>
        <a href="/">ទំព័រដើម</a>
        <a href="/about">អំពីយើង</a>
    </nav>
    <article>
        <h1>ចំណងជើង​អត្ថបទ</h1>
        <p>នេះ​ជា​កថាខណ្ឌ​ទីមួយ​នៃ​អត្ថបទ។   It mixes <b>Khmer</b> and English
        text across    several lines.</p>
        <p>កថាខណ្ឌ​ទីពីរ។</p>
    </article>
    <footer><p>Copyright 2024</p></footer>
</body>
</html>
"#;

fn bench_extract_sample(c: &mut Criterion) {
    c.bench_function("extract_sample", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_scaling");
    for paragraphs in [10_usize, 100, 1_000] {
        let body = "<p>  lorem   ipsum <em>dolor</em>\n sit amet </p>\n".repeat(paragraphs);
        let html = format!("<html><body>{body}</body></html>");
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }
    group.finish();
}

fn bench_collapse_whitespace(c: &mut Criterion) {
    let text = " a \t\n b  ".repeat(1_000);
    c.bench_function("collapse_whitespace", |b| {
        b.iter(|| collapse_whitespace(black_box(&text)));
    });
}

criterion_group!(
    benches,
    bench_extract_sample,
    bench_extract_scaling,
    bench_collapse_whitespace
);
criterion_main!(benches);

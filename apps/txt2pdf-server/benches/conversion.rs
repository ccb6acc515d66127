//! Conversion Benchmarks
//!
//! Measures text layout and PDF writing for inputs of increasing size.
//!
//! Run with: `cargo bench --bench conversion`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use txt2pdf_server::pdf::{wrap_text, PageLayout, TextPdfConverter};

/// Prose-like text with paragraph breaks
fn sample_text(paragraphs: usize) -> String {
    let paragraph = "The quick brown fox jumps over the lazy dog while the printer \
                     warms up and the office slowly fills with the smell of toner. ";
    (0..paragraphs)
        .map(|_| paragraph.repeat(4))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bench_wrap(c: &mut Criterion) {
    let layout = PageLayout::default();
    let mut group = c.benchmark_group("wrap_text");

    for paragraphs in [1, 10, 100] {
        let text = sample_text(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| wrap_text(black_box(text), &layout))
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let converter = TextPdfConverter::default();
    let mut group = c.benchmark_group("convert");
    group.measurement_time(Duration::from_secs(10));

    for paragraphs in [1, 10, 100] {
        let text = sample_text(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| converter.convert(black_box(text.as_bytes())).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wrap, bench_convert);
criterion_main!(benches);

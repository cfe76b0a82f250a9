//! Benchmarks for docxstrip extraction performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

/// Builds the document XML for the given number of paragraphs.
fn create_document_xml(paragraph_count: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for i in 0..paragraph_count {
        content.push_str(&format!(
            r#"
    <w:p>
      <w:r>
        <w:t>This is paragraph {} with some test content for benchmarking purposes.</w:t>
      </w:r>
    </w:p>
"#,
            i
        ));
    }

    content.push_str(
        r#"
  </w:body>
</w:document>"#,
    );
    content
}

/// Creates a synthetic DOCX document with the given number of paragraphs.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(create_document_xml(paragraph_count).as_bytes())
        .unwrap();

    zip.finish().unwrap();
    buffer
}

/// Benchmark markup stripping on the raw XML.
fn bench_strip_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_markup");

    for para_count in [10, 100, 1000, 10000].iter() {
        let xml = create_document_xml(*para_count);

        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::new("paragraphs", para_count), &xml, |b, xml| {
            b.iter(|| docxstrip::strip_markup(black_box(xml)));
        });
    }

    group.finish();
}

/// Benchmark the full in-memory pipeline, archive included.
fn bench_extract_from_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_from_bytes");
    let extractor = docxstrip::Extractor::default();

    for para_count in [10, 100, 1000].iter() {
        let data = create_test_docx(*para_count);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("paragraphs", para_count), &data, |b, data| {
            b.iter(|| {
                let _ = extractor.extract_text_from_bytes(black_box(data));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strip_markup, bench_extract_from_bytes);
criterion_main!(benches);

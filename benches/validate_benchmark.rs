//! Benchmarks for docverify loading and validation.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic DOCX packages built in memory.

use std::io::{Cursor, Write};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const STYLES: &str = r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:rPr><w:rFonts w:ascii="Times New Roman"/><w:b/><w:color w:val="000000"/><w:sz w:val="32"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading6"><w:name w:val="heading 6"/></w:style>"#;

/// Creates a DOCX with `sections` heading/body pairs, one page each.
fn create_test_docx(sections: usize) -> Vec<u8> {
    let mut body = String::new();
    for i in 0..sections {
        let lead = if i > 0 { "<w:lastRenderedPageBreak/>" } else { "" };
        body.push_str(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r>{}<w:t>Section {}</w:t></w:r></w:p>"#,
            lead,
            i + 1
        ));
        body.push_str(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading6"/></w:pPr><w:r><w:t>Page {}</w:t></w:r></w:p>"#,
            i + 1
        ));
        body.push_str(
            "<w:p><w:r><w:t>Thsi paragraph has a tset of the spelling check with some ordinary words.</w:t></w:r></w:p>",
        );
    }

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        W_NS, body
    );
    let styles = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:styles xmlns:w="{}">{}</w:styles>"#,
        W_NS, STYLES
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.start_file("word/styles.xml", options).unwrap();
    zip.write_all(styles.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}

fn dictionary() -> docverify::WordListDictionary {
    docverify::WordListDictionary::from_words([
        "this", "paragraph", "has", "a", "test", "of", "the", "spelling", "check", "with",
        "some", "ordinary", "words", "section", "page",
    ])
}

/// Benchmark DOCX format detection.
fn bench_format_detection(c: &mut Criterion) {
    let docx_data = create_test_docx(1);
    let non_docx_data = b"Not a DOCX file at all, just random text content";

    c.bench_function("detect_valid_docx", |b| {
        b.iter(|| docverify::detect_format_from_bytes(black_box(&docx_data)).unwrap());
    });

    c.bench_function("detect_non_docx", |b| {
        b.iter(|| docverify::detect_format_from_bytes(black_box(non_docx_data)).is_err());
    });
}

/// Benchmark loading at various sizes.
fn bench_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_loading");

    for sections in [1, 10, 100].iter() {
        let data = create_test_docx(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| docverify::load_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark validation of an already loaded document.
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    let dict = dictionary();
    let validator = docverify::Validator::new();
    let pagination = docverify::RenderedBreaks::new();

    for sections in [10, 100].iter() {
        let doc = docverify::load_bytes(&create_test_docx(*sections)).unwrap();

        group.bench_function(format!("{}_sections_fonts", sections), |b| {
            b.iter(|| validator.validate_with(black_box(&doc), &pagination, None).unwrap());
        });

        group.bench_function(format!("{}_sections_spelling", sections), |b| {
            b.iter(|| {
                validator
                    .validate_with(black_box(&doc), &pagination, Some(&dict))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark spelling suggestions.
fn bench_suggestion(c: &mut Criterion) {
    let dict = dictionary();

    c.bench_function("suggest_transposition", |b| {
        b.iter(|| dict.suggest(black_box("spleling")));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_loading,
    bench_validation,
    bench_suggestion,
);
criterion_main!(benches);

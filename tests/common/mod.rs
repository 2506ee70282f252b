//! In-memory DOCX fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Run properties for a heading that satisfies the standard rules at `size_pt`.
pub fn compliant_rpr(size_pt: u32) -> String {
    format!(
        r#"<w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman"/><w:b/><w:color w:val="000000"/><w:sz w:val="{}"/>"#,
        size_pt * 2
    )
}

/// A `w:r` element with optional run properties.
pub fn run(text: &str, rpr: &str) -> String {
    let props = if rpr.is_empty() {
        String::new()
    } else {
        format!("<w:rPr>{}</w:rPr>", rpr)
    };
    format!(r#"<w:r>{}<w:t xml:space="preserve">{}</w:t></w:r>"#, props, text)
}

/// A `w:p` element with an optional style id and raw inner content.
pub fn para(style_id: Option<&str>, content: &str) -> String {
    let ppr = style_id
        .map(|id| format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id))
        .unwrap_or_default();
    format!("<w:p>{}{}</w:p>", ppr, content)
}

/// Builder for a minimal DOCX package.
pub struct DocxBuilder {
    styles: Vec<String>,
    body: Vec<String>,
    core: Option<String>,
    with_styles_part: bool,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            styles: vec![
                r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:rPr><w:rFonts w:ascii="Calibri"/><w:sz w:val="22"/></w:rPr></w:style>"#
                    .to_string(),
            ],
            body: Vec::new(),
            core: None,
            with_styles_part: true,
        }
    }

    /// Add a paragraph style with the given run properties.
    pub fn style(mut self, id: &str, name: &str, rpr: &str) -> Self {
        self.styles.push(format!(
            r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="{}"/><w:basedOn w:val="Normal"/><w:rPr>{}</w:rPr></w:style>"#,
            id, name, rpr
        ));
        self
    }

    /// Add the built-in heading style for `level` with its run properties.
    pub fn heading_style(self, level: u32, rpr: &str) -> Self {
        self.style(&format!("Heading{}", level), &format!("heading {}", level), rpr)
    }

    /// Append raw body XML (usually from [`para`]).
    pub fn raw(mut self, xml: impl Into<String>) -> Self {
        self.body.push(xml.into());
        self
    }

    /// Append a paragraph in `style_id` made of the given runs.
    pub fn paragraph(self, style_id: Option<&str>, runs: &[String]) -> Self {
        self.raw(para(style_id, &runs.concat()))
    }

    /// Append a body paragraph with one plain run.
    pub fn text(self, text: &str) -> Self {
        self.paragraph(None, &[run(text, "")])
    }

    pub fn core(mut self, title: &str, creator: &str) -> Self {
        self.core = Some(format!(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/"><dc:title>{}</dc:title><dc:creator>{}</dc:creator><dcterms:created>2024-03-01T09:30:00Z</dcterms:created></cp:coreProperties>"#,
            title, creator
        ));
        self
    }

    pub fn without_styles(mut self) -> Self {
        self.with_styles_part = false;
        self
    }

    pub fn styles_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles xmlns:w="{}">{}</w:styles>"#,
            W_NS,
            self.styles.concat()
        )
    }

    pub fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            W_NS,
            self.body.concat()
        )
    }

    pub fn build(&self) -> Vec<u8> {
        let mut parts = vec![("word/document.xml", self.document_xml())];
        if self.with_styles_part {
            parts.push(("word/styles.xml", self.styles_xml()));
        }
        if let Some(core) = &self.core {
            parts.push(("docProps/core.xml", core.clone()));
        }
        zip_parts(&parts)
    }

    /// Write the package to `dir/name` and return its path.
    pub fn write_to(&self, dir: &std::path::Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// Zip arbitrary parts, uncompressed.
pub fn zip_parts(parts: &[(&str, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, content) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

//! DOCX document loader using zip and quick-xml.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, Metadata, StyleSheet};

use super::body::parse_body;
use super::core_props::parse_core_properties;
use super::options::LoadOptions;
use super::styles::parse_styles;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const CORE_PART: &str = "docProps/core.xml";

/// The XML parts the loader needs, read out of the archive up front.
struct PackageParts {
    document: String,
    styles: Option<String>,
    core: Option<String>,
}

impl PackageParts {
    fn read<R: Read + Seek>(mut archive: ZipArchive<R>) -> Result<Self> {
        let document = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;
        let styles = read_part(&mut archive, STYLES_PART)?;
        let core = read_part(&mut archive, CORE_PART)?;
        Ok(Self {
            document,
            styles,
            core,
        })
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// DOCX document loader.
///
/// The package is read once when the loader is created; [`DocxParser::parse`]
/// can then be called any number of times and yields identical documents.
pub struct DocxParser {
    parts: PackageParts,
    options: LoadOptions,
    source: Option<PathBuf>,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, LoadOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();

        detect_format_from_path(path)?;

        let file = File::open(path)?;
        let archive = ZipArchive::new(BufReader::new(file))?;
        let parts = PackageParts::read(archive)?;

        Ok(Self {
            parts,
            options,
            source: Some(path.to_path_buf()),
        })
    }

    /// Load a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, LoadOptions::default())
    }

    /// Load a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: LoadOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let archive = ZipArchive::new(Cursor::new(data))?;
        let parts = PackageParts::read(archive)?;

        Ok(Self {
            parts,
            options,
            source: None,
        })
    }

    /// Load a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, LoadOptions::default())
    }

    /// Load a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: LoadOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Path the package was opened from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Parse the package into a structured Document.
    pub fn parse(&self) -> Result<Document> {
        let styles = self.parse_styles()?;
        let paragraphs = parse_body(&self.parts.document, &styles, self.options.is_lenient())?;

        let mut document = Document::with_styles(styles);
        document.metadata = self.parse_metadata()?;
        document.metadata.source = self.source.clone();
        for paragraph in paragraphs {
            document.add_paragraph(paragraph);
        }

        log::info!(
            "Loaded {} paragraphs ({} headings, {} styles)",
            document.paragraph_count(),
            document.headings().count(),
            document.styles.len()
        );
        Ok(document)
    }

    fn parse_styles(&self) -> Result<StyleSheet> {
        let Some(xml) = self.parts.styles.as_deref() else {
            log::warn!("Package has no {}; all paragraphs use Normal", STYLES_PART);
            return Ok(StyleSheet::new());
        };
        match parse_styles(xml) {
            Ok(sheet) => Ok(sheet),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring malformed {}: {}", STYLES_PART, e);
                Ok(StyleSheet::new())
            }
            Err(e) => Err(e),
        }
    }

    fn parse_metadata(&self) -> Result<Metadata> {
        if !self.options.read_metadata {
            return Ok(Metadata::default());
        }
        let Some(xml) = self.parts.core.as_deref() else {
            return Ok(Metadata::default());
        };
        match parse_core_properties(xml) {
            Ok(metadata) => Ok(metadata),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring malformed {}: {}", CORE_PART, e);
                Ok(Metadata::default())
            }
            Err(e) => Err(e),
        }
    }
}

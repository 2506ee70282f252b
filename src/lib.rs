//! # docverify
//!
//! Formatting and spelling validation for DOCX documents.
//!
//! This library loads a Word document, resolves the effective font of every
//! heading, compares it with a per-level rule table, checks spelling against a
//! dictionary, and produces a flat list of PASS/FAIL test-case records that can
//! be written as CSV or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docverify::{Docverify, WordListDictionary};
//!
//! fn main() -> docverify::Result<()> {
//!     let result = Docverify::new()
//!         .with_dictionary(WordListDictionary::from_path("words.txt")?)
//!         .check("report.docx")?;
//!
//!     println!("{} failed checks", result.report.failed());
//!     result.write("report.csv", docverify::ReportFormat::Csv)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Style inheritance**: run properties fall back to the paragraph style
//! - **Rule table**: expected family, size, color and bold per heading level
//! - **Page location**: from rendered page breaks or an external paginator
//! - **Spelling**: pluggable dictionary oracle with suggestions
//! - **Reports**: CSV, JSON and plain text

pub mod detect;
pub mod dictionary;
pub mod error;
pub mod model;
pub mod pagination;
pub mod parser;
pub mod render;
pub mod validate;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use dictionary::{DictionaryOracle, WordListDictionary};
pub use error::{Error, Result};
pub use model::{
    BreakKind, Document, FontProps, Length, Metadata, PageBreak, Paragraph, ParagraphStyle,
    RgbColor, Run, StyleSheet,
};
pub use pagination::{
    BreakSource, CommandPagination, FixedPage, NoPagination, PageMap, PageNumber,
    PaginationOracle, RenderedBreaks,
};
pub use parser::{DocxParser, ErrorMode, LoadOptions};
pub use render::{JsonFormat, ReportFormat};
pub use validate::{
    Expectation, Report, RuleTable, SpellingScope, Status, Summary, TestRecord, Tokenization,
    ValidateOptions, Validator,
};

use std::io::Read;
use std::path::Path;

/// Load a DOCX file into a document.
///
/// # Example
///
/// ```no_run
/// use docverify::load_file;
///
/// let doc = load_file("report.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Load a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use docverify::{load_file_with_options, LoadOptions};
///
/// let options = LoadOptions::new().lenient();
/// let doc = load_file_with_options("damaged.docx", options).unwrap();
/// ```
pub fn load_file_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Document> {
    DocxParser::open_with_options(path, options)?.parse()
}

/// Load a DOCX from bytes.
pub fn load_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data)?.parse()
}

/// Load a DOCX from bytes with custom options.
pub fn load_bytes_with_options(data: &[u8], options: LoadOptions) -> Result<Document> {
    DocxParser::from_bytes_with_options(data, options)?.parse()
}

/// Load a DOCX from a reader.
pub fn load_reader<R: Read>(reader: R) -> Result<Document> {
    DocxParser::from_reader(reader)?.parse()
}

/// Load a DOCX from a reader with custom options.
pub fn load_reader_with_options<R: Read>(reader: R, options: LoadOptions) -> Result<Document> {
    DocxParser::from_reader_with_options(reader, options)?.parse()
}

/// Validate heading fonts of a DOCX file with the standard rules.
///
/// Pages come from the rendered page breaks saved in the file. No spelling
/// check is run; use [`Docverify`] to supply a dictionary.
///
/// # Example
///
/// ```no_run
/// use docverify::validate_file;
///
/// let report = validate_file("report.docx").unwrap();
/// for record in report.failures() {
///     println!("{}: {} ({})", record.name, record.property, record.actual);
/// }
/// ```
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    let document = load_file(path)?;
    Validator::new().validate_with(&document, &RenderedBreaks::new(), None)
}

/// Builder for loading and validating DOCX documents.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use docverify::{CommandPagination, Docverify, SpellingScope, WordListDictionary};
///
/// let csv = Docverify::new()
///     .lenient()
///     .with_spelling(SpellingScope::BodyOnly)
///     .strip_punctuation()
///     .with_dictionary(WordListDictionary::from_words(["hello", "world"]))
///     .with_pagination(
///         CommandPagination::new("paginate").with_timeout(Duration::from_secs(10)),
///     )
///     .check("report.docx")?
///     .to_csv()?;
/// # Ok::<(), docverify::Error>(())
/// ```
pub struct Docverify {
    load_options: LoadOptions,
    validate_options: ValidateOptions,
    pagination: Box<dyn PaginationOracle>,
    dictionary: Option<Box<dyn DictionaryOracle>>,
}

impl Docverify {
    /// Create a new builder: strict loading, standard rules, rendered page
    /// breaks, no dictionary.
    pub fn new() -> Self {
        Self {
            load_options: LoadOptions::default(),
            validate_options: ValidateOptions::default(),
            pagination: Box::new(RenderedBreaks::new()),
            dictionary: None,
        }
    }

    /// Enable lenient loading.
    pub fn lenient(mut self) -> Self {
        self.load_options = self.load_options.lenient();
        self
    }

    /// Replace the load options.
    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    /// Replace the validate options.
    pub fn with_validate_options(mut self, options: ValidateOptions) -> Self {
        self.validate_options = options;
        self
    }

    /// Replace the rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.validate_options = self.validate_options.with_rules(rules);
        self
    }

    /// Set the spelling scope.
    pub fn with_spelling(mut self, scope: SpellingScope) -> Self {
        self.validate_options = self.validate_options.with_spelling(scope);
        self
    }

    /// Strip punctuation from tokens before the spelling check.
    pub fn strip_punctuation(mut self) -> Self {
        self.validate_options = self.validate_options.strip_punctuation();
        self
    }

    /// Set the pagination oracle.
    pub fn with_pagination(mut self, oracle: impl PaginationOracle + 'static) -> Self {
        self.pagination = Box::new(oracle);
        self
    }

    /// Set the dictionary oracle, enabling the spelling check.
    pub fn with_dictionary(mut self, dictionary: impl DictionaryOracle + 'static) -> Self {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    /// Load and validate a DOCX file.
    pub fn check<P: AsRef<Path>>(&self, path: P) -> Result<ValidationResult> {
        let document = load_file_with_options(path, self.load_options.clone())?;
        self.check_document(document)
    }

    /// Load and validate a DOCX from bytes.
    pub fn check_bytes(&self, data: &[u8]) -> Result<ValidationResult> {
        let document = load_bytes_with_options(data, self.load_options.clone())?;
        self.check_document(document)
    }

    /// Validate an already loaded document.
    pub fn check_document(&self, document: Document) -> Result<ValidationResult> {
        let validator = Validator::with_options(self.validate_options.clone());
        let report =
            validator.validate_with(&document, self.pagination.as_ref(), self.dictionary.as_deref())?;
        Ok(ValidationResult { document, report })
    }
}

impl Default for Docverify {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated document and its report.
#[derive(Debug)]
pub struct ValidationResult {
    /// The loaded document
    pub document: Document,
    /// Records produced for it
    pub report: Report,
}

impl ValidationResult {
    /// Pass/fail counts.
    pub fn summary(&self) -> Summary {
        self.report.summary()
    }

    /// Check if every check passed.
    pub fn all_passed(&self) -> bool {
        self.report.all_passed()
    }

    /// Render the report as CSV.
    pub fn to_csv(&self) -> Result<String> {
        render::to_csv(&self.report)
    }

    /// Render the report as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Render the report as a plain text listing.
    pub fn to_text(&self, failures_only: bool) -> String {
        render::to_text(&self.report, failures_only)
    }

    /// Write the report to a file.
    pub fn write<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> Result<()> {
        render::write_report(&self.report, path, format)
    }
}

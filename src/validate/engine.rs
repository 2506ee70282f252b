//! The validation engine.

use super::checks::{check_heading, check_spelling, ParagraphContext};
use super::options::{SpellingScope, ValidateOptions};
use super::report::Report;
use crate::dictionary::DictionaryOracle;
use crate::error::Result;
use crate::model::Document;
use crate::pagination::{PageMap, PaginationOracle};

/// Runs every check over a document and aggregates the records.
///
/// The validator holds configuration only. Validating the same document
/// with the same page map and dictionary always yields the same report.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidateOptions,
}

impl Validator {
    /// Create a validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom options.
    pub fn with_options(options: ValidateOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validate `document` against an already resolved page map.
    ///
    /// Without a dictionary the spelling check is skipped. Errors only come
    /// from the dictionary oracle; check outcomes are always records.
    pub fn validate(
        &self,
        document: &Document,
        pages: &PageMap,
        dictionary: Option<&dyn DictionaryOracle>,
    ) -> Result<Report> {
        let mut report = Report::new();
        let mut unknown_pages = 0usize;

        if dictionary.is_none() && self.options.spelling != SpellingScope::Disabled {
            log::debug!("No dictionary supplied; spelling check skipped");
        }

        for paragraph in &document.paragraphs {
            let page = pages.page_of(paragraph.index);
            if page.is_unknown() {
                unknown_pages += 1;
            }
            let ctx = ParagraphContext::new(paragraph, page);

            if paragraph.is_heading() {
                match paragraph.heading_level() {
                    Some(level) => check_heading(&ctx, level, &self.options.rules, &mut report),
                    None => log::debug!(
                        "Paragraph {}: style {:?} has no level, heading checks skipped",
                        paragraph.index,
                        paragraph.style_name()
                    ),
                }
            }

            if let Some(dictionary) = dictionary {
                if self.options.spelling.covers(paragraph.is_heading()) {
                    check_spelling(&ctx, dictionary, self.options.tokenization, &mut report)?;
                }
            }
        }

        if unknown_pages > 0 && !pages.is_empty() {
            log::warn!(
                "{} of {} paragraphs have no page number",
                unknown_pages,
                document.paragraph_count()
            );
        }
        log::info!(
            "Validated {} paragraphs: {} records, {} failed",
            document.paragraph_count(),
            report.len(),
            report.failed()
        );
        Ok(report)
    }

    /// Resolve pages with `oracle` (once), then validate.
    pub fn validate_with(
        &self,
        document: &Document,
        oracle: &dyn PaginationOracle,
        dictionary: Option<&dyn DictionaryOracle>,
    ) -> Result<Report> {
        log::debug!("Resolving pages with {}", oracle.name());
        let pages = oracle.resolve(document)?;
        self.validate(document, &pages, dictionary)
    }
}

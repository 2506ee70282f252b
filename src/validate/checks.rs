//! Per-paragraph checks. Each check appends zero or more records.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::record::{Status, TestRecord, ABSENT, MISSING, PRESENT, UNSET};
use super::report::Report;
use super::resolve::resolve;
use super::rules::RuleTable;
use super::tokenize::{tokenize, Tokenization};
use crate::dictionary::DictionaryOracle;
use crate::error::Result;
use crate::model::Paragraph;
use crate::pagination::PageNumber;

/// A page-number-like token: the word "page" or any digit.
static PAGE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)page|\d").expect("valid regex"));

const RUN_PROPERTY: &str = "run";
const RUN_EXPECTED: &str = "Font run exists";

const PAGE_NUMBER_PROPERTY: &str = "Page number content/position";
const PAGE_NUMBER_EXPECTED: &str = "Page number label present";

const SPELLING_PROPERTY: &str = "Spelling";

/// Name, description and category shared by every record of one check.
struct CaseInfo {
    name: String,
    description: String,
    category: String,
}

impl CaseInfo {
    fn heading_font(level: u32) -> Self {
        Self {
            name: format!("Heading Level {} Font", level),
            description: format!("Validate font attributes for Heading Level {}", level),
            category: format!("Heading Level {}", level),
        }
    }

    fn page_number() -> Self {
        Self {
            name: "Page Number Location".into(),
            description: "Check if page number is placed on top-left in Heading Level 6".into(),
            category: "Page Number Check".into(),
        }
    }

    fn spelling() -> Self {
        Self {
            name: "Spelling Check".into(),
            description: "Validate if there are spelling mistakes in the paragraph".into(),
            category: "Spelling Check".into(),
        }
    }
}

/// The paragraph under validation and its resolved page.
pub(crate) struct ParagraphContext<'a> {
    pub paragraph: &'a Paragraph,
    pub page: PageNumber,
}

impl<'a> ParagraphContext<'a> {
    pub fn new(paragraph: &'a Paragraph, page: PageNumber) -> Self {
        Self { paragraph, page }
    }

    fn record(
        &self,
        case: &CaseInfo,
        property: &str,
        expected: Option<String>,
        actual: String,
        status: Status,
    ) -> TestRecord {
        TestRecord {
            name: case.name.clone(),
            description: case.description.clone(),
            category: case.category.clone(),
            page: self.page,
            text: self.paragraph.trimmed_text().to_string(),
            property: property.to_string(),
            expected,
            actual,
            status,
            paragraph: self.paragraph.index,
        }
    }
}

/// Validate the first run of a heading against the level's expectation,
/// then apply the page-number check when the level calls for it.
pub(crate) fn check_heading(
    ctx: &ParagraphContext<'_>,
    level: u32,
    rules: &RuleTable,
    report: &mut Report,
) {
    let case = CaseInfo::heading_font(level);

    let Some(run) = ctx.paragraph.first_run() else {
        log::debug!("Heading paragraph {} has no runs", ctx.paragraph.index);
        report.push(ctx.record(
            &case,
            RUN_PROPERTY,
            Some(RUN_EXPECTED.to_string()),
            MISSING.to_string(),
            Status::Fail,
        ));
        return;
    };

    let font = resolve(run, ctx.paragraph);
    for expected in rules.expected_for(level).iter() {
        let actual = expected.actual_of(&font).unwrap_or_else(|| UNSET.to_string());
        let status = Status::from_bool(expected.matches(&font));
        report.push(ctx.record(
            &case,
            expected.property().as_str(),
            Some(expected.to_string()),
            actual,
            status,
        ));
    }

    if rules.is_page_number_level(level) {
        check_page_number(ctx, report);
    }
}

/// Heading carrying a page-number label: one record, only when the
/// text looks like it refers to a page at all.
pub(crate) fn check_page_number(ctx: &ParagraphContext<'_>, report: &mut Report) {
    let text = ctx.paragraph.trimmed_text();
    if !PAGE_LABEL.is_match(text) {
        return;
    }

    let present = !text.is_empty();
    let actual = if present { PRESENT } else { ABSENT };
    report.push(ctx.record(
        &CaseInfo::page_number(),
        PAGE_NUMBER_PROPERTY,
        Some(PAGE_NUMBER_EXPECTED.to_string()),
        actual.to_string(),
        Status::from_bool(present),
    ));
}

/// One FAIL record per distinct token the dictionary does not know.
pub(crate) fn check_spelling(
    ctx: &ParagraphContext<'_>,
    dictionary: &dyn DictionaryOracle,
    mode: Tokenization,
    report: &mut Report,
) -> Result<()> {
    let tokens = tokenize(ctx.paragraph.trimmed_text(), mode);
    if tokens.is_empty() {
        return Ok(());
    }

    let unknown: HashSet<String> = dictionary.unknown(&tokens)?.into_iter().collect();
    if unknown.is_empty() {
        return Ok(());
    }

    let case = CaseInfo::spelling();
    for token in tokens.iter().filter(|t| unknown.contains(*t)) {
        let suggestion = dictionary.correction(token)?;
        log::debug!(
            "Paragraph {}: unknown word {:?} (suggestion {:?})",
            ctx.paragraph.index,
            token,
            suggestion
        );
        report.push(ctx.record(
            &case,
            SPELLING_PROPERTY,
            suggestion,
            token.clone(),
            Status::Fail,
        ));
    }
    Ok(())
}

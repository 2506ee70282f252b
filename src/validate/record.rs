//! The uniform test-case record.

use std::fmt;

use serde::Serialize;

use crate::pagination::PageNumber;

/// Actual value of a structural check whose element is absent.
pub const MISSING: &str = "Missing";

/// Actual value of a content check that found its label.
pub const PRESENT: &str = "Present";

/// Actual value of a content check that did not find its label.
pub const ABSENT: &str = "Absent";

/// Actual value of a font property that no level of the cascade sets.
pub const UNSET: &str = "None";

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl Status {
    /// PASS when `ok`, FAIL otherwise.
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    /// Check if this is a pass.
    pub fn is_pass(self) -> bool {
        self == Status::Pass
    }

    /// Report spelling of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One row of the validation report.
///
/// Field names serialize to the report column headers, so the same value
/// feeds both the CSV and JSON writers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRecord {
    /// Test case name
    #[serde(rename = "Test Case Name")]
    pub name: String,

    /// Test case description
    #[serde(rename = "Test Case Description")]
    pub description: String,

    /// Category
    #[serde(rename = "Category")]
    pub category: String,

    /// Page the paragraph was rendered on
    #[serde(rename = "Page Number")]
    pub page: PageNumber,

    /// Trimmed paragraph text
    #[serde(rename = "Text")]
    pub text: String,

    /// Property checked
    #[serde(rename = "Property")]
    pub property: String,

    /// Expected value; absent for spelling errors without a suggestion
    #[serde(rename = "Expected")]
    pub expected: Option<String>,

    /// Actual value or structural sentinel
    #[serde(rename = "Actual")]
    pub actual: String,

    /// PASS or FAIL
    #[serde(rename = "Status")]
    pub status: Status,

    /// Index of the paragraph the record was produced for
    #[serde(skip)]
    pub paragraph: usize,
}

impl TestRecord {
    /// Check if the record passed.
    pub fn passed(&self) -> bool {
        self.status.is_pass()
    }

    /// Expected value, or an empty string when absent.
    pub fn expected_str(&self) -> &str {
        self.expected.as_deref().unwrap_or("")
    }
}

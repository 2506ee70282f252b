//! JSON rendering for validation reports.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::validate::{Report, Summary, TestRecord};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    records: &'a [TestRecord],
}

/// Serialize any value with the given format.
fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Report(format!("JSON serialization error: {}", e)))
}

/// Convert a report to JSON: a summary plus the records in order.
pub fn to_json(report: &Report, format: JsonFormat) -> Result<String> {
    serialize(
        &JsonReport {
            summary: report.summary(),
            records: report.records(),
        },
        format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageNumber;
    use crate::validate::Status;

    fn report() -> Report {
        let mut report = Report::new();
        report.push(TestRecord {
            name: "Heading Level 1 Font".into(),
            description: "Validate font attributes for Heading Level 1".into(),
            category: "Heading Level 1".into(),
            page: PageNumber::Page(1),
            text: "Introduction".into(),
            property: "font_family".into(),
            expected: Some("Times New Roman".into()),
            actual: "Arial".into(),
            status: Status::Fail,
            paragraph: 0,
        });
        report
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&report(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"Test Case Name\""));
        assert!(json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["records"][0]["Actual"], "Arial");
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&report(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }
}

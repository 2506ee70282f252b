//! Plain text rendering for validation reports.

use std::fmt::Write;

use crate::validate::Report;

/// Longest paragraph excerpt shown per line.
const EXCERPT_CHARS: usize = 40;

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(EXCERPT_CHARS - 3).collect();
    short.push_str("...");
    short
}

/// Convert a report to a human-readable listing.
///
/// With `failures_only`, passing records are left out of the listing but
/// still counted in the summary line.
pub fn to_text(report: &Report, failures_only: bool) -> String {
    let summary = report.summary();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} checks: {} passed, {} failed",
        summary.total, summary.passed, summary.failed
    );

    for record in report.records() {
        if failures_only && record.passed() {
            continue;
        }
        let _ = writeln!(
            out,
            "{:<4} page {:<7} {:<22} {:<28} expected {:?}, got {:?}  \"{}\"",
            record.status,
            record.page,
            record.category,
            record.property,
            record.expected_str(),
            record.actual,
            excerpt(&record.text)
        );
    }

    out.trim_end().to_string()
}

//! CSV rendering for validation reports.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::{Error, Result};
use crate::validate::Report;

/// Report columns, in output order.
pub const COLUMNS: [&str; 9] = [
    "Test Case Name",
    "Test Case Description",
    "Category",
    "Page Number",
    "Text",
    "Property",
    "Expected",
    "Actual",
    "Status",
];

/// Write a report as CSV. The header row is always written.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for record in report {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Convert a report to a CSV string.
pub fn to_csv(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(report, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Report(format!("CSV is not UTF-8: {}", e)))
}

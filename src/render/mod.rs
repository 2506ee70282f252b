//! Rendering module for writing validation reports in various formats.

mod csv_writer;
mod json;
mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::validate::Report;

pub use csv_writer::{to_csv, write_csv, COLUMNS};
pub use json::{to_json, JsonFormat};
pub use text::to_text;

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Comma-separated values, one row per record
    #[default]
    Csv,
    /// JSON with a summary and the records
    Json(JsonFormat),
}

impl ReportFormat {
    /// Pick a format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json(JsonFormat::Pretty),
            _ => ReportFormat::Csv,
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json(_) => "json",
        }
    }
}

/// Render a report to a string.
pub fn render(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Csv => to_csv(report),
        ReportFormat::Json(json) => to_json(report, json),
    }
}

/// Write a report to a file.
pub fn write_report<P: AsRef<Path>>(report: &Report, path: P, format: ReportFormat) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ReportFormat::Csv => write_csv(report, &mut writer)?,
        ReportFormat::Json(json) => writer.write_all(to_json(report, json)?.as_bytes())?,
    }
    writer.flush()?;
    log::info!("Wrote {} records to {}", report.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("out.csv")), ReportFormat::Csv);
        assert_eq!(
            ReportFormat::from_path(Path::new("OUT.JSON")),
            ReportFormat::Json(JsonFormat::Pretty)
        );
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Csv);
        assert_eq!(ReportFormat::Json(JsonFormat::Compact).extension(), "json");
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_report(&Report::new(), &path, ReportFormat::Csv).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Test Case Name,"));
        assert_eq!(render(&Report::new(), ReportFormat::Csv).unwrap(), content);
    }
}

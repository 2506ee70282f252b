//! Result aggregation.

use serde::Serialize;

use super::record::{Status, TestRecord};

/// Ordered collection of every record produced by one validation run.
///
/// Records keep the order they were pushed in. Nothing is filtered,
/// merged or sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    records: Vec<TestRecord>,
}

/// Pass/fail counts of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Total records
    pub total: usize,
    /// Records with PASS
    pub passed: usize,
    /// Records with FAIL
    pub failed: usize,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: TestRecord) {
        self.records.push(record);
    }

    /// All records in production order.
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Take the records out of the report.
    pub fn into_records(self) -> Vec<TestRecord> {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no record was produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of passing records.
    pub fn passed(&self) -> usize {
        self.count(Status::Pass)
    }

    /// Number of failing records.
    pub fn failed(&self) -> usize {
        self.count(Status::Fail)
    }

    /// Check if every record passed.
    pub fn all_passed(&self) -> bool {
        self.records.iter().all(TestRecord::passed)
    }

    /// Failing records in production order.
    pub fn failures(&self) -> impl Iterator<Item = &TestRecord> {
        self.records.iter().filter(|r| !r.passed())
    }

    /// Records produced for one paragraph.
    pub fn for_paragraph(&self, index: usize) -> impl Iterator<Item = &TestRecord> {
        self.records.iter().filter(move |r| r.paragraph == index)
    }

    /// Pass/fail counts.
    pub fn summary(&self) -> Summary {
        let passed = self.passed();
        Summary {
            total: self.len(),
            passed,
            failed: self.len() - passed,
        }
    }

    fn count(&self, status: Status) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

impl Extend<TestRecord> for Report {
    fn extend<I: IntoIterator<Item = TestRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for Report {
    type Item = TestRecord;
    type IntoIter = std::vec::IntoIter<TestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a TestRecord;
    type IntoIter = std::slice::Iter<'a, TestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! Document-level types.

use super::{Paragraph, StyleSheet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A loaded document: its styles and body paragraphs in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Paragraph styles defined by the document
    pub styles: StyleSheet,

    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given style sheet.
    pub fn with_styles(styles: StyleSheet) -> Self {
        Self {
            styles,
            ..Default::default()
        }
    }

    /// Add a paragraph, assigning it the next index.
    pub fn add_paragraph(&mut self, mut paragraph: Paragraph) {
        paragraph.index = self.paragraphs.len();
        self.paragraphs.push(paragraph);
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get a paragraph by index (0-based).
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    /// Iterate over paragraphs whose style is a heading style.
    pub fn headings(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(|p| p.is_heading())
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Author of the last modification
    pub last_modified_by: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// Path the document was loaded from, if any
    pub source: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParagraphStyle, Run};
    use std::sync::Arc;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_add_paragraph_assigns_index() {
        let mut doc = Document::new();
        let normal = doc.styles.default_style();
        let heading = Arc::new(ParagraphStyle::new("Heading 1"));

        doc.add_paragraph(Paragraph::new(99, heading).with_run(Run::new("Title")));
        doc.add_paragraph(Paragraph::new(99, normal).with_run(Run::new("Body")));

        assert_eq!(doc.paragraph(0).unwrap().index, 0);
        assert_eq!(doc.paragraph(1).unwrap().index, 1);
        assert_eq!(doc.headings().count(), 1);
        assert_eq!(doc.plain_text(), "Title\nBody");
    }
}

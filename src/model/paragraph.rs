//! Paragraph and run-level types.

use super::{FontProps, Length, ParagraphStyle, RgbColor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A paragraph of document content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Position in the document (0-based)
    pub index: usize,

    /// Raw paragraph text
    pub text: String,

    /// Paragraph style, shared with every paragraph using it
    pub style: Arc<ParagraphStyle>,

    /// Text runs in the paragraph
    pub runs: Vec<Run>,

    /// Page break markers found in the paragraph
    pub breaks: Vec<PageBreak>,
}

impl Paragraph {
    /// Create an empty paragraph with the given style.
    pub fn new(index: usize, style: Arc<ParagraphStyle>) -> Self {
        Self {
            index,
            text: String::new(),
            style,
            runs: Vec::new(),
            breaks: Vec::new(),
        }
    }

    /// Append a run, extending the paragraph text.
    pub fn with_run(mut self, run: Run) -> Self {
        self.add_run(run);
        self
    }

    /// Set the paragraph text without adding a run.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Record a page break marker.
    pub fn with_break(mut self, page_break: PageBreak) -> Self {
        self.breaks.push(page_break);
        self
    }

    /// Append a run, extending the paragraph text.
    pub fn add_run(&mut self, run: Run) {
        self.text.push_str(&run.text);
        self.runs.push(run);
    }

    /// Paragraph text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Name of the paragraph style.
    pub fn style_name(&self) -> &str {
        &self.style.name
    }

    /// Whether the style classifies this paragraph as a heading.
    pub fn is_heading(&self) -> bool {
        self.style.is_heading()
    }

    /// Heading level parsed from the style name.
    pub fn heading_level(&self) -> Option<u32> {
        self.style.heading_level()
    }

    /// The first run, which stands in for the whole paragraph's formatting.
    pub fn first_run(&self) -> Option<&Run> {
        self.runs.first()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.trimmed_text().is_empty()
    }
}

/// A contiguous span of text sharing explicit formatting overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Run-level font overrides
    pub font: FontProps,
}

impl Run {
    /// Create a run with no formatting overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontProps::default(),
        }
    }

    /// Override the font family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.font.family = Some(family.into());
        self
    }

    /// Override the font size in points.
    pub fn with_size_pt(mut self, pt: f32) -> Self {
        self.font.size = Some(Length::from_pt(pt));
        self
    }

    /// Override the font color.
    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.font.color = Some(color);
        self
    }

    /// Override the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font.bold = Some(bold);
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Where a page break marker came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakKind {
    /// Recorded by the last application that laid the document out
    Rendered,
    /// An explicit page break inserted by the author
    Explicit,
    /// The paragraph property "page break before"
    BeforeParagraph,
}

/// A page break marker at a character offset into the paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBreak {
    /// Character offset into `Paragraph::text`
    pub offset: usize,

    /// Marker kind
    pub kind: BreakKind,
}

impl PageBreak {
    /// Create a marker.
    pub fn new(offset: usize, kind: BreakKind) -> Self {
        Self { offset, kind }
    }

    /// Whether the break places the paragraph itself on the next page.
    pub fn precedes_paragraph(&self) -> bool {
        match self.kind {
            BreakKind::BeforeParagraph => true,
            BreakKind::Rendered => self.offset == 0,
            BreakKind::Explicit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u32) -> Arc<ParagraphStyle> {
        Arc::new(ParagraphStyle::new(format!("Heading {}", level)))
    }

    #[test]
    fn test_paragraph_text_from_runs() {
        let p = Paragraph::new(0, heading(1))
            .with_run(Run::new("  Intro"))
            .with_run(Run::new("duction ").with_bold(true));

        assert_eq!(p.text, "  Introduction ");
        assert_eq!(p.trimmed_text(), "Introduction");
        assert_eq!(p.runs.len(), 2);
        assert_eq!(p.first_run().unwrap().text, "  Intro");
    }

    #[test]
    fn test_paragraph_heading_level() {
        let p = Paragraph::new(3, heading(2));
        assert!(p.is_heading());
        assert_eq!(p.heading_level(), Some(2));
        assert_eq!(p.style_name(), "Heading 2");
        assert!(p.is_empty());
    }

    #[test]
    fn test_run_overrides() {
        let run = Run::new("x").with_family("Arial").with_size_pt(14.0);
        assert_eq!(run.font.family.as_deref(), Some("Arial"));
        assert_eq!(run.font.size.map(Length::pt), Some(14.0));
        assert_eq!(run.font.color, None);
        assert_eq!(run.font.bold, None);
    }

    #[test]
    fn test_break_placement() {
        assert!(PageBreak::new(0, BreakKind::Rendered).precedes_paragraph());
        assert!(!PageBreak::new(5, BreakKind::Rendered).precedes_paragraph());
        assert!(PageBreak::new(0, BreakKind::BeforeParagraph).precedes_paragraph());
        assert!(!PageBreak::new(0, BreakKind::Explicit).precedes_paragraph());
    }
}

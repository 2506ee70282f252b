//! Pagination from page-break markers recorded in the document.

use crate::error::Result;
use crate::model::{BreakKind, Document, PageBreak};

use super::{PageMap, PaginationOracle};

/// Which break markers drive the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakSource {
    /// Rendered markers when the document has any, explicit breaks otherwise
    #[default]
    Auto,
    /// Only markers left by the last application that laid the document out
    Rendered,
    /// Only breaks the author inserted
    Explicit,
}

/// Counts page breaks while walking paragraphs in order.
///
/// Rendered markers reflect the layout the document was last saved with,
/// so they are preferred when present. Explicit breaks alone undercount
/// pages that overflowed naturally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderedBreaks {
    source: BreakSource,
}

impl RenderedBreaks {
    /// Create an oracle with automatic source selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the break source.
    pub fn with_source(mut self, source: BreakSource) -> Self {
        self.source = source;
        self
    }

    fn effective_source(&self, document: &Document) -> BreakSource {
        match self.source {
            BreakSource::Auto => {
                let has_rendered = document
                    .paragraphs
                    .iter()
                    .flat_map(|p| &p.breaks)
                    .any(|b| b.kind == BreakKind::Rendered);
                if has_rendered {
                    BreakSource::Rendered
                } else {
                    BreakSource::Explicit
                }
            }
            source => source,
        }
    }
}

fn counts(source: BreakSource, page_break: &PageBreak) -> bool {
    match source {
        BreakSource::Rendered => page_break.kind == BreakKind::Rendered,
        _ => page_break.kind != BreakKind::Rendered,
    }
}

impl PaginationOracle for RenderedBreaks {
    fn resolve(&self, document: &Document) -> Result<PageMap> {
        let source = self.effective_source(document);
        let mut map = PageMap::new();
        let mut page = 1u32;

        for (position, paragraph) in document.paragraphs.iter().enumerate() {
            let mut after = 0u32;
            for page_break in paragraph.breaks.iter().filter(|b| counts(source, b)) {
                if page_break.precedes_paragraph() {
                    // nothing precedes the first paragraph
                    if position > 0 {
                        page += 1;
                    }
                } else {
                    after += 1;
                }
            }
            map.insert(paragraph.index, page);
            page += after;
        }

        log::debug!(
            "Counted {} pages from {:?} breaks",
            map.page_count().unwrap_or(0),
            source
        );
        Ok(map)
    }

    fn name(&self) -> &str {
        "rendered page breaks"
    }
}

//! Reader for `word/document.xml`.
//!
//! Collects body-level paragraphs in document order. Paragraphs inside
//! tables and text boxes are not part of the body sequence, but page breaks
//! found inside tables are carried to the next body paragraph so that
//! pagination stays aligned.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::xml::{apply_run_property, get_attr, is_property_change, is_removed_content, is_val_off};
use crate::error::{Error, Result};
use crate::model::{BreakKind, PageBreak, Paragraph, Run, StyleSheet};

#[derive(Default)]
struct PendingParagraph {
    style_id: Option<String>,
    text: String,
    runs: Vec<Run>,
    breaks: Vec<PageBreak>,
}

impl PendingParagraph {
    fn offset(&self, run: Option<&Run>) -> usize {
        self.text.chars().count() + run.map_or(0, |r| r.text.chars().count())
    }
}

#[derive(Default)]
struct BodyWalker {
    in_body: bool,
    table_depth: u32,
    textbox_depth: u32,
    /// Depth inside tracked property changes (`w:rPrChange` and friends)
    change_depth: u32,
    /// Depth inside tracked removals (`w:del`, `w:moveFrom`)
    removed_depth: u32,
    in_p_pr: bool,
    in_r_pr: bool,
    in_text: bool,
    paragraph: Option<PendingParagraph>,
    run: Option<Run>,
    carried_breaks: Vec<BreakKind>,
    paragraphs: Vec<Paragraph>,
}

impl BodyWalker {
    fn collecting(&self) -> bool {
        self.in_body && self.table_depth == 0 && self.textbox_depth == 0
    }

    fn in_revision(&self) -> bool {
        self.change_depth > 0 || self.removed_depth > 0
    }

    /// Track entry into revision markup; `true` when the element must be ignored.
    fn enter_revision(&mut self, name: &[u8], is_empty: bool) -> bool {
        if is_property_change(name) {
            if !is_empty {
                self.change_depth += 1;
            }
            return true;
        }
        if is_removed_content(name) {
            if !is_empty {
                self.removed_depth += 1;
            }
            return true;
        }
        self.in_revision()
    }

    /// Track exit from revision markup; `true` when the element must be ignored.
    fn leave_revision(&mut self, name: &[u8]) -> bool {
        if is_property_change(name) {
            self.change_depth = self.change_depth.saturating_sub(1);
            return true;
        }
        if is_removed_content(name) {
            self.removed_depth = self.removed_depth.saturating_sub(1);
            return true;
        }
        self.in_revision()
    }

    fn start_paragraph(&mut self) {
        let mut pending = PendingParagraph::default();
        for kind in self.carried_breaks.drain(..) {
            pending.breaks.push(PageBreak::new(0, kind));
        }
        self.paragraph = Some(pending);
    }

    fn end_paragraph(&mut self, styles: &StyleSheet) {
        let Some(pending) = self.paragraph.take() else {
            return;
        };
        let style = styles.resolve(pending.style_id.as_deref());
        let mut paragraph = Paragraph::new(self.paragraphs.len(), style).with_text(pending.text);
        paragraph.runs = pending.runs;
        paragraph.breaks = pending.breaks;
        self.paragraphs.push(paragraph);
    }

    fn end_run(&mut self) {
        if let (Some(run), Some(paragraph)) = (self.run.take(), self.paragraph.as_mut()) {
            paragraph.text.push_str(&run.text);
            paragraph.runs.push(run);
        }
        self.in_r_pr = false;
    }

    fn push_break(&mut self, kind: BreakKind) {
        if !self.collecting() {
            if self.in_body && self.table_depth > 0 {
                let carried = match kind {
                    BreakKind::Rendered => BreakKind::Rendered,
                    _ => BreakKind::BeforeParagraph,
                };
                self.carried_breaks.push(carried);
            }
            return;
        }
        if let Some(paragraph) = self.paragraph.as_mut() {
            let offset = paragraph.offset(self.run.as_ref());
            paragraph.breaks.push(PageBreak::new(offset, kind));
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }

    /// Handle an element that may carry no children (`Empty`) or open
    /// (`Start`) one; most run content is the former.
    fn handle_element(&mut self, e: &BytesStart<'_>, is_empty: bool) {
        let name = e.name();
        if self.enter_revision(name.as_ref(), is_empty) {
            return;
        }
        match name.as_ref() {
            b"w:body" => self.in_body = !is_empty,
            b"w:tbl" if !is_empty => self.table_depth += 1,
            b"w:txbxContent" if !is_empty => self.textbox_depth += 1,
            b"w:p" if self.collecting() => self.start_paragraph(),
            b"w:pPr" if self.collecting() && self.paragraph.is_some() && self.run.is_none() => {
                self.in_p_pr = !is_empty;
            }
            b"w:pStyle" if self.in_p_pr => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.style_id = get_attr(e, b"w:val");
                }
            }
            b"w:pageBreakBefore" if self.in_p_pr && !is_val_off(e) => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.breaks.push(PageBreak::new(0, BreakKind::BeforeParagraph));
                }
            }
            b"w:pageBreakBefore" if self.in_body && self.table_depth > 0 && !is_val_off(e) => {
                self.carried_breaks.push(BreakKind::BeforeParagraph);
            }
            b"w:r" if self.collecting() && self.paragraph.is_some() => {
                self.run = Some(Run::default());
                if is_empty {
                    self.end_run();
                }
            }
            b"w:rPr" if self.run.is_some() && self.collecting() => self.in_r_pr = !is_empty,
            _ if self.in_r_pr => {
                if let Some(run) = self.run.as_mut() {
                    apply_run_property(e, &mut run.font);
                }
            }
            b"w:t" if self.run.is_some() && self.collecting() => self.in_text = !is_empty,
            b"w:tab" if self.run.is_some() && self.collecting() => self.push_text("\t"),
            b"w:cr" if self.run.is_some() && self.collecting() => self.push_text("\n"),
            b"w:br" => match get_attr(e, b"w:type").as_deref() {
                Some("page") => self.push_break(BreakKind::Explicit),
                Some("column") => {}
                _ if self.run.is_some() && self.collecting() => self.push_text("\n"),
                _ => {}
            },
            b"w:lastRenderedPageBreak" => self.push_break(BreakKind::Rendered),
            _ => {}
        }
    }

    fn handle_end(&mut self, name: &[u8], styles: &StyleSheet) {
        if self.leave_revision(name) {
            return;
        }
        match name {
            b"w:body" => self.in_body = false,
            b"w:tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"w:txbxContent" => self.textbox_depth = self.textbox_depth.saturating_sub(1),
            b"w:p" if self.collecting() => self.end_paragraph(styles),
            b"w:pPr" => self.in_p_pr = false,
            b"w:r" if self.run.is_some() && self.collecting() => self.end_run(),
            b"w:rPr" => self.in_r_pr = false,
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }
}

/// Parse the body paragraphs of a `document.xml` part.
///
/// When `lenient` is set, a malformed part yields the paragraphs read so
/// far instead of an error.
pub(crate) fn parse_body(xml: &str, styles: &StyleSheet, lenient: bool) -> Result<Vec<Paragraph>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut walker = BodyWalker::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => walker.handle_element(&e, false),
            Ok(Event::Empty(e)) => {
                walker.handle_element(&e, true);
                if e.name().as_ref() == b"w:p" {
                    walker.handle_end(b"w:p", styles);
                }
            }
            Ok(Event::Text(e)) if walker.in_text && walker.collecting() => {
                let text = e
                    .unescape()
                    .map_err(|err| Error::Xml(format!("document.xml text: {}", err)))?;
                walker.push_text(&text);
            }
            Ok(Event::End(e)) => walker.handle_end(e.name().as_ref(), styles),
            Ok(Event::Eof) => break,
            Err(e) if lenient => {
                log::warn!(
                    "document.xml is malformed at position {} ({}); keeping {} paragraphs",
                    reader.buffer_position(),
                    e,
                    walker.paragraphs.len()
                );
                break;
            }
            Err(e) => {
                return Err(Error::Xml(format!(
                    "document.xml at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    log::debug!("Parsed {} body paragraphs", walker.paragraphs.len());
    Ok(walker.paragraphs)
}

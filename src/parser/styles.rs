//! Reader for `word/styles.xml`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::xml::{apply_run_property, get_attr, is_property_change};
use crate::error::{Error, Result};
use crate::model::{FontProps, ParagraphStyle, StyleSheet};

/// Style under construction while its `w:style` element is open.
struct PendingStyle {
    id: String,
    name: Option<String>,
    based_on: Option<String>,
    is_default: bool,
    is_paragraph: bool,
    font: FontProps,
}

impl PendingStyle {
    fn start(e: &BytesStart<'_>) -> Self {
        let style_type = get_attr(e, b"w:type");
        Self {
            id: get_attr(e, b"w:styleId").unwrap_or_default(),
            name: None,
            based_on: None,
            is_default: get_attr(e, b"w:default").as_deref() == Some("1"),
            is_paragraph: style_type.as_deref().map_or(true, |t| t == "paragraph"),
            font: FontProps::default(),
        }
    }

    fn finish(self) -> ParagraphStyle {
        let name = self
            .name
            .map(|n| ui_style_name(&n))
            .unwrap_or_else(|| self.id.clone());
        ParagraphStyle {
            id: self.id,
            name,
            based_on: self.based_on,
            is_default: self.is_default,
            font: self.font,
        }
    }
}

/// Map the lowercase internal names of built-in styles to the names Word
/// shows in its UI ("heading 1" is stored, "Heading 1" is displayed).
pub(crate) fn ui_style_name(name: &str) -> String {
    let lower = name.to_lowercase();
    if let Some(level) = lower.strip_prefix("heading ") {
        if !level.is_empty() && level.chars().all(|c| c.is_ascii_digit()) {
            return format!("Heading {}", level);
        }
    }
    let builtin = match lower.as_str() {
        "normal" => "Normal",
        "title" => "Title",
        "subtitle" => "Subtitle",
        "caption" => "Caption",
        "body text" => "Body Text",
        "list paragraph" => "List Paragraph",
        "no spacing" => "No Spacing",
        "toc heading" => "TOC Heading",
        _ => return name.to_string(),
    };
    builtin.to_string()
}

/// Parse the paragraph styles of a `styles.xml` part.
///
/// Only style-level run properties (`w:style/w:rPr`) are read; the run
/// properties of the paragraph mark (`w:pPr/w:rPr`) and document defaults
/// are not part of a style's font.
pub(crate) fn parse_styles(xml: &str) -> Result<StyleSheet> {
    let mut sheet = StyleSheet::new();

    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut current: Option<PendingStyle> = None;
    let mut in_p_pr = false;
    let mut in_r_pr = false;
    // pre-revision formatting inside tracked property changes
    let mut change_depth = 0u32;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if is_property_change(e.name().as_ref()) => change_depth += 1,
            Ok(Event::End(e)) if is_property_change(e.name().as_ref()) => {
                change_depth = change_depth.saturating_sub(1);
            }
            Ok(Event::Start(_) | Event::Empty(_) | Event::End(_)) if change_depth > 0 => {}
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:style" => current = Some(PendingStyle::start(&e)),
                b"w:pPr" if current.is_some() => in_p_pr = true,
                b"w:rPr" if current.is_some() && !in_p_pr => in_r_pr = true,
                _ => {
                    if let (Some(style), true) = (current.as_mut(), in_r_pr) {
                        apply_run_property(&e, &mut style.font);
                    }
                }
            },
            Ok(Event::Empty(e)) => {
                if let Some(style) = current.as_mut() {
                    match e.name().as_ref() {
                        b"w:name" => style.name = get_attr(&e, b"w:val"),
                        b"w:basedOn" => style.based_on = get_attr(&e, b"w:val"),
                        _ if in_r_pr => apply_run_property(&e, &mut style.font),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:style" => {
                    if let Some(style) = current.take() {
                        if style.is_paragraph {
                            sheet.insert(style.finish());
                        }
                    }
                    in_p_pr = false;
                    in_r_pr = false;
                }
                b"w:pPr" => in_p_pr = false,
                b"w:rPr" => in_r_pr = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "styles.xml at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    log::debug!("Parsed {} paragraph styles", sheet.len());
    Ok(sheet)
}

//! Effective font resolution.
//!
//! A run inherits every attribute it does not set from its paragraph's
//! style. Each attribute cascades independently; when neither level sets
//! it the effective value is unknown (`None`), never a zero value.

use serde::Serialize;

use crate::model::{Length, ParagraphStyle, Paragraph, RgbColor, Run};

/// Font attributes of a run after inheritance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectiveFont {
    /// Font family name
    pub family: Option<String>,

    /// Font size
    pub size: Option<Length>,

    /// Font color
    pub color: Option<RgbColor>,

    /// Bold flag
    pub bold: Option<bool>,
}

impl EffectiveFont {
    /// Font size in points.
    pub fn size_pt(&self) -> Option<f32> {
        self.size.map(Length::pt)
    }
}

fn cascade<T: Clone>(run: &Option<T>, style: &Option<T>) -> Option<T> {
    run.as_ref().or(style.as_ref()).cloned()
}

/// Effective font family.
pub fn resolve_family(run: &Run, style: &ParagraphStyle) -> Option<String> {
    cascade(&run.font.family, &style.font.family)
}

/// Effective font size.
pub fn resolve_size(run: &Run, style: &ParagraphStyle) -> Option<Length> {
    cascade(&run.font.size, &style.font.size)
}

/// Effective font color.
pub fn resolve_color(run: &Run, style: &ParagraphStyle) -> Option<RgbColor> {
    cascade(&run.font.color, &style.font.color)
}

/// Effective bold flag.
pub fn resolve_bold(run: &Run, style: &ParagraphStyle) -> Option<bool> {
    cascade(&run.font.bold, &style.font.bold)
}

/// Resolve the effective font of `run` within `paragraph`.
pub fn resolve(run: &Run, paragraph: &Paragraph) -> EffectiveFont {
    let style = paragraph.style.as_ref();
    EffectiveFont {
        family: resolve_family(run, style),
        size: resolve_size(run, style),
        color: resolve_color(run, style),
        bold: resolve_bold(run, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn paragraph_with(style: ParagraphStyle) -> Paragraph {
        Paragraph::new(0, Arc::new(style))
    }

    #[test]
    fn test_run_overrides_style() {
        let p = paragraph_with(
            ParagraphStyle::new("Heading 1")
                .with_family("Times New Roman")
                .with_size_pt(16.0)
                .with_bold(true),
        );
        let run = Run::new("Title").with_family("Arial").with_bold(false);

        let font = resolve(&run, &p);
        assert_eq!(font.family.as_deref(), Some("Arial"));
        assert_eq!(font.size_pt(), Some(16.0));
        assert_eq!(font.bold, Some(false));
    }

    #[test]
    fn test_unset_everywhere_is_unknown() {
        let p = paragraph_with(ParagraphStyle::new("Heading 2"));
        let font = resolve(&Run::new("x"), &p);

        assert_eq!(font, EffectiveFont::default());
        assert_eq!(font.color, None);
        assert_eq!(font.size, None);
    }

    #[test]
    fn test_each_attribute_cascades_independently() {
        let style = ParagraphStyle::new("Heading 3")
            .with_color(RgbColor::BLACK)
            .with_size_pt(12.0);
        let run = Run::new("x").with_size_pt(11.0);

        assert_eq!(resolve_size(&run, &style), Some(Length::from_pt(11.0)));
        assert_eq!(resolve_color(&run, &style), Some(RgbColor::BLACK));
        assert_eq!(resolve_family(&run, &style), None);
        assert_eq!(resolve_bold(&run, &style), None);
    }

    #[test]
    fn test_explicit_false_is_not_inherited() {
        let style = ParagraphStyle::new("Heading 1").with_bold(true);
        let run = Run::new("x").with_bold(false);
        assert_eq!(resolve_bold(&run, &style), Some(false));
    }
}

//! Paragraph styles and the font attributes they share with runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A physical length stored in English Metric Units (EMU).
///
/// DOCX stores font sizes in half-points; the model keeps every size in
/// EMU and converts to points only when a value is compared or displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Length(i64);

impl Length {
    /// EMU per typographic point.
    pub const EMU_PER_POINT: i64 = 12_700;

    /// Create a length from raw EMU.
    pub const fn from_emu(emu: i64) -> Self {
        Self(emu)
    }

    /// Create a length from points.
    pub fn from_pt(pt: f32) -> Self {
        Self((pt * Self::EMU_PER_POINT as f32).round() as i64)
    }

    /// Create a length from half-points (the unit of `w:sz`).
    pub const fn from_half_points(half_points: u32) -> Self {
        Self(half_points as i64 * Self::EMU_PER_POINT / 2)
    }

    /// Raw EMU value.
    pub const fn emu(self) -> i64 {
        self.0
    }

    /// Value in points.
    pub fn pt(self) -> f32 {
        self.0 as f32 / Self::EMU_PER_POINT as f32
    }
}

/// An RGB color in canonical form.
///
/// Parsing accepts an optional leading `#` and either case; the canonical
/// text form is six uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    /// Black, the color every heading rule expects.
    pub const BLACK: RgbColor = RgbColor(0, 0, 0);

    /// Parse `"FF0000"`, `"ff0000"` or `"#FF0000"`.
    ///
    /// Returns `None` for `auto` and anything that is not six hex digits.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Canonical six-digit uppercase form.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Font attributes that may be set on a run or a paragraph style.
///
/// Every attribute is optional: `None` means "not set here", which is
/// different from being explicitly set to a default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontProps {
    /// Font family name
    pub family: Option<String>,

    /// Font size
    pub size: Option<Length>,

    /// Font color
    pub color: Option<RgbColor>,

    /// Bold flag
    pub bold: Option<bool>,
}

impl FontProps {
    /// Check if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.size.is_none() && self.color.is_none() && self.bold.is_none()
    }
}

/// A named paragraph formatting template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Style id as referenced by `w:pStyle` (e.g., "Heading1")
    pub id: String,

    /// Display name (e.g., "Heading 1")
    pub name: String,

    /// Parent style id, if any
    pub based_on: Option<String>,

    /// Whether this is the document's default paragraph style
    pub is_default: bool,

    /// Style-level font defaults
    pub font: FontProps,
}

impl ParagraphStyle {
    /// Create a style whose id is its name with spaces removed.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.replace(' ', ""),
            name,
            based_on: None,
            is_default: false,
            font: FontProps::default(),
        }
    }

    /// The implicit style used when a document defines none.
    pub fn normal() -> Self {
        let mut style = Self::new("Normal");
        style.is_default = true;
        style
    }

    /// Set the style id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the default font family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.font.family = Some(family.into());
        self
    }

    /// Set the default font size in points.
    pub fn with_size_pt(mut self, pt: f32) -> Self {
        self.font.size = Some(Length::from_pt(pt));
        self
    }

    /// Set the default font color.
    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.font.color = Some(color);
        self
    }

    /// Set the default bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font.bold = Some(bold);
        self
    }

    /// Whether the style name classifies the paragraph as a heading.
    pub fn is_heading(&self) -> bool {
        self.name.to_lowercase().starts_with("heading")
    }

    /// Heading level parsed from the trailing integer of the style name.
    ///
    /// `None` for non-heading styles and for heading styles without a
    /// numeric suffix.
    pub fn heading_level(&self) -> Option<u32> {
        if !self.is_heading() {
            return None;
        }
        let name = self.name.trim_end();
        let digits_start = name
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i)?;
        name[digits_start..].parse().ok()
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::normal()
    }
}

/// All paragraph styles of a document, keyed by style id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: HashMap<String, Arc<ParagraphStyle>>,
    default_id: Option<String>,
    #[serde(skip, default = "fallback_style")]
    fallback: Arc<ParagraphStyle>,
}

fn fallback_style() -> Arc<ParagraphStyle> {
    Arc::new(ParagraphStyle::normal())
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
            default_id: None,
            fallback: fallback_style(),
        }
    }

    /// Add a style, returning the shared handle.
    ///
    /// The first style flagged as default becomes the default style.
    pub fn insert(&mut self, style: ParagraphStyle) -> Arc<ParagraphStyle> {
        if style.is_default && self.default_id.is_none() {
            self.default_id = Some(style.id.clone());
        }
        let style = Arc::new(style);
        self.styles.insert(style.id.clone(), Arc::clone(&style));
        style
    }

    /// Get a style by id.
    pub fn get(&self, id: &str) -> Option<Arc<ParagraphStyle>> {
        self.styles.get(id).cloned()
    }

    /// Get a style by display name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<Arc<ParagraphStyle>> {
        self.styles
            .values()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// The default paragraph style, or an implicit "Normal" style.
    pub fn default_style(&self) -> Arc<ParagraphStyle> {
        self.default_id
            .as_deref()
            .and_then(|id| self.get(id))
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }

    /// Resolve a `w:pStyle` reference, falling back to the default style.
    pub fn resolve(&self, id: Option<&str>) -> Arc<ParagraphStyle> {
        match id {
            Some(id) => self.get(id).unwrap_or_else(|| {
                log::warn!("Unknown paragraph style id '{}', using default style", id);
                self.default_style()
            }),
            None => self.default_style(),
        }
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the sheet has no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over styles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ParagraphStyle>> {
        self.styles.values()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

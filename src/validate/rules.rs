//! Heading rule table.

use std::collections::BTreeMap;
use std::fmt;

use super::resolve::EffectiveFont;
use crate::model::{Length, RgbColor};

/// Font family every standard heading rule expects.
pub const HEADING_FAMILY: &str = "Times New Roman";

/// A font property checked by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontProperty {
    /// Font family
    Family,
    /// Font size
    Size,
    /// Font color
    Color,
    /// Bold flag
    Bold,
}

impl FontProperty {
    /// Property name as it appears in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            FontProperty::Family => "font_family",
            FontProperty::Size => "font_size",
            FontProperty::Color => "font_color",
            FontProperty::Bold => "bold",
        }
    }
}

impl fmt::Display for FontProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expected font value. The variant names the property.
#[derive(Debug, Clone, PartialEq)]
pub enum FontValue {
    /// Exact family name
    Family(String),
    /// Size, compared exactly
    Size(Length),
    /// Color, compared in canonical form
    Color(RgbColor),
    /// Bold flag; an unknown actual value never matches
    Bold(bool),
}

impl FontValue {
    /// The property this value constrains.
    pub fn property(&self) -> FontProperty {
        match self {
            FontValue::Family(_) => FontProperty::Family,
            FontValue::Size(_) => FontProperty::Size,
            FontValue::Color(_) => FontProperty::Color,
            FontValue::Bold(_) => FontProperty::Bold,
        }
    }

    /// Whether the effective font satisfies this value.
    pub fn matches(&self, actual: &EffectiveFont) -> bool {
        match self {
            FontValue::Family(family) => actual.family.as_deref() == Some(family.as_str()),
            FontValue::Size(size) => actual.size == Some(*size),
            FontValue::Color(color) => actual.color == Some(*color),
            FontValue::Bold(bold) => actual.bold == Some(*bold),
        }
    }

    /// The effective value of the same property, stringified, if known.
    pub fn actual_of(&self, actual: &EffectiveFont) -> Option<String> {
        match self {
            FontValue::Family(_) => actual.family.clone(),
            FontValue::Size(_) => actual.size_pt().map(|pt| pt.to_string()),
            FontValue::Color(_) => actual.color.map(|c| c.to_hex()),
            FontValue::Bold(_) => actual.bold.map(|b| b.to_string()),
        }
    }
}

impl fmt::Display for FontValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontValue::Family(family) => f.write_str(family),
            FontValue::Size(size) => write!(f, "{}", size.pt()),
            FontValue::Color(color) => write!(f, "{}", color),
            FontValue::Bold(bold) => write!(f, "{}", bold),
        }
    }
}

/// The font values mandatory for one heading level, in report order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expectation {
    values: Vec<FontValue>,
}

static EMPTY_EXPECTATION: Expectation = Expectation { values: Vec::new() };

impl Expectation {
    /// Create an empty expectation.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard heading expectation: Times New Roman, black, bold, at `size_pt`.
    pub fn heading(size_pt: f32) -> Self {
        Self::new()
            .family(HEADING_FAMILY)
            .size_pt(size_pt)
            .color(RgbColor::BLACK)
            .bold(true)
    }

    /// Require a font family.
    pub fn family(self, family: impl Into<String>) -> Self {
        self.with(FontValue::Family(family.into()))
    }

    /// Require a font size in points.
    pub fn size_pt(self, pt: f32) -> Self {
        self.with(FontValue::Size(Length::from_pt(pt)))
    }

    /// Require a font color.
    pub fn color(self, color: RgbColor) -> Self {
        self.with(FontValue::Color(color))
    }

    /// Require a bold flag.
    pub fn bold(self, bold: bool) -> Self {
        self.with(FontValue::Bold(bold))
    }

    /// Add a value, replacing an earlier one for the same property.
    pub fn with(mut self, value: FontValue) -> Self {
        match self
            .values
            .iter_mut()
            .find(|v| v.property() == value.property())
        {
            Some(existing) => *existing = value,
            None => self.values.push(value),
        }
        self
    }

    /// Iterate over expected values in report order.
    pub fn iter(&self) -> impl Iterator<Item = &FontValue> {
        self.values.iter()
    }

    /// Number of expected properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is expected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mapping from heading level to its expectation.
///
/// Levels without an entry expect nothing. One level can additionally be
/// designated as the page-number level, which gets the content check.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: BTreeMap<u32, Expectation>,
    page_number_level: Option<u32>,
}

impl RuleTable {
    /// Create a table with no rules and no page-number level.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
            page_number_level: None,
        }
    }

    /// The standard table: levels 1, 2 and 3-5 at 16, 14 and 12 pt;
    /// level 6 carries the page number.
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(1, Expectation::heading(16.0))
            .with_rule(2, Expectation::heading(14.0))
            .with_rule(3, Expectation::heading(12.0))
            .with_rule(4, Expectation::heading(12.0))
            .with_rule(5, Expectation::heading(12.0))
            .with_page_number_level(Some(6))
    }

    /// Set the expectation for a level.
    pub fn with_rule(mut self, level: u32, expectation: Expectation) -> Self {
        self.rules.insert(level, expectation);
        self
    }

    /// Set the level that must carry the page number.
    pub fn with_page_number_level(mut self, level: Option<u32>) -> Self {
        self.page_number_level = level;
        self
    }

    /// Expected font values for a heading level.
    pub fn expected_for(&self, level: u32) -> &Expectation {
        self.rules.get(&level).unwrap_or(&EMPTY_EXPECTATION)
    }

    /// Whether a level gets the page-number content check.
    pub fn is_page_number_level(&self, level: u32) -> bool {
        self.page_number_level == Some(level)
    }

    /// Levels with a non-empty rule, ascending.
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.rules
            .iter()
            .filter(|(_, e)| !e.is_empty())
            .map(|(level, _)| *level)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = RuleTable::standard();
        assert_eq!(table.expected_for(1), &Expectation::heading(16.0));
        assert_eq!(table.expected_for(2), &Expectation::heading(14.0));
        for level in 3..=5 {
            assert_eq!(table.expected_for(level), &Expectation::heading(12.0));
        }
        assert!(table.expected_for(6).is_empty());
        assert!(table.expected_for(0).is_empty());
        assert!(table.expected_for(42).is_empty());
        assert_eq!(table.levels().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_number_level() {
        let table = RuleTable::standard();
        assert!(table.is_page_number_level(6));
        assert!(!table.is_page_number_level(5));
        assert!(!RuleTable::empty().is_page_number_level(6));
    }

    #[test]
    fn test_expectation_order() {
        let props: Vec<_> = Expectation::heading(16.0)
            .iter()
            .map(|v| v.property().as_str())
            .collect();
        assert_eq!(props, vec!["font_family", "font_size", "font_color", "bold"]);
    }

    #[test]
    fn test_expectation_replaces_same_property() {
        let exp = Expectation::heading(16.0).family("Georgia");
        assert_eq!(exp.len(), 4);
        assert_eq!(exp.iter().next(), Some(&FontValue::Family("Georgia".into())));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(FontValue::Size(Length::from_pt(16.0)).to_string(), "16");
        assert_eq!(FontValue::Size(Length::from_half_points(21)).to_string(), "10.5");
        assert_eq!(FontValue::Color(RgbColor::BLACK).to_string(), "000000");
        assert_eq!(FontValue::Bold(true).to_string(), "true");
    }

    #[test]
    fn test_matches() {
        let font = EffectiveFont {
            family: Some("Times New Roman".into()),
            size: Some(Length::from_half_points(32)),
            color: RgbColor::parse("#000000"),
            bold: None,
        };
        assert!(FontValue::Family(HEADING_FAMILY.into()).matches(&font));
        assert!(FontValue::Size(Length::from_pt(16.0)).matches(&font));
        assert!(FontValue::Color(RgbColor::BLACK).matches(&font));
        assert!(!FontValue::Bold(true).matches(&font));
        assert!(!FontValue::Bold(false).matches(&font));
    }
}

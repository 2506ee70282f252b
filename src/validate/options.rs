//! Validation options and configuration.

use super::rules::RuleTable;
use super::tokenize::Tokenization;

/// Options controlling which checks run and how.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Which paragraphs get the spelling check
    pub spelling: SpellingScope,

    /// How paragraph text is tokenized for spelling
    pub tokenization: Tokenization,

    /// Expected heading fonts per level
    pub rules: RuleTable,
}

impl ValidateOptions {
    /// Create new validate options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spelling scope.
    pub fn with_spelling(mut self, scope: SpellingScope) -> Self {
        self.spelling = scope;
        self
    }

    /// Set the tokenization mode.
    pub fn with_tokenization(mut self, mode: Tokenization) -> Self {
        self.tokenization = mode;
        self
    }

    /// Strip leading and trailing punctuation from tokens.
    pub fn strip_punctuation(mut self) -> Self {
        self.tokenization = Tokenization::StripPunctuation;
        self
    }

    /// Replace the rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Disable the spelling check.
    pub fn without_spelling(mut self) -> Self {
        self.spelling = SpellingScope::Disabled;
        self
    }
}

/// Which paragraphs the spelling check covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellingScope {
    /// Every paragraph, headings included
    #[default]
    AllParagraphs,
    /// Only paragraphs whose style is not a heading
    BodyOnly,
    /// No spelling check
    Disabled,
}

impl SpellingScope {
    /// Whether a paragraph with the given heading flag is in scope.
    pub fn covers(self, is_heading: bool) -> bool {
        match self {
            SpellingScope::AllParagraphs => true,
            SpellingScope::BodyOnly => !is_heading,
            SpellingScope::Disabled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ValidateOptions::new();
        assert_eq!(options.spelling, SpellingScope::AllParagraphs);
        assert_eq!(options.tokenization, Tokenization::Whitespace);
        assert_eq!(options.rules, RuleTable::standard());
    }

    #[test]
    fn test_builder() {
        let options = ValidateOptions::new()
            .with_spelling(SpellingScope::BodyOnly)
            .strip_punctuation()
            .with_rules(RuleTable::empty());

        assert_eq!(options.spelling, SpellingScope::BodyOnly);
        assert_eq!(options.tokenization, Tokenization::StripPunctuation);
        assert!(options.rules.expected_for(1).is_empty());
        assert_eq!(options.without_spelling().spelling, SpellingScope::Disabled);
    }

    #[test]
    fn test_scope_covers() {
        assert!(SpellingScope::AllParagraphs.covers(true));
        assert!(SpellingScope::BodyOnly.covers(false));
        assert!(!SpellingScope::BodyOnly.covers(true));
        assert!(!SpellingScope::Disabled.covers(false));
    }
}

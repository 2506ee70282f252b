//! Paragraph tokenization for the spelling check.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// How paragraph text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenization {
    /// Split on whitespace only; punctuation stays attached to words
    #[default]
    Whitespace,
    /// Split on whitespace, then trim leading and trailing punctuation
    StripPunctuation,
}

/// Split `text` into unique NFC-normalized tokens, in first-occurrence order.
pub fn tokenize(text: &str, mode: Tokenization) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for raw in text.split_whitespace() {
        let raw = match mode {
            Tokenization::Whitespace => raw,
            Tokenization::StripPunctuation => raw.trim_matches(|c: char| !c.is_alphanumeric()),
        };
        if raw.is_empty() {
            continue;
        }
        let token: String = raw.nfc().collect();
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }

    tokens
}

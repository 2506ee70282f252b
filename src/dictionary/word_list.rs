//! Word-list backed dictionary.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

use super::DictionaryOracle;
use crate::error::{Error, Result};

/// Largest edit distance a correction may be from the misspelled token.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Dictionary loaded from a plain word list.
///
/// Each line holds a word, optionally followed by a frequency count
/// (`the 23135851162`). Blank lines and lines starting with `#` are
/// skipped. Words are case-folded and NFC-normalized, so lookups are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: HashMap<String, u64>,
    max_distance: usize,
    ignore_non_alphabetic: bool,
}

impl Default for WordListDictionary {
    fn default() -> Self {
        Self {
            words: HashMap::new(),
            max_distance: DEFAULT_MAX_DISTANCE,
            ignore_non_alphabetic: true,
        }
    }
}

fn normalize(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

impl WordListDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words, each counted once per occurrence.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref(), 1);
        }
        dictionary
    }

    /// Load a word list file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::DictionaryUnavailable(format!("{}: {}", path.display(), e)))?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::info!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Load a word list from a reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Self::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::DictionaryUnavailable(e.to_string()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let count = match fields.next() {
                Some(count) => count.parse().map_err(|_| {
                    Error::DictionaryUnavailable(format!(
                        "line {}: invalid frequency {:?}",
                        number + 1,
                        count
                    ))
                })?,
                None => 1,
            };
            dictionary.insert(word, count);
        }

        if dictionary.is_empty() {
            return Err(Error::DictionaryUnavailable("word list is empty".into()));
        }
        Ok(dictionary)
    }

    /// Set the largest edit distance for corrections.
    pub fn with_max_distance(mut self, distance: usize) -> Self {
        self.max_distance = distance;
        self
    }

    /// Whether tokens without any letter (numbers, symbols) count as known.
    pub fn with_ignore_non_alphabetic(mut self, ignore: bool) -> Self {
        self.ignore_non_alphabetic = ignore;
        self
    }

    /// Add a word, accumulating its frequency.
    pub fn insert(&mut self, word: &str, count: u64) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        *self.words.entry(word).or_insert(0) += count;
    }

    /// Check if the dictionary contains a word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&normalize(word))
    }

    /// Frequency of a word, if present.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(&normalize(word)).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether a token is acceptable as spelled.
    pub fn is_known(&self, token: &str) -> bool {
        if self.ignore_non_alphabetic && !token.chars().any(char::is_alphabetic) {
            return true;
        }
        self.contains(token)
    }

    /// Closest word within the distance limit.
    ///
    /// Ties go to the more frequent word, then to the lexicographically
    /// smaller one.
    pub fn suggest(&self, token: &str) -> Option<String> {
        let target = normalize(token);
        if self.words.contains_key(&target) {
            return Some(target);
        }
        let target_len = target.chars().count();

        self.words
            .iter()
            .filter(|(word, _)| word.chars().count().abs_diff(target_len) <= self.max_distance)
            .map(|(word, &freq)| (damerau_levenshtein(&target, word), freq, word))
            .filter(|(distance, _, _)| *distance <= self.max_distance)
            .min_by_key(|(distance, freq, word)| (*distance, Reverse(*freq), *word))
            .map(|(_, _, word)| word.clone())
    }
}

impl DictionaryOracle for WordListDictionary {
    fn unknown(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .filter(|t| !self.is_known(t))
            .cloned()
            .collect())
    }

    fn correction(&self, token: &str) -> Result<Option<String>> {
        Ok(self.suggest(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let dict = WordListDictionary::from_words(["This", "is", "a", "test"]);
        assert!(dict.contains("THIS"));
        assert!(dict.is_known("Test"));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_unknown_preserves_token_spelling() {
        let dict = WordListDictionary::from_words(["this", "is", "a", "test"]);
        let unknown = dict.unknown(&tokens(&["Thsi", "is", "a", "tset"])).unwrap();
        assert_eq!(unknown, vec!["Thsi", "tset"]);
    }

    #[test]
    fn test_numbers_are_known_by_default() {
        let dict = WordListDictionary::from_words(["page"]);
        assert!(dict.is_known("42"));
        assert!(dict.is_known("3.14"));
        assert!(!dict.with_ignore_non_alphabetic(false).is_known("42"));
    }

    #[test]
    fn test_suggest_transposition() {
        let dict = WordListDictionary::from_words(["this", "test", "is"]);
        assert_eq!(dict.suggest("Thsi").as_deref(), Some("this"));
        assert_eq!(dict.suggest("tset").as_deref(), Some("test"));
    }

    #[test]
    fn test_suggest_prefers_frequency_then_order() {
        let mut dict = WordListDictionary::new();
        dict.insert("cat", 5);
        dict.insert("car", 50);
        dict.insert("cap", 50);
        assert_eq!(dict.suggest("caz").as_deref(), Some("cap"));
    }

    #[test]
    fn test_suggest_respects_max_distance() {
        let dict = WordListDictionary::from_words(["documentation"]);
        assert_eq!(dict.suggest("docu"), None);
        assert_eq!(dict.clone().with_max_distance(1).suggest("documentatoin"), Some("documentation".into()));
        assert_eq!(dict.with_max_distance(0).suggest("documentatio"), None);
    }

    #[test]
    fn test_from_reader_with_frequencies() {
        let list = "# comment\nthe 100\nof 50\n\nand\n";
        let dict = WordListDictionary::from_reader(Cursor::new(list)).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.frequency("the"), Some(100));
        assert_eq!(dict.frequency("and"), Some(1));
    }

    #[test]
    fn test_from_reader_errors() {
        let err = WordListDictionary::from_reader(Cursor::new("the many\n")).unwrap_err();
        assert!(matches!(err, Error::DictionaryUnavailable(_)));

        let err = WordListDictionary::from_reader(Cursor::new("\n# nothing\n")).unwrap_err();
        assert!(matches!(err, Error::DictionaryUnavailable(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = WordListDictionary::from_path("/nonexistent/words.txt").unwrap_err();
        assert!(err.is_oracle_error());
    }
}

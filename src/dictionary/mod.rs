//! Dictionary oracles for the spelling check.

mod word_list;

use crate::error::Result;

pub use word_list::{WordListDictionary, DEFAULT_MAX_DISTANCE};

/// Answers which tokens are misspelled and how to correct them.
///
/// Lookups must not change the dictionary; the same token always gets
/// the same answer within one validation run.
pub trait DictionaryOracle {
    /// The subset of `tokens` the dictionary does not know.
    fn unknown(&self, tokens: &[String]) -> Result<Vec<String>>;

    /// The most likely correction for `token`, if any.
    fn correction(&self, token: &str) -> Result<Option<String>>;
}

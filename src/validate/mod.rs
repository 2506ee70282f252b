//! Document validation engine.
//!
//! The engine walks the paragraphs of a [`Document`](crate::model::Document)
//! once. Headings get their first run's effective font compared with the
//! [`RuleTable`]; the page-number level additionally gets a content check;
//! paragraphs in the [`SpellingScope`] are checked against a dictionary.
//! Every check outcome becomes a [`TestRecord`] in the [`Report`].

mod checks;
mod engine;
mod options;
mod record;
mod report;
mod resolve;
mod rules;
mod tokenize;

pub use engine::Validator;
pub use options::{SpellingScope, ValidateOptions};
pub use record::{Status, TestRecord, ABSENT, MISSING, PRESENT, UNSET};
pub use report::{Report, Summary};
pub use resolve::{
    resolve, resolve_bold, resolve_color, resolve_family, resolve_size, EffectiveFont,
};
pub use rules::{Expectation, FontProperty, FontValue, RuleTable, HEADING_FAMILY};
pub use tokenize::{tokenize, Tokenization};

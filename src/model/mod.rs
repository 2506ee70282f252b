//! Document model types.
//!
//! This module defines the representation the validation engine works on:
//! paragraphs with their runs, the paragraph styles they reference and the
//! page break markers recorded while loading. Values are immutable once a
//! document is loaded; styles are shared between paragraphs.

mod document;
mod paragraph;
mod style;

pub use document::{Document, Metadata};
pub use paragraph::{BreakKind, PageBreak, Paragraph, Run};
pub use style::{FontProps, Length, ParagraphStyle, RgbColor, StyleSheet};

//! DOCX loading module.

mod body;
mod core_props;
mod docx_parser;
mod options;
mod styles;
mod xml;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, LoadOptions};

//! Page location.
//!
//! A [`PaginationOracle`] maps paragraph indices to rendered page numbers
//! once per document. The [`PageMap`] it returns answers
//! [`PageMap::page_of`] for every index, with [`PageNumber::Unknown`] for
//! paragraphs the oracle did not place.

mod command;
mod rendered;

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::model::Document;

pub use command::CommandPagination;
pub use rendered::{BreakSource, RenderedBreaks};

/// Rendered page of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageNumber {
    /// 1-based page number
    Page(u32),
    /// The oracle did not place the paragraph
    #[default]
    Unknown,
}

impl PageNumber {
    /// Report spelling of an unknown page.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Check if the page is unknown.
    pub fn is_unknown(self) -> bool {
        self == PageNumber::Unknown
    }

    /// The page number, if known.
    pub fn number(self) -> Option<u32> {
        match self {
            PageNumber::Page(n) => Some(n),
            PageNumber::Unknown => None,
        }
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageNumber::Page(n) => f.pad(&n.to_string()),
            PageNumber::Unknown => f.pad(Self::UNKNOWN),
        }
    }
}

impl Serialize for PageNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PageNumber::Page(n) => serializer.serialize_u32(*n),
            PageNumber::Unknown => serializer.serialize_str(Self::UNKNOWN),
        }
    }
}

/// Mapping from paragraph index to page number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMap {
    pages: HashMap<usize, u32>,
}

impl PageMap {
    /// Create an empty map; every paragraph resolves to `Unknown`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a paragraph on a page.
    pub fn insert(&mut self, paragraph: usize, page: u32) {
        self.pages.insert(paragraph, page);
    }

    /// Page of a paragraph, `Unknown` when the oracle did not place it.
    pub fn page_of(&self, paragraph: usize) -> PageNumber {
        self.pages
            .get(&paragraph)
            .map_or(PageNumber::Unknown, |&n| PageNumber::Page(n))
    }

    /// Number of placed paragraphs.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if no paragraph is placed.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Highest page number in the map.
    pub fn page_count(&self) -> Option<u32> {
        self.pages.values().copied().max()
    }
}

impl FromIterator<(usize, u32)> for PageMap {
    fn from_iter<I: IntoIterator<Item = (usize, u32)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

/// Source of paragraph page numbers.
///
/// Implementations are called once per validation run and must not
/// depend on state left over from earlier documents.
pub trait PaginationOracle {
    /// Map every paragraph it can place to a page.
    fn resolve(&self, document: &Document) -> Result<PageMap>;

    /// Short name used in log messages.
    fn name(&self) -> &str {
        "pagination"
    }
}

impl<T: PaginationOracle + ?Sized> PaginationOracle for Box<T> {
    fn resolve(&self, document: &Document) -> Result<PageMap> {
        (**self).resolve(document)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Places every paragraph on the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPage(pub u32);

impl PaginationOracle for FixedPage {
    fn resolve(&self, document: &Document) -> Result<PageMap> {
        Ok(document.paragraphs.iter().map(|p| (p.index, self.0)).collect())
    }

    fn name(&self) -> &str {
        "fixed page"
    }
}

/// Places nothing; every paragraph is on an unknown page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPagination;

impl PaginationOracle for NoPagination {
    fn resolve(&self, _document: &Document) -> Result<PageMap> {
        Ok(PageMap::new())
    }

    fn name(&self) -> &str {
        "no pagination"
    }
}

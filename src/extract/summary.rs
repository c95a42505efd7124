// src/extract/summary.rs
use std::fmt;

use scraper::Html;

use super::content::{locate, ContentRegion};
use crate::core::html::{inline_text, first_child_named};

/// Lead paragraph of an article, or which level the lookup failed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryText {
    Found(String),
    /// The page has no content region at all.
    ContentNotFound,
    /// Content region exists but has no top-level paragraph.
    SummaryNotFound,
}

impl SummaryText {
    pub fn is_found(&self) -> bool {
        matches!(self, SummaryText::Found(_))
    }
}

impl fmt::Display for SummaryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryText::Found(text) => f.write_str(text),
            SummaryText::ContentNotFound => f.write_str("Content not found"),
            SummaryText::SummaryNotFound => f.write_str("Summary not found"),
        }
    }
}

/// First `<p>` that is a direct child of the region. Paragraphs nested in
/// infoboxes or side panels come earlier in document order and must not win.
pub fn summarize(region: &ContentRegion<'_>) -> SummaryText {
    match first_child_named(region.element(), "p") {
        Some(p) => SummaryText::Found(inline_text(p)),
        None => SummaryText::SummaryNotFound,
    }
}

pub fn summarize_document(doc: &Html) -> SummaryText {
    match locate(doc) {
        Some(region) => summarize(&region),
        None => SummaryText::ContentNotFound,
    }
}

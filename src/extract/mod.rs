// src/extract/mod.rs
//! # Article extraction
//!
//! Everything here reads a parsed article and returns plain data. No
//! networking, no files, no printing.
//!
//! ## Typical call chain
//! ```text
//! Fetcher → Document::parse() → content::locate()
//!                                 ├→ summary::summarize()
//!                                 ├→ table::extract_table()
//!                                 └→ words::count_words() → store::FrequencyStore::merge()
//! ```
//!
//! ## Conventions
//! - Text is whitespace-collapsed and trimmed before it leaves this module.
//! - Absence is explicit: `Option` for the content region, `SummaryText`
//!   variants for the summary, `ExtractError` kinds for tables and word counts.
pub mod content;
pub mod summary;
pub mod table;
pub mod words;

pub use content::{locate, ContentRegion};
pub use summary::{summarize, summarize_document, SummaryText};
pub use table::{extract_table, value_counts, Table};
pub use words::{count_words, WordCount};

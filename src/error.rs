// src/error.rs
//! Error kinds the runner tells apart when printing messages.
use std::io;
use std::path::PathBuf;

/// Extraction failures on an article that was found.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// No content region to count words in.
    #[error("Content not found")]
    ContentMissing,
    #[error("Table number {requested} is out of range: the article has {found} table(s)")]
    TableOutOfRange { requested: usize, found: usize },
    /// Every row of the table was blank.
    #[error("Table number {0} is empty")]
    EmptyTable(usize),
}

/// Failures writing the frequency store. Reading never fails; see `store::LoadStatus`.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("could not create store directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not serialize word counts: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("could not replace {}: {source}", path.display())]
    Persist { path: PathBuf, source: io::Error },
}

#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{}:{line}: {reason}", path.display())]
    Malformed { path: PathBuf, line: usize, reason: String },
}

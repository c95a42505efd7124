// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub store: StoreOptions,
    pub corpus: CorpusOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            store: StoreOptions::default(),
            corpus: CorpusOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Where article HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchSource {
    Remote { base_url: String },
    Local { dir: PathBuf },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub source: FetchSource,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { source: FetchSource::Remote { base_url: s!(BASE_URL) } }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(STORE_DIR).join(FREQUENCY_FILE) }
    }
}

impl StoreOptions {
    pub fn log_path(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) => dir.join(LOG_FILE),
            None => PathBuf::from(LOG_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusOptions {
    pub dir: PathBuf,
    pub language: String,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(CORPUS_DIR),
            language: s!(DEFAULT_LANGUAGE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

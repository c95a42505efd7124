// src/runner.rs
//! Executes the requested actions and prints their results.
//!
//! Actions run in a fixed order (summary, table, count words, analysis). A
//! failing action prints its message and the next one still runs; only a
//! broken output stream stops the run.

use std::io::{self, Write};

use crate::analysis::{self, AnalysisRow, Mode};
use crate::config::consts::TOP_WORDS_SHOWN;
use crate::config::options::{AppOptions, ExportOptions};
use crate::corpus::ReferenceCorpus;
use crate::csv::table_to_string;
use crate::error::ExtractError;
use crate::extract::{self, content, SummaryText};
use crate::fetch::Fetcher;
use crate::file;
use crate::store::{FrequencyStore, LoadStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Summary { title: String },
    Table { title: String, number: usize, first_row_is_header: bool },
    CountWords { title: String },
    Analyze { mode: Mode, count: usize },
}

impl Action {
    fn order(&self) -> u8 {
        match self {
            Action::Summary { .. } => 0,
            Action::Table { .. } => 1,
            Action::CountWords { .. } => 2,
            Action::Analyze { .. } => 3,
        }
    }
}

/// Why an action produced no result. `Display` is the user-facing message.
#[derive(thiserror::Error, Debug)]
pub enum ActionError {
    #[error("The phrase used for {0} is empty.")]
    EmptyPhrase(&'static str),
    #[error("{label} error: Article \"{title}\" not found.")]
    NotFound { label: &'static str, title: String },
    #[error("{label} error: {source}")]
    Extract { label: &'static str, source: ExtractError },
    #[error("Analysis error: no reference frequencies for language '{0}'.")]
    MissingLanguage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: usize,
    pub failed: usize,
}

pub struct Runner {
    fetcher: Fetcher,
    store: FrequencyStore,
    corpus: Box<dyn ReferenceCorpus>,
    language: String,
    export: ExportOptions,
}

impl Runner {
    pub fn new(options: &AppOptions, corpus: Box<dyn ReferenceCorpus>) -> Self {
        Self {
            fetcher: Fetcher::new(options.fetch.source.clone()),
            store: FrequencyStore::new(options.store.path.clone()),
            corpus,
            language: options.corpus.language.clone(),
            export: options.export.clone(),
        }
    }

    pub fn run<W: Write>(&mut self, actions: &[Action], out: &mut W) -> io::Result<RunSummary> {
        let mut ordered: Vec<&Action> = actions.iter().collect();
        ordered.sort_by_key(|a| a.order());

        let mut summary = RunSummary::default();
        for action in ordered {
            let result = match action {
                Action::Summary { title } => self.summary(title, out),
                Action::Table { title, number, first_row_is_header } => {
                    self.table(title, *number, *first_row_is_header, out)
                }
                Action::CountWords { title } => self.count_words(title, out),
                Action::Analyze { mode, count } => self.analyze(*mode, *count, out),
            };
            match result {
                Ok(()) => summary.completed += 1,
                Err(ActionError::Io(e)) => return Err(e),
                Err(e) => {
                    logf!("Action {action:?} failed: {e}");
                    writeln!(out, "{e}")?;
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    fn summary<W: Write>(&mut self, title: &str, out: &mut W) -> Result<(), ActionError> {
        let title = non_empty(title, "summary")?;
        let doc = self.fetcher.get_document(title).ok_or_else(|| not_found("Summary", title))?;

        let text = extract::summarize_document(&doc.parse());
        if !text.is_found() {
            logf!("\"{title}\": {text}");
        }
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn table<W: Write>(
        &mut self,
        title: &str,
        number: usize,
        first_row_is_header: bool,
        out: &mut W,
    ) -> Result<(), ActionError> {
        let title = non_empty(title, "table")?;
        let doc = self.fetcher.get_document(title).ok_or_else(|| not_found("Table", title))?;
        let html = doc.parse();
        let Some(region) = content::locate(&html) else {
            writeln!(out, "{}", SummaryText::ContentNotFound)?;
            return Ok(());
        };

        let table = extract::extract_table(&region, number, first_row_is_header)
            .map_err(|source| ActionError::Extract { label: "Table", source })?;

        write!(out, "{}", table_to_string(&table, self.export.format.delim()))?;

        match file::export_table(&self.export, title, &table) {
            Ok(path) => writeln!(out, "Saved table to {}", path.display())?,
            Err(e) => {
                loge!("Table export failed: {e}");
                writeln!(out, "Warning: could not save table: {e}")?;
            }
        }

        let counts = extract::value_counts(&table);
        if !counts.is_empty() {
            writeln!(out, "\nValue counts:")?;
            for (value, n) in counts {
                writeln!(out, "{value}: {n}")?;
            }
        }
        Ok(())
    }

    fn count_words<W: Write>(&mut self, title: &str, out: &mut W) -> Result<(), ActionError> {
        let title = non_empty(title, "word counting")?;
        let doc = self.fetcher.get_document(title).ok_or_else(|| not_found("Word count", title))?;
        let html = doc.parse();
        let region = content::locate(&html);

        let counts = extract::count_words(region.as_ref())
            .map_err(|source| ActionError::Extract { label: "Word count", source })?;

        writeln!(
            out,
            "Counted {} word(s), {} distinct, in \"{title}\".",
            counts.total(),
            counts.len()
        )?;
        for (word, n) in counts.top(TOP_WORDS_SHOWN) {
            writeln!(out, "{word}: {n}")?;
        }

        // Only reached with a fully computed WordCount.
        let merge = self.store.merge(&counts);
        if let LoadStatus::Corrupt(reason) = &merge.status {
            writeln!(out, "Warning: word count store was unreadable ({reason}); starting a new one.")?;
        }
        match merge.saved {
            Ok(()) => writeln!(
                out,
                "Saved totals for {} word(s) to {}",
                merge.totals.len(),
                self.store.path().display()
            )?,
            Err(e) => writeln!(out, "Warning: could not save word counts: {e}")?,
        }
        Ok(())
    }

    fn analyze<W: Write>(&mut self, mode: Mode, count: usize, out: &mut W) -> Result<(), ActionError> {
        if !self.corpus.has_language(&self.language) {
            return Err(ActionError::MissingLanguage(self.language.clone()));
        }
        let snapshot = self.store.load();
        if let LoadStatus::Corrupt(reason) = &snapshot.status {
            writeln!(out, "Warning: word count store is unreadable ({reason}); treating it as empty.")?;
        }

        let rows = analysis::analyze(&snapshot.totals, self.corpus.as_ref(), &self.language, mode, count);
        write_analysis(out, &rows)?;
        Ok(())
    }
}

fn non_empty<'a>(title: &'a str, what: &'static str) -> Result<&'a str, ActionError> {
    let t = title.trim();
    if t.is_empty() { Err(ActionError::EmptyPhrase(what)) } else { Ok(t) }
}

fn not_found(label: &'static str, title: &str) -> ActionError {
    ActionError::NotFound { label, title: s!(title) }
}

/// Aligned text table; `-` marks a missing value.
pub fn write_analysis<W: Write>(out: &mut W, rows: &[AnalysisRow]) -> io::Result<()> {
    let width = rows.iter().map(|r| r.word.chars().count()).max().unwrap_or(0).max(4);
    writeln!(
        out,
        "{:<width$}  {:>10}  {:>12}  {:>10}  {:>10}",
        "word", "wiki count", "lang freq", "wiki norm", "lang norm"
    )?;
    for r in rows {
        writeln!(
            out,
            "{:<width$}  {:>10}  {:>12}  {:>10}  {:>10}",
            r.word,
            fmt_opt(r.wiki_raw.map(|v| v.to_string())),
            fmt_opt(r.lang_raw.map(|v| format!("{v:.6}"))),
            fmt_opt(r.wiki_norm.map(|v| format!("{v:.4}"))),
            fmt_opt(r.lang_norm.map(|v| format!("{v:.4}"))),
        )?;
    }
    Ok(())
}

fn fmt_opt(v: Option<String>) -> String {
    v.unwrap_or_else(|| s!("-"))
}

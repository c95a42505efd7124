// src/corpus.rs
//! Reference word frequencies per language.
//!
//! On disk one language is one file, `<corpus_dir>/<language>.csv`:
//! ```text
//! word,frequency
//! the,0.0537
//! of,0.0288
//! ```
//! The header line is optional. Frequencies are fractions in `[0, 1]`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::csv::parse_rows;
use crate::error::CorpusError;

/// Read-only source of baseline frequencies.
pub trait ReferenceCorpus {
    /// Frequency of `word` in `language`; `0.0` when unknown.
    fn frequency(&self, word: &str, language: &str) -> f64;

    /// The `n` most frequent words of `language`, most frequent first.
    fn top_n(&self, language: &str, n: usize) -> Vec<String>;

    fn has_language(&self, language: &str) -> bool;
}

#[derive(Clone, Debug, Default)]
struct LanguageTable {
    freq: HashMap<String, f64>,
    // Sorted by frequency desc, then word.
    ranked: Vec<String>,
}

impl LanguageTable {
    fn new(freq: HashMap<String, f64>) -> Self {
        let mut ranked: Vec<(&String, f64)> = freq.iter().map(|(w, f)| (w, *f)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let ranked = ranked.into_iter().map(|(w, _)| w.clone()).collect();
        Self { freq, ranked }
    }
}

/// In-memory corpus, filled from CSV files or directly.
#[derive(Clone, Debug, Default)]
pub struct FrequencyCorpus {
    languages: HashMap<String, LanguageTable>,
}

impl FrequencyCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a language from `(word, frequency)` pairs.
    /// Words are lowercased to match the counter's tokens; repeated words sum.
    pub fn insert_language<I, S>(&mut self, language: &str, entries: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut freq: HashMap<String, f64> = HashMap::new();
        for (word, f) in entries {
            *freq.entry(word.as_ref().to_lowercase()).or_insert(0.0) += f;
        }
        self.languages.insert(s!(language), LanguageTable::new(freq));
    }

    /// Load `<dir>/<language>.csv`.
    pub fn load_language(&mut self, dir: &Path, language: &str) -> Result<(), CorpusError> {
        let path = dir.join(join!(language, ".csv"));
        let text = fs::read_to_string(&path)
            .map_err(|source| CorpusError::Read { path: path.clone(), source })?;
        let entries = parse_corpus(&text)
            .map_err(|(line, reason)| CorpusError::Malformed { path: path.clone(), line, reason })?;
        logf!("Loaded {} reference word(s) for '{language}' from {}", entries.len(), path.display());
        self.insert_language(language, entries);
        Ok(())
    }
}

impl ReferenceCorpus for FrequencyCorpus {
    fn frequency(&self, word: &str, language: &str) -> f64 {
        self.languages
            .get(language)
            .and_then(|t| t.freq.get(word))
            .copied()
            .unwrap_or(0.0)
    }

    fn top_n(&self, language: &str, n: usize) -> Vec<String> {
        match self.languages.get(language) {
            Some(t) => t.ranked.iter().take(n).cloned().collect(),
            None => Vec::new(),
        }
    }

    fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }
}

/// Parse `word,frequency` rows. Errors carry the 1-based line number.
/// A first row whose frequency isn't a number is taken as the header.
fn parse_corpus(text: &str) -> Result<Vec<(String, f64)>, (usize, String)> {
    let mut out = Vec::new();
    let mut first = true;
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let row = parse_rows(raw, ',').into_iter().next().unwrap_or_default();
        let [word, freq] = row.as_slice() else {
            return Err((line, format!("expected 2 fields, found {}", row.len())));
        };
        let is_first = std::mem::replace(&mut first, false);
        let value = match freq.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) if is_first => continue,
            Err(e) => return Err((line, format!("bad frequency {freq:?}: {e}"))),
        };
        let word = word.trim();
        if word.is_empty() {
            return Err((line, s!("empty word")));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err((line, format!("frequency {value} outside [0, 1]")));
        }
        out.push((s!(word), value));
    }
    Ok(out)
}

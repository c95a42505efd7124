// src/analysis.rs
//! Article word counts against a language's reference frequencies.
//!
//! Both columns are scaled to their own maximum within the result set, so the
//! most frequent word of each side reads `1.0` and the two can be compared
//! side by side.

use std::collections::BTreeMap;

use crate::corpus::ReferenceCorpus;
use crate::extract::words::top_counts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Most frequent words of the local counts.
    Article,
    /// Most frequent words of the reference language.
    Language,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisRow {
    pub word: String,
    /// Local count; `None` when the word was never counted.
    pub wiki_raw: Option<u64>,
    /// Reference frequency; `None` when unknown (or zero) in the corpus.
    pub lang_raw: Option<f64>,
    pub wiki_norm: Option<f64>,
    pub lang_norm: Option<f64>,
}

/// Join local counts (the store totals, or one article's `WordCount::as_map`)
/// with the reference corpus. Rows come out in selection order.
pub fn analyze(
    counts: &BTreeMap<String, u64>,
    corpus: &dyn ReferenceCorpus,
    language: &str,
    mode: Mode,
    n: usize,
) -> Vec<AnalysisRow> {
    let words: Vec<String> = match mode {
        Mode::Article => top_counts(counts.iter().map(|(w, c)| (w.as_str(), *c)), n)
            .into_iter()
            .map(|(w, _)| s!(w))
            .collect(),
        Mode::Language => corpus.top_n(language, n),
    };

    let mut rows: Vec<AnalysisRow> = words
        .into_iter()
        .map(|word| {
            let wiki_raw = counts.get(&word).copied();
            let freq = corpus.frequency(&word, language);
            let lang_raw = (freq > 0.0).then_some(freq);
            AnalysisRow { word, wiki_raw, lang_raw, wiki_norm: None, lang_norm: None }
        })
        .collect();

    let wiki_max = rows.iter().filter_map(|r| r.wiki_raw).max();
    let lang_max = rows.iter().filter_map(|r| r.lang_raw).reduce(f64::max);

    for row in &mut rows {
        row.wiki_norm = normalize(row.wiki_raw.map(|v| v as f64), wiki_max.map(|m| m as f64));
        row.lang_norm = normalize(row.lang_raw, lang_max);
    }
    rows
}

/// `value / max`, or `None` when either side is missing or `max` isn't positive.
fn normalize(value: Option<f64>, max: Option<f64>) -> Option<f64> {
    match (value, max) {
        (Some(v), Some(m)) if m > 0.0 => Some(v / m),
        _ => None,
    }
}

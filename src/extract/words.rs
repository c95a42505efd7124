// src/extract/words.rs
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::content::ContentRegion;
use crate::core::html::visible_text;
use crate::error::ExtractError;

// Unicode word-character runs; filtered to all-alphabetic below.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("static regex"));

/// Occurrences of each normalized word in one article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCount(BTreeMap<String, u64>);

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> u64 {
        self.0.get(word).copied().unwrap_or(0)
    }

    pub fn add(&mut self, word: &str, n: u64) {
        let count = self.0.entry(s!(word)).or_insert(0);
        *count = count.saturating_add(n);
    }

    /// Distinct words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(w, n)| (w.as_str(), *n))
    }

    pub fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.0
    }

    /// Top `n` words by count; ties in word order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        top_counts(self.iter(), n)
    }
}

/// Top `n` of any word -> count listing: count desc, then word asc.
/// Shared by article output and the store-side analysis.
pub fn top_counts<'a, I>(counts: I, n: usize) -> Vec<(&'a str, u64)>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut all: Vec<(&str, u64)> = counts.into_iter().collect();
    all.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    all.truncate(n);
    all
}

impl<S: Into<String>> FromIterator<(S, u64)> for WordCount {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut wc = WordCount::new();
        for (w, n) in iter {
            let count = wc.0.entry(w.into()).or_insert(0);
            *count = count.saturating_add(n);
        }
        wc
    }
}

/// Word frequencies of the region's text. Missing content is an error here,
/// unlike the summary path: the store can't merge "nothing".
pub fn count_words(region: Option<&ContentRegion<'_>>) -> Result<WordCount, ExtractError> {
    let region = region.ok_or(ExtractError::ContentMissing)?;
    let text = visible_text(region.element()).to_lowercase();
    Ok(count_tokens(&text))
}

/// Tokenize already-lowercased text. Numbers and mixed tokens (`1.20`, `x64`)
/// are dropped.
pub fn count_tokens(text: &str) -> WordCount {
    let mut wc = WordCount::new();
    for m in WORD_RE.find_iter(text) {
        let token = m.as_str();
        if token.chars().all(char::is_alphabetic) {
            wc.add(token, 1);
        }
    }
    wc
}

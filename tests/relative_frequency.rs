// tests/relative_frequency.rs
//
// analyze() in both modes, including the zero/missing guards.
//
use std::collections::BTreeMap;

use wiki_scrape::analysis::{analyze, Mode};
use wiki_scrape::corpus::{FrequencyCorpus, ReferenceCorpus};
use wiki_scrape::extract::words::count_tokens;

fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
    pairs.iter().map(|(w, n)| (w.to_string(), *n)).collect()
}

fn corpus(pairs: &[(&str, f64)]) -> FrequencyCorpus {
    let mut c = FrequencyCorpus::new();
    c.insert_language("en", pairs.iter().copied());
    c
}

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn article_mode_example() {
    let store = counts(&[("a", 10), ("b", 5)]);
    let c = corpus(&[("a", 0.02), ("b", 0.01)]);
    let rows = analyze(&store, &c, "en", Mode::Article, 2);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].word, "a");
    assert!(close(rows[0].wiki_norm, 1.0) && close(rows[0].lang_norm, 1.0));
    assert_eq!(rows[1].word, "b");
    assert!(close(rows[1].wiki_norm, 0.5) && close(rows[1].lang_norm, 0.5));
    assert_eq!(rows[1].wiki_raw, Some(5));
    assert_eq!(rows[1].lang_raw, Some(0.01));
}

#[test]
fn article_mode_ties_and_unknown_reference() {
    let store = counts(&[("creeper", 4), ("the", 9), ("boom", 4), ("rare", 1)]);
    let c = corpus(&[("the", 0.05)]);
    let rows = analyze(&store, &c, "en", Mode::Article, 3);

    let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["the", "boom", "creeper"]);
    assert_eq!(rows[1].lang_raw, None);
    assert_eq!(rows[1].lang_norm, None);
    assert!(close(rows[0].lang_norm, 1.0));
    assert!(close(rows[2].wiki_norm, 4.0 / 9.0));
}

#[test]
fn language_mode_leaves_unseen_words_null() {
    let store = counts(&[("of", 2), ("creeper", 50)]);
    let c = corpus(&[("the", 0.05), ("of", 0.03), ("and", 0.025), ("creeper", 0.00001)]);
    let rows = analyze(&store, &c, "en", Mode::Language, 3);

    let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["the", "of", "and"]);
    assert_eq!(rows[0].wiki_raw, None);
    assert_eq!(rows[0].wiki_norm, None);
    // only "of" has a local count in this result set, so it is the max
    assert!(close(rows[1].wiki_norm, 1.0));
    assert!(close(rows[2].lang_norm, 0.5));
}

#[test]
fn all_zero_reference_column_is_null() {
    let store = counts(&[("creeper", 3), ("ghast", 1)]);
    let c = corpus(&[("creeper", 0.0), ("ghast", 0.0)]);
    let rows = analyze(&store, &c, "en", Mode::Article, 5);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.lang_raw.is_none() && r.lang_norm.is_none()));
    assert!(close(rows[0].wiki_norm, 1.0));
}

#[test]
fn empty_inputs_degrade_gracefully() {
    let c = corpus(&[("the", 0.05)]);
    assert!(analyze(&BTreeMap::new(), &c, "en", Mode::Article, 3).is_empty());

    // unknown language: nothing to select in language mode, no reference values in article mode
    assert!(analyze(&counts(&[("x", 1)]), &c, "de", Mode::Language, 3).is_empty());
    let rows = analyze(&counts(&[("the", 1)]), &c, "de", Mode::Article, 3);
    assert_eq!(rows[0].lang_norm, None);
    assert!(!c.has_language("de"));
}

#[test]
fn single_article_counts_analyze_directly() {
    let article = count_tokens("the creeper hisses and the creeper explodes the end");
    let c = corpus(&[("the", 0.05), ("and", 0.03)]);
    let rows = analyze(article.as_map(), &c, "en", Mode::Article, 2);

    let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["the", "creeper"]);
    assert_eq!(rows[0].wiki_raw, Some(3));
    assert!(close(rows[1].wiki_norm, 2.0 / 3.0));
    assert_eq!(rows[1].lang_raw, None);
}

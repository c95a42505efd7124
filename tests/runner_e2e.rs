// tests/runner_e2e.rs
//
// Runner end-to-end over a local HTML directory, temp store and temp export dir.
//
use std::fs;
use std::path::Path;

use wiki_scrape::analysis::Mode;
use wiki_scrape::config::options::{AppOptions, FetchSource};
use wiki_scrape::corpus::FrequencyCorpus;
use wiki_scrape::runner::{Action, Runner, RunSummary};
use wiki_scrape::store::FrequencyStore;

const CREEPER: &str = r#"<html><body>
<div class="mw-parser-output"></div>
<div class="mw-content-ltr mw-parser-output">
  <p>The creeper explodes. The creeper hisses.</p>
  <table>
    <tr><th>Edition</th><th>Health</th></tr>
    <tr><td>Java</td><td>20</td></tr>
    <tr><td>Bedrock</td><td>20</td></tr>
  </table>
</div>
</body></html>"#;

const NO_LEAD: &str = r#"<div class="mw-parser-output"><div><p>boxed</p></div></div>"#;

struct Fixture {
    _dir: tempfile::TempDir,
    options: AppOptions,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let pages = dir.path().join("pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(pages.join("Creeper.html"), CREEPER).unwrap();
    fs::write(pages.join("Empty_Page.html"), NO_LEAD).unwrap();
    fs::write(pages.join("Plain.html"), "<p>no wiki layout</p>").unwrap();

    let mut options = AppOptions::default();
    options.fetch.source = FetchSource::Local { dir: pages };
    options.store.path = dir.path().join(".store").join("word-counts.json");
    options.export.dir = dir.path().join("out");
    Fixture { _dir: dir, options }
}

fn corpus() -> FrequencyCorpus {
    let mut c = FrequencyCorpus::new();
    c.insert_language("en", [("the", 0.05), ("creeper", 0.0001), ("and", 0.03)]);
    c
}

fn run(options: &AppOptions, actions: &[Action]) -> (String, RunSummary) {
    let mut runner = Runner::new(options, Box::new(corpus()));
    let mut out: Vec<u8> = Vec::new();
    let summary = runner.run(actions, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

fn title(s: &str) -> String {
    s.to_string()
}

#[test]
fn summary_messages() {
    let fx = fixture();
    let (out, summary) = run(&fx.options, &[
        Action::Summary { title: title("Creeper") },
    ]);
    assert_eq!(out.trim(), "The creeper explodes. The creeper hisses.");
    assert_eq!(summary, RunSummary { completed: 1, failed: 0 });

    let (out, _) = run(&fx.options, &[Action::Summary { title: title("Empty Page") }]);
    assert_eq!(out.trim(), "Summary not found");

    let (out, _) = run(&fx.options, &[Action::Summary { title: title("Plain") }]);
    assert_eq!(out.trim(), "Content not found");

    let (out, summary) = run(&fx.options, &[Action::Summary { title: title("Enderman") }]);
    assert_eq!(out.trim(), r#"Summary error: Article "Enderman" not found."#);
    assert_eq!(summary.failed, 1);

    let (out, _) = run(&fx.options, &[Action::Summary { title: title("   ") }]);
    assert_eq!(out.trim(), "The phrase used for summary is empty.");
}

#[test]
fn table_is_printed_exported_and_tabulated() {
    let fx = fixture();
    let (out, summary) = run(&fx.options, &[Action::Table {
        title: title("Creeper"),
        number: 1,
        first_row_is_header: true,
    }]);
    assert_eq!(summary.completed, 1);
    assert!(out.starts_with("Edition,Health\nJava,20\nBedrock,20\n"), "{out}");
    assert!(out.contains("Value counts:\n20: 2\n"), "{out}");

    let exported = fx.options.export.dir.join("Creeper.csv");
    assert_eq!(fs::read_to_string(exported).unwrap(), "Edition,Health\nJava,20\nBedrock,20\n");
}

#[test]
fn failures_do_not_stop_later_actions() {
    let fx = fixture();
    let (out, summary) = run(&fx.options, &[
        Action::CountWords { title: title("Creeper") },
        Action::Table { title: title("Creeper"), number: 3, first_row_is_header: false },
    ]);
    // table runs first (fixed order), fails, word counting still happens
    let table_msg = out.find("Table error: Table number 3 is out of range").unwrap();
    let counted = out.find("Counted").unwrap();
    assert!(table_msg < counted, "{out}");
    assert_eq!(summary, RunSummary { completed: 1, failed: 1 });

    let totals = FrequencyStore::new(&fx.options.store.path).load().totals;
    assert_eq!(totals.get("creeper"), Some(&2));
    assert_eq!(totals.get("java"), Some(&1));
}

#[test]
fn missing_content_is_a_word_count_error_and_store_untouched() {
    let fx = fixture();
    let (out, summary) = run(&fx.options, &[Action::CountWords { title: title("Plain") }]);
    assert_eq!(out.trim(), "Word count error: Content not found");
    assert_eq!(summary.failed, 1);
    assert!(!Path::new(&fx.options.store.path).exists());

    let (_, summary) = run(&fx.options, &[Action::CountWords { title: title("Nowhere") }]);
    assert_eq!(summary.failed, 1);
    assert!(!Path::new(&fx.options.store.path).exists());
}

#[test]
fn counts_accumulate_then_analysis_reads_the_store() {
    let fx = fixture();
    run(&fx.options, &[Action::CountWords { title: title("Creeper") }]);
    let (out, summary) = run(&fx.options, &[
        Action::CountWords { title: title("Creeper") },
        Action::Analyze { mode: Mode::Article, count: 2 },
    ]);
    assert_eq!(summary.completed, 2);

    let totals = FrequencyStore::new(&fx.options.store.path).load().totals;
    assert_eq!(totals.get("the"), Some(&4));
    assert_eq!(totals.get("creeper"), Some(&4));

    // creeper and the tie at 4; word order breaks it
    let lines: Vec<&str> = out.lines().skip_while(|l| !l.starts_with("word")).collect();
    assert!(lines[1].starts_with("creeper"), "{out}");
    assert!(lines[2].starts_with("the"), "{out}");
    assert!(lines[1].contains("1.0000"), "{out}");
}

#[test]
fn analysis_without_reference_language_reports() {
    let mut fx = fixture();
    fx.options.corpus.language = "xx".into();
    let (out, summary) = run(&fx.options, &[Action::Analyze { mode: Mode::Language, count: 3 }]);
    assert_eq!(out.trim(), "Analysis error: no reference frequencies for language 'xx'.");
    assert_eq!(summary.failed, 1);
}

#[test]
fn language_mode_marks_unseen_words() {
    let fx = fixture();
    let (out, _) = run(&fx.options, &[Action::Analyze { mode: Mode::Language, count: 2 }]);
    // empty store: every local column is "-"
    let row = out.lines().find(|l| l.starts_with("the")).unwrap();
    assert_eq!(row.split_whitespace().collect::<Vec<_>>(), ["the", "-", "0.050000", "-", "1.0000"]);
}

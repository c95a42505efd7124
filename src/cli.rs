// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::analysis::Mode;
use crate::config::consts::{BASE_URL, DEFAULT_LANGUAGE, LOCAL_HTML_DIR};
use crate::config::options::{AppOptions, ExportFormat, FetchSource};
use crate::corpus::FrequencyCorpus;
use crate::runner::{Action, Runner};

#[derive(Debug, Parser)]
#[command(name = "wiki_scrape", version, about = "Minecraft Wiki scraper tool")]
pub struct Args {
    /// Fetch summary for the specified phrase
    #[arg(long, value_name = "PHRASE")]
    pub summary: Option<String>,

    /// Fetch a table from the article (requires --number)
    #[arg(long, value_name = "PHRASE", requires = "number")]
    pub table: Option<String>,

    /// Index of the table to extract (indexing starts from 1)
    #[arg(long, value_name = "NUMBER", value_parser = clap::value_parser!(u32).range(1..))]
    pub number: Option<u32>,

    /// Treat first row of the table as a header
    #[arg(long)]
    pub first_row_is_header: bool,

    /// Count words in the specified article and add them to the stored totals
    #[arg(long, value_name = "PHRASE")]
    pub count_words: Option<String>,

    /// Compare stored word counts with the wiki language's reference
    /// frequencies (requires --mode, --count)
    #[arg(long, requires_all = ["mode", "count"])]
    pub analyze_relative_word_frequency: bool,

    /// Sort by most frequent article words or most frequent language words
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of top words to display for analyzing
    #[arg(long, value_name = "NUMBER", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Read articles from saved HTML files instead of the network
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = LOCAL_HTML_DIR)]
    pub local: Option<PathBuf>,

    /// Wiki article base URL
    #[arg(long, value_name = "URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Reference language code
    #[arg(long, value_name = "CODE", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Word count store file
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Directory holding <language>.csv reference frequency files
    #[arg(long, value_name = "DIR")]
    pub corpus_dir: Option<PathBuf>,

    /// Directory for exported tables
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Table export format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Article,
    Language,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Article => Mode::Article,
            ModeArg::Language => Mode::Language,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.fetch.source = match &self.local {
            Some(dir) => FetchSource::Local { dir: dir.clone() },
            None => FetchSource::Remote { base_url: self.base_url.clone() },
        };
        if let Some(p) = &self.store {
            opts.store.path = p.clone();
        }
        if let Some(d) = &self.corpus_dir {
            opts.corpus.dir = d.clone();
        }
        opts.corpus.language = self.language.clone();
        if let Some(d) = &self.out_dir {
            opts.export.dir = d.clone();
        }
        opts.export.format = match self.format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        };
        opts
    }

    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(title) = &self.summary {
            actions.push(Action::Summary { title: title.clone() });
        }
        if let (Some(title), Some(number)) = (&self.table, self.number) {
            actions.push(Action::Table {
                title: title.clone(),
                number: number as usize,
                first_row_is_header: self.first_row_is_header,
            });
        }
        if let Some(title) = &self.count_words {
            actions.push(Action::CountWords { title: title.clone() });
        }
        if self.analyze_relative_word_frequency {
            if let (Some(mode), Some(count)) = (self.mode, self.count) {
                actions.push(Action::Analyze { mode: mode.into(), count: count as usize });
            }
        }
        actions
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let options = args.options();
    crate::log::init(&options.store.log_path());

    let actions = args.actions();
    if actions.is_empty() {
        Args::command().print_help()?;
        return Ok(());
    }

    let mut corpus = FrequencyCorpus::new();
    if actions.iter().any(|a| matches!(a, Action::Analyze { .. })) {
        // A missing corpus only fails the analysis action, reported by the runner.
        if let Err(e) = corpus.load_language(&options.corpus.dir, &options.corpus.language) {
            logw!("{e}");
            eprintln!("Warning: {e}");
        }
    }

    let mut runner = Runner::new(&options, Box::new(corpus));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = runner.run(&actions, &mut out)?;
    out.flush()?;
    logf!("Run finished: {} ok, {} failed", summary.completed, summary.failed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("wiki_scrape").chain(args.iter().copied()))
    }

    #[test]
    fn table_requires_number() {
        assert!(parse(&["--table", "Creeper"]).is_err());
        let a = parse(&["--table", "Creeper", "--number", "2", "--first-row-is-header"]).unwrap();
        assert_eq!(
            a.actions(),
            vec![Action::Table { title: s!("Creeper"), number: 2, first_row_is_header: true }]
        );
    }

    #[test]
    fn numbers_start_at_one() {
        assert!(parse(&["--table", "Creeper", "--number", "0"]).is_err());
        assert!(parse(&["--analyze-relative-word-frequency", "--mode", "article", "--count", "0"]).is_err());
    }

    #[test]
    fn analysis_requires_mode_and_count() {
        assert!(parse(&["--analyze-relative-word-frequency", "--mode", "article"]).is_err());
        let a = parse(&["--analyze-relative-word-frequency", "--mode", "language", "--count", "5"]).unwrap();
        assert_eq!(a.actions(), vec![Action::Analyze { mode: Mode::Language, count: 5 }]);
    }

    #[test]
    fn local_flag_defaults_directory() {
        let a = parse(&["--summary", "Creeper", "--local"]).unwrap();
        assert_eq!(
            a.options().fetch.source,
            FetchSource::Local { dir: PathBuf::from(LOCAL_HTML_DIR) }
        );
        let b = parse(&["--summary", "Creeper", "--base-url", "https://example.org/wiki/"]).unwrap();
        assert_eq!(
            b.options().fetch.source,
            FetchSource::Remote { base_url: s!("https://example.org/wiki/") }
        );
    }
}

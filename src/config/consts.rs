// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://minecraft.wiki/w";
pub const USER_AGENT: &str = concat!("wiki_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
// Body text of a placeholder page (HTTP 200 for an article that doesn't exist)
pub const SOFT_404_MARKER: &str = "There is currently no text in this page";

// Local html files (offline mode)
pub const LOCAL_HTML_DIR: &str = "test_files";
pub const LOCAL_HTML_EXT: &str = "html";

// Local store
pub const STORE_DIR: &str = ".store";
pub const FREQUENCY_FILE: &str = "word-counts.json";
pub const LOG_FILE: &str = "debug.log";

// Reference corpus: <CORPUS_DIR>/<language>.csv
pub const CORPUS_DIR: &str = "corpus";
pub const DEFAULT_LANGUAGE: &str = "en";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const TOP_WORDS_SHOWN: usize = 10;

// src/fetch.rs
//! Article source: remote wiki or a directory of saved HTML pages.
//!
//! Lookups are memoized per `Fetcher` (i.e. per run). Only successful fetches
//! are cached, so a transient failure is retried on the next request.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;

use crate::article::Document;
use crate::config::consts::{LOCAL_HTML_EXT, SOFT_404_MARKER};
use crate::config::options::FetchSource;
use crate::core::{net, sanitize::title_to_slug};

pub struct Fetcher {
    source: FetchSource,
    client: Option<Client>,
    cache: HashMap<String, Document>,
}

impl Fetcher {
    pub fn new(source: FetchSource) -> Self {
        let source = match source {
            FetchSource::Remote { base_url } => FetchSource::Remote {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
            local => local,
        };
        Self { source, client: None, cache: HashMap::new() }
    }

    pub fn source(&self) -> &FetchSource {
        &self.source
    }

    /// Fetch (or reuse) the article for `title`. `None` when it doesn't exist
    /// or couldn't be retrieved; the cause is logged.
    pub fn get_document(&mut self, title: &str) -> Option<&Document> {
        if self.cache.contains_key(title) {
            logd!("Cache hit for \"{title}\"");
        } else {
            let html = self.fetch_html(title)?;
            self.cache.insert(s!(title), Document::new(title, html));
        }
        self.cache.get(title)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn fetch_html(&mut self, title: &str) -> Option<String> {
        let slug = title_to_slug(title);
        match &self.source {
            FetchSource::Local { dir } => {
                let path = local_path(dir, &slug);
                match fs::read_to_string(&path) {
                    Ok(html) => Some(html),
                    Err(e) => {
                        logf!("No local page for \"{title}\" at {}: {e}", path.display());
                        None
                    }
                }
            }
            FetchSource::Remote { base_url } => {
                let url = format!("{base_url}/{slug}");
                if self.client.is_none() {
                    match net::client() {
                        Ok(c) => self.client = Some(c),
                        Err(e) => {
                            loge!("Could not build HTTP client: {e}");
                            return None;
                        }
                    }
                }
                let client = self.client.as_ref()?;

                logf!("GET {url}");
                match net::http_get(client, &url) {
                    Ok(body) if is_soft_404(&body) => {
                        logf!("Soft 404 for {url}");
                        None
                    }
                    Ok(body) => Some(body),
                    Err(e) => {
                        loge!("Error fetching {url}: {e}");
                        None
                    }
                }
            }
        }
    }
}

fn local_path(dir: &std::path::Path, slug: &str) -> PathBuf {
    dir.join(join!(slug, ".", LOCAL_HTML_EXT))
}

/// A 200 response that is really the wiki's "page does not exist" placeholder.
pub fn is_soft_404(body: &str) -> bool {
    body.contains(SOFT_404_MARKER)
}

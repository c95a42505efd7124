// src/extract/content.rs
//! Locating the article body.
//!
//! MediaWiki wraps the rendered article in `div.mw-parser-output`. Some pages
//! emit an empty `mw-parser-output` before the real one, so the container that
//! also carries the language-direction class (`mw-content-ltr`) is preferred.
//! Matchers are tried in order and the first hit wins.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::selector;

/// Ordered preference list: (label for logs, selector).
static MATCHERS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    vec![
        ("primary", selector("div.mw-content-ltr.mw-parser-output")),
        ("generic", selector("div.mw-parser-output")),
    ]
});

/// The article-body subtree of a parsed document.
#[derive(Clone, Copy, Debug)]
pub struct ContentRegion<'a> {
    root: ElementRef<'a>,
}

impl<'a> ContentRegion<'a> {
    pub fn element(&self) -> ElementRef<'a> {
        self.root
    }
}

pub fn locate(doc: &Html) -> Option<ContentRegion<'_>> {
    for (label, sel) in MATCHERS.iter() {
        if let Some(root) = doc.select(sel).next() {
            logd!("Content region matched by {label} selector");
            return Some(ContentRegion { root });
        }
    }
    logd!("No content region found");
    None
}

// src/article.rs
use scraper::Html;

/// One fetched article: the title it was requested under and its raw HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    title: String,
    html: String,
}

impl Document {
    pub fn new(title: impl Into<String>, html: impl Into<String>) -> Self {
        Self { title: title.into(), html: html.into() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Build the element tree. Content regions borrow from the returned value.
    pub fn parse(&self) -> Html {
        Html::parse_document(&self.html)
    }
}

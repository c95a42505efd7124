// src/core/html.rs
//! Small helpers over `scraper` element trees.
use scraper::{ElementRef, Node, Selector};

use super::sanitize::normalize_ws;

/// Parse a selector known at compile time.
/// Only for literals; a bad literal is a programming error.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// Direct element children (text and comment nodes skipped).
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// First direct child with the given tag name.
pub fn first_child_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    child_elements(el).find(|c| c.value().name().eq_ignore_ascii_case(name))
}

/// Descendant text concatenated as rendered inline, whitespace collapsed.
/// `<a>Iron</a> Ingot` gives `Iron Ingot`, `A<b>B</b>,` gives `AB,`.
pub fn inline_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Cell text: inline runs stay joined, but `<br>` and block children
/// (`li`, `p`, `div`, ...) separate words.
/// `Java<br>Bedrock` gives `Java Bedrock`, `<li>A</li><li>B</li>` gives `A B`.
pub fn block_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    push_block_text(el, &mut out);
    normalize_ws(&out)
}

fn push_block_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) => {
                let name = e.name();
                if name == "br" {
                    out.push(' ');
                    continue;
                }
                if matches!(name, "script" | "style") {
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else { continue };
                let block = is_block(name);
                if block { out.push(' '); }
                push_block_text(child_el, out);
                if block { out.push(' '); }
            }
            _ => {}
        }
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "ul" | "ol" | "li" | "dl" | "dt" | "dd" | "table" | "tr" | "td" | "th"
            | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote" | "pre" | "hr"
    )
}

/// Every descendant text node joined with a space, skipping what lives inside
/// `<script>`/`<style>`. Keeps words from adjacent blocks apart.
pub fn visible_text(el: ElementRef<'_>) -> String {
    let mut pieces: Vec<&str> = Vec::new();
    for node in el.descendants() {
        let Node::Text(text) = node.value() else { continue };
        let hidden = node
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|p| matches!(p.value().name(), "script" | "style"));
        if !hidden {
            pieces.push(text);
        }
    }
    normalize_ws(&pieces.join(" "))
}

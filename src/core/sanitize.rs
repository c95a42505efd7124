// src/core/sanitize.rs

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Article title as it appears in wiki URLs and local file names.
/// Only spaces change: `Iron Golem` -> `Iron_Golem`.
pub fn title_to_slug(title: &str) -> String {
    title.replace(' ', "_")
}

/// File stem for exports: the slug with path separators and other
/// filesystem-hostile characters dropped.
pub fn sanitize_filename(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for ch in title_to_slug(title.trim()).chars() {
        match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => {}
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!("table") } else { out }
}

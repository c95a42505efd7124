// src/extract/table.rs
//! Nth table of the content region as rows of cell text.
//!
//! Shape rules:
//! - Rows are the `<tr>` elements owned by the table; rows of a nested table
//!   belong to the nested table, not the outer one.
//! - Cells are the row's direct `<th>`/`<td>` children, text collapsed;
//!   `<br>` and block children separate words.
//! - Rows whose cells are all blank are dropped.
//! - Ragged rows are kept as they are. No padding, no truncation.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::content::ContentRegion;
use crate::core::html::{block_text, child_elements, selector};
use crate::error::ExtractError;

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Column labels, present only when the first row was promoted.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// With a promoted header the first column is the row index.
    pub fn is_indexed(&self) -> bool {
        self.header.is_some()
    }

    /// Index column values in row order (duplicates included).
    /// Empty for a table without a header.
    pub fn index(&self) -> Vec<&str> {
        if !self.is_indexed() {
            return Vec::new();
        }
        self.rows
            .iter()
            .filter_map(|r| r.first().map(String::as_str))
            .collect()
    }

    /// Rows keyed by their index value. On duplicate keys the later row wins.
    /// Values exclude the key cell itself.
    pub fn keyed(&self) -> HashMap<&str, &[String]> {
        let mut out = HashMap::new();
        if !self.is_indexed() {
            return out;
        }
        for row in &self.rows {
            if let Some((key, rest)) = row.split_first() {
                out.insert(key.as_str(), rest);
            }
        }
        out
    }

    /// Lookup by index value, same last-write-wins rule as `keyed`.
    pub fn row_by_key(&self, key: &str) -> Option<&[String]> {
        if !self.is_indexed() {
            return None;
        }
        self.rows
            .iter()
            .rev()
            .find(|r| r.first().is_some_and(|k| k == key))
            .map(|r| &r[1..])
    }
}

/// Extract table number `index` (1-based) from the region.
pub fn extract_table(
    region: &ContentRegion<'_>,
    index: usize,
    promote_first_row_to_header: bool,
) -> Result<Table, ExtractError> {
    let tables: Vec<ElementRef<'_>> = region.element().select(&TABLE).collect();
    let found = tables.len();
    if index == 0 || index > found {
        return Err(ExtractError::TableOutOfRange { requested: index, found });
    }
    let table = tables[index - 1];

    let mut rows: Vec<Vec<String>> = Vec::new();
    for tr in table.select(&ROW) {
        if !owned_by(tr, table) {
            continue;
        }
        let cells: Vec<String> = child_elements(tr)
            .filter(|c| matches!(c.value().name(), "th" | "td"))
            .map(block_text)
            .collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(ExtractError::EmptyTable(index));
    }

    logd!("Table {index}/{found}: {} row(s)", rows.len());

    if promote_first_row_to_header {
        let header = rows.remove(0);
        Ok(Table { header: Some(header), rows })
    } else {
        Ok(Table { header: None, rows })
    }
}

/// True when the nearest `<table>` ancestor of `tr` is `table`.
fn owned_by(tr: ElementRef<'_>, table: ElementRef<'_>) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "table")
        .is_some_and(|a| a == table)
}

/// How often each distinct cell value occurs among the data cells.
/// The index column is not data and is skipped; blank cells too.
/// Sorted by count (desc), then value.
pub fn value_counts(table: &Table) -> Vec<(String, usize)> {
    let skip = usize::from(table.is_indexed());
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in table.rows() {
        for cell in row.iter().skip(skip) {
            if !cell.is_empty() {
                *counts.entry(cell.as_str()).or_insert(0) += 1;
            }
        }
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().map(|(v, n)| (s!(v), n)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

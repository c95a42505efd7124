// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::csv::write_table;
use crate::extract::table::Table;

/// Write `table` to `<export.dir>/<Title_slug>.<ext>`, overwriting.
/// Returns the path written to.
pub fn export_table(
    export: &ExportOptions,
    title: &str,
    table: &Table,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    ensure_directory(&export.dir)?;
    let path = export_path(&export.dir, title, export.format.ext());

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, table, export.format.delim())?;
    out.flush()?;

    logf!("Wrote table for \"{title}\" to {}", path.display());
    Ok(path)
}

pub fn export_path(dir: &Path, title: &str, ext: &str) -> PathBuf {
    dir.join(join!(&sanitize_filename(title), ".", ext))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

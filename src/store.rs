// src/store.rs
//! Cross-run word totals, one JSON object on disk (`{"word": count, ...}`).
//!
//! Every merge re-reads the file, adds the new counts and rewrites the whole
//! thing through a temp file + rename, so a crash mid-write leaves the old
//! file intact.
//!
//! Not safe for concurrent writers: two processes merging at the same time
//! both read the old totals and the last rename wins, losing the other
//! process's counts. There is no locking; one operator, one process.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::extract::words::WordCount;

pub type Totals = BTreeMap<String, u64>;

/// How the backing file looked when it was read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// No file yet; first merge creates it.
    Missing,
    Loaded,
    /// Unreadable or not a flat word -> count object. Treated as empty and
    /// overwritten by the next merge.
    Corrupt(String),
}

#[derive(Clone, Debug)]
pub struct Snapshot {
    pub totals: Totals,
    pub status: LoadStatus,
}

/// Result of a merge. `totals` is always the in-memory sum, even when
/// `saved` reports that writing it failed.
#[derive(Debug)]
pub struct Merge {
    pub totals: Totals,
    pub status: LoadStatus,
    pub saved: Result<(), StoreError>,
}

#[derive(Clone, Debug)]
pub struct FrequencyStore {
    path: PathBuf,
}

impl FrequencyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Snapshot {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                logd!("No store at {} yet", self.path.display());
                return Snapshot { totals: Totals::new(), status: LoadStatus::Missing };
            }
            Err(e) => return self.corrupt(e.to_string()),
        };
        match serde_json::from_str::<Totals>(&text) {
            Ok(totals) => {
                logd!("Loaded {} word(s) from {}", totals.len(), self.path.display());
                Snapshot { totals, status: LoadStatus::Loaded }
            }
            Err(e) => self.corrupt(e.to_string()),
        }
    }

    fn corrupt(&self, reason: String) -> Snapshot {
        logw!("Store {} unusable, starting fresh: {reason}", self.path.display());
        Snapshot { totals: Totals::new(), status: LoadStatus::Corrupt(reason) }
    }

    /// `stored := stored + new_counts`, then persist the full mapping.
    /// Totals saturate at `u64::MAX`; they never go down.
    pub fn merge(&self, new_counts: &WordCount) -> Merge {
        let Snapshot { mut totals, status } = self.load();
        for (word, n) in new_counts.iter() {
            let total = totals.entry(s!(word)).or_insert(0);
            *total = total.checked_add(n).unwrap_or_else(|| {
                logw!("Count for \"{word}\" saturated at {}", u64::MAX);
                u64::MAX
            });
        }
        let saved = self.save(&totals);
        match &saved {
            Ok(()) => logf!(
                "Merged {} word(s) into {} ({} total)",
                new_counts.len(),
                self.path.display(),
                totals.len()
            ),
            Err(e) => loge!("{e}"),
        }
        Merge { totals, status, saved }
    }

    fn save(&self, totals: &Totals) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .map_err(|source| StoreError::CreateDir { path: dir.clone(), source })?;

        let tmp = NamedTempFile::new_in(&dir)
            .map_err(|source| StoreError::Write { path: dir.clone(), source })?;
        {
            let mut w = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut w, totals)?;
            w.write_all(b"\n")
                .and_then(|_| w.flush())
                .map_err(|source| StoreError::Write { path: tmp.path().to_path_buf(), source })?;
        }
        tmp.as_file()
            .sync_all()
            .map_err(|source| StoreError::Write { path: tmp.path().to_path_buf(), source })?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Persist { path: self.path.clone(), source: e.error })?;
        Ok(())
    }
}

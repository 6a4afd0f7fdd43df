//! Filesystem-enumeration probe: list one directory, tagging dirs and files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::Report;
use crate::config::ListingConfig;
use crate::error::ProbeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Dir => f.write_str("[D]"),
            EntryKind::File => f.write_str("[F]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// Reads the immediate children of `dir`, sorted by name.
///
/// Symlinks are classified by their target; anything that is not a directory
/// (including a dangling link) counts as a file.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>, ProbeError> {
    let read_err = |source| ProbeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(read_err)? {
        let item = item.map_err(read_err)?;
        let kind = if item.path().is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        entries.push(Entry {
            name: item.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn resolve_dir(cfg: &ListingConfig) -> Result<PathBuf, ProbeError> {
    match &cfg.dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().map_err(|source| ProbeError::ReadDir {
            path: PathBuf::from("."),
            source,
        }),
    }
}

pub fn run(cfg: &ListingConfig, report: &mut Report) -> Result<(), ProbeError> {
    let dir = resolve_dir(cfg)?;
    let entries = list_dir(&dir)?;
    tracing::debug!(dir = %dir.display(), entries = entries.len(), "directory listed");

    report.line(format!("List: {}", dir.display()));
    for e in &entries {
        report.line(format!("{} {}", e.kind, e.name));
    }
    Ok(())
}

//! Vault directory traversal.

use crate::error::{Result, VaultError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// File extension of a note.
pub const NOTE_EXTENSION: &str = "md";

/// Returns true for dot-entries, which the vault walk skips at every depth.
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Walk `root` recursively and collect absolute paths of all note files.
///
/// Entries matching the skip predicate are pruned (files and whole
/// directories alike). At each level, subdirectories are descended first in
/// name order, then files are yielded in name order, so the result is
/// deterministic across runs.
///
/// Fails with `VaultNotFound` if `root` does not exist, and propagates a
/// directory read failure mid-walk: a partial listing must not look complete.
pub fn walk_notes(root: &Path, skip: &dyn Fn(&OsStr) -> bool) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(VaultError::VaultNotFound(root.to_path_buf()));
    }

    let mut notes = Vec::new();
    walk_dir(root, skip, &mut notes)?;
    Ok(notes)
}

/// Walk `root` with the standard skip rule (hidden entries).
pub fn list_note_paths(root: &Path) -> Result<Vec<PathBuf>> {
    walk_notes(root, &is_hidden)
}

fn walk_dir(dir: &Path, skip: &dyn Fn(&OsStr) -> bool, notes: &mut Vec<PathBuf>) -> Result<()> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if skip(&name) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path.extension() == Some(OsStr::new(NOTE_EXTENSION)) {
            files.push(path);
        }
    }

    subdirs.sort();
    files.sort();

    for subdir in subdirs {
        walk_dir(&subdir, skip, notes)?;
    }
    notes.extend(files);

    Ok(())
}

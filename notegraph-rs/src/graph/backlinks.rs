//! Backlink index derivation.

use crate::error::Result;
use crate::note::Note;
use crate::vault::Vault;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outgoing links and backlinks of one note.
#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    pub path: String,
    pub outgoing: Vec<String>,
    pub backlinks: Vec<String>,
}

/// All notes whose outgoing links mention `target`.
///
/// The index is recomputed from current disk state on every call: a full
/// scanner-plus-parser pass over the vault, so the answer always reflects the
/// latest state of all notes rather than a snapshot. A note matches when one
/// of its links equals the target's base name or ends with it as a path
/// suffix, so a note linking `b` is found both for `b` and for `folder/b.md`.
///
/// Result order is the scanner's deterministic walk order. Individual notes
/// that cannot be read are skipped; the rest of the scan completes.
pub fn backlinks_of(vault: &Vault, target: &str) -> Result<Vec<PathBuf>> {
    let target_name = Path::new(target)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(target)
        .to_string();
    let suffix = format!("/{}", target_name);

    let mut backlinks = Vec::new();
    for path in vault.list_notes()? {
        let Ok(note) = Note::load(vault.root(), &path) else {
            continue;
        };
        if note
            .links
            .iter()
            .any(|link| link == &target_name || link.ends_with(&suffix))
        {
            backlinks.push(path);
        }
    }

    Ok(backlinks)
}

/// The full link report for a note: outgoing targets plus backlinks.
pub fn links_of(vault: &Vault, path_or_name: &str) -> Result<LinkReport> {
    let note = vault.load_note(path_or_name)?;
    let backlinks = backlinks_of(vault, &note.name)?
        .into_iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();

    Ok(LinkReport {
        path: note.path.to_string_lossy().to_string(),
        outgoing: note.links,
        backlinks,
    })
}

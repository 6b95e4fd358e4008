//! Note representation.

use crate::error::{Result, VaultError};
use crate::parser::{Frontmatter, parse_note};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A note materialized from its backing file.
///
/// Every field is derived from the file content at read time; a Note value is
/// never mutated in place. After a write through the mutation operations, any
/// previously materialized Note for the same path is stale and must be
/// re-read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    /// Path relative to the vault root (e.g. "proj/My Project.md").
    pub path: PathBuf,

    /// Display title: the file's base name without extension.
    pub name: String,

    /// Note text with the frontmatter block stripped.
    pub body: String,

    /// Union of the frontmatter `tags` array and inline body tags,
    /// deduplicated, insertion order preserved.
    pub tags: Vec<String>,

    /// Outgoing link targets in encounter order, duplicates preserved.
    pub links: Vec<String>,

    /// Parsed frontmatter; empty mapping when the note has none.
    pub frontmatter: Frontmatter,
}

impl Note {
    /// Build a note from a relative path and raw content.
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        let parsed = parse_note(content);

        Self {
            path,
            name,
            frontmatter: parsed.frontmatter,
            body: parsed.body,
            tags: parsed.tags,
            links: parsed.links,
        }
    }

    /// Load and parse a note from disk.
    ///
    /// An absent file is `NoteNotFound`; any other read failure propagates as
    /// an I/O error so callers can tell "does not exist" from "could not be
    /// read".
    pub fn load(vault_root: &Path, relative_path: &Path) -> Result<Self> {
        let full_path = vault_root.join(relative_path);
        let content = match std::fs::read_to_string(&full_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(VaultError::NoteNotFound(relative_path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self::from_content(relative_path, &content))
    }
}

/// Lightweight file-level info for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteInfo {
    pub path: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl NoteInfo {
    pub fn from_path(vault_root: &Path, relative_path: &Path) -> Result<Self> {
        let full_path = vault_root.join(relative_path);
        let metadata = std::fs::metadata(&full_path)?;

        let modified = metadata
            .modified()
            .ok()
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339());

        let created = metadata
            .created()
            .ok()
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339());

        let name = relative_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        Ok(Self {
            path: relative_path.to_string_lossy().to_string(),
            name,
            modified,
            created,
            size_bytes: Some(metadata.len()),
        })
    }
}

//! Recency-ranked note listing.

use crate::error::Result;
use crate::note::Note;
use crate::vault::Vault;
use chrono::{DateTime, Utc};

/// The most recently modified notes, newest first, up to `limit`.
///
/// Ranked by file modification timestamp; equal timestamps keep scan order
/// (the sort is stable). Each file's stat happens at a distinct instant, so
/// the ranking is not a coherent snapshot across files. Notes that cannot be
/// stat'ed or read are skipped.
pub fn recent_notes(vault: &Vault, limit: usize) -> Result<Vec<(Note, DateTime<Utc>)>> {
    let mut stamped: Vec<(std::path::PathBuf, DateTime<Utc>)> = Vec::new();

    for path in vault.list_notes()? {
        let Ok(metadata) = std::fs::metadata(vault.note_path(&path)) else {
            continue;
        };
        let Ok(modified) = metadata.modified() else {
            continue;
        };
        stamped.push((path, DateTime::<Utc>::from(modified)));
    }

    stamped.sort_by(|a, b| b.1.cmp(&a.1));
    stamped.truncate(limit);

    let mut notes = Vec::new();
    for (path, modified) in stamped {
        let Ok(note) = Note::load(vault.root(), &path) else {
            continue;
        };
        notes.push((note, modified));
    }

    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::open(dir.path()).unwrap();
        (dir, vault)
    }

    fn write_with_mtime(dir: &TempDir, rel: &str, secs_ago: u64) {
        let path = dir.path().join(rel);
        std::fs::write(&path, "content").unwrap();
        let mtime = std::time::SystemTime::now() - std::time::Duration::from_secs(secs_ago);
        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(mtime).unwrap();
    }

    #[test]
    fn test_recent_newest_first() {
        let (dir, vault) = setup();
        write_with_mtime(&dir, "old.md", 3600);
        write_with_mtime(&dir, "newer.md", 60);
        write_with_mtime(&dir, "newest.md", 0);

        let recent = recent_notes(&vault, 10).unwrap();
        let names: Vec<&str> = recent.iter().map(|(n, _)| n.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "newer", "old"]);
    }

    #[test]
    fn test_recent_limit() {
        let (dir, vault) = setup();
        write_with_mtime(&dir, "a.md", 30);
        write_with_mtime(&dir, "b.md", 20);
        write_with_mtime(&dir, "c.md", 10);

        let recent = recent_notes(&vault, 2).unwrap();
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_recent_equal_timestamps_keep_scan_order() {
        let (dir, vault) = setup();
        let mtime = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_700_000_000);
        for rel in ["b.md", "a.md", "c.md"] {
            let path = dir.path().join(rel);
            std::fs::write(&path, "x").unwrap();
            let file = std::fs::File::options().write(true).open(&path).unwrap();
            file.set_modified(mtime).unwrap();
        }

        let recent = recent_notes(&vault, 10).unwrap();
        let names: Vec<&str> = recent.iter().map(|(n, _)| n.name.as_str()).collect();
        // Scan order is the deterministic walk order: a, b, c.
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}

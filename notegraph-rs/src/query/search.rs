//! Full-text search over note names and bodies.

use crate::error::Result;
use crate::note::Note;
use crate::vault::Vault;
use serde::Serialize;

/// At most this many matching line windows are captured per note.
const MAX_MATCHES_PER_NOTE: usize = 3;

/// One matching line with up to one line of context on either side.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch {
    /// 1-indexed body line of the match.
    pub line: usize,
    pub context: String,
}

/// One note matching a search query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub path: String,
    pub name: String,
    pub title_match: bool,
    pub matches: Vec<SearchMatch>,
}

/// Case-insensitive substring search against note names and body lines.
///
/// Scanning stops as soon as `limit` hits are collected. Nothing matching is
/// an empty result, never an error; unreadable notes are skipped.
pub fn search(vault: &Vault, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
    let query_lower = query.to_lowercase();
    let mut hits = Vec::new();

    for path in vault.list_notes()? {
        if hits.len() >= limit {
            break;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        let title_match = name.to_lowercase().contains(&query_lower);

        let Ok(note) = Note::load(vault.root(), &path) else {
            continue;
        };

        let lines: Vec<&str> = note.body.lines().collect();
        let mut matches = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if line.to_lowercase().contains(&query_lower) {
                let start = i.saturating_sub(1);
                let end = (i + 2).min(lines.len());
                matches.push(SearchMatch {
                    line: i + 1,
                    context: lines[start..end].join("\n"),
                });
                if matches.len() >= MAX_MATCHES_PER_NOTE {
                    break;
                }
            }
        }

        if title_match || !matches.is_empty() {
            hits.push(SearchHit {
                path: path.to_string_lossy().to_string(),
                name,
                title_match,
                matches,
            });
        }
    }

    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::open(dir.path()).unwrap();
        (dir, vault)
    }

    fn write(dir: &TempDir, rel: &str, content: &str) {
        std::fs::write(dir.path().join(rel), content).unwrap();
    }

    #[test]
    fn test_search_title_match() {
        let (dir, vault) = setup();
        write(&dir, "Meeting Notes.md", "nothing relevant");
        write(&dir, "Other.md", "nothing");

        let hits = search(&vault, "meeting", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Meeting Notes");
        assert!(hits[0].title_match);
        assert!(hits[0].matches.is_empty());
    }

    #[test]
    fn test_search_content_match_with_context() {
        let (dir, vault) = setup();
        write(&dir, "a.md", "before\nthe needle is here\nafter\nunrelated");

        let hits = search(&vault, "needle", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].title_match);
        assert_eq!(hits[0].matches.len(), 1);
        assert_eq!(hits[0].matches[0].line, 2);
        assert_eq!(hits[0].matches[0].context, "before\nthe needle is here\nafter");
    }

    #[test]
    fn test_search_case_insensitive() {
        let (dir, vault) = setup();
        write(&dir, "a.md", "The NEEDLE");

        let hits = search(&vault, "needle", 10).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_caps_matches_per_note() {
        let (dir, vault) = setup();
        write(&dir, "a.md", "hit\nhit\nhit\nhit\nhit");

        let hits = search(&vault, "hit", 10).unwrap();
        assert_eq!(hits[0].matches.len(), 3);
    }

    #[test]
    fn test_search_stops_at_limit() {
        let (dir, vault) = setup();
        write(&dir, "a.md", "common word");
        write(&dir, "b.md", "common word");
        write(&dir, "c.md", "common word");

        let hits = search(&vault, "common", 2).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_no_results_is_empty() {
        let (dir, vault) = setup();
        write(&dir, "a.md", "text");

        let hits = search(&vault, "zzzznotfound", 10).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_matches_at_body_edges() {
        let (dir, vault) = setup();
        write(&dir, "a.md", "needle first\nmiddle\nneedle last");

        let hits = search(&vault, "needle", 10).unwrap();
        assert_eq!(hits[0].matches.len(), 2);
        assert_eq!(hits[0].matches[0].context, "needle first\nmiddle");
        assert_eq!(hits[0].matches[1].context, "middle\nneedle last");
    }
}

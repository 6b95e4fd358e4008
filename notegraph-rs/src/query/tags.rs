//! Tag queries: census and tag-filtered note lookup.

use crate::error::Result;
use crate::note::Note;
use crate::vault::Vault;
use serde::Serialize;
use std::collections::HashMap;

/// A tag and the number of notes carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Census of every tag in the vault with per-tag note counts.
///
/// Each (note, tag) membership counts once, so the counts sum to the number
/// of membership pairs across the vault. Sorted by descending count; ties
/// keep first-seen scan order.
pub fn all_tags(vault: &Vault) -> Result<Vec<TagCount>> {
    let mut counts: Vec<TagCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for path in vault.list_notes()? {
        let Ok(note) = Note::load(vault.root(), &path) else {
            continue;
        };
        for tag in &note.tags {
            match index.get(tag) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(tag.clone(), counts.len());
                    counts.push(TagCount {
                        tag: tag.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(counts)
}

/// All notes carrying a tag, up to `limit`.
///
/// The comparison is case-insensitive and a leading `#` on the query tag is
/// stripped before comparing.
pub fn notes_by_tag(vault: &Vault, tag: &str, limit: usize) -> Result<Vec<Note>> {
    let wanted = tag.strip_prefix('#').unwrap_or(tag).to_lowercase();
    let mut notes = Vec::new();

    for path in vault.list_notes()? {
        if notes.len() >= limit {
            break;
        }
        let Ok(note) = Note::load(vault.root(), &path) else {
            continue;
        };
        if note.tags.iter().any(|t| t.to_lowercase() == wanted) {
            notes.push(note);
        }
    }

    Ok(notes)
}

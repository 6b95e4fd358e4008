//! List command implementation.

use crate::cli::args::{ListArgs, SortField};
use crate::cli::output::Output;
use crate::error::Result;
use crate::note::NoteInfo;
use crate::vault::Vault;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: usize,
    pub notes: Vec<NoteInfo>,
}

pub fn run(vault: &Vault, args: &ListArgs, output: &Output) -> Result<()> {
    let paths = if let Some(ref pattern) = args.glob {
        vault.list_notes_matching(pattern)?
    } else {
        vault.list_notes()?
    };

    let mut notes: Vec<NoteInfo> = paths
        .iter()
        .filter_map(|path| vault.note_info(path).ok())
        .collect();

    notes.sort_by(|a, b| {
        let cmp = match args.sort {
            SortField::Path => a.path.cmp(&b.path),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Modified => compare_optional_strings(&a.modified, &b.modified),
        };
        if args.reverse { cmp.reverse() } else { cmp }
    });

    let total = notes.len();
    if let Some(limit) = args.limit {
        notes.truncate(limit);
    }

    let response = ListResponse { notes, total };
    output.print(&response)?;

    Ok(())
}

fn compare_optional_strings(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

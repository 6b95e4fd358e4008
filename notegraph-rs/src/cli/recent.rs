//! Recent command implementation.

use crate::cli::args::RecentArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::query;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecentNote {
    pub path: String,
    pub name: String,
    pub modified: String,
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub total: usize,
    pub notes: Vec<RecentNote>,
}

pub fn run(vault: &Vault, args: &RecentArgs, output: &Output) -> Result<()> {
    let notes: Vec<RecentNote> = query::recent_notes(vault, args.limit)?
        .into_iter()
        .map(|(note, modified)| RecentNote {
            path: note.path.to_string_lossy().to_string(),
            name: note.name,
            modified: modified.to_rfc3339(),
        })
        .collect();

    let response = RecentResponse {
        total: notes.len(),
        notes,
    };
    output.print(&response)?;

    Ok(())
}

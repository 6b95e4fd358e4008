//! Tag commands: vault-wide census and tag-filtered listing.

use crate::cli::args::{TaggedArgs, TagsArgs};
use crate::cli::output::Output;
use crate::error::Result;
use crate::query::{self, TagCount};
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub total: usize,
    pub tags: Vec<TagCount>,
}

pub fn census(vault: &Vault, _args: &TagsArgs, output: &Output) -> Result<()> {
    let tags = query::all_tags(vault)?;
    let response = TagsResponse {
        total: tags.len(),
        tags,
    };
    output.print(&response)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TaggedNote {
    pub path: String,
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TaggedResponse {
    pub tag: String,
    pub total: usize,
    pub notes: Vec<TaggedNote>,
}

pub fn tagged(vault: &Vault, args: &TaggedArgs, output: &Output) -> Result<()> {
    let notes: Vec<TaggedNote> = query::notes_by_tag(vault, &args.tag, args.limit)?
        .into_iter()
        .map(|note| TaggedNote {
            path: note.path.to_string_lossy().to_string(),
            name: note.name,
            tags: note.tags,
        })
        .collect();

    let response = TaggedResponse {
        tag: args.tag.clone(),
        total: notes.len(),
        notes,
    };
    output.print(&response)?;

    Ok(())
}

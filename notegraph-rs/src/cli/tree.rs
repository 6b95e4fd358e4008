//! Tree command implementation.

use crate::cli::args::TreeArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::query::{self, TreeNode};
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub path: String,
    pub depth: i64,
    pub entries: Vec<TreeNode>,
}

pub fn run(vault: &Vault, args: &TreeArgs, output: &Output) -> Result<()> {
    let entries = query::folder_tree(vault, &args.path, args.depth)?;

    if args.plain {
        output.print_raw(query::render_tree(&entries).trim_end());
        return Ok(());
    }

    let response = TreeResponse {
        path: args.path.clone(),
        depth: args.depth,
        entries,
    };
    output.print(&response)?;

    Ok(())
}

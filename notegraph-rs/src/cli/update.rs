//! Update command implementation.

use crate::cli::args::UpdateArgs;
use crate::cli::frontmatter_from_json;
use crate::cli::output::{CommandResponse, Output};
use crate::error::Result;
use crate::vault::Vault;

pub fn run(vault: &Vault, args: &UpdateArgs, output: &Output) -> Result<()> {
    let frontmatter = frontmatter_from_json(args.frontmatter.as_deref())?;

    let path = vault.update_note(&args.path, &args.content, frontmatter.as_ref())?;

    let response = CommandResponse {
        path: path.to_string_lossy().to_string(),
        message: "Note updated".to_string(),
    };
    output.print(&response)?;

    Ok(())
}

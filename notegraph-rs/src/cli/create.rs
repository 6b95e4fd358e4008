//! Create command implementation.

use crate::cli::args::CreateArgs;
use crate::cli::frontmatter_from_json;
use crate::cli::output::{CommandResponse, Output};
use crate::error::Result;
use crate::vault::Vault;

pub fn run(vault: &Vault, args: &CreateArgs, output: &Output) -> Result<()> {
    let frontmatter = frontmatter_from_json(args.frontmatter.as_deref())?.unwrap_or_default();

    let path = vault.create_note(&args.path, &args.content, &frontmatter, args.overwrite)?;

    let response = CommandResponse {
        path: path.to_string_lossy().to_string(),
        message: "Note created".to_string(),
    };
    output.print(&response)?;

    Ok(())
}

//! Append command implementation.

use crate::cli::args::AppendArgs;
use crate::cli::output::{CommandResponse, Output};
use crate::error::Result;
use crate::vault::Vault;

pub fn run(vault: &Vault, args: &AppendArgs, output: &Output) -> Result<()> {
    let path = vault.append_note(&args.path, &args.content, args.create_if_missing)?;

    let response = CommandResponse {
        path: path.to_string_lossy().to_string(),
        message: "Content appended".to_string(),
    };
    output.print(&response)?;

    Ok(())
}

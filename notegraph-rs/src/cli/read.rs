//! Read command implementation.

use crate::cli::args::ReadArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;

pub fn run(vault: &Vault, args: &ReadArgs, output: &Output) -> Result<()> {
    let note = vault.load_note(&args.note)?;
    output.print(&note)?;
    Ok(())
}

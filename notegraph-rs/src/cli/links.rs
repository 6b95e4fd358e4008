//! Links command implementation.

use crate::cli::args::LinksArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::graph;
use crate::vault::Vault;

pub fn run(vault: &Vault, args: &LinksArgs, output: &Output) -> Result<()> {
    let report = graph::links_of(vault, &args.note)?;
    output.print(&report)?;
    Ok(())
}
